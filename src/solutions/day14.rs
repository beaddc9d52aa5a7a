use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 14: Reindeer Olympics",
    parsed = Herd,
    part_one = Day14,
    part_two = Day14
)]
impl super::AdventOfCode2015<14> {}

/*
Input describes one reindeer per line, formatted like
`Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.`

Reindeer alternate between flying at full speed and resting, starting with flying.
*/

const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Reindeer {
    name: String,
    /// Kilometers flown per second.
    speed: u32,
    fly_seconds: u32,
    rest_seconds: u32,
}

impl Reindeer {
    /// Kilometers flown after some seconds of racing, or `None` on overflow.
    fn distance_after(&self, seconds: u32) -> Option<u32> {
        let cycle = self.fly_seconds.checked_add(self.rest_seconds)?;
        let full_cycles = seconds / cycle;
        let flying = full_cycles
            .checked_mul(self.fly_seconds)?
            .checked_add((seconds % cycle).min(self.fly_seconds))?;
        flying.checked_mul(self.speed)
    }
}

#[derive(thiserror::Error, Debug)]
enum ParseReindeerError {
    #[error("expected \"[name] can fly [speed] km/s for [time] seconds, ...\", found {0:?}")]
    UnexpectedFormat(String),

    #[error("reindeer {0:?} never flies")]
    NeverFlies(String),
}

struct ReindeerParser {
    line_re: Regex,
}

impl ReindeerParser {
    const LINE_PATTERN: &str =
        r"^(\w+) can fly (\d+) km/s for (\d+) seconds?, but then must rest for (\d+) seconds?\.$";

    fn new() -> Self {
        let line_re = Regex::new(Self::LINE_PATTERN).expect("pattern should be valid");
        Self { line_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<Reindeer> {
        let captures = self
            .line_re
            .captures(line.trim())
            .ok_or_else(|| ParseReindeerError::UnexpectedFormat(line.to_owned()))?;
        let reindeer = Reindeer {
            name: captures[1].to_owned(),
            speed: parse_with_context(&captures[2])?,
            fly_seconds: parse_with_context(&captures[3])?,
            rest_seconds: parse_with_context(&captures[4])?,
        };
        if reindeer.fly_seconds == 0 {
            return Err(ParseReindeerError::NeverFlies(reindeer.name).into());
        }
        Ok(reindeer)
    }
}

struct Herd(Vec<Reindeer>);

impl ParseData for Herd {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = ReindeerParser::new();
        let herd = parse_input_lines(input, |_, line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(herd))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum RaceError {
    #[error("there are no reindeer in the race")]
    EmptyHerd,

    #[error("distance flown overflowed")]
    Overflow,
}

impl Herd {
    /// Distance of every reindeer after some seconds of racing.
    fn distances_after(&self, seconds: u32) -> Result<Vec<u32>, RaceError> {
        self.0
            .iter()
            .map(|reindeer| reindeer.distance_after(seconds).ok_or(RaceError::Overflow))
            .collect()
    }

    fn winning_distance(&self, seconds: u32) -> Result<u32, RaceError> {
        self.distances_after(seconds)?
            .into_iter()
            .max()
            .ok_or(RaceError::EmptyHerd)
    }

    /// Points of every reindeer after a race where each second, every reindeer in the lead scores.
    fn points_after(&self, seconds: u32) -> Result<Vec<u32>, RaceError> {
        if self.0.is_empty() {
            return Err(RaceError::EmptyHerd);
        }
        let mut points = vec![0; self.0.len()];
        for second in 1..=seconds {
            let distances = self.distances_after(second)?;
            let lead = distances.iter().copied().max().ok_or(RaceError::EmptyHerd)?;
            for (score, distance) in points.iter_mut().zip(distances) {
                if distance == lead {
                    *score += 1;
                }
            }
        }
        Ok(points)
    }
}

/*
For part 1, find the distance flown by the winning reindeer after 2503 seconds.
*/

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = Herd;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.winning_distance(RACE_SECONDS)?)
    }
}

/*
For part 2, at the end of each second every reindeer currently in the lead gets one point. Find the
points of the winning reindeer after 2503 seconds.
*/

impl Solution<PartTwo> for Day14 {
    type Input = Herd;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let points = input.points_after(RACE_SECONDS)?;
        Ok(points.into_iter().max().ok_or(RaceError::EmptyHerd)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.
";

    #[test]
    fn parses_reindeer() -> DynamicResult<()> {
        let parsed = Herd::parse(EXAMPLE_INPUT)?;
        assert_eq!(
            parsed.0[0],
            Reindeer {
                name: String::from("Comet"),
                speed: 14,
                fly_seconds: 10,
                rest_seconds: 127,
            }
        );
        assert_eq!(parsed.0.len(), 2);
        Ok(())
    }

    #[test]
    fn distance_follows_fly_and_rest_cycle() -> DynamicResult<()> {
        let parsed = Herd::parse(EXAMPLE_INPUT)?;
        let comet = &parsed.0[0];
        assert_eq!(comet.distance_after(1), Some(14));
        assert_eq!(comet.distance_after(10), Some(140));
        assert_eq!(comet.distance_after(11), Some(140));
        assert_eq!(comet.distance_after(137), Some(140));
        assert_eq!(comet.distance_after(138), Some(154));
        assert_eq!(comet.distance_after(1000), Some(1120));
        assert_eq!(parsed.0[1].distance_after(1000), Some(1056));
        Ok(())
    }

    #[test]
    fn winning_distance_after_example_race() -> DynamicResult<()> {
        let parsed = Herd::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.winning_distance(1000), Ok(1120));
        Ok(())
    }

    #[test]
    fn points_after_example_race() -> DynamicResult<()> {
        let parsed = Herd::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.points_after(1)?, [0, 1]);
        assert_eq!(parsed.points_after(140)?, [1, 139]);
        assert_eq!(parsed.points_after(1000)?, [312, 689]);
        Ok(())
    }

    #[test]
    fn empty_herd_is_an_error() -> DynamicResult<()> {
        let parsed = Herd::parse("")?;
        assert!(<Day14 as Solution<PartOne>>::solve(&parsed).is_err());
        assert!(<Day14 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn overflowing_distances_are_errors() -> DynamicResult<()> {
        let parsed = Herd::parse(
            "Vixen can fly 1 km/s for 4000000000 seconds, but then must rest for 4000000000 seconds.",
        )?;
        assert_eq!(parsed.0[0].distance_after(RACE_SECONDS), None);
        assert_eq!(parsed.winning_distance(RACE_SECONDS), Err(RaceError::Overflow));
        assert!(<Day14 as Solution<PartOne>>::solve(&parsed).is_err());
        assert!(<Day14 as Solution<PartTwo>>::solve(&parsed).is_err());

        let parsed = Herd::parse(
            "Blitzen can fly 4000000000 km/s for 2 seconds, but then must rest for 1 second.",
        )?;
        assert_eq!(parsed.0[0].distance_after(1), Some(4_000_000_000));
        assert_eq!(parsed.points_after(2), Err(RaceError::Overflow));
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(Herd::parse("Comet can fly 14 km/s forever.").is_err());
        assert!(
            Herd::parse("Comet can fly 14 km/s for 0 seconds, but then must rest for 1 second.")
                .is_err()
        );
    }
}
