use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use itertools::Itertools;

#[solution_runner(
    name = "Day 17: No Such Thing as Too Much",
    parsed = Containers,
    part_one = Day17,
    part_two = Day17
)]
impl super::AdventOfCode2015<17> {}

/*
Input is the capacity of each container, one per line. All 150 liters of eggnog must be stored, and
every container used must be filled entirely. Containers of equal capacity are still different
containers.
*/

const EGGNOG_LITERS: u32 = 150;

struct Containers(Vec<u32>);

impl ParseData for Containers {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let containers = parse_input_lines(input, |_, line| parse_with_context(line.trim()))
            .collect::<Result<_, _>>()?;
        Ok(Self(containers))
    }
}

impl Containers {
    /// How many combinations of exactly `count` containers hold `liters` in total.
    ///
    /// A combination whose capacity overflows holds more than any `liters`.
    fn combinations_of(&self, count: usize, liters: u32) -> usize {
        self.0
            .iter()
            .combinations(count)
            .filter(|combination| {
                combination.iter().copied().copied().checked_sum() == Some(liters)
            })
            .count()
    }

    /// How many combinations of any number of containers hold `liters` in total.
    fn combinations(&self, liters: u32) -> usize {
        (1..=self.0.len())
            .map(|count| self.combinations_of(count, liters))
            .sum()
    }

    /// How many combinations hold `liters` using as few containers as possible.
    fn fewest_container_combinations(&self, liters: u32) -> usize {
        (1..=self.0.len())
            .map(|count| self.combinations_of(count, liters))
            .find(|&combinations| combinations > 0)
            .unwrap_or(0)
    }
}

/*
For part 1, find how many different combinations of containers fit exactly 150 liters.
*/

struct Day17;

impl Solution<PartOne> for Day17 {
    type Input = Containers;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.combinations(EGGNOG_LITERS))
    }
}

/*
For part 2, find the minimum number of containers that can fit exactly 150 liters, and count the
different combinations using that many containers.
*/

impl Solution<PartTwo> for Day17 {
    type Input = Containers;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.fewest_container_combinations(EGGNOG_LITERS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "20\n15\n10\n5\n5\n";

    #[test]
    fn counts_example_combinations() -> DynamicResult<()> {
        let parsed = Containers::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.combinations(25), 4);
        assert_eq!(parsed.combinations_of(2, 25), 3);
        assert_eq!(parsed.combinations_of(3, 25), 1);
        Ok(())
    }

    #[test]
    fn counts_fewest_container_combinations() -> DynamicResult<()> {
        let parsed = Containers::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.fewest_container_combinations(25), 3);
        assert_eq!(parsed.fewest_container_combinations(5), 2);
        assert_eq!(parsed.fewest_container_combinations(1000), 0);
        Ok(())
    }

    #[test]
    fn parts_use_150_liters() -> DynamicResult<()> {
        let parsed = Containers::parse("100\n50\n150\n75\n75\n")?;
        assert_eq!(<Day17 as Solution<PartOne>>::solve(&parsed)?, 3);
        assert_eq!(<Day17 as Solution<PartTwo>>::solve(&parsed)?, 1);
        Ok(())
    }

    #[test]
    fn overflowing_capacity_does_not_wrap() {
        let containers = Containers(vec![u32::MAX, 1, 0]);
        assert_eq!(containers.combinations_of(2, 0), 0);
        assert_eq!(containers.combinations(0), 1);
        assert_eq!(containers.combinations(u32::MAX), 2);
        assert_eq!(containers.fewest_container_combinations(u32::MAX), 1);
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(Containers::parse("20\nbig\n").is_err());
    }
}
