use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::{DMatrix, Point2, Scalar};
use regex::Regex;

#[solution_runner(
    name = "Day 6: Probably a Fire Hazard",
    parsed = Instructions,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2015<6> {}

/*
Input is a list of instructions for a 1000x1000 grid of lights, formatted like
`turn on 0,0 through 999,999`, `toggle 0,0 through 999,0`, or `turn off 499,499 through 500,500`.
Corner pairs are inclusive.
*/

const GRID_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

/// An inclusive rectangle of lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rectangle {
    start: Point2<usize>,
    end: Point2<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    action: Action,
    area: Rectangle,
}

#[derive(thiserror::Error, Debug)]
enum ParseInstructionError {
    #[error("expected an action and two corners, found {0:?}")]
    UnexpectedFormat(String),

    #[error("rectangle corners are out of order: {start} through {end}")]
    CornersOutOfOrder {
        start: Point2<usize>,
        end: Point2<usize>,
    },

    #[error("corner is outside the 1000x1000 grid: {0}")]
    CornerOutOfBounds(Point2<usize>),
}

struct InstructionParser {
    /// Regex capturing the action and the four corner coordinates.
    instruction_re: Regex,
}

impl InstructionParser {
    const INSTRUCTION_PATTERN: &str =
        r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$";

    fn new() -> Self {
        let instruction_re =
            Regex::new(Self::INSTRUCTION_PATTERN).expect("pattern should be valid");
        Self { instruction_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<Instruction> {
        let captures = self
            .instruction_re
            .captures(line.trim())
            .ok_or_else(|| ParseInstructionError::UnexpectedFormat(line.to_owned()))?;

        let action = match &captures[1] {
            "turn on" => Action::TurnOn,
            "turn off" => Action::TurnOff,
            _ => Action::Toggle,
        };
        let start = Point2::new(
            parse_with_context::<usize>(&captures[2])?,
            parse_with_context::<usize>(&captures[3])?,
        );
        let end = Point2::new(
            parse_with_context::<usize>(&captures[4])?,
            parse_with_context::<usize>(&captures[5])?,
        );

        if start.x > end.x || start.y > end.y {
            return Err(ParseInstructionError::CornersOutOfOrder { start, end }.into());
        }
        if end.x >= GRID_SIZE || end.y >= GRID_SIZE {
            return Err(ParseInstructionError::CornerOutOfBounds(end).into());
        }

        Ok(Instruction {
            action,
            area: Rectangle { start, end },
        })
    }
}

struct Instructions(Vec<Instruction>);

impl ParseData for Instructions {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = InstructionParser::new();
        let instructions = parse_input_lines(input, |_, line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(instructions))
    }
}

/// Apply every instruction to a grid of lights, updating each light in its area with `update`.
fn apply_instructions<T: Scalar>(
    instructions: &[Instruction],
    off: T,
    update: impl Fn(Action, &mut T),
) -> DMatrix<T> {
    let mut lights = DMatrix::from_element(GRID_SIZE, GRID_SIZE, off);
    for Instruction { action, area } in instructions {
        let shape = (area.end.x - area.start.x + 1, area.end.y - area.start.y + 1);
        lights
            .view_mut((area.start.x, area.start.y), shape)
            .apply(|light| update(*action, light));
    }
    lights
}

/*
For part 1, lights are on or off: `turn on` and `turn off` set them, `toggle` flips them. Count the
lights that are on after following all instructions.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Instructions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let lights = apply_instructions(&input.0, false, |action, light| {
            *light = match action {
                Action::TurnOn => true,
                Action::TurnOff => false,
                Action::Toggle => !*light,
            };
        });
        Ok(lights.iter().filter(|&&on| on).count())
    }
}

/*
For part 2, lights have a brightness starting at zero: `turn on` adds 1, `turn off` subtracts 1
down to a minimum of zero, and `toggle` adds 2. Find the total brightness.
*/

impl Solution<PartTwo> for Day06 {
    type Input = Instructions;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let lights = apply_instructions(&input.0, 0u32, |action, brightness| {
            *brightness = match action {
                Action::TurnOn => brightness.saturating_add(1),
                Action::TurnOff => brightness.saturating_sub(1),
                Action::Toggle => brightness.saturating_add(2),
            };
        });
        let total = lights
            .iter()
            .map(|&brightness| u64::from(brightness))
            .checked_sum()
            .ok_or("total brightness overflowed")?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_instruction() -> DynamicResult<()> {
        let parsed = Instructions::parse("turn off 499,499 through 500,500\n")?;
        assert_eq!(
            parsed.0,
            [Instruction {
                action: Action::TurnOff,
                area: Rectangle {
                    start: Point2::new(499, 499),
                    end: Point2::new(500, 500),
                },
            }]
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_bad_rectangles() {
        assert!(Instructions::parse("toggle 5,5 through 4,9").is_err());
        assert!(Instructions::parse("toggle 0,0 through 1000,5").is_err());
        assert!(Instructions::parse("flip 0,0 through 1,1").is_err());
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        let parsed = Instructions::parse("turn on 0,0 through 999,999")?;
        assert_eq!(<Day06 as Solution<PartOne>>::solve(&parsed)?, 1_000_000);

        let parsed = Instructions::parse("toggle 0,0 through 999,0")?;
        assert_eq!(<Day06 as Solution<PartOne>>::solve(&parsed)?, 1000);

        let parsed = Instructions::parse(
            "turn on 0,0 through 999,999\n\
            toggle 0,0 through 999,0\n\
            turn off 499,499 through 500,500\n",
        )?;
        assert_eq!(<Day06 as Solution<PartOne>>::solve(&parsed)?, 1_000_000 - 1000 - 4);
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        let parsed = Instructions::parse("turn on 0,0 through 0,0")?;
        assert_eq!(<Day06 as Solution<PartTwo>>::solve(&parsed)?, 1);

        let parsed = Instructions::parse("toggle 0,0 through 999,999")?;
        assert_eq!(<Day06 as Solution<PartTwo>>::solve(&parsed)?, 2_000_000);

        let parsed = Instructions::parse("turn off 0,0 through 9,9\nturn on 0,0 through 0,1")?;
        assert_eq!(<Day06 as Solution<PartTwo>>::solve(&parsed)?, 2);
        Ok(())
    }
}
