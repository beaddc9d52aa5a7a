use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::automaton::Grid;

#[solution_runner(
    name = "Day 18: Like a GIF For Your Yard",
    parsed = Lights,
    part_one = Day18,
    part_two = Day18
)]
impl super::AdventOfCode2015<18> {}

/*
Input is the initial configuration of a rectangular grid of lights, `#` for on and `.` for off.
The lights animate in steps, each light looking at its eight neighbors; lights beyond the edge of
the grid count as off.

- A light which is on stays on when 2 or 3 neighbors are on, and turns off otherwise.
- A light which is off turns on if exactly 3 neighbors are on, and stays off otherwise.
*/

const STEPS: usize = 100;

struct Lights(Grid);

#[derive(thiserror::Error, Debug)]
enum ParseLightsError {
    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalGridWidth { expected: usize, found: usize },

    #[error("invalid character in grid: {0:?}")]
    InvalidChar(char),

    #[error("grid has no lights")]
    EmptyGrid,
}

impl ParseData for Lights {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut width_opt = None;
        let mut cells = Vec::new();

        // blank lines after the last row are not part of the grid
        let rows = input.trim_end_matches(['\n', '\r']);
        parse_input_lines(rows, |_, line| {
            let line_width = line.chars().count();
            match width_opt {
                Some(expected) if line_width != expected => {
                    return Err(ParseLightsError::UnequalGridWidth {
                        expected,
                        found: line_width,
                    });
                }
                Some(_) => {}
                None => width_opt = Some(line_width),
            }

            for character in line.chars() {
                match character {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    _ => return Err(ParseLightsError::InvalidChar(character)),
                }
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        let width = width_opt.unwrap_or(0);
        if width == 0 {
            return Err(ParseLightsError::EmptyGrid.into());
        }
        let height = cells.len() / width;
        Ok(Self(Grid::from_row_iterator(height, width, cells)))
    }
}

/*
For part 1, find how many lights are on after 100 steps.
*/

struct Day18;

impl Solution<PartOne> for Day18 {
    type Input = Lights;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iterate(STEPS, false).count_on())
    }
}

/*
For part 2, the four corner lights are stuck on and can't be turned off. Find how many lights are
on after 100 steps.
*/

impl Solution<PartTwo> for Day18 {
    type Input = Lights;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let grid = input.0.clone().with_corners_on();
        Ok(grid.iterate(STEPS, true).count_on())
    }
}
