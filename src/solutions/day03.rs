use std::collections::HashSet;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 3: Perfectly Spherical Houses in a Vacuum",
    parsed = Moves,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2015<3> {}

/*
Input is a single line of moves on an infinite grid of houses: `^` north, `v` south, `>` east, and
`<` west. Every house visited gets a present, including the starting house.
*/

/// A cardinal direction to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

#[derive(thiserror::Error, Debug)]
enum DirectionFromCharError {
    #[error("character is not a move: {0:?}")]
    InvalidChar(char),
}

impl TryFrom<char> for Direction {
    type Error = DirectionFromCharError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Self::North),
            '>' => Ok(Self::East),
            'v' => Ok(Self::South),
            '<' => Ok(Self::West),
            _ => Err(DirectionFromCharError::InvalidChar(value)),
        }
    }
}

impl Direction {
    /// The change in position from moving one house in this direction.
    fn offset(self) -> Vector2<i32> {
        match self {
            Self::North => Vector2::y(),
            Self::East => Vector2::x(),
            Self::South => -Vector2::y(),
            Self::West => -Vector2::x(),
        }
    }
}

struct Moves(Vec<Direction>);

impl ParseData for Moves {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let moves = input
            .trim()
            .chars()
            .map(Direction::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self(moves))
    }
}

/// Follow moves from the origin, collecting every house visited.
fn visit_houses<'a>(
    moves: impl IntoIterator<Item = &'a Direction>,
    visited: &mut HashSet<Point2<i32>>,
) {
    let mut position = Point2::origin();
    visited.insert(position);
    for direction in moves {
        position += direction.offset();
        visited.insert(position);
    }
}

/*
For part 1, count how many houses receive at least one present.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Moves;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut visited = HashSet::new();
        visit_houses(&input.0, &mut visited);
        Ok(visited.len())
    }
}

/*
For part 2, Santa and Robo-Santa both start at the origin and take turns following moves, Santa
first. Count how many houses receive at least one present from either.
*/

impl Solution<PartTwo> for Day03 {
    type Input = Moves;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut visited = HashSet::new();
        visit_houses(input.0.iter().step_by(2), &mut visited);
        visit_houses(input.0.iter().skip(1).step_by(2), &mut visited);
        Ok(visited.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_both(input: &str) -> DynamicResult<(usize, usize)> {
        let parsed = Moves::parse(input)?;
        Ok((
            <Day03 as Solution<PartOne>>::solve(&parsed)?,
            <Day03 as Solution<PartTwo>>::solve(&parsed)?,
        ))
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        assert_eq!(solve_both(">")?.0, 2);
        assert_eq!(solve_both("^>v<")?.0, 4);
        assert_eq!(solve_both("^v^v^v^v^v")?.0, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        assert_eq!(solve_both("^v")?.1, 3);
        assert_eq!(solve_both("^>v<")?.1, 3);
        assert_eq!(solve_both("^v^v^v^v^v")?.1, 11);
        Ok(())
    }

    #[test]
    fn parse_ignores_trailing_newline() -> DynamicResult<()> {
        assert_eq!(solve_both("^>v<\n")?.0, 4);
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_move() {
        assert!(Moves::parse("^x").is_err());
    }
}
