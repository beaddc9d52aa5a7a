use aoc_framework::parsing::{parse_delimited, parse_input_lines};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 2: I Was Told There Would Be No Math",
    parsed = Presents,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2015<2> {}

/*
Input is a list of present dimensions, one per line, formatted as `LxWxH`.
*/

/// The dimensions of a present, a right rectangular prism.
#[derive(Debug)]
struct Present {
    /// Length, width, and height, sorted ascending so the smallest face is the first two.
    sides: [u32; 3],
}

impl Present {
    fn new(mut sides: [u32; 3]) -> Self {
        sides.sort_unstable();
        Self { sides }
    }
}

struct Presents(Vec<Present>);

impl ParseData for Presents {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let presents = parse_input_lines(input, |_, line| {
            parse_delimited::<u32, 3>(line, 'x').map(Present::new)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(presents))
    }
}

/*
For part 1, find the total square feet of wrapping paper: each present needs its surface area plus
the area of its smallest side as slack.
*/

impl Present {
    fn wrapping_paper(&self) -> Option<u32> {
        let [a, b, c] = self.sides;
        let faces = [a.checked_mul(b)?, a.checked_mul(c)?, b.checked_mul(c)?];
        // smallest face is a*b since sides are sorted
        faces
            .iter()
            .map(|face| face.checked_mul(2))
            .chain([Some(faces[0])])
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .checked_sum()
    }
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Presents;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .0
            .iter()
            .map(Present::wrapping_paper)
            .collect::<Option<Vec<_>>>()
            .and_then(|papers| papers.into_iter().checked_sum())
            .ok_or("wrapping paper total overflowed")?;
        Ok(total)
    }
}

/*
For part 2, find the total feet of ribbon: the smallest perimeter around a present, plus a bow
as long as the present's volume.
*/

impl Present {
    fn ribbon(&self) -> Option<u32> {
        let [a, b, _] = self.sides;
        let wrap = a.checked_add(b)?.checked_mul(2)?;
        let bow = self.sides.into_iter().checked_product()?;
        wrap.checked_add(bow)
    }
}

impl Solution<PartTwo> for Day02 {
    type Input = Presents;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .0
            .iter()
            .map(Present::ribbon)
            .collect::<Option<Vec<_>>>()
            .and_then(|ribbons| ribbons.into_iter().checked_sum())
            .ok_or("ribbon total overflowed")?;
        Ok(total)
    }
}
