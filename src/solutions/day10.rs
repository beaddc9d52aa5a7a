use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use itertools::Itertools;

#[solution_runner(
    name = "Day 10: Elves Look, Elves Say",
    parsed = Digits,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2015<10> {}

/*
Input is a single sequence of decimal digits. Each round of look-and-say reads the sequence aloud:
every run of the same digit becomes the length of the run followed by the digit. `111221` is read
as "three 1s, two 2s, one 1" and becomes `312211`.
*/

#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits(Vec<u8>);

#[derive(thiserror::Error, Debug)]
enum ParseDigitsError {
    #[error("sequence is empty")]
    Empty,

    #[error("not a decimal digit: {0:?}")]
    InvalidDigit(char),
}

impl ParseData for Digits {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let digits = input
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(ParseDigitsError::InvalidDigit(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if digits.is_empty() {
            return Err(ParseDigitsError::Empty.into());
        }
        Ok(Self(digits))
    }
}

/// Push the decimal digits of a run length, most significant first.
fn push_count(next: &mut Vec<u8>, count: usize) {
    let start = next.len();
    let mut remaining = count;
    loop {
        next.push(u8::try_from(remaining % 10).expect("a decimal digit should fit in u8"));
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }
    next[start..].reverse();
}

impl Digits {
    fn look_and_say(&self) -> Self {
        let mut next = Vec::with_capacity(self.0.len() * 2);
        for (count, &digit) in self.0.iter().dedup_with_count() {
            push_count(&mut next, count);
            next.push(digit);
        }
        Self(next)
    }

    /// The length of the sequence after a number of look-and-say rounds.
    fn length_after(&self, rounds: usize) -> usize {
        (0..rounds)
            .fold(self.clone(), |digits, _| digits.look_and_say())
            .0
            .len()
    }
}

/*
For part 1, find the length of the result after 40 rounds.
*/

struct Day10;

impl Day10 {
    const PART_ONE_ROUNDS: usize = 40;
    const PART_TWO_ROUNDS: usize = 50;
}

impl Solution<PartOne> for Day10 {
    type Input = Digits;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.length_after(Self::PART_ONE_ROUNDS))
    }
}

/*
For part 2, find the length after 50 rounds.
*/

impl Solution<PartTwo> for Day10 {
    type Input = Digits;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.length_after(Self::PART_TWO_ROUNDS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_example_sequences() -> DynamicResult<()> {
        let mut digits = Digits::parse("1\n")?;
        for expected in ["11", "21", "1211", "111221", "312211"] {
            digits = digits.look_and_say();
            assert_eq!(digits, Digits::parse(expected)?);
        }
        Ok(())
    }

    #[test]
    fn long_runs_use_every_digit_of_the_count() -> DynamicResult<()> {
        let digits = Digits::parse("777777777777")?;
        assert_eq!(digits.look_and_say(), Digits::parse("127")?);
        Ok(())
    }

    #[test]
    fn length_after_rounds() -> DynamicResult<()> {
        let digits = Digits::parse("1")?;
        assert_eq!(digits.length_after(0), 1);
        assert_eq!(digits.length_after(5), 6);
        Ok(())
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(Digits::parse("12a4").is_err());
        assert!(Digits::parse("\n").is_err());
    }
}
