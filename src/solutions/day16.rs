use std::cmp::Ordering;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 16: Aunt Sue",
    parsed = Aunts,
    part_one = Day16,
    part_two = Day16
)]
impl super::AdventOfCode2015<16> {}

/*
Input lists what is remembered about each of 500 Aunt Sues, formatted like
`Sue 1: cars: 9, akitas: 3, goldfish: 0`. Anything not listed for a Sue is unknown, not zero.

The gift came with a reading from the MFCSAM (My First Crime Scene Analysis Machine):

children: 3
cats: 7
samoyeds: 2
pomeranians: 3
akitas: 0
vizslas: 0
goldfish: 5
trees: 3
cars: 2
perfumes: 1
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compound {
    Children,
    Cats,
    Samoyeds,
    Pomeranians,
    Akitas,
    Vizslas,
    Goldfish,
    Trees,
    Cars,
    Perfumes,
}

impl Compound {
    /// Amount detected on the gift.
    fn reading(self) -> u32 {
        match self {
            Self::Children => 3,
            Self::Cats => 7,
            Self::Samoyeds => 2,
            Self::Pomeranians => 3,
            Self::Akitas => 0,
            Self::Vizslas => 0,
            Self::Goldfish => 5,
            Self::Trees => 3,
            Self::Cars => 2,
            Self::Perfumes => 1,
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum ParseAuntError {
    #[error("expected \"Sue [number]: [compound]: [amount], ...\", found {0:?}")]
    UnexpectedFormat(String),

    #[error("unknown compound: {0:?}")]
    UnknownCompound(String),
}

impl TryFrom<&str> for Compound {
    type Error = ParseAuntError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let compound = match name {
            "children" => Self::Children,
            "cats" => Self::Cats,
            "samoyeds" => Self::Samoyeds,
            "pomeranians" => Self::Pomeranians,
            "akitas" => Self::Akitas,
            "vizslas" => Self::Vizslas,
            "goldfish" => Self::Goldfish,
            "trees" => Self::Trees,
            "cars" => Self::Cars,
            "perfumes" => Self::Perfumes,
            _ => return Err(ParseAuntError::UnknownCompound(name.to_owned())),
        };
        Ok(compound)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Aunt {
    number: u32,
    /// Compounds remembered for this Sue with their amounts.
    known: Vec<(Compound, u32)>,
}

impl Aunt {
    /// Whether every remembered compound agrees with the reading, as judged by `agrees`.
    fn matches(&self, agrees: impl Fn(Compound, u32) -> bool) -> bool {
        self.known
            .iter()
            .all(|&(compound, amount)| agrees(compound, amount))
    }
}

struct AuntParser {
    /// Regex capturing a Sue's number and the rest of the line.
    aunt_re: Regex,
    /// Regex capturing one compound and its amount.
    compound_re: Regex,
}

impl AuntParser {
    const AUNT_PATTERN: &str = r"^Sue (\d+): (.*)$";
    const COMPOUND_PATTERN: &str = r"^(\w+): (\d+)$";

    fn new() -> Self {
        let aunt_re = Regex::new(Self::AUNT_PATTERN).expect("pattern should be valid");
        let compound_re = Regex::new(Self::COMPOUND_PATTERN).expect("pattern should be valid");
        Self {
            aunt_re,
            compound_re,
        }
    }

    fn parse(&self, line: &str) -> DynamicResult<Aunt> {
        let unexpected_format = || ParseAuntError::UnexpectedFormat(line.to_owned());
        let captures = self
            .aunt_re
            .captures(line.trim())
            .ok_or_else(unexpected_format)?;
        let number = parse_with_context(&captures[1])?;

        let known = captures[2]
            .split(", ")
            .map(|item| -> DynamicResult<_> {
                let item_captures = self.compound_re.captures(item).ok_or_else(unexpected_format)?;
                let compound = Compound::try_from(&item_captures[1])?;
                Ok((compound, parse_with_context(&item_captures[2])?))
            })
            .collect::<Result<_, _>>()?;

        Ok(Aunt { number, known })
    }
}

struct Aunts(Vec<Aunt>);

impl ParseData for Aunts {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = AuntParser::new();
        let aunts = parse_input_lines(input, |_, line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(aunts))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("no Aunt Sue matches the reading")]
struct NoMatchingAunt;

impl Aunts {
    /// The number of the first Sue agreeing with the reading.
    fn find(&self, agrees: impl Fn(Compound, u32) -> bool) -> Result<u32, NoMatchingAunt> {
        self.0
            .iter()
            .find(|aunt| aunt.matches(&agrees))
            .map(|aunt| aunt.number)
            .ok_or(NoMatchingAunt)
    }
}

/*
For part 1, find the number of the Sue whose remembered compounds exactly match the reading.
*/

struct Day16;

impl Solution<PartOne> for Day16 {
    type Input = Aunts;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.find(|compound, amount| amount == compound.reading())?)
    }
}

/*
For part 2, the reading for cats and trees is a lower bound (the Sue has more), and the reading for
pomeranians and goldfish is an upper bound (the Sue has fewer). Other compounds still match
exactly.
*/

impl Solution<PartTwo> for Day16 {
    type Input = Aunts;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let number = input.find(|compound, amount| {
            let expected = match compound {
                Compound::Cats | Compound::Trees => Ordering::Greater,
                Compound::Pomeranians | Compound::Goldfish => Ordering::Less,
                _ => Ordering::Equal,
            };
            amount.cmp(&compound.reading()) == expected
        })?;
        Ok(number)
    }
}
