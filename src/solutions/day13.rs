use std::collections::HashMap;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use itertools::Itertools;
use regex::Regex;

#[solution_runner(
    name = "Day 13: Knights of the Dinner Table",
    parsed = HappinessMap,
    part_one = Day13,
    part_two = Day13
)]
impl super::AdventOfCode2015<13> {}

/*
Input lists how much each guest's happiness changes when sitting next to another guest, formatted
like `Alice would gain 54 happiness units by sitting next to Bob.` or
`Alice would lose 79 happiness units by sitting next to Carol.`

Guests sit around a circular table, so every guest has two neighbors.
*/

type Happiness = i32;

/// Guests and the happiness each gains next to another.
#[derive(Debug, Default)]
struct HappinessMap {
    guests: Vec<String>,
    /// Happiness change keyed by (guest, neighbor) indices. Missing pairs are neutral.
    changes: HashMap<(usize, usize), Happiness>,
}

#[derive(thiserror::Error, Debug)]
enum HappinessError {
    #[error("expected \"[guest] would [gain|lose] [amount] happiness units ...\", found {0:?}")]
    UnexpectedFormat(String),

    #[error("guest {0:?} cannot sit next to themselves")]
    SelfNeighbor(String),

    #[error("there are no guests to seat")]
    NoGuests,

    #[error("total happiness overflowed")]
    Overflow,
}

impl HappinessMap {
    fn guest_index(&mut self, name: &str) -> usize {
        self.guests
            .iter()
            .position(|guest| guest == name)
            .unwrap_or_else(|| {
                self.guests.push(name.to_owned());
                self.guests.len() - 1
            })
    }

    fn change(&self, guest: usize, neighbor: usize) -> Happiness {
        self.changes
            .get(&(guest, neighbor))
            .copied()
            .unwrap_or_default()
    }

    /// Total happiness of guests seated clockwise in the given order.
    fn seating_happiness(&self, seating: &[usize]) -> Option<Happiness> {
        seating
            .iter()
            .circular_tuple_windows()
            .map(|(&left, &right)| self.change(left, right).checked_add(self.change(right, left)))
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .checked_sum()
    }

    /// The happiness of the best seating arrangement.
    fn optimal_happiness(&self) -> Result<Happiness, HappinessError> {
        // rotations of a seating are equivalent, so the first guest stays put
        let others = self.guests.len().checked_sub(1).ok_or(HappinessError::NoGuests)?;
        let mut best = None;
        for order in (1..self.guests.len()).permutations(others) {
            let seating: Vec<_> = std::iter::once(0).chain(order).collect();
            let happiness = self
                .seating_happiness(&seating)
                .ok_or(HappinessError::Overflow)?;
            best = best.max(Some(happiness));
        }
        best.ok_or(HappinessError::NoGuests)
    }
}

struct HappinessParser {
    line_re: Regex,
}

impl HappinessParser {
    const LINE_PATTERN: &str =
        r"^(\w+) would (gain|lose) (\d+) happiness units? by sitting next to (\w+)\.$";

    fn new() -> Self {
        let line_re = Regex::new(Self::LINE_PATTERN).expect("pattern should be valid");
        Self { line_re }
    }

    fn parse_into(&self, map: &mut HappinessMap, line: &str) -> DynamicResult<()> {
        let captures = self
            .line_re
            .captures(line.trim())
            .ok_or_else(|| HappinessError::UnexpectedFormat(line.to_owned()))?;
        let (guest, neighbor) = (&captures[1], &captures[4]);
        if guest == neighbor {
            return Err(HappinessError::SelfNeighbor(guest.to_owned()).into());
        }
        let amount: Happiness = parse_with_context(&captures[3])?;
        let change = if &captures[2] == "lose" { -amount } else { amount };

        let guest = map.guest_index(guest);
        let neighbor = map.guest_index(neighbor);
        map.changes.insert((guest, neighbor), change);
        Ok(())
    }
}

impl ParseData for HappinessMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = HappinessParser::new();
        let mut map = Self::default();
        parse_input_lines(input, |_, line| parser.parse_into(&mut map, line))
            .collect::<Result<(), _>>()?;
        Ok(map)
    }
}

/*
For part 1, find the total change in happiness for the optimal seating arrangement.
*/

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = HappinessMap;
    type Output = Happiness;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.optimal_happiness()?)
    }
}

/*
For part 2, add yourself to the guest list. You are neutral about everyone and everyone is neutral
about you. Find the total change in happiness for the new optimal arrangement.
*/

impl Solution<PartTwo> for Day13 {
    type Input = HappinessMap;
    type Output = Happiness;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut guests = input.guests.clone();
        guests.push(String::from("yourself"));
        let with_yourself = HappinessMap {
            guests,
            changes: input.changes.clone(),
        };
        Ok(with_yourself.optimal_happiness()?)
    }
}
