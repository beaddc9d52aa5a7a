use std::collections::HashMap;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use itertools::Itertools;

#[solution_runner(
    name = "Day 9: All in a Single Night",
    parsed = RouteMap,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2015<9> {}

/*
Input is a list of distances between pairs of locations, formatted as
`London to Dublin = 464`. Distances are the same in both directions.
*/

type Distance = u32;

/// Locations and the distances between them.
#[derive(Debug, Default)]
struct RouteMap {
    /// Location names, indexed by their position.
    locations: Vec<String>,
    /// Distances keyed by pairs of location indices, stored in both orders.
    distances: HashMap<(usize, usize), Distance>,
}

#[derive(thiserror::Error, Debug)]
enum ParseRouteMapError {
    #[error("expected \"[from] to [to] = [distance]\", found {0:?}")]
    UnexpectedFormat(String),

    #[error("a location cannot route to itself: {0:?}")]
    SelfRoute(String),
}

impl RouteMap {
    /// Get the index of a location, adding it if new.
    fn location_index(&mut self, name: &str) -> usize {
        self.locations
            .iter()
            .position(|location| location == name)
            .unwrap_or_else(|| {
                self.locations.push(name.to_owned());
                self.locations.len() - 1
            })
    }

    fn insert(&mut self, from: &str, to: &str, distance: Distance) {
        let from = self.location_index(from);
        let to = self.location_index(to);
        self.distances.insert((from, to), distance);
        self.distances.insert((to, from), distance);
    }

    /// The total distance of a route visiting locations in order, if every leg is known.
    fn route_distance(&self, route: &[usize]) -> Option<Distance> {
        route
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| self.distances.get(&(from, to)).copied())
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .checked_sum()
    }

    /// Distances of every route visiting each location exactly once.
    fn route_distances(&self) -> impl Iterator<Item = Distance> + '_ {
        (0..self.locations.len())
            .permutations(self.locations.len())
            .filter_map(|route| self.route_distance(&route))
    }
}

impl ParseData for RouteMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut map = Self::default();
        parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let unexpected_format = || ParseRouteMapError::UnexpectedFormat(line.to_owned());
            let (places, distance) = line.split_once(" = ").ok_or_else(unexpected_format)?;
            let (from, to) = places.split_once(" to ").ok_or_else(unexpected_format)?;
            if from == to {
                return Err(ParseRouteMapError::SelfRoute(from.to_owned()).into());
            }
            map.insert(from, to, parse_with_context(distance.trim())?);
            Ok(())
        })
        .collect::<Result<(), _>>()?;
        Ok(map)
    }
}

#[derive(thiserror::Error, Debug)]
#[error("no route visits every location")]
struct NoCompleteRoute;

/*
For part 1, Santa visits every location exactly once, starting and ending anywhere. Find the
distance of the shortest route.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = RouteMap;
    type Output = Distance;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.route_distances().min().ok_or(NoCompleteRoute)?)
    }
}

/*
For part 2, find the distance of the longest route instead.
*/

impl Solution<PartTwo> for Day09 {
    type Input = RouteMap;
    type Output = Distance;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.route_distances().max().ok_or(NoCompleteRoute)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141
";

    #[test]
    fn distances_are_symmetric() -> DynamicResult<()> {
        let parsed = RouteMap::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.locations, ["London", "Dublin", "Belfast"]);
        assert_eq!(parsed.route_distance(&[0, 1, 2]), Some(605));
        assert_eq!(parsed.route_distance(&[2, 1, 0]), Some(605));
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RouteMap::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 605);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = RouteMap::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 982);
        Ok(())
    }

    #[test]
    fn unknown_legs_are_skipped() -> DynamicResult<()> {
        // A and C are only reachable through B
        let parsed = RouteMap::parse("A to B = 1\nB to C = 2\n")?;
        assert_eq!(<Day09 as Solution<PartOne>>::solve(&parsed)?, 3);
        assert_eq!(<Day09 as Solution<PartTwo>>::solve(&parsed)?, 3);

        let parsed = RouteMap::parse("A to B = 1\nC to D = 2\n")?;
        assert!(<Day09 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(RouteMap::parse("London - Dublin = 464").is_err());
        assert!(RouteMap::parse("London to Dublin = far").is_err());
        assert!(RouteMap::parse("London to London = 0").is_err());
    }
}
