//! Functions and traits for running solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro to implement [`SolutionRunner`]:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
//! #
//! struct Day10;
//!
//! impl Solution<PartOne> for Day10 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(input.len())
//! #    }
//! }
//!
//! impl Solution<PartTwo> for Day10 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(input.len())
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 10", part_one = Day10, part_two = Day10)]
//! struct Day10Runner;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// Receives the events of running a solution, for feedback and logging.
///
/// Events arrive in order: the solution name, the parse step (if the solution parses its input),
/// then a start and output pair for each part.
pub trait OutputHandler {
    /// Called with the name of the solution, before anything else runs.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished, with the time taken if the run is timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a part starts.
    fn part_start(&mut self, part: PartKind);

    /// Called with the answer of a part, and the time taken if the run is timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate a closure, measuring how long it took when `timed` is set.
fn measure<T>(timed: bool, f: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = f();
        (result, Some(start.elapsed()))
    } else {
        (f(), None)
    }
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure(timed, || S::solve(input));
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure(timed, || D::parse(input));
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run both parts of a solution that accepts the input string directly.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `input` - The input string to solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to solve parts then output the elapsed times to the
///   handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated. Part two does not run
/// if part one fails.
pub fn solve_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Parse input once, then run both parts of a solution against the parsed data.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `input` - The input string to parse.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to parse data & solve parts then output the elapsed times
///   to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A solution that can be run from its input string.
///
/// Implement with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records events as strings for comparison.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_owned());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events
                .push(format!("parse end timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("{part} start"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events
                .push(format!("{part} = {output} timed={}", duration_opt.is_some()));
        }
    }

    struct Floors(Vec<i32>);

    impl ParseData for Floors {
        fn parse(input: &str) -> DynamicResult<Self> {
            let steps = input
                .chars()
                .map(|c| match c {
                    '(' => Ok(1),
                    ')' => Ok(-1),
                    _ => Err(format!("unexpected character {c:?}")),
                })
                .collect::<Result<_, _>>()?;
            Ok(Self(steps))
        }
    }

    struct Lift;

    impl Solution<PartOne> for Lift {
        type Input = Floors;
        type Output = i32;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for Lift {
        type Input = Floors;
        type Output = usize;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            let mut floor = 0;
            for (index, step) in input.0.iter().enumerate() {
                floor += step;
                if floor < 0 {
                    return Ok(index + 1);
                }
            }
            Err("never entered the basement".into())
        }
    }

    #[test]
    fn parsed_solution_emits_events_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_solution::<Floors, Lift, Lift>("Lift", "()())", &mut handler, true)?;
        assert_eq!(
            handler.events,
            [
                "name Lift",
                "parse start",
                "parse end timed=true",
                "Part 1 start",
                "Part 1 = -1 timed=true",
                "Part 2 start",
                "Part 2 = 5 timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn untimed_run_has_no_durations() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_solution::<Floors, Lift, Lift>("Lift", ")", &mut handler, false)?;
        assert!(handler.events.iter().all(|event| !event.contains("timed=true")));
        Ok(())
    }

    #[test]
    fn part_error_stops_the_run() {
        let mut handler = RecordingHandler::default();
        let result = solve_parsed_solution::<Floors, Lift, Lift>("Lift", "((", &mut handler, false);
        assert!(result.is_err());
        assert_eq!(handler.events.last().map(String::as_str), Some("Part 2 start"));
    }

    #[test]
    fn parse_error_skips_parts() {
        let mut handler = RecordingHandler::default();
        let result = solve_parsed_solution::<Floors, Lift, Lift>("Lift", "(x", &mut handler, false);
        assert!(result.is_err());
        assert_eq!(handler.events, ["name Lift", "parse start"]);
    }
}
