//! Framework of traits and utilities for running Advent of Code solutions.
//!
//! A solution is split into an optional parse step ([`ParseData`]) and two parts, each a
//! [`Solution`] for the [`PartOne`] or [`PartTwo`] marker. The [`runner`] module sequences those
//! steps and reports them to an [`OutputHandler`][runner::OutputHandler].
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseData`]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! #
//! struct Presents(Vec<[u32; 3]>);
//!
//! impl ParseData for Presents {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let mut presents = Vec::new();
//!         for line in input.lines() {
//!             let mut sides = [0; 3];
//!             for (side, value) in sides.iter_mut().zip(line.split('x')) {
//!                 *side = value.parse()?;
//!             }
//!             presents.push(sides);
//!         }
//!         Ok(Self(presents))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for both parts:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//! #
//! # struct Presents(Vec<[u32; 3]>);
//! # impl ParseData for Presents {
//! #     fn parse(_input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(Vec::new()))
//! #     }
//! # }
//! #
//! struct Day02;
//!
//! impl Solution<PartOne> for Day02 {
//!     type Input = Presents;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Day02 {
//!     type Input = Presents;
//!     type Output = u32;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<u32> {
//!         Ok(input.0.iter().map(|sides| sides.iter().product::<u32>()).sum())
//!     }
//! }
//! ```
//!
//! 3. Use the [`runner`] module to execute your solution.
//!
//! # Solutions with `Input = str`
//!
//! When there is nothing worth parsing ahead of time, a part can take the raw input directly:
//!
//! ```
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     type Output = i32;
//!
//!     fn solve(input: &str) -> DynamicResult<i32> {
//!         Ok(input
//!             .chars()
//!             .map(|c| match c {
//!                 '(' => 1,
//!                 ')' => -1,
//!                 _ => 0,
//!             })
//!             .sum())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Seals [`Part`][super::Part] so only the two marker structs of this crate implement it.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies one of the two parts of a day's puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait used to identify a part for a solution.
///
/// Types implementing this trait are used as generic parameters to [`Solution<P>`] to indicate
/// which part the solution implements.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution for one [`Part`] of a puzzle.
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// [`Solution::solve`] accepts a reference to this type. For direct string input, set to
    /// `str`.
    type Input: ?Sized;

    /// The answer type reported once solved.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or a logical failure while solving is returned as a dynamically dispatched
    /// error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A data structure created by parsing the puzzle's string input.
///
/// Both parts of a solution share the parsed value by setting [`Solution::Input`] to the
/// implementing type, so input is parsed only once per run.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
