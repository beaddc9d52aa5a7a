//! Utility functions and errors for parsing puzzle input.

use std::str::FromStr;

use thiserror::Error;

use crate::DynamicError;

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

impl<E> ParseContextError<E>
where
    E: std::error::Error,
{
    /// Wrap a parsing error with the string that failed to parse.
    pub fn new(source: E, string: &str) -> Self {
        Self {
            string: string.to_owned(),
            source,
        }
    }
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// ```
/// use aoc_framework::parsing::parse_with_context;
///
/// let value: u16 = parse_with_context("2503").unwrap();
/// assert_eq!(value, 2503);
///
/// let error = parse_with_context::<u16>("seconds").unwrap_err();
/// assert_eq!(error.to_string(), "failed to parse string: \"seconds\"");
/// ```
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string
        .parse::<F>()
        .map_err(|source| ParseContextError::new(source, string))
}

/// A delimited list did not hold the expected number of values.
#[derive(Error, Debug)]
#[error("expected {expected} values delimited by {delimiter:?}, found {found}")]
pub struct DelimitedCountError {
    expected: usize,
    found: usize,
    delimiter: char,
}

/// Parse exactly `N` values from a string split by a delimiter, e.g. `"2x3x4"` with `'x'`.
///
/// ```
/// use aoc_framework::parsing::parse_delimited;
///
/// let sides: [u32; 3] = parse_delimited("2x3x4", 'x').unwrap();
/// assert_eq!(sides, [2, 3, 4]);
///
/// assert!(parse_delimited::<u32, 3>("2x3", 'x').is_err());
/// ```
///
/// # Errors
///
/// A [`DelimitedCountError`] is returned if the count of values is not `N`, or a
/// [`ParseContextError`] if any value fails to parse.
pub fn parse_delimited<F, const N: usize>(
    string: &str,
    delimiter: char,
) -> Result<[F; N], DynamicError>
where
    F: FromStr + Copy + Default,
    F::Err: std::error::Error + Send + Sync + 'static,
{
    let mut values = [F::default(); N];
    let mut found = 0;
    for part in string.split(delimiter) {
        if found < N {
            values[found] = parse_with_context(part.trim())?;
        }
        found += 1;
    }
    if found != N {
        return Err(DelimitedCountError {
            expected: N,
            found,
            delimiter,
        }
        .into());
    }
    Ok(values)
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

/// Parse each line of input with a closure, mapping any line's error into an [`InvalidLine`].
///
/// The closure receives the zero based line index and the line.
///
/// ```
/// use aoc_framework::parsing::{parse_input_lines, parse_with_context};
///
/// let input = "20\n15\n10";
/// let sizes = parse_input_lines(input, |_, line| parse_with_context::<u8>(line))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(sizes, [20, 15, 10]);
///
/// let error = parse_input_lines("5\nfive", |_, line| parse_with_context::<u8>(line))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap_err();
/// assert_eq!(error.to_string(), "failure parsing line 2");
/// ```
///
/// # Errors
///
/// Each item is an [`InvalidLine`] error sourcing the closure's error if parsing the line fails.
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|error| InvalidLine {
            line_index,
            source: error.into(),
        })
    })
}
