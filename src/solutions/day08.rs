use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 8: Matchsticks",
    parsed = StringLiterals,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2015<8> {}

/*
Input is a list of double-quoted string literals, one per line. Escapes are `\\`, `\"`, and `\x`
followed by two hexadecimal digits, each standing for a single character in memory.
*/

/// A string literal with its character counts.
#[derive(Debug)]
struct StringLiteral {
    /// Characters of code, including the surrounding quotes.
    code_len: usize,
    /// Characters of the decoded string in memory.
    memory_len: usize,
    /// Characters of code needed to write the literal itself as a new string literal.
    encoded_len: usize,
}

#[derive(thiserror::Error, Debug)]
enum ParseStringLiteralError {
    #[error("string literal must be wrapped in double quotes")]
    MissingQuotes,

    #[error("unescaped double quote inside string literal")]
    UnescapedQuote,

    #[error("unsupported escape sequence: {0:?}")]
    InvalidEscape(String),
}

impl StringLiteral {
    fn parse(line: &str) -> Result<Self, ParseStringLiteralError> {
        let code = line.trim();
        let inner = code
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or(ParseStringLiteralError::MissingQuotes)?;

        let mut memory_len = 0;
        let mut bytes = inner.bytes();
        while let Some(byte) = bytes.next() {
            match byte {
                b'"' => return Err(ParseStringLiteralError::UnescapedQuote),
                b'\\' => match bytes.next() {
                    Some(b'\\' | b'"') => {}
                    Some(b'x') => {
                        let digits = [bytes.next(), bytes.next()];
                        if !digits
                            .iter()
                            .all(|digit| digit.is_some_and(|d| d.is_ascii_hexdigit()))
                        {
                            let sequence = digits.iter().flatten().map(|&d| char::from(d));
                            return Err(ParseStringLiteralError::InvalidEscape(
                                "\\x".chars().chain(sequence).collect(),
                            ));
                        }
                    }
                    other => {
                        let sequence = other.map(char::from).into_iter();
                        return Err(ParseStringLiteralError::InvalidEscape(
                            "\\".chars().chain(sequence).collect(),
                        ));
                    }
                },
                _ => {}
            }
            memory_len += 1;
        }

        // every quote and backslash gains a backslash, plus a new pair of surrounding quotes
        let escaped = code.bytes().filter(|b| matches!(b, b'"' | b'\\')).count();

        Ok(Self {
            code_len: code.len(),
            memory_len,
            encoded_len: code.len() + escaped + 2,
        })
    }
}

struct StringLiterals(Vec<StringLiteral>);

impl ParseData for StringLiterals {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let literals = parse_input_lines(input, |_, line| StringLiteral::parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(literals))
    }
}

/// Sum the difference between two counts of every literal.
fn sum_differences(
    literals: &[StringLiteral],
    difference: impl Fn(&StringLiteral) -> usize,
) -> DynamicResult<usize> {
    let total = literals
        .iter()
        .map(difference)
        .checked_sum()
        .ok_or("sum of differences overflowed")?;
    Ok(total)
}

/*
For part 1, find the characters of code minus the characters in memory, over all literals.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = StringLiterals;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_differences(&input.0, |literal| literal.code_len - literal.memory_len)
    }
}

/*
For part 2, encode each literal as a new string literal and find the encoded characters minus the
original characters of code.
*/

impl Solution<PartTwo> for Day08 {
    type Input = StringLiterals;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_differences(&input.0, |literal| literal.encoded_len - literal.code_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r#"""
"abc"
"aaa\"aaa"
"\x27"
"#;

    #[test]
    fn counts_example_literals() -> DynamicResult<()> {
        let parsed = StringLiterals::parse(EXAMPLE_INPUT)?;
        let counts: Vec<_> = parsed
            .0
            .iter()
            .map(|literal| (literal.code_len, literal.memory_len, literal.encoded_len))
            .collect();
        assert_eq!(counts, [(2, 0, 6), (5, 3, 9), (10, 7, 16), (6, 1, 11)]);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = StringLiterals::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 12);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = StringLiterals::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 19);
        Ok(())
    }

    #[test]
    fn escaped_backslash_before_x_is_not_hex() -> DynamicResult<()> {
        let literal = StringLiteral::parse(r#""\\x27""#)?;
        assert_eq!((literal.code_len, literal.memory_len), (7, 4));
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        assert!(StringLiterals::parse("abc").is_err());
        assert!(StringLiterals::parse(r#""a"b""#).is_err());
        assert!(StringLiterals::parse(r#""\q""#).is_err());
        assert!(StringLiterals::parse(r#""\x4""#).is_err());
        assert!(StringLiterals::parse(r#""\""#).is_err());
    }
}
