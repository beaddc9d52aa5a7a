use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;
use serde_json::Value;

#[solution_runner(
    name = "Day 12: JSAbacusFramework.io",
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2015<12> {}

/*
Input is a JSON document of arrays, objects, numbers, and strings. Strings never contain numbers.
*/

type Number = i64;

/*
For part 1, find the sum of all numbers in the document.
*/

struct Day12;

impl Day12 {
    const NUMBER_PATTERN: &str = r"-?\d+";
}

impl Solution<PartOne> for Day12 {
    type Input = str;
    type Output = Number;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let number_re = Regex::new(Self::NUMBER_PATTERN).expect("pattern should be valid");
        let numbers = number_re
            .find_iter(input)
            .map(|found| parse_with_context::<Number>(found.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let total = numbers
            .into_iter()
            .checked_sum()
            .ok_or("sum of numbers overflowed")?;
        Ok(total)
    }
}

/*
For part 2, ignore any object (and everything it contains) that has a property with the value
`"red"`. Arrays containing `"red"` are still counted.
*/

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum RedSumError {
    #[error("number is not a 64-bit integer: {0}")]
    NotAnInteger(String),

    #[error("sum of numbers overflowed")]
    Overflow,
}

/// Sum all numbers in a JSON value, skipping objects with a `"red"` property.
fn sum_without_red(value: &Value) -> Result<Number, RedSumError> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| RedSumError::NotAnInteger(number.to_string())),
        Value::Array(values) => sum_all_without_red(values),
        Value::Object(map) if map.values().any(|property| property == "red") => Ok(0),
        Value::Object(map) => sum_all_without_red(map.values()),
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(0),
    }
}

fn sum_all_without_red<'a>(
    values: impl IntoIterator<Item = &'a Value>,
) -> Result<Number, RedSumError> {
    values
        .into_iter()
        .map(sum_without_red)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .checked_sum()
        .ok_or(RedSumError::Overflow)
}

impl Solution<PartTwo> for Day12 {
    type Input = str;
    type Output = Number;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let document: Value = serde_json::from_str(input)?;
        Ok(sum_without_red(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (document, expected) in [
            ("[1,2,3]", 6),
            (r#"{"a":2,"b":4}"#, 6),
            ("[[[3]]]", 3),
            (r#"{"a":{"b":4},"c":-1}"#, 3),
            (r#"{"a":[-1,1]}"#, 0),
            (r#"[-1,{"a":1}]"#, 0),
            ("[]", 0),
            ("{}", 0),
        ] {
            let result = <Day12 as Solution<PartOne>>::solve(document)?;
            assert_eq!(result, expected, "{document}");
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        for (document, expected) in [
            ("[1,2,3]", 6),
            (r#"[1,{"c":"red","b":2},3]"#, 4),
            (r#"{"d":"red","e":[1,2,3,4],"f":5}"#, 0),
            (r#"[1,"red",5]"#, 6),
        ] {
            let result = <Day12 as Solution<PartTwo>>::solve(document)?;
            assert_eq!(result, expected, "{document}");
        }
        Ok(())
    }

    #[test]
    fn red_keys_do_not_exclude_objects() -> DynamicResult<()> {
        let document = r#"{"red": 1, "b": [2, {"c": "red"}]}"#;
        let result = <Day12 as Solution<PartTwo>>::solve(document)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn nested_red_object_only_skips_itself() {
        let document = json!({"a": [10, {"b": {"c": "red", "d": 100}, "e": 1}], "f": 2});
        assert_eq!(sum_without_red(&document), Ok(13));
    }

    #[test]
    fn fractional_numbers_and_overflow_are_errors() {
        assert_eq!(
            sum_without_red(&json!([1.5])),
            Err(RedSumError::NotAnInteger(String::from("1.5")))
        );
        assert_eq!(
            sum_without_red(&json!([i64::MAX, 1])),
            Err(RedSumError::Overflow)
        );
    }

    #[test]
    fn malformed_documents_are_errors() {
        assert!(<Day12 as Solution<PartTwo>>::solve("[1,2").is_err());
        assert!(<Day12 as Solution<PartTwo>>::solve("[1] 2").is_err());
    }
}
