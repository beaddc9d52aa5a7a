use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 5: Doesn't He Have Intern-Elves For This?",
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2015<5> {}

/*
Input is a list of strings of lowercase letters, one per line. Santa sorts them into naughty and
nice strings, and the answer for both parts is how many are nice.
*/

/*
For part 1, a nice string:
- contains at least three vowels (`aeiou`, repeats count),
- contains a letter that appears twice in a row,
- and does not contain `ab`, `cd`, `pq`, or `xy`.
*/

struct NiceRulesOne {
    /// Regex matching any forbidden pair.
    forbidden_re: Regex,
}

impl NiceRulesOne {
    const FORBIDDEN_PATTERN: &str = r"ab|cd|pq|xy";
    const VOWELS: &[u8] = b"aeiou";

    fn new() -> Self {
        let forbidden_re = Regex::new(Self::FORBIDDEN_PATTERN).expect("pattern should be valid");
        Self { forbidden_re }
    }

    fn is_nice(&self, string: &str) -> bool {
        let bytes = string.as_bytes();
        let vowels = bytes.iter().filter(|b| Self::VOWELS.contains(b)).count();
        let has_double = bytes.windows(2).any(|pair| pair[0] == pair[1]);

        vowels >= 3 && has_double && !self.forbidden_re.is_match(string)
    }
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let rules = NiceRulesOne::new();
        Ok(input.lines().filter(|line| rules.is_nice(line)).count())
    }
}

/*
For part 2, a nice string:
- contains a pair of letters that appears at least twice without overlapping (`xyxy` but not
  `aaa`),
- and contains a letter which repeats with exactly one letter between them (`xyx`).

> The `regex` crate has no backreferences, so both rules are checked by scanning.
*/

/// Whether any pair of letters appears again later in the string without overlapping itself.
fn has_repeated_pair(bytes: &[u8]) -> bool {
    (0..bytes.len().saturating_sub(1)).any(|index| {
        let pair = &bytes[index..index + 2];
        bytes[index + 2..].windows(2).any(|later| later == pair)
    })
}

/// Whether a letter repeats with exactly one letter between.
fn has_split_repeat(bytes: &[u8]) -> bool {
    bytes.windows(3).any(|triple| triple[0] == triple[2])
}

impl Solution<PartTwo> for Day05 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .lines()
            .map(str::as_bytes)
            .filter(|&bytes| has_repeated_pair(bytes) && has_split_repeat(bytes))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_rules() {
        let rules = NiceRulesOne::new();
        assert!(rules.is_nice("ugknbfddgicrmopn"));
        assert!(rules.is_nice("aaa"));
        assert!(!rules.is_nice("jchzalrnumimnmhp"));
        assert!(!rules.is_nice("haegwjzuvuyypxyu"));
        assert!(!rules.is_nice("dvszwmarrgswjxmb"));
    }

    #[test]
    fn part_two_rules() {
        assert!(has_repeated_pair(b"xyxy"));
        assert!(has_repeated_pair(b"aabcdefgaa"));
        assert!(!has_repeated_pair(b"aaa"));
        assert!(has_split_repeat(b"xyx"));
        assert!(has_split_repeat(b"aaa"));
        assert!(!has_split_repeat(b"abcd"));
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let input = "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\nhaegwjzuvuyypxyu\ndvszwmarrgswjxmb\n";
        let result = <Day05 as Solution<PartOne>>::solve(input)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let input = "qjhvhtzxzqqjkmpb\nxxyxx\nuurcxstgmygtbstg\nieodomkazucvgmuy\n";
        let result = <Day05 as Solution<PartTwo>>::solve(input)?;
        assert_eq!(result, 2);
        Ok(())
    }
}
