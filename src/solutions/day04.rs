use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use md5::{Digest, Md5};

#[solution_runner(
    name = "Day 4: The Ideal Stocking Stuffer",
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2015<4> {}

/*
Input is a secret key. Santa mines AdventCoins by finding the lowest positive number which, written
in decimal after the secret key, gives an MD5 hash starting with enough zeroes in hexadecimal.
*/

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum MiningError {
    #[error("secret key is empty")]
    EmptySecret,

    #[error("no number gives a hash with {0} leading zeroes")]
    Exhausted(usize),
}

/// Whether a digest starts with at least `zeroes` zero hexadecimal digits.
fn has_leading_zeroes(digest: &[u8], zeroes: usize) -> bool {
    let full_bytes = zeroes / 2;
    digest.len() * 2 >= zeroes
        && digest[..full_bytes].iter().all(|&byte| byte == 0)
        && (zeroes % 2 == 0 || digest[full_bytes] >> 4 == 0)
}

/// Find the lowest positive number whose hash with the secret key has `zeroes` leading zeroes.
fn mine(secret: &str, zeroes: usize) -> Result<u64, MiningError> {
    let secret = secret.trim();
    if secret.is_empty() {
        return Err(MiningError::EmptySecret);
    }
    let mut keyed = Md5::new();
    keyed.update(secret.as_bytes());

    (1..=u64::MAX)
        .find(|number| {
            let mut hasher = keyed.clone();
            hasher.update(number.to_string().as_bytes());
            has_leading_zeroes(&hasher.finalize(), zeroes)
        })
        .ok_or(MiningError::Exhausted(zeroes))
}

/*
For part 1, the hash must start with five zeroes.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = str;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(mine(input, 5)?)
    }
}

/*
For part 2, the hash must start with six zeroes.
*/

impl Solution<PartTwo> for Day04 {
    type Input = str;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(mine(input, 6)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_leading_hex_zeroes() {
        assert!(has_leading_zeroes(&[0x00, 0x00, 0x0f, 0xff], 5));
        assert!(!has_leading_zeroes(&[0x00, 0x00, 0x10, 0xff], 5));
        assert!(has_leading_zeroes(&[0x00, 0x00, 0x00, 0xff], 6));
        assert!(!has_leading_zeroes(&[0x00, 0x00, 0x0f, 0xff], 6));
        assert!(has_leading_zeroes(&[0xab], 0));
        assert!(!has_leading_zeroes(&[0x00], 3));
    }

    #[test]
    fn example_hash_starts_with_five_zeroes() {
        let digest = Md5::digest(b"abcdef609043");
        assert!(has_leading_zeroes(&digest, 5));
        assert_eq!(digest[..3], [0x00, 0x00, 0x01]);
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        assert_eq!(<Day04 as Solution<PartOne>>::solve("abcdef\n")?, 609_043);
        assert_eq!(<Day04 as Solution<PartOne>>::solve("pqrstuv")?, 1_048_970);
        Ok(())
    }

    #[test]
    fn mines_lowest_matching_number() -> Result<(), MiningError> {
        let found = mine("abcdef", 2)?;
        let zeroes_for = |number: u64| {
            has_leading_zeroes(&Md5::digest(format!("abcdef{number}").as_bytes()), 2)
        };
        assert!(zeroes_for(found));
        assert!((1..found).all(|number| !zeroes_for(number)));
        Ok(())
    }

    #[test]
    fn empty_secret_is_an_error() {
        assert_eq!(mine(" \n", 5), Err(MiningError::EmptySecret));
    }
}
