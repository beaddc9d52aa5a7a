use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 15: Science for Hungry People",
    parsed = Ingredients,
    part_one = Day15,
    part_two = Day15
)]
impl super::AdventOfCode2015<15> {}

/*
Input lists one ingredient per line with its properties per teaspoon, formatted like
`Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8`.

A cookie uses exactly 100 teaspoons of ingredients. Each property of the cookie is the sum over
ingredients of teaspoons times that property, and a negative total counts as zero. The score of a
cookie is the product of its capacity, durability, flavor, and texture. Calories do not count.
*/

const TEASPOONS: u32 = 100;

/// Number of properties which count towards a cookie's score.
const SCORED_PROPERTIES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ingredient {
    /// Capacity, durability, flavor, and texture.
    scored: [i64; SCORED_PROPERTIES],
    calories: i64,
}

#[derive(thiserror::Error, Debug)]
enum IngredientError {
    #[error("expected \"[name]: capacity [n], durability [n], flavor [n], ...\", found {0:?}")]
    UnexpectedFormat(String),

    #[error("there are no ingredients")]
    NoIngredients,

    #[error("cookie score overflowed")]
    Overflow,
}

struct IngredientParser {
    line_re: Regex,
}

impl IngredientParser {
    const LINE_PATTERN: &str = concat!(
        r"^\w+: capacity (-?\d+), durability (-?\d+), ",
        r"flavor (-?\d+), texture (-?\d+), calories (-?\d+)$"
    );

    fn new() -> Self {
        let line_re = Regex::new(Self::LINE_PATTERN).expect("pattern should be valid");
        Self { line_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<Ingredient> {
        let captures = self
            .line_re
            .captures(line.trim())
            .ok_or_else(|| IngredientError::UnexpectedFormat(line.to_owned()))?;
        let mut scored = [0; SCORED_PROPERTIES];
        for (property, capture) in scored.iter_mut().zip(1_usize..) {
            *property = parse_with_context(&captures[capture])?;
        }
        Ok(Ingredient {
            scored,
            calories: parse_with_context(&captures[5])?,
        })
    }
}

struct Ingredients(Vec<Ingredient>);

impl ParseData for Ingredients {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = IngredientParser::new();
        let ingredients = parse_input_lines(input, |_, line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(ingredients))
    }
}

/// Every way to split `total` teaspoons between `parts` ingredients.
fn recipes(total: u32, parts: usize) -> Vec<Vec<u32>> {
    match parts {
        0 => Vec::new(),
        1 => vec![vec![total]],
        _ => (0..=total)
            .flat_map(|first| {
                recipes(total - first, parts - 1)
                    .into_iter()
                    .map(move |mut rest| {
                        rest.insert(0, first);
                        rest
                    })
            })
            .collect(),
    }
}

impl Ingredients {
    /// Sum of teaspoons times the property picked by `property`, for every ingredient.
    ///
    /// Returns `None` on overflow.
    fn total(&self, recipe: &[u32], property: impl Fn(&Ingredient) -> i64) -> Option<i64> {
        self.0
            .iter()
            .zip(recipe)
            .map(|(ingredient, &teaspoons)| {
                i64::from(teaspoons).checked_mul(property(ingredient))
            })
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .checked_sum()
    }

    fn score(&self, recipe: &[u32]) -> Option<i64> {
        (0..SCORED_PROPERTIES)
            .map(|index| {
                self.total(recipe, |ingredient| ingredient.scored[index])
                    .map(|total| total.max(0))
            })
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .checked_product()
    }

    /// The best score of a cookie, only considering recipes accepted by `keep`.
    fn best_score(&self, keep: impl Fn(&[u32]) -> bool) -> Result<i64, IngredientError> {
        if self.0.is_empty() {
            return Err(IngredientError::NoIngredients);
        }
        let mut best = 0;
        for recipe in recipes(TEASPOONS, self.0.len()) {
            if keep(&recipe) {
                best = best.max(self.score(&recipe).ok_or(IngredientError::Overflow)?);
            }
        }
        Ok(best)
    }
}

/*
For part 1, find the highest score of any cookie.
*/

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = Ingredients;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.best_score(|_| true)?)
    }
}

/*
For part 2, find the highest score of any cookie with exactly 500 calories.
*/

impl Day15 {
    const CALORIE_TARGET: i64 = 500;
}

impl Solution<PartTwo> for Day15 {
    type Input = Ingredients;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        // an overflowing calorie total cannot be the target
        let score = input.best_score(|recipe| {
            input.total(recipe, |ingredient| ingredient.calories) == Some(Self::CALORIE_TARGET)
        })?;
        Ok(score)
    }
}
