//! Number-representation topics: fractions, decimals, percentages.
//!
//! All three topics exercise exact arithmetic over a non-integer
//! representation and format results through one shared path so the correct
//! answer always matches its option string.
//!
//! ## Topics in this file
//!
//! - **Fractions** — add two random fractions by cross-multiplication, then
//!   reduce by GCD; distractors are off-by-one numerators/denominators.
//! - **Decimals** — operands and result are rounded to the configured
//!   precision and rendered via `format_decimal` everywhere.
//! - **Percentages** — the percentage comes from a fixed per-age set (10%,
//!   25%, …), never an arbitrary value; distractors scale the answer by
//!   ±10–20% and collide easily for small answers, so the distinctness
//!   guard does real work here.

use rand::Rng;

use crate::i18n::Language;
use crate::practice_engine::{
    config,
    helpers::{problem, three_distinct},
    models::{AgeGroup, Problem, TaskType},
    numeric::{format_decimal, random_decimal, random_fraction, random_int, round_to, Fraction},
    template::Value,
};

pub fn fractions<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::fraction_bounds(age);
    let first = random_fraction(rng, bounds.max_numerator, bounds.max_denominator);
    let second = random_fraction(rng, bounds.max_numerator, bounds.max_denominator);

    let sum = first.add(second).reduced();
    let answer = sum.to_string();

    let candidates = vec![
        Fraction::new(sum.numerator + 1, sum.denominator).to_string(),
        Fraction::new(sum.numerator, sum.denominator + 1).to_string(),
        Fraction::new(sum.numerator - 1, sum.denominator).to_string(),
    ];
    let distractors = three_distinct(&answer, candidates, |k| {
        Fraction::new(sum.numerator + 1 + k, sum.denominator).to_string()
    });

    problem(
        rng,
        TaskType::Fractions,
        age,
        language,
        &[
            ("num1", first.numerator.into()),
            ("den1", first.denominator.into()),
            ("num2", second.numerator.into()),
            ("den2", second.denominator.into()),
        ],
        answer,
        distractors,
    )
}

pub fn decimals<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::decimal_bounds(age);
    let precision = bounds.precision;
    let num1 = random_decimal(rng, bounds.min, bounds.max, precision);
    let num2 = random_decimal(rng, bounds.min, bounds.max, precision);
    let answer = round_to(num1 + num2, precision);
    let answer_text = format_decimal(answer, precision);

    let shifts = [
        random_decimal(rng, 0.1, 1.0, precision),
        -random_decimal(rng, 0.1, 1.0, precision),
        random_decimal(rng, 1.0, 2.0, precision),
    ];
    let candidates = shifts
        .iter()
        .map(|shift| format_decimal(round_to(answer + shift, precision), precision))
        .collect();
    let distractors = three_distinct(&answer_text, candidates, |k| {
        format_decimal(answer + (2 + k) as f64, precision)
    });

    problem(
        rng,
        TaskType::Decimals,
        age,
        language,
        &[
            ("num1", Value::Text(format_decimal(num1, precision))),
            ("num2", Value::Text(format_decimal(num2, precision))),
        ],
        answer_text,
        distractors,
    )
}

pub fn percentages<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let cfg = config::percentage_config(age);
    let number = random_int(rng, cfg.number.min, cfg.number.max);
    let percentage = cfg.percentages[rng.gen_range(0..cfg.percentages.len())];
    let answer = ((number * percentage) as f64 / 100.0).round() as i64;

    let candidates = vec![
        ((answer as f64 * 1.1).round() as i64).to_string(),
        ((answer as f64 * 0.9).round() as i64).to_string(),
        ((answer as f64 * 1.2).round() as i64).to_string(),
    ];
    let distractors =
        three_distinct(&answer.to_string(), candidates, |k| (answer + k).to_string());

    problem(
        rng,
        TaskType::Percentages,
        age,
        language,
        &[("percentage", percentage.into()), ("number", number.into())],
        answer.to_string(),
        distractors,
    )
}
