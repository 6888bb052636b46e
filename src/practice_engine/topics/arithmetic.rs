//! Whole-number arithmetic: addition, subtraction, multiplication, division.
//!
//! These are the entry-level topics — addition and subtraction are the only
//! ones available to the 4-6 group. Operand bounds scale with age
//! (1..10 → 10..100 → 100..1000 for addition/subtraction).
//!
//! ## Topics in this file
//!
//! - **Addition** — sum of two operands; distractors shift the sum by small
//!   random offsets.
//! - **Subtraction** — second operand capped at the first, so the result is
//!   never negative.
//! - **Multiplication** — distractors are the near-miss products a learner
//!   actually computes by misreading a factor: (a+1)·b, a·(b+1), (a−1)·b.
//! - **Division** — dividend is constructed as divisor × quotient, so every
//!   problem divides evenly.

use rand::Rng;

use crate::i18n::Language;
use crate::practice_engine::{
    config,
    helpers::{problem, three_distinct},
    models::{AgeGroup, Problem, TaskType},
    numeric::random_int,
};

pub fn addition<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::addition_operands(age);
    let num1 = random_int(rng, bounds.min, bounds.max);
    let num2 = random_int(rng, bounds.min, bounds.max);
    let answer = num1 + num2;

    let candidates = vec![
        (answer + random_int(rng, 1, 5)).to_string(),
        (answer - random_int(rng, 1, 5)).to_string(),
        (answer + random_int(rng, 6, 10)).to_string(),
    ];
    let distractors = three_distinct(&answer.to_string(), candidates, |k| {
        (answer + 10 + k).to_string()
    });

    problem(
        rng,
        TaskType::Addition,
        age,
        language,
        &[("num1", num1.into()), ("num2", num2.into())],
        answer.to_string(),
        distractors,
    )
}

pub fn subtraction<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::subtraction_operands(age);
    let num1 = random_int(rng, bounds.min, bounds.max);
    // Cap the subtrahend at the minuend: results stay non-negative.
    let num2 = random_int(rng, bounds.min, num1.min(bounds.max));
    let answer = num1 - num2;

    let candidates = vec![
        (answer + random_int(rng, 1, 5)).to_string(),
        (answer - random_int(rng, 1, 5)).to_string(),
        (answer + random_int(rng, 6, 10)).to_string(),
    ];
    let distractors = three_distinct(&answer.to_string(), candidates, |k| {
        (answer + 10 + k).to_string()
    });

    problem(
        rng,
        TaskType::Subtraction,
        age,
        language,
        &[("num1", num1.into()), ("num2", num2.into())],
        answer.to_string(),
        distractors,
    )
}

pub fn multiplication<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::multiplication_operands(age);
    let num1 = random_int(rng, bounds.min, bounds.max);
    let num2 = random_int(rng, bounds.min, bounds.max);
    let answer = num1 * num2;

    // (num1+1)·num2 and num1·(num2+1) coincide when num1 == num2; the
    // distinctness guard fills the gap.
    let candidates = vec![
        ((num1 + 1) * num2).to_string(),
        (num1 * (num2 + 1)).to_string(),
        ((num1 - 1) * num2).to_string(),
    ];
    let distractors =
        three_distinct(&answer.to_string(), candidates, |k| (answer + k).to_string());

    problem(
        rng,
        TaskType::Multiplication,
        age,
        language,
        &[("num1", num1.into()), ("num2", num2.into())],
        answer.to_string(),
        distractors,
    )
}

pub fn division<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::division_operands(age);
    let divisor = random_int(rng, bounds.min, bounds.max);
    let quotient = random_int(rng, bounds.min, bounds.max);
    let dividend = divisor * quotient;

    let candidates = vec![
        (quotient + 1).to_string(),
        (quotient - 1).to_string(),
        (quotient + 2).to_string(),
    ];
    let distractors = three_distinct(&quotient.to_string(), candidates, |k| {
        (quotient + 2 + k).to_string()
    });

    problem(
        rng,
        TaskType::Division,
        age,
        language,
        &[("dividend", dividend.into()), ("divisor", divisor.into())],
        quotient.to_string(),
        distractors,
    )
}
