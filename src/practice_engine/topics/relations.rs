//! Proportional-reasoning topics: proportions and ratios.
//!
//! ## Topics in this file
//!
//! - **Proportions** — `a:b = (a·f):?` for a random scale factor
//!   f ∈ [2,4]; the unknown is b·f, so the proportion holds by
//!   construction.
//! - **Ratios** — split a fixed total into two parts by `ratio1:ratio2`,
//!   rounding each part to the nearest integer; the answer is the first
//!   part. Distractors re-split against a perturbed ratio sum, which can
//!   round back onto the answer — the distinctness guard covers that.

use rand::Rng;

use crate::i18n::Language;
use crate::practice_engine::{
    config,
    helpers::{problem, three_distinct},
    models::{AgeGroup, Problem, TaskType},
    numeric::random_int,
};

pub fn proportions<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::proportion_operands(age);
    let a = random_int(rng, bounds.min, bounds.max);
    let b = random_int(rng, bounds.min, bounds.max);
    let factor = random_int(rng, 2, 4);
    let c = a * factor;
    let answer = b * factor;

    let candidates = vec![
        (answer + factor).to_string(),
        (answer - factor).to_string(),
        (answer * 2).to_string(),
    ];
    let distractors =
        three_distinct(&answer.to_string(), candidates, |k| (answer + k).to_string());

    problem(
        rng,
        TaskType::Proportions,
        age,
        language,
        &[("a", a.into()), ("b", b.into()), ("c", c.into())],
        answer.to_string(),
        distractors,
    )
}

pub fn ratios<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let cfg = config::ratio_config(age);
    let ratio1 = random_int(rng, cfg.parts.min, cfg.parts.max);
    let ratio2 = random_int(rng, cfg.parts.min, cfg.parts.max);
    let sum = ratio1 + ratio2;

    let split = |parts: i64| (ratio1 as f64 / parts as f64 * cfg.total as f64).round() as i64;
    let answer = split(sum);

    let candidates = vec![
        split(sum + 1).to_string(),
        split(sum - 1).to_string(),
        (answer + 2).to_string(),
    ];
    let distractors =
        three_distinct(&answer.to_string(), candidates, |k| (answer + 2 + k).to_string());

    problem(
        rng,
        TaskType::Ratios,
        age,
        language,
        &[
            ("ratio1", ratio1.into()),
            ("ratio2", ratio2.into()),
            ("total", cfg.total.into()),
        ],
        answer.to_string(),
        distractors,
    )
}
