//! Algebra topics: expressions, equations, inequalities, systems of
//! equations, polynomials.
//!
//! The equation-family generators all work backwards: pick the unknown
//! first, then derive the published side from it. The problem is solvable
//! by construction and the stated relation holds exactly when the correct
//! answer is substituted back in — nothing is ever solved after the fact.
//!
//! ## Topics in this file
//!
//! - **Expressions** — evaluate `a·b + c`; one distractor applies the
//!   classic precedence mistake `a·(b+c)`.
//! - **Equations** — solve `a·x + b = rhs` where rhs was derived from a
//!   chosen x.
//! - **Inequalities** — smallest whole number satisfying `a·x + b >= rhs`;
//!   equality holds at the answer.
//! - **Systems** — from chosen (x, y), publish `x+y` and `x−y`; the answer
//!   is the literal pair, distractors shift or swap it.
//! - **Polynomials** — evaluate `a·x² + b·x + c` at a chosen x with b, c
//!   possibly negative; the sign rendering exercises the template
//!   conditionals.

use rand::Rng;

use crate::i18n::Language;
use crate::practice_engine::{
    config,
    helpers::{problem, three_distinct},
    models::{AgeGroup, Problem, TaskType},
    numeric::random_int,
};

pub fn expressions<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::expression_operands(age);
    let a = random_int(rng, bounds.min, bounds.max);
    let b = random_int(rng, bounds.min, bounds.max);
    let c = random_int(rng, bounds.min, bounds.max);
    let answer = a * b + c;

    // a·(b+c) equals the answer when a == 1; guarded below.
    let candidates = vec![
        ((a + 1) * b + c).to_string(),
        (a * b + c + 1).to_string(),
        (a * (b + c)).to_string(),
    ];
    let distractors =
        three_distinct(&answer.to_string(), candidates, |k| (answer + 1 + k).to_string());

    problem(
        rng,
        TaskType::Expressions,
        age,
        language,
        &[("a", a.into()), ("b", b.into()), ("c", c.into())],
        answer.to_string(),
        distractors,
    )
}

pub fn equations<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::equation_operands(age);
    let x = random_int(rng, bounds.min, bounds.max);
    let a = random_int(rng, 1, 5);
    let b = random_int(rng, bounds.min, bounds.max);
    let rhs = a * x + b;

    let candidates = vec![
        (x + 1).to_string(),
        (x - 1).to_string(),
        (x + 2).to_string(),
    ];
    let distractors =
        three_distinct(&x.to_string(), candidates, |k| (x + 2 + k).to_string());

    problem(
        rng,
        TaskType::Equations,
        age,
        language,
        &[("a", a.into()), ("b", b.into()), ("rhs", rhs.into())],
        x.to_string(),
        distractors,
    )
}

pub fn inequalities<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::inequality_operands(age);
    let x = random_int(rng, bounds.min, bounds.max);
    let a = random_int(rng, 1, 5);
    let b = random_int(rng, bounds.min, bounds.max);
    // x is the smallest integer with a·x + b >= rhs precisely because
    // equality holds at x and a > 0.
    let rhs = a * x + b;

    let candidates = vec![
        (x - 1).to_string(),
        (x + 1).to_string(),
        (x + 2).to_string(),
    ];
    let distractors =
        three_distinct(&x.to_string(), candidates, |k| (x + 2 + k).to_string());

    problem(
        rng,
        TaskType::Inequalities,
        age,
        language,
        &[("a", a.into()), ("b", b.into()), ("rhs", rhs.into())],
        x.to_string(),
        distractors,
    )
}

pub fn systems<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::system_operands(age);
    let x = random_int(rng, bounds.min, bounds.max);
    let y = random_int(rng, bounds.min, bounds.max);
    let a = x + y;
    let b = x - y;

    let pair = |x: i64, y: i64| format!("x={}, y={}", x, y);
    let answer = pair(x, y);

    // The swapped pair collides with the answer when x == y.
    let candidates = vec![pair(x + 1, y - 1), pair(x - 1, y + 1), pair(y, x)];
    let distractors = three_distinct(&answer, candidates, |k| pair(x + k, y + k));

    problem(
        rng,
        TaskType::Systems,
        age,
        language,
        &[("a", a.into()), ("b", b.into())],
        answer,
        distractors,
    )
}

pub fn polynomials<R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem {
    let bounds = config::polynomial_operands(age);
    let x = random_int(rng, bounds.min, bounds.max);
    let a = random_int(rng, 1, 3);
    let b = random_int(rng, -bounds.max, bounds.max);
    let c = random_int(rng, -bounds.max, bounds.max);
    let answer = a * x * x + b * x + c;

    let candidates = vec![
        (answer + 1).to_string(),
        (answer - 1).to_string(),
        (answer + 2).to_string(),
    ];
    let distractors =
        three_distinct(&answer.to_string(), candidates, |k| (answer + 2 + k).to_string());

    problem(
        rng,
        TaskType::Polynomials,
        age,
        language,
        &[
            ("a", a.into()),
            ("b", b.into()),
            ("c", c.into()),
            ("x", x.into()),
        ],
        answer.to_string(),
        distractors,
    )
}
