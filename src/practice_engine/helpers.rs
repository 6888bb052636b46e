//! Shared builder functions that eliminate boilerplate across topic
//! generators.
//!
//! Every topic generator assembles the same pieces: synthesize operands,
//! compute the correct answer, derive three distractors, shuffle the four
//! options, render the localized question. The option handling lives here
//! so topic files focus on the arithmetic only.

use rand::Rng;

use crate::i18n::{task_template, Language};
use crate::practice_engine::{
    config,
    models::{AgeGroup, Problem, TaskType},
    template::{render, Value},
};

/// Fisher–Yates shuffle: a fair uniform permutation.
pub fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Select exactly three distractors, pairwise distinct and distinct from
/// `correct`.
///
/// `candidates` are the topic's natural perturbations, tried in order.
/// Perturbation schemes can collide (rounding a small answer up and down
/// may land on the answer itself), so any shortfall is filled from
/// `fallback`, which is called with offsets 1, 2, 3, … and must produce a
/// distinct string for every offset.
pub fn three_distinct(
    correct: &str,
    candidates: Vec<String>,
    mut fallback: impl FnMut(i64) -> String,
) -> Vec<String> {
    let mut distractors: Vec<String> = Vec::with_capacity(3);
    for candidate in candidates {
        if distractors.len() == 3 {
            break;
        }
        if candidate != correct && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }
    let mut offset = 1i64;
    while distractors.len() < 3 {
        let candidate = fallback(offset);
        if candidate != correct && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
        offset += 1;
    }
    distractors
}

/// Assemble the final [`Problem`] from all its parts.
///
/// This is the last call in every topic generator: it shuffles the correct
/// answer in among the distractors, renders the localized question from the
/// topic's template, and attaches the configured point value.
pub fn problem<R: Rng>(
    rng: &mut R,
    task: TaskType,
    age: AgeGroup,
    language: Language,
    bindings: &[(&str, Value)],
    correct: String,
    distractors: Vec<String>,
) -> Problem {
    debug_assert_eq!(distractors.len(), 3);

    let mut options = Vec::with_capacity(4);
    options.push(correct.clone());
    options.extend(distractors);
    shuffle(rng, &mut options);

    Problem {
        question: render(task_template(language, task), bindings),
        options,
        correct_answer: correct,
        points: config::points(task, age),
    }
}
