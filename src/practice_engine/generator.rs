use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::i18n::Language;
use crate::practice_engine::{
    config,
    models::{AgeGroup, Problem, ProblemSetRequest, TaskType},
    topics,
};

/// Generate one problem for `task`.
///
/// The match is exhaustive: adding a `TaskType` variant will not compile
/// until it is routed to a generator here.
pub fn generate_problem<R: Rng>(
    rng: &mut R,
    task: TaskType,
    age: AgeGroup,
    language: Language,
) -> Problem {
    match task {
        TaskType::Addition => topics::arithmetic::addition(rng, age, language),
        TaskType::Subtraction => topics::arithmetic::subtraction(rng, age, language),
        TaskType::Multiplication => topics::arithmetic::multiplication(rng, age, language),
        TaskType::Division => topics::arithmetic::division(rng, age, language),
        TaskType::Fractions => topics::numbers::fractions(rng, age, language),
        TaskType::Decimals => topics::numbers::decimals(rng, age, language),
        TaskType::Percentages => topics::numbers::percentages(rng, age, language),
        TaskType::Proportions => topics::relations::proportions(rng, age, language),
        TaskType::Ratios => topics::relations::ratios(rng, age, language),
        TaskType::Expressions => topics::algebra::expressions(rng, age, language),
        TaskType::Equations => topics::algebra::equations(rng, age, language),
        TaskType::Inequalities => topics::algebra::inequalities(rng, age, language),
        TaskType::Systems => topics::algebra::systems(rng, age, language),
        TaskType::Polynomials => topics::algebra::polynomials(rng, age, language),
    }
}

/// Build one practice round: `request.count` problems with topics drawn
/// uniformly at random from the resolved topic set.
///
/// Selected topics outside the age group's allow-list are filtered out; if
/// nothing survives, the allow-list's first topic is used. Topics may
/// repeat across slots and need not be evenly distributed.
pub fn build_problem_set(request: &ProblemSetRequest) -> Vec<Problem> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let allowed = config::available_tasks(request.age_group);
    let mut effective: Vec<TaskType> = request
        .selected_tasks
        .iter()
        .copied()
        .filter(|task| allowed.contains(task))
        .collect();
    if effective.is_empty() {
        effective.push(allowed[0]);
    }

    debug!(
        age_group = %request.age_group,
        language = %request.language,
        topics = effective.len(),
        count = request.count,
        "building problem set"
    );

    (0..request.count)
        .map(|_| {
            let task = effective[rng.gen_range(0..effective.len())];
            generate_problem(&mut rng, task, request.age_group, request.language)
        })
        .collect()
}
