//! # math_drill_gen
//!
//! A fully offline, deterministic arithmetic practice problem generator.
//!
//! This library synthesizes age-appropriate math problems across 14 topics
//! covering four strands (whole-number arithmetic, number representations,
//! proportional reasoning, algebra). Each problem includes a localized
//! question, four shuffled answer options with exactly one correct, and a
//! point value scaled to the learner's age group.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemSetRequest`] with an age group, selected topics,
//!    language, problem count, and optional RNG seed.
//! 2. Call [`build_problem_set`] — the engine filters the selection against
//!    the age group's allow-list, then for each slot draws a random topic,
//!    synthesizes operands within the configured bounds, computes the exact
//!    result, derives three plausible distractors, and renders the question
//!    from the topic's translated template.
//! 3. The returned [`Problem`] list is ready to display in any UI; the host
//!    persists round results through [`Storage`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same problem set every time — useful for tests and shared drills.
//! - **Age-aware**: younger groups see fewer topics and smaller operands;
//!   point values grow with the age group.
//! - **Localized**: question templates ship for English, German, French,
//!   Spanish, and Russian, with per-key fallback to English.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{
//!     build_problem_set, AgeGroup, Language, ProblemSetRequest, TaskType,
//! };
//!
//! // Minimal — only the age group is required (defaults: addition,
//! // English, 10 problems, entropy seed):
//! let problems = build_problem_set(&ProblemSetRequest::new(AgeGroup::FourToSix));
//! assert_eq!(problems.len(), 10);
//!
//! // Full control — set every field:
//! let problems = build_problem_set(&ProblemSetRequest {
//!     age_group: AgeGroup::TenToTwelve,
//!     selected_tasks: vec![TaskType::Fractions, TaskType::Systems],
//!     language: Language::De,
//!     count: 5,
//!     rng_seed: Some(42),
//! });
//!
//! for p in &problems {
//!     println!("Q: {}  ({} points)", p.question, p.points);
//!     assert_eq!(p.options.len(), 4);
//!     assert!(p.options.contains(&p.correct_answer));
//! }
//! ```

pub mod i18n;
pub mod practice_engine;
pub mod storage;

// Convenience re-exports so callers can use `math_drill_gen::build_problem_set`
// directly without reaching into `practice_engine::`.
pub use i18n::Language;
pub use practice_engine::{
    available_tasks, build_problem_set, generate_problem, AgeGroup, Problem, ProblemSetRequest,
    TaskType,
};
pub use storage::{HistoryEntry, Storage, StorageError, Theme, UserData, UserSettings};

#[cfg(test)]
mod tests;
