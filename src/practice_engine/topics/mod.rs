//! Topic generators grouped by strand.
//!
//! Each module holds the generators for one strand of the curriculum.
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn <topic><R: Rng>(rng: &mut R, age: AgeGroup, language: Language) -> Problem
//! ```
//!
//! The dispatcher in `generator.rs` routes to these via an exhaustive
//! `match` over `TaskType`.

/// addition, subtraction, multiplication, division
pub mod arithmetic;
/// fractions, decimals, percentages
pub mod numbers;
/// proportions, ratios
pub mod relations;
/// expressions, equations, inequalities, systems, polynomials
pub mod algebra;
