use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

// ---------------------------------------------------------------------------
// Age groups
// ---------------------------------------------------------------------------

/// Practice difficulty tier tied to the learner's age.
///
/// Ordered by difficulty: `FourToSix < SevenToNine < TenToTwelve`. Every
/// generator config row scales its operand bounds and point value along this
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "4-6")]
    FourToSix,
    #[serde(rename = "7-9")]
    SevenToNine,
    #[serde(rename = "10-12")]
    TenToTwelve,
}

impl AgeGroup {
    /// All age groups, youngest first.
    pub const ALL: [AgeGroup; 3] = [
        AgeGroup::FourToSix,
        AgeGroup::SevenToNine,
        AgeGroup::TenToTwelve,
    ];
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgeGroup::FourToSix => "4-6",
            AgeGroup::SevenToNine => "7-9",
            AgeGroup::TenToTwelve => "10-12",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AgeGroup {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4-6" => Ok(AgeGroup::FourToSix),
            "7-9" => Ok(AgeGroup::SevenToNine),
            "10-12" => Ok(AgeGroup::TenToTwelve),
            _ => Err(UnknownNameError {
                kind: "age group",
                name: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Task types
// ---------------------------------------------------------------------------

/// One arithmetic skill category.
///
/// The set is closed: dispatch in `generator.rs` is an exhaustive `match`,
/// so adding a topic here forces every table (config, templates, dispatch)
/// to be extended at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Fractions,
    Decimals,
    Percentages,
    Proportions,
    Ratios,
    Expressions,
    Equations,
    Inequalities,
    Systems,
    Polynomials,
}

impl TaskType {
    /// All fourteen task types in canonical order.
    pub const ALL: [TaskType; 14] = [
        TaskType::Addition,
        TaskType::Subtraction,
        TaskType::Multiplication,
        TaskType::Division,
        TaskType::Fractions,
        TaskType::Decimals,
        TaskType::Percentages,
        TaskType::Proportions,
        TaskType::Ratios,
        TaskType::Expressions,
        TaskType::Equations,
        TaskType::Inequalities,
        TaskType::Systems,
        TaskType::Polynomials,
    ];

    /// The lowercase identifier used in templates, settings, and storage.
    pub fn name(self) -> &'static str {
        match self {
            TaskType::Addition => "addition",
            TaskType::Subtraction => "subtraction",
            TaskType::Multiplication => "multiplication",
            TaskType::Division => "division",
            TaskType::Fractions => "fractions",
            TaskType::Decimals => "decimals",
            TaskType::Percentages => "percentages",
            TaskType::Proportions => "proportions",
            TaskType::Ratios => "ratios",
            TaskType::Expressions => "expressions",
            TaskType::Equations => "equations",
            TaskType::Inequalities => "inequalities",
            TaskType::Systems => "systems",
            TaskType::Polynomials => "polynomials",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TaskType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownNameError {
                kind: "task type",
                name: s.to_string(),
            })
    }
}

/// A name did not match any known enum variant.
///
/// Only produced when parsing external strings (settings files, stored
/// data). Callers filter rather than propagate: an unknown task name is
/// silently dropped from a selection.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind}: {name:?}")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One fully-formed practice problem.
///
/// Immutable once created. Invariants (enforced by construction, checked in
/// tests): `options.len() == 4` and `correct_answer` appears in `options`
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Localized question text, fully rendered (no placeholders remaining).
    pub question: String,
    /// Exactly four answer strings in randomized display order.
    pub options: Vec<String>,
    /// String form of the correct result; equals one entry of `options`.
    pub correct_answer: String,
    /// Point reward, non-decreasing with age group for a fixed topic.
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSetRequest {
    pub age_group: AgeGroup,
    /// Requested topics. Filtered against the age group's allow-list; if
    /// nothing survives, the allow-list's first topic is used instead.
    pub selected_tasks: Vec<TaskType>,
    pub language: Language,
    /// Number of problems to generate.
    pub count: usize,
    /// `Some(seed)` makes the whole set reproducible; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl ProblemSetRequest {
    pub const DEFAULT_COUNT: usize = 10;

    /// Minimal constructor — everything except the age group defaults
    /// (addition, English, 10 problems, entropy seed).
    pub fn new(age_group: AgeGroup) -> Self {
        ProblemSetRequest {
            age_group,
            selected_tasks: vec![TaskType::Addition],
            language: Language::En,
            count: Self::DEFAULT_COUNT,
            rng_seed: None,
        }
    }
}
