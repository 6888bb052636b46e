//! Per-topic, per-age-group difficulty configuration.
//!
//! Pure data, no behavior: operand bounds, enumerated percentage choices,
//! and point values for every `(TaskType, AgeGroup)` pair. Everything is an
//! exhaustive `match`, so a missing row cannot exist — the compiler rejects
//! any new topic or age group until its rows are added here.
//!
//! Rows exist for every pair even where the allow-list never lets a topic
//! reach a younger group; only the allow-list decides what actually runs.

use crate::practice_engine::models::{AgeGroup, TaskType};

/// Inclusive integer operand bounds.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

/// Bounds for random fraction operands.
#[derive(Debug, Clone, Copy)]
pub struct FractionBounds {
    pub max_numerator: i64,
    pub max_denominator: i64,
}

/// Bounds and rounding precision for decimal operands.
#[derive(Debug, Clone, Copy)]
pub struct DecimalBounds {
    pub min: f64,
    pub max: f64,
    pub precision: u32,
}

/// Number bounds plus the enumerated percentages a problem may ask for.
#[derive(Debug, Clone, Copy)]
pub struct PercentageConfig {
    pub number: IntRange,
    pub percentages: &'static [i64],
}

/// Ratio-part bounds plus the fixed total that gets split.
#[derive(Debug, Clone, Copy)]
pub struct RatioConfig {
    pub parts: IntRange,
    pub total: i64,
}

const fn range(min: i64, max: i64) -> IntRange {
    IntRange { min, max }
}

/// Topics each age group may practice, easiest first.
///
/// The lists grow strictly: each group's list is a superset of the previous
/// group's. The first entry is the fallback topic when a selection filters
/// down to nothing.
pub fn available_tasks(age: AgeGroup) -> &'static [TaskType] {
    use TaskType::*;
    match age {
        AgeGroup::FourToSix => &[Addition, Subtraction],
        AgeGroup::SevenToNine => &[Addition, Subtraction, Multiplication, Division, Fractions],
        AgeGroup::TenToTwelve => &[
            Addition,
            Subtraction,
            Multiplication,
            Division,
            Fractions,
            Decimals,
            Percentages,
            Expressions,
            Equations,
            Inequalities,
            Systems,
            Polynomials,
            Ratios,
            Proportions,
        ],
    }
}

/// Base point reward for one solved problem.
///
/// Non-decreasing with age group for a fixed topic.
pub fn points(task: TaskType, age: AgeGroup) -> u32 {
    use AgeGroup::*;
    use TaskType::*;
    match (task, age) {
        (Addition | Subtraction, FourToSix) => 10,
        (Addition | Subtraction, SevenToNine) => 15,
        (Addition | Subtraction, TenToTwelve) => 20,

        (Multiplication | Division, FourToSix) => 15,
        (Multiplication | Division, SevenToNine) => 20,
        (Multiplication | Division, TenToTwelve) => 25,

        (Fractions | Decimals, FourToSix) => 20,
        (Fractions | Decimals, SevenToNine) => 25,
        (Fractions | Decimals, TenToTwelve) => 30,

        (Percentages | Proportions | Ratios | Expressions, FourToSix) => 25,
        (Percentages | Proportions | Ratios | Expressions, SevenToNine) => 30,
        (Percentages | Proportions | Ratios | Expressions, TenToTwelve) => 35,

        (Equations | Inequalities, FourToSix) => 30,
        (Equations | Inequalities, SevenToNine) => 35,
        (Equations | Inequalities, TenToTwelve) => 40,

        (Systems | Polynomials, FourToSix) => 35,
        (Systems | Polynomials, SevenToNine) => 40,
        (Systems | Polynomials, TenToTwelve) => 45,
    }
}

pub fn addition_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 10),
        AgeGroup::SevenToNine => range(10, 100),
        AgeGroup::TenToTwelve => range(100, 1000),
    }
}

/// Subtraction shares the addition bounds; the generator caps the second
/// operand at the first so results stay non-negative.
pub fn subtraction_operands(age: AgeGroup) -> IntRange {
    addition_operands(age)
}

pub fn multiplication_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 5),
        AgeGroup::SevenToNine => range(2, 10),
        AgeGroup::TenToTwelve => range(5, 20),
    }
}

/// Division draws divisor and quotient from the same bounds and multiplies
/// them into the dividend, so every problem divides evenly.
pub fn division_operands(age: AgeGroup) -> IntRange {
    multiplication_operands(age)
}

pub fn fraction_bounds(age: AgeGroup) -> FractionBounds {
    match age {
        AgeGroup::FourToSix => FractionBounds {
            max_numerator: 5,
            max_denominator: 4,
        },
        AgeGroup::SevenToNine => FractionBounds {
            max_numerator: 8,
            max_denominator: 6,
        },
        AgeGroup::TenToTwelve => FractionBounds {
            max_numerator: 12,
            max_denominator: 8,
        },
    }
}

pub fn decimal_bounds(age: AgeGroup) -> DecimalBounds {
    match age {
        AgeGroup::FourToSix => DecimalBounds {
            min: 0.0,
            max: 5.0,
            precision: 1,
        },
        AgeGroup::SevenToNine => DecimalBounds {
            min: 0.0,
            max: 10.0,
            precision: 2,
        },
        AgeGroup::TenToTwelve => DecimalBounds {
            min: 0.0,
            max: 20.0,
            precision: 2,
        },
    }
}

pub fn percentage_config(age: AgeGroup) -> PercentageConfig {
    match age {
        AgeGroup::FourToSix => PercentageConfig {
            number: range(1, 100),
            percentages: &[10, 20, 25, 50],
        },
        AgeGroup::SevenToNine => PercentageConfig {
            number: range(1, 200),
            percentages: &[10, 15, 20, 25, 50, 75],
        },
        AgeGroup::TenToTwelve => PercentageConfig {
            number: range(1, 500),
            percentages: &[10, 15, 20, 25, 30, 40, 50, 60, 75],
        },
    }
}

pub fn proportion_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 5),
        AgeGroup::SevenToNine => range(2, 10),
        AgeGroup::TenToTwelve => range(5, 20),
    }
}

pub fn ratio_config(age: AgeGroup) -> RatioConfig {
    match age {
        AgeGroup::FourToSix => RatioConfig {
            parts: range(1, 5),
            total: 20,
        },
        AgeGroup::SevenToNine => RatioConfig {
            parts: range(2, 8),
            total: 40,
        },
        AgeGroup::TenToTwelve => RatioConfig {
            parts: range(3, 12),
            total: 60,
        },
    }
}

pub fn expression_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 5),
        AgeGroup::SevenToNine => range(1, 10),
        AgeGroup::TenToTwelve => range(1, 15),
    }
}

pub fn equation_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 10),
        AgeGroup::SevenToNine => range(1, 20),
        AgeGroup::TenToTwelve => range(1, 50),
    }
}

pub fn inequality_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 10),
        AgeGroup::SevenToNine => range(5, 20),
        AgeGroup::TenToTwelve => range(10, 50),
    }
}

pub fn system_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 5),
        AgeGroup::SevenToNine => range(2, 10),
        AgeGroup::TenToTwelve => range(5, 15),
    }
}

pub fn polynomial_operands(age: AgeGroup) -> IntRange {
    match age {
        AgeGroup::FourToSix => range(1, 5),
        AgeGroup::SevenToNine => range(2, 8),
        AgeGroup::TenToTwelve => range(3, 10),
    }
}
