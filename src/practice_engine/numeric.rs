//! Random numeric primitives shared by every topic generator.
//!
//! All randomness flows through an explicit `&mut impl Rng` handle so a
//! seeded `StdRng` reproduces an entire problem set. Decimal values are
//! formatted through a single function so an answer computed from two
//! operands always renders identically wherever it appears.

use rand::Rng;

/// Inclusive uniform random integer in `[min, max]`.
///
/// Caller guarantees `min <= max`.
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Uniform random real in `[min, max)`, rounded to `precision` decimal
/// digits (half away from zero).
pub fn random_decimal<R: Rng>(rng: &mut R, min: f64, max: f64, precision: u32) -> f64 {
    let value = rng.gen::<f64>() * (max - min) + min;
    round_to(value, precision)
}

/// Round `value` to `precision` decimal digits.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Format a decimal the way the answers are displayed: fixed precision,
/// then trailing zeros (and a bare trailing dot) stripped, so `4.50`
/// renders as `4.5` and `4.00` as `4`.
pub fn format_decimal(value: f64, precision: u32) -> String {
    let s = format!("{:.*}", precision as usize, value);
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    // "-0" after trimming means the value rounded to zero.
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}

// ---------------------------------------------------------------------------
// Fractions
// ---------------------------------------------------------------------------

/// A fraction `numerator/denominator` with integer parts.
///
/// Construction does not reduce; call [`Fraction::reduced`] before display
/// when lowest terms are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    /// Sum via cross-multiplication: `n1*d2 + n2*d1` over `d1*d2`.
    /// The result is not reduced.
    pub fn add(self, other: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * other.denominator + other.numerator * self.denominator,
            denominator: self.denominator * other.denominator,
        }
    }

    /// Lowest-terms form, dividing both parts by their GCD.
    pub fn reduced(self) -> Fraction {
        let divisor = gcd(self.numerator, self.denominator);
        Fraction {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Greatest common divisor (Euclid). `gcd(n, 0) == n`.
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

/// Random fraction: numerator uniformly in `[1, max_numerator]`, denominator
/// uniformly in `[2, max_denominator]` (a denominator of 1 would make the
/// fraction a trivial whole number).
pub fn random_fraction<R: Rng>(rng: &mut R, max_numerator: i64, max_denominator: i64) -> Fraction {
    Fraction {
        numerator: random_int(rng, 1, max_numerator),
        denominator: random_int(rng, 2, max_denominator),
    }
}
