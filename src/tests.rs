//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical set; different seeds → varied output |
//! | Structural | Four options; correct answer present exactly once; options pairwise distinct; no unresolved placeholders |
//! | Builder | Exact count; allow-list filtering; fallback topic; custom counts |
//! | Allow-lists | Canonical 4-6 list; superset chain across age groups |
//! | Points | Config value attached; non-decreasing with age |
//! | Per-topic | Arithmetic recomputed from the rendered question for every topic |
//! | Languages | Same seed → same correct answer across languages; localized wording differs |
//! | Entropy | `rng_seed: None` produces a valid set (smoke test) |

use crate::practice_engine::{
    available_tasks, build_problem_set, generate_problem, AgeGroup, Problem, ProblemSetRequest,
    TaskType,
};
use crate::i18n::Language;
use crate::practice_engine::numeric::{gcd, round_to};

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Build a deterministic request for an explicit topic selection.
fn req(age: AgeGroup, tasks: &[TaskType], seed: u64) -> ProblemSetRequest {
    ProblemSetRequest {
        age_group: age,
        selected_tasks: tasks.to_vec(),
        language: Language::En,
        count: 10,
        rng_seed: Some(seed),
    }
}

/// Generate one problem of a single topic at the given age group.
fn single(topic: TaskType, age: AgeGroup, seed: u64) -> Problem {
    let mut problems = build_problem_set(&ProblemSetRequest {
        count: 1,
        ..req(age, &[topic], seed)
    });
    problems.pop().unwrap()
}

/// Integer tokens in display order, honoring a directly attached minus sign
/// (`"x - y = -3"` yields `-3`, not `3`).
fn extract_ints(text: &str) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut prev = ' ';
    for c in text.chars() {
        if c.is_ascii_digit() {
            if current.is_empty() && prev == '-' {
                current.push('-');
            }
            current.push(c);
        } else {
            if !current.is_empty() {
                values.push(current.parse().unwrap());
                current.clear();
            }
            prev = c;
        }
    }
    if !current.is_empty() {
        values.push(current.parse().unwrap());
    }
    values
}

/// Decimal tokens in display order (`"3.5 + 2.25"` yields `[3.5, 2.25]`).
fn extract_decimals(text: &str) -> Vec<f64> {
    let mut values = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || (c == '.' && !current.is_empty()) {
            current.push(c);
        } else if !current.is_empty() {
            values.push(current.trim_end_matches('.').parse().unwrap());
            current.clear();
        }
    }
    if !current.is_empty() {
        values.push(current.trim_end_matches('.').parse().unwrap());
    }
    values
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_set() {
    for age in AgeGroup::ALL {
        for &topic in available_tasks(age) {
            let a = build_problem_set(&req(age, &[topic], 12345));
            let b = build_problem_set(&req(age, &[topic], 12345));
            assert_eq!(a, b, "set mismatch for {topic:?} at {age}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    // Not a hard guarantee (operand collisions are possible) but holds for
    // a wide seed range in practice.
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = single(TaskType::Addition, AgeGroup::TenToTwelve, seed);
        let b = single(TaskType::Addition, AgeGroup::TenToTwelve, seed + 500);
        if a.question == b.question {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical questions across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_set() {
    // Smoke test: rng_seed: None must not panic and must satisfy invariants.
    let problems = build_problem_set(&ProblemSetRequest::new(AgeGroup::SevenToNine));
    assert_eq!(problems.len(), 10);
    for p in &problems {
        assert_eq!(p.options.len(), 4);
        assert!(p.options.contains(&p.correct_answer));
    }
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_problem_has_four_options_with_correct_exactly_once() {
    for age in AgeGroup::ALL {
        for &topic in available_tasks(age) {
            for seed in SEEDS {
                for p in build_problem_set(&req(age, &[topic], seed)) {
                    assert_eq!(p.options.len(), 4, "{topic:?} at {age} seed={seed}");
                    let hits = p
                        .options
                        .iter()
                        .filter(|o| **o == p.correct_answer)
                        .count();
                    assert_eq!(
                        hits, 1,
                        "correct answer must appear exactly once for {topic:?} at {age} \
                         seed={seed} (options={:?}, correct={})",
                        p.options, p.correct_answer
                    );
                }
            }
        }
    }
}

#[test]
fn options_are_pairwise_distinct() {
    for age in AgeGroup::ALL {
        for &topic in available_tasks(age) {
            for seed in SEEDS {
                for p in build_problem_set(&req(age, &[topic], seed)) {
                    for i in 0..p.options.len() {
                        for j in (i + 1)..p.options.len() {
                            assert_ne!(
                                p.options[i], p.options[j],
                                "duplicate option for {topic:?} at {age} seed={seed}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn questions_have_no_unresolved_placeholders() {
    for lang in Language::ALL {
        for &topic in available_tasks(AgeGroup::TenToTwelve) {
            for seed in SEEDS {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = generate_problem(&mut rng, topic, AgeGroup::TenToTwelve, lang);
                assert!(
                    !p.question.contains("${"),
                    "unresolved placeholder in {topic:?}/{lang}: {}",
                    p.question
                );
                assert!(!p.question.is_empty());
            }
        }
    }
}

// ── builder ──────────────────────────────────────────────────────────────────

#[test]
fn builder_always_returns_exactly_ten_problems() {
    // Valid, empty, and entirely out-of-range selections all yield 10.
    let selections: [&[TaskType]; 3] = [
        &[TaskType::Addition],
        &[],
        &[TaskType::Polynomials, TaskType::Systems],
    ];
    for tasks in selections {
        let problems = build_problem_set(&req(AgeGroup::FourToSix, tasks, 3));
        assert_eq!(problems.len(), 10, "selection {tasks:?}");
    }
}

#[test]
fn builder_falls_back_to_first_allowed_topic() {
    // Polynomials are not available at 4-6, so the set degrades to
    // addition — every question shows a sum.
    let problems = build_problem_set(&req(AgeGroup::FourToSix, &[TaskType::Polynomials], 11));
    for p in &problems {
        assert!(p.question.contains('+'), "expected addition, got: {}", p.question);
    }
}

#[test]
fn builder_filters_unsupported_topics_from_a_mixed_selection() {
    // At 7-9, polynomials are filtered out and multiplication remains.
    let problems = build_problem_set(&req(
        AgeGroup::SevenToNine,
        &[TaskType::Polynomials, TaskType::Multiplication],
        13,
    ));
    for p in &problems {
        assert!(
            p.question.contains('×'),
            "expected multiplication only, got: {}",
            p.question
        );
    }
}

#[test]
fn builder_respects_custom_counts() {
    for count in [1usize, 3, 25] {
        let problems = build_problem_set(&ProblemSetRequest {
            count,
            ..req(AgeGroup::SevenToNine, &[TaskType::Division], 21)
        });
        assert_eq!(problems.len(), count);
    }
}

// ── allow-lists ──────────────────────────────────────────────────────────────

#[test]
fn youngest_allow_list_is_addition_and_subtraction() {
    assert_eq!(
        available_tasks(AgeGroup::FourToSix),
        &[TaskType::Addition, TaskType::Subtraction]
    );
}

#[test]
fn allow_lists_form_a_superset_chain() {
    let young = available_tasks(AgeGroup::FourToSix);
    let middle = available_tasks(AgeGroup::SevenToNine);
    let old = available_tasks(AgeGroup::TenToTwelve);
    assert!(young.iter().all(|t| middle.contains(t)));
    assert!(middle.iter().all(|t| old.contains(t)));
}

// ── points ───────────────────────────────────────────────────────────────────

#[test]
fn points_are_positive_and_non_decreasing_with_age() {
    for topic in TaskType::ALL {
        let mut previous = 0u32;
        for age in AgeGroup::ALL {
            let mut rng = StdRng::seed_from_u64(1);
            let p = generate_problem(&mut rng, topic, age, Language::En);
            assert!(p.points > 0);
            assert!(
                p.points >= previous,
                "points for {topic:?} dropped from {previous} at {age}"
            );
            previous = p.points;
        }
    }
}

// ── per-topic arithmetic, recomputed from the rendered question ──────────────

#[test]
fn addition_answer_is_the_sum_of_the_rendered_operands() {
    for seed in SEEDS {
        for p in build_problem_set(&req(AgeGroup::FourToSix, &[TaskType::Addition], seed)) {
            assert!(p.question.contains('+'));
            let nums = extract_ints(&p.question);
            assert_eq!(nums.len(), 2, "question: {}", p.question);
            let answer: i64 = p.correct_answer.parse().unwrap();
            assert_eq!(answer, nums[0] + nums[1], "question: {}", p.question);
        }
    }
}

#[test]
fn subtraction_answer_is_never_negative() {
    for seed in SEEDS {
        for p in build_problem_set(&req(AgeGroup::SevenToNine, &[TaskType::Subtraction], seed)) {
            let nums = extract_ints(&p.question);
            let answer: i64 = p.correct_answer.parse().unwrap();
            assert_eq!(answer, nums[0] - nums[1], "question: {}", p.question);
            assert!(answer >= 0, "negative result in: {}", p.question);
        }
    }
}

#[test]
fn multiplication_answer_is_the_product() {
    for seed in SEEDS {
        let p = single(TaskType::Multiplication, AgeGroup::TenToTwelve, seed);
        let nums = extract_ints(&p.question);
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, nums[0] * nums[1], "question: {}", p.question);
    }
}

#[test]
fn division_always_divides_evenly() {
    for seed in SEEDS {
        let p = single(TaskType::Division, AgeGroup::TenToTwelve, seed);
        let nums = extract_ints(&p.question);
        let (dividend, divisor) = (nums[0], nums[1]);
        assert_eq!(dividend % divisor, 0, "question: {}", p.question);
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, dividend / divisor);
    }
}

#[test]
fn fraction_answers_are_fully_reduced() {
    for seed in 0..50u64 {
        let p = single(TaskType::Fractions, AgeGroup::TenToTwelve, seed);
        let (num, den) = p
            .correct_answer
            .split_once('/')
            .expect("fraction answer must be n/d");
        let num: i64 = num.parse().unwrap();
        let den: i64 = den.parse().unwrap();
        assert!(den >= 1);
        assert_eq!(
            gcd(num, den),
            1,
            "answer {} is not in lowest terms (question: {})",
            p.correct_answer,
            p.question
        );
    }
}

#[test]
fn fraction_answer_matches_the_rendered_operands() {
    for seed in SEEDS {
        let p = single(TaskType::Fractions, AgeGroup::SevenToNine, seed);
        let nums = extract_ints(&p.question);
        let (n1, d1, n2, d2) = (nums[0], nums[1], nums[2], nums[3]);
        let raw_num = n1 * d2 + n2 * d1;
        let raw_den = d1 * d2;
        let divisor = gcd(raw_num, raw_den);
        let expected = format!("{}/{}", raw_num / divisor, raw_den / divisor);
        assert_eq!(p.correct_answer, expected, "question: {}", p.question);
    }
}

#[test]
fn decimal_answer_is_the_rounded_sum_of_the_rendered_operands() {
    for seed in SEEDS {
        let p = single(TaskType::Decimals, AgeGroup::TenToTwelve, seed);
        let nums = extract_decimals(&p.question);
        assert_eq!(nums.len(), 2, "question: {}", p.question);
        let answer: f64 = p.correct_answer.parse().unwrap();
        let expected = round_to(nums[0] + nums[1], 2);
        assert!(
            (answer - expected).abs() < 1e-9,
            "expected {expected}, got {answer} (question: {})",
            p.question
        );
    }
}

#[test]
fn percentage_answer_is_the_rounded_share() {
    for seed in SEEDS {
        let p = single(TaskType::Percentages, AgeGroup::TenToTwelve, seed);
        let nums = extract_ints(&p.question);
        let (percentage, number) = (nums[0], nums[1]);
        let expected = ((number * percentage) as f64 / 100.0).round() as i64;
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, expected, "question: {}", p.question);
    }
}

#[test]
fn proportion_scales_the_second_term() {
    for seed in SEEDS {
        let p = single(TaskType::Proportions, AgeGroup::TenToTwelve, seed);
        assert!(p.question.contains(':'));
        let nums = extract_ints(&p.question);
        let (a, b, c) = (nums[0], nums[1], nums[2]);
        assert_eq!(c % a, 0, "scaled first term in: {}", p.question);
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, b * (c / a), "question: {}", p.question);
    }
}

#[test]
fn ratio_answer_is_the_rounded_first_part() {
    for seed in SEEDS {
        let p = single(TaskType::Ratios, AgeGroup::TenToTwelve, seed);
        assert!(p.question.contains("total"));
        assert!(p.question.contains(':'));
        let nums = extract_ints(&p.question);
        let (total, ratio1, ratio2) = (nums[0], nums[1], nums[2]);
        let expected =
            (ratio1 as f64 / (ratio1 + ratio2) as f64 * total as f64).round() as i64;
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, expected, "question: {}", p.question);
    }
}

#[test]
fn expression_answer_honors_precedence() {
    for seed in SEEDS {
        let p = single(TaskType::Expressions, AgeGroup::TenToTwelve, seed);
        let nums = extract_ints(&p.question);
        let (a, b, c) = (nums[0], nums[1], nums[2]);
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, a * b + c, "question: {}", p.question);
    }
}

#[test]
fn equation_answer_satisfies_the_equation() {
    for seed in 0..50u64 {
        let p = single(TaskType::Equations, AgeGroup::TenToTwelve, seed);
        let nums = extract_ints(&p.question);
        let (a, b, rhs) = (nums[0], nums[1], nums[2]);
        let x: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(a * x + b, rhs, "substituting x={x} into: {}", p.question);
    }
}

#[test]
fn inequality_answer_is_the_smallest_solution() {
    for seed in 0..50u64 {
        let p = single(TaskType::Inequalities, AgeGroup::TenToTwelve, seed);
        assert!(p.question.contains(">="));
        let nums = extract_ints(&p.question);
        let (a, b, rhs) = (nums[0], nums[1], nums[2]);
        let x: i64 = p.correct_answer.parse().unwrap();
        assert!(a * x + b >= rhs, "x={x} does not satisfy: {}", p.question);
        assert!(
            a * (x - 1) + b < rhs,
            "x={} also satisfies, so x={x} is not minimal: {}",
            x - 1,
            p.question
        );
    }
}

#[test]
fn system_answer_is_the_constructed_pair() {
    for seed in SEEDS {
        let p = single(TaskType::Systems, AgeGroup::TenToTwelve, seed);
        assert!(p.question.contains("x + y"), "question: {}", p.question);
        assert!(p.question.contains("x - y"), "question: {}", p.question);
        assert!(p.correct_answer.starts_with("x="), "answer: {}", p.correct_answer);
        assert!(p.correct_answer.contains(", y="), "answer: {}", p.correct_answer);

        let sums = extract_ints(&p.question);
        let (a, b) = (sums[0], sums[1]);
        let pair = extract_ints(&p.correct_answer);
        let (x, y) = (pair[0], pair[1]);
        assert_eq!(x + y, a, "question: {}", p.question);
        assert_eq!(x - y, b, "question: {}", p.question);
    }
}

#[test]
fn polynomial_answer_is_the_evaluated_value() {
    for seed in 0..50u64 {
        let p = single(TaskType::Polynomials, AgeGroup::TenToTwelve, seed);
        assert!(p.question.contains("x²"), "question: {}", p.question);
        // The sign conditional never produces a doubled sign.
        assert!(!p.question.contains("+-"), "question: {}", p.question);
        assert!(!p.question.contains("--"), "question: {}", p.question);

        let nums = extract_ints(&p.question);
        let (a, b, c, x) = (nums[0], nums[1], nums[2], nums[3]);
        let answer: i64 = p.correct_answer.parse().unwrap();
        assert_eq!(answer, a * x * x + b * x + c, "question: {}", p.question);
    }
}

// ── languages ────────────────────────────────────────────────────────────────

#[test]
fn language_changes_wording_but_not_the_answer() {
    for topic in [TaskType::Addition, TaskType::Fractions, TaskType::Equations] {
        for lang in [Language::De, Language::Fr, Language::Es, Language::Ru] {
            let en = build_problem_set(&req(AgeGroup::TenToTwelve, &[topic], 42));
            let other = build_problem_set(&ProblemSetRequest {
                language: lang,
                ..req(AgeGroup::TenToTwelve, &[topic], 42)
            });
            for (a, b) in en.iter().zip(other.iter()) {
                assert_ne!(a.question, b.question, "{topic:?}/{lang} wording unchanged");
                assert_eq!(
                    a.correct_answer, b.correct_answer,
                    "{topic:?}/{lang} answer drifted with language"
                );
                assert_eq!(a.options, b.options, "{topic:?}/{lang} options drifted");
            }
        }
    }
}

#[test]
fn unsupported_locale_code_renders_english() {
    let p = build_problem_set(&ProblemSetRequest {
        language: Language::from_code("tlh-KLI"),
        ..req(AgeGroup::FourToSix, &[TaskType::Addition], 8)
    })
    .remove(0);
    assert!(p.question.starts_with("What is"), "question: {}", p.question);
}
