//! Full demo of the practice engine.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows how `math_drill_gen` works end to end:
//!
//! 1. **Minimal API** — `ProblemSetRequest::new(age_group)` with defaults.
//! 2. **One problem per topic** — every topic at the 10-12 group with fixed
//!    seeds, so the output is deterministic and reproducible.
//! 3. **Language comparison** — the same seed rendered in all five
//!    languages; the wording changes while operands, options, and the
//!    correct answer stay identical.
//! 4. **Allow-list fallback** — requesting polynomials at the 4-6 group
//!    silently degrades to addition.
//! 5. **Storage** — saving and reloading a practice round.

use math_drill_gen::{
    available_tasks, build_problem_set, AgeGroup, HistoryEntry, Language, Problem,
    ProblemSetRequest, Storage, TaskType,
};

fn print_problem(p: &Problem) {
    println!("  Q: {}  [{} points]", p.question, p.points);
    for option in &p.options {
        let marker = if *option == p.correct_answer { "✓" } else { " " };
        println!("     [{marker}] {option}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Minimal API ────────────────────────────────────────────────────────
    println!();
    println!("══ Minimal API: ProblemSetRequest::new() ══");
    println!();
    let problems = build_problem_set(&ProblemSetRequest::new(AgeGroup::FourToSix));
    println!("  Generated {} problems, first one:", problems.len());
    print_problem(&problems[0]);

    // ── One problem per topic ────────────────────────────────────────────────
    println!("══ All 14 topics at age 10-12 (seeded) ══");
    println!();
    for (i, &topic) in available_tasks(AgeGroup::TenToTwelve).iter().enumerate() {
        let problems = build_problem_set(&ProblemSetRequest {
            age_group: AgeGroup::TenToTwelve,
            selected_tasks: vec![topic],
            language: Language::En,
            count: 1,
            rng_seed: Some(1000 + i as u64),
        });
        println!("━━ {topic} ━━");
        print_problem(&problems[0]);
    }

    // ── Language comparison ──────────────────────────────────────────────────
    println!("══ Same equation in five languages (seed=42) ══");
    println!();
    for lang in Language::ALL {
        let problems = build_problem_set(&ProblemSetRequest {
            age_group: AgeGroup::TenToTwelve,
            selected_tasks: vec![TaskType::Equations],
            language: lang,
            count: 1,
            rng_seed: Some(42),
        });
        println!("  [{lang}] {}", problems[0].question);
    }
    println!();

    // ── Allow-list fallback ──────────────────────────────────────────────────
    println!("══ Fallback: polynomials requested at age 4-6 ══");
    println!();
    let problems = build_problem_set(&ProblemSetRequest {
        age_group: AgeGroup::FourToSix,
        selected_tasks: vec![TaskType::Polynomials],
        language: Language::En,
        count: 1,
        rng_seed: Some(7),
    });
    print_problem(&problems[0]);

    // ── Storage round-trip ───────────────────────────────────────────────────
    println!("══ Storage: record a round and reload ══");
    println!();
    let path = std::env::temp_dir().join("math_drill_gen_demo.json");
    let storage = Storage::new(&path);
    let mut data = storage.load();
    data.record_round(HistoryEntry {
        date: "2026-08-06".to_string(),
        age_group: AgeGroup::FourToSix,
        task_types: vec![TaskType::Addition],
        score: 80,
        correct_answers: 8,
        total_problems: 10,
    });
    if storage.save(&data).is_ok() {
        let reloaded = storage.load();
        println!(
            "  {} rounds on record, total score {}, average accuracy {:.0}%",
            reloaded.history.len(),
            reloaded.total_score(),
            reloaded.average_accuracy()
        );
    }
}
