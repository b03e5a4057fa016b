//! Crate-level tests for `worksheet_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical worksheet; different seeds → varied output |
//! | Arithmetic | Sum bound, non-negative subtraction, make-ten / take-ten splits over many seeds |
//! | Algebra | Exact totals, distinct items, pool containment, set grouping |
//! | Poems | No repeats, tier filter, answer flag |
//! | Dispatch | Sheet id prefixes, body matches the requested subject |
//! | Adapter | JSON payload shape per subject |

use std::collections::HashSet;

use crate::{
    config::parse_request, generate_worksheet, to_sheet_json, AlgebraConfig, ArithmeticConfig,
    ArithmeticMode, Difficulty, EnglishConfig, Exercise, HanziConfig, Language, Operation,
    Operator, PoemConfig, Subject, WorksheetBody, WorksheetRequest,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn arithmetic(operation: Operation, max: u32, count: usize, mode: ArithmeticMode) -> Exercise {
    Exercise::Arithmetic(ArithmeticConfig { operation, max, count, mode })
}

fn req(exercise: Exercise, seed: u64) -> WorksheetRequest {
    WorksheetRequest { exercise, rng_seed: Some(seed) }
}

/// One request per subject, in canonical order.
fn all_exercises() -> [Exercise; 5] {
    [
        arithmetic(Operation::Mix, 20, 20, ArithmeticMode::Normal),
        Exercise::Algebra(AlgebraConfig::default()),
        Exercise::Poem(PoemConfig::default()),
        Exercise::Hanzi(HanziConfig::default()),
        Exercise::English(EnglishConfig::default()),
    ]
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_worksheet() {
    for exercise in all_exercises() {
        let a = generate_worksheet(req(exercise.clone(), 12345));
        let b = generate_worksheet(req(exercise.clone(), 12345));
        assert_eq!(a.sheet_id, b.sheet_id, "sheet_id mismatch for {:?}", a.subject);
        assert_eq!(
            serde_json::to_value(&a).expect("serializable"),
            serde_json::to_value(&b).expect("serializable"),
            "body mismatch for {:?}",
            a.subject
        );
    }
}

#[test]
fn different_seeds_produce_varied_sheets() {
    let mut same_count = 0usize;
    let pairs = 20u64;
    for seed in 0..pairs {
        let ex = arithmetic(Operation::Add, 20, 10, ArithmeticMode::Normal);
        let a = generate_worksheet(req(ex.clone(), seed));
        let b = generate_worksheet(req(ex, seed + 500));
        if serde_json::to_value(&a.body).ok() == serde_json::to_value(&b.body).ok() {
            same_count += 1;
        }
    }
    assert_eq!(same_count, 0, "identical sheets across different seeds ({same_count}/{pairs})");
}

#[test]
fn entropy_seed_produces_a_valid_worksheet() {
    let sheet = generate_worksheet(WorksheetRequest::new(Exercise::Poem(PoemConfig::default())));
    assert!(sheet.sheet_id.starts_with("PO-"));
    assert_eq!(sheet.body.len(), 3);
}

// ── dispatch ─────────────────────────────────────────────────────────────────

#[test]
fn every_sheet_id_starts_with_subject_prefix() {
    let expected = ["MA-", "AL-", "PO-", "HZ-", "EN-"];
    for (exercise, prefix) in all_exercises().into_iter().zip(expected) {
        let subject = exercise.subject();
        let sheet = generate_worksheet(req(exercise, 1));
        assert_eq!(sheet.subject, subject);
        assert!(
            sheet.sheet_id.starts_with(prefix),
            "ID '{}' for {subject:?} does not start with '{prefix}'",
            sheet.sheet_id
        );
    }
}

#[test]
fn body_matches_requested_subject() {
    for exercise in all_exercises() {
        let sheet = generate_worksheet(req(exercise, 3));
        let ok = matches!(
            (sheet.subject, &sheet.body),
            (Subject::Arithmetic, WorksheetBody::Arithmetic { .. })
                | (Subject::Algebra, WorksheetBody::Algebra { .. })
                | (Subject::Poem, WorksheetBody::Poem { .. })
                | (Subject::Hanzi, WorksheetBody::Hanzi(_))
                | (Subject::English, WorksheetBody::English(_))
        );
        assert!(ok, "{:?} produced the wrong body", sheet.subject);
        assert!(!sheet.body.is_empty());
    }
}

// ── arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn scenario_twenty_addition_questions_five() {
    let sheet = generate_worksheet(req(arithmetic(Operation::Add, 20, 5, ArithmeticMode::Normal), 5));
    let WorksheetBody::Arithmetic { questions, .. } = sheet.body else {
        panic!("expected an arithmetic body");
    };
    assert_eq!(questions.len(), 5);
    for q in &questions {
        assert_eq!(q.operator, Operator::Plus);
        assert!(q.num1 + q.num2 <= 20);
    }
}

#[test]
fn make_ten_holds_across_seeds() {
    for seed in SEEDS {
        let sheet = generate_worksheet(req(arithmetic(Operation::Add, 20, 1, ArithmeticMode::MakeTen), seed));
        let WorksheetBody::Arithmetic { questions, .. } = sheet.body else {
            panic!("expected an arithmetic body");
        };
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        let d = q.decomposition.expect("decomposition present");
        assert_eq!(q.num1 + d.part1, 10, "seed={seed}");
        assert_eq!(d.part1 + d.part2, q.num2, "seed={seed}");
        assert_eq!(q.answer, i64::from(q.num1 + q.num2));
        assert!(q.answer > 10);
    }
}

#[test]
fn special_modes_ignore_operation_and_max() {
    let sheet = generate_worksheet(req(arithmetic(Operation::Mul, 3, 30, ArithmeticMode::TakeTen), 9));
    let WorksheetBody::Arithmetic { questions, .. } = sheet.body else {
        panic!("expected an arithmetic body");
    };
    assert_eq!(questions.len(), 30);
    assert!(questions.iter().all(|q| q.operator == Operator::Minus && q.num1 >= 11));
}

// ── algebra ──────────────────────────────────────────────────────────────────

#[test]
fn scenario_two_item_algebra_in_two_sets() {
    let config = AlgebraConfig { difficulty: Difficulty::Intermediate, count: 10, language: Language::Zh };
    let sheet = generate_worksheet(req(Exercise::Algebra(config), 77));
    let WorksheetBody::Algebra { sheet, .. } = sheet.body else {
        panic!("expected an algebra body");
    };
    assert_eq!(sheet.questions.len(), 10);
    assert_eq!(sheet.item_pools.len(), 2);
    for q in &sheet.questions {
        assert_eq!(q.items.len(), 2);
        let ids: HashSet<_> = q.items.iter().map(|iq| iq.item.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(q.items.iter().all(|iq| sheet.item_pools[q.pool_index].contains(&iq.item)));
        assert_eq!(q.total, q.items.iter().map(|iq| iq.item.price * iq.quantity).sum::<u32>());
    }
}

#[test]
fn language_does_not_change_algebra_content() {
    let zh = AlgebraConfig { language: Language::Zh, ..Default::default() };
    let en = AlgebraConfig { language: Language::En, ..Default::default() };
    let a = generate_worksheet(req(Exercise::Algebra(zh), 31));
    let b = generate_worksheet(req(Exercise::Algebra(en), 31));
    match (a.body, b.body) {
        (WorksheetBody::Algebra { sheet: x, .. }, WorksheetBody::Algebra { sheet: y, .. }) => {
            assert_eq!(x.questions, y.questions);
            assert_eq!(x.item_pools, y.item_pools);
        }
        _ => panic!("expected algebra bodies"),
    }
}

// ── poems ────────────────────────────────────────────────────────────────────

#[test]
fn scenario_three_basic_poems_without_answers() {
    for seed in SEEDS {
        let config = PoemConfig { difficulty: Difficulty::Basic, count: 3, show_answers: false, show_pinyin: false };
        let sheet = generate_worksheet(req(Exercise::Poem(config), seed));
        let WorksheetBody::Poem { exercises, .. } = sheet.body else {
            panic!("expected a poem body");
        };
        assert_eq!(exercises.len(), 3);
        let ids: HashSet<_> = exercises.iter().map(|e| e.poem.id).collect();
        assert_eq!(ids.len(), 3, "duplicate poem for seed={seed}");
        assert!(exercises.iter().all(|e| e.poem.difficulty == Difficulty::Basic && !e.show_answers));
    }
}

// ── adapter ──────────────────────────────────────────────────────────────────

#[test]
fn adapter_renders_make_ten_splits_under_the_second_operand() {
    let sheet = generate_worksheet(req(arithmetic(Operation::Add, 20, 4, ArithmeticMode::MakeTen), 2));
    let doc = to_sheet_json(&sheet);
    assert_eq!(doc["title"], "Math Worksheet");
    assert_eq!(doc["content"]["subtitle"], "Make a Ten");
    assert_eq!(doc["content"]["level"], "make ten level 20");
    let entries = doc["content"]["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 4);
    for e in entries {
        assert_eq!(e["split"]["under"], "num2");
        assert!(e["prompt"].as_str().is_some_and(|p| p.ends_with('=')));
    }
}

#[test]
fn adapter_groups_algebra_by_price_list() {
    let config = AlgebraConfig { difficulty: Difficulty::Basic, count: 7, language: Language::En };
    let doc = to_sheet_json(&generate_worksheet(req(Exercise::Algebra(config), 4)));
    assert_eq!(doc["language"], "en");
    let sets = doc["content"]["sets"].as_array().expect("sets array");
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0]["entries"].as_array().map(Vec::len), Some(5));
    assert_eq!(sets[1]["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(sets[1]["entries"][0]["number"], 6);
    assert_eq!(sets[0]["price_list_label"], "💰 Price List:");
    for row in sets[0]["price_list"].as_array().expect("price list") {
        assert!(row["price"].as_str().is_some_and(|p| p.starts_with('$')));
    }
}

#[test]
fn adapter_adds_answer_key_only_when_answers_shown() {
    let hidden = PoemConfig { difficulty: Difficulty::Intermediate, count: 2, show_answers: false, show_pinyin: true };
    let doc = to_sheet_json(&generate_worksheet(req(Exercise::Poem(hidden.clone()), 8)));
    assert!(doc["content"]["answer_key"].is_null());
    let first = &doc["content"]["entries"][0];
    assert!(first["lines"][0].as_str().is_some_and(|l| l.contains('＿')));
    assert_eq!(first["pinyin"].as_array().map(Vec::len), first["lines"].as_array().map(Vec::len));

    let shown = PoemConfig { show_answers: true, ..hidden };
    let doc = to_sheet_json(&generate_worksheet(req(Exercise::Poem(shown), 8)));
    let key = doc["content"]["answer_key"].as_array().expect("answer key");
    assert_eq!(key.len(), 2);
    assert!(key[0]["heading"].as_str().is_some_and(|h| h.starts_with("1. ")));
}

#[test]
fn adapter_pads_short_english_sheets() {
    let doc = to_sheet_json(&generate_worksheet(req(Exercise::English(EnglishConfig::default()), 1)));
    let pages = doc["content"]["pages"].as_array().expect("pages");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["rows"].as_array().map(Vec::len), Some(5));
    assert_eq!(pages[0]["blank_rows"], 3);
    assert_eq!(pages[0]["rows"][4]["word"], "Elephant");
}

#[test]
fn adapter_lays_hanzi_out_in_rows_of_eight() {
    let config = HanziConfig { text: "床前明月光疑是地上霜".into(), show_pinyin: false, ..Default::default() };
    let doc = to_sheet_json(&generate_worksheet(req(Exercise::Hanzi(config), 1)));
    let rows = doc["content"]["pages"][0]["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].as_array().map(Vec::len), Some(8));
    assert!(rows[0][0]["pinyin"].is_null(), "pinyin hidden when show_pinyin is off");
    assert_eq!(doc["content"]["grid"], "tian");
}

// ── presets ──────────────────────────────────────────────────────────────────

#[test]
fn toml_preset_round_trips_through_the_dispatcher() {
    let request = parse_request(
        "rng_seed = 7\n[exercise]\nsubject = \"poem\"\ndifficulty = 3\ncount = 2\nshow_answers = true\n",
    )
    .expect("valid preset");
    let sheet = generate_worksheet(request);
    let WorksheetBody::Poem { difficulty, exercises, .. } = sheet.body else {
        panic!("expected a poem body");
    };
    assert_eq!(difficulty, Difficulty::Advanced);
    assert_eq!(exercises.len(), 2);
    assert!(exercises.iter().all(|e| e.show_answers));
}
