//! Tour of every worksheet subject.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Preset**: if `WORKSHEET_CONFIG_PATH` names a TOML preset, that sheet is
//!    generated and printed as render-ready JSON first.
//! 2. **All subjects**: one sheet per subject with fixed seeds, so the output
//!    is deterministic and reproducible.
//!
//! Set `LOG_LEVEL=debug` to see the generator events.

use worksheet_drill_gen::{
    config::load_request_from_env, generate_worksheet, telemetry::init_tracing, to_sheet_json,
    AlgebraConfig, ArithmeticConfig, ArithmeticMode, Difficulty, EnglishConfig, Exercise,
    HanziConfig, Language, Operation, PoemConfig, Worksheet, WorksheetBody, WorksheetRequest,
};

/// Pretty-print one sheet in plain text.
fn print_sheet(sheet: &Worksheet) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}  Entries: {}", sheet.subject, sheet.sheet_id, sheet.body.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match &sheet.body {
        WorksheetBody::Arithmetic { questions, .. } => {
            for (n, q) in questions.iter().enumerate() {
                match q.decomposition {
                    Some(d) => println!("  {:>2}. {q} {:<3}  split {} | {}", n + 1, q.answer, d.part1, d.part2),
                    None    => println!("  {:>2}. {q} {}", n + 1, q.answer),
                }
            }
        }
        WorksheetBody::Algebra { language, sheet, .. } => {
            for (p, pool) in sheet.item_pools.iter().enumerate() {
                let prices: Vec<String> = pool
                    .iter()
                    .map(|i| format!("{} {} {}", i.emoji, i.display_name(*language), i.price))
                    .collect();
                println!("  Price list {}: {}", p + 1, prices.join(" · "));
                for q in sheet.questions.iter().filter(|q| q.pool_index == p) {
                    println!("      {} = {}", q.expression, q.total);
                }
            }
        }
        WorksheetBody::Poem { exercises, .. } => {
            for e in exercises {
                println!("  {} 【{}】{}", e.poem.title, e.poem.dynasty, e.poem.author);
                for line in e.masked_lines() {
                    println!("      {line}");
                }
            }
        }
        WorksheetBody::Hanzi(h) => {
            for row in h.rows() {
                let cells: Vec<String> = row
                    .iter()
                    .map(|c| format!("{}({})", c.character, c.pinyin.as_deref().unwrap_or("-")))
                    .collect();
                println!("  {}", cells.join(" "));
            }
        }
        WorksheetBody::English(e) => {
            for (n, w) in e.words.iter().enumerate() {
                println!("  {:>2}. {w}", n + 1);
            }
            println!("      (+{} blank rows)", e.blank_rows());
        }
    }
    println!();
}

fn main() {
    init_tracing();

    // ── Preset from the environment ──────────────────────────────────────────
    match load_request_from_env() {
        Ok(Some(request)) => {
            let sheet = generate_worksheet(request);
            println!("══ Preset ══");
            match serde_json::to_string_pretty(&to_sheet_json(&sheet)) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("cannot encode sheet: {e}"),
            }
        }
        Ok(None) => {}
        Err(e) => eprintln!("preset ignored: {e}"),
    }

    // ── All subjects ─────────────────────────────────────────────────────────
    println!();
    println!("══ All subjects ══");
    println!();

    let requests = [
        (Exercise::Arithmetic(ArithmeticConfig { operation: Operation::Mix, count: 8, ..Default::default() }), 1001u64),
        (Exercise::Arithmetic(ArithmeticConfig { mode: ArithmeticMode::MakeTen, count: 5, ..Default::default() }), 1002),
        (Exercise::Arithmetic(ArithmeticConfig { mode: ArithmeticMode::TakeTen, count: 5, ..Default::default() }), 1003),
        (Exercise::Algebra(AlgebraConfig { difficulty: Difficulty::Advanced, count: 7, language: Language::En }), 2002),
        (Exercise::Poem(PoemConfig { difficulty: Difficulty::Intermediate, count: 2, ..Default::default() }), 3003),
        (Exercise::Hanzi(HanziConfig::default()), 4004),
        (Exercise::English(EnglishConfig::default()), 5005),
    ];

    for (exercise, seed) in requests {
        print_sheet(&generate_worksheet(WorksheetRequest::new(exercise).with_seed(seed)));
    }
}
