//! # worksheet_drill_gen
//!
//! A fully offline, deterministic generator for printable practice worksheets.
//!
//! The engine builds the *content* of a sheet and leaves drawing to the caller:
//!
//! - **Arithmetic**: addition, subtraction, the 9×9 table, and the make-ten /
//!   take-ten strategies with the split drawn under the operand.
//! - **Shop algebra**: word problems over a price list of game items
//!   ("4 apples and 2 cakes cost how much?").
//! - **Classical poems**: fill-in-the-blank from a tiered poem bank.
//! - **Tracing sheets**: Chinese characters with pinyin, English words.
//!
//! ## How it works
//!
//! 1. Create a [`WorksheetRequest`] with an [`Exercise`] (subject + config)
//!    and an optional RNG seed.
//! 2. Call [`generate_worksheet`]. The engine seeds a `StdRng`, dispatches to
//!    the subject's generator and wraps the records in a [`Worksheet`].
//! 3. Hand the [`Worksheet`] to a renderer, or flatten it with
//!    [`to_sheet_json`] first.
//!
//! Generators never fail. A slot whose constraint cannot be met within the
//! retry budget is skipped, and a tier without poems gives an empty sheet.
//!
//! ## Quick start
//!
//! ```rust
//! use worksheet_drill_gen::{
//!     generate_worksheet, ArithmeticConfig, ArithmeticMode, Exercise, WorksheetBody,
//!     WorksheetRequest,
//! };
//!
//! let request = WorksheetRequest::new(Exercise::Arithmetic(ArithmeticConfig {
//!     mode: ArithmeticMode::MakeTen,
//!     count: 10,
//!     ..Default::default()
//! }))
//! .with_seed(42);
//!
//! let sheet = generate_worksheet(request);
//! if let WorksheetBody::Arithmetic { questions, .. } = &sheet.body {
//!     for q in questions {
//!         let d = q.decomposition.expect("make-ten questions carry a split");
//!         println!("{q} {}   ({} + {})", q.answer, d.part1, d.part2);
//!     }
//! }
//! ```
//!
//! The per-subject generators can also be called directly with any
//! [`rand::Rng`], e.g. `topics::algebra::generate(&mut rng, &config, ITEMS)`.

pub mod config;
pub mod sheet_adapter;
pub mod telemetry;
pub mod worksheet_engine;

// Convenience re-exports so callers can use `worksheet_drill_gen::generate_worksheet`
// directly without reaching into `worksheet_engine::`.
pub use sheet_adapter::to_sheet_json;
pub use worksheet_engine::{
    catalog::{ITEMS, POEMS},
    generate_worksheet, topics, AlgebraConfig, AlgebraQuestion, AlgebraWorksheet,
    ArithmeticConfig, ArithmeticMode, ArithmeticQuestion, CaseStyle, Decomposition, Difficulty,
    EnglishConfig, EnglishSheet, Exercise, GridType, HanziCell, HanziConfig, HanziSheet, Item,
    ItemCategory, ItemQuantity, Language, Operation, Operator, Poem, PoemConfig, PoemExercise,
    PoemLine, Subject, Worksheet, WorksheetBody, WorksheetError, WorksheetRequest,
};

#[cfg(test)]
mod tests;
