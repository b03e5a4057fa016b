//! Core worksheet engine: exercise generation, static catalogs and display labels.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: configs, question/exercise records, request/response structs |
//! | `error`     | `WorksheetError` for config parsing and catalog checks |
//! | `catalog`   | Shop items and classical poems, compiled in |
//! | `bag`       | Fisher-Yates shuffled bag for sampling without replacement |
//! | `helpers`   | Record ids, bounded draws, language picks |
//! | `labels`    | Language-keyed strings for difficulty, prices and titles |
//! | `generator` | Single entry point `generate_worksheet()`, dispatches to topics |
//! | `topics`    | One generator per subject |

pub mod bag;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod labels;
pub mod models;
pub mod topics;

// Re-export the public API surface so callers can use
// `worksheet_engine::generate_worksheet` without reaching into sub-modules.
pub use error::{Result, WorksheetError};
pub use generator::generate_worksheet;
pub use models::{
    AlgebraConfig, AlgebraQuestion, AlgebraWorksheet, ArithmeticConfig, ArithmeticMode,
    ArithmeticQuestion, CaseStyle, Decomposition, Difficulty, EnglishConfig, EnglishSheet,
    Exercise, GridType, HanziCell, HanziConfig, HanziSheet, Item, ItemCategory, ItemQuantity,
    Language, Operation, Operator, Poem, PoemConfig, PoemExercise, PoemLine, Subject, Worksheet,
    WorksheetBody, WorksheetRequest,
};
