//! Small pieces shared by the generators.
//!
//! ## Identifiers
//!
//! Each generator call draws one batch tag from the RNG and numbers its
//! records from it (`"MA-1F3A09C2-07"`). Ids are therefore unique within a
//! call, reproducible for a fixed seed, and unlikely to collide across calls.

use rand::{Rng, RngCore};

use crate::worksheet_engine::models::Language;

/// Draw a batch tag for one generator call.
pub fn batch_tag<R: RngCore>(rng: &mut R) -> String {
    format!("{:08X}", rng.next_u32())
}

/// Id of the `index`-th record of a batch.
pub fn record_id(prefix: &str, batch: &str, index: usize) -> String {
    format!("{prefix}-{batch}-{index:02}")
}

/// Uniform draw from `[0, bound)`; an empty range yields 0.
pub fn below<R: Rng>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        0
    } else {
        rng.gen_range(0..bound)
    }
}

/// Pick the wording for `language`.
pub fn localized(language: Language, zh: &'static str, en: &'static str) -> &'static str {
    match language {
        Language::Zh => zh,
        Language::En => en,
    }
}
