//! Static content the generators sample from.
//!
//! Both tables are compiled into the binary and only ever borrowed. The
//! `validate_*` functions check the invariants the generators rely on; the
//! unit tests run them against the shipped tables.

pub mod items;
pub mod poems;

use std::collections::HashSet;

use crate::worksheet_engine::{
    error::{Result, WorksheetError},
    models::{Item, Poem},
};

pub use items::{find_item, ITEMS};
pub use poems::{poems_by_difficulty, POEMS};

/// Ids are unique and every price is positive.
pub fn validate_items(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id) {
            return Err(WorksheetError::CatalogIntegrity(format!("duplicate item id {}", item.id)));
        }
        if item.price == 0 {
            return Err(WorksheetError::CatalogIntegrity(format!("item {} has no price", item.id)));
        }
    }
    Ok(())
}

/// Ids are unique, every poem has lines, and every blank points inside its line.
pub fn validate_poems(poems: &[Poem]) -> Result<()> {
    let mut seen = HashSet::new();
    for poem in poems {
        if !seen.insert(poem.id) {
            return Err(WorksheetError::CatalogIntegrity(format!("duplicate poem id {}", poem.id)));
        }
        if poem.lines.is_empty() {
            return Err(WorksheetError::CatalogIntegrity(format!("poem {} has no lines", poem.id)));
        }
        for (n, line) in poem.lines.iter().enumerate() {
            let len = line.text.chars().count();
            if let Some(&bad) = line.blanks.iter().find(|&&b| b >= len) {
                return Err(WorksheetError::CatalogIntegrity(format!(
                    "poem {} line {} blank {} is past the end ({} chars)",
                    poem.id, n, bad, len
                )));
            }
        }
    }
    Ok(())
}
