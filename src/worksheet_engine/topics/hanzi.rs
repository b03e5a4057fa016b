//! Chinese character tracing sheets.

use pinyin::ToPinyin;

use crate::worksheet_engine::models::{HanziCell, HanziConfig, HanziSheet};

pub const COLUMNS: usize = 8;
pub const ROWS_PER_PAGE: usize = 8;
pub const CELLS_PER_PAGE: usize = COLUMNS * ROWS_PER_PAGE;

/// Turn `config.text` into one practice cell per non-whitespace character.
///
/// Han characters carry their default reading with tone marks; anything else
/// (punctuation, Latin letters, digits) gets no pinyin.
pub fn build(config: &HanziConfig) -> HanziSheet {
    let cells = config
        .text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|character| HanziCell {
            character,
            pinyin: character.to_pinyin().map(|py| py.with_tone().to_string()),
        })
        .collect();

    HanziSheet {
        cells,
        grid: config.grid,
        show_pinyin: config.show_pinyin,
        trace: config.trace,
    }
}

impl HanziSheet {
    pub fn pages(&self) -> impl Iterator<Item = &[HanziCell]> {
        self.cells.chunks(CELLS_PER_PAGE)
    }

    /// Grid rows of [`COLUMNS`] cells; the last row may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[HanziCell]> {
        self.cells.chunks(COLUMNS)
    }

    pub fn page_count(&self) -> usize {
        self.cells.len().div_ceil(CELLS_PER_PAGE).max(1)
    }
}
