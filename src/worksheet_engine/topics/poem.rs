use pinyin::ToPinyin;
use rand::Rng;
use tracing::debug;

use crate::worksheet_engine::{
    bag::Bag,
    catalog::poems_by_difficulty,
    helpers::{batch_tag, record_id},
    models::{Poem, PoemConfig, PoemExercise, PoemLine},
};

/// Drawn in place of a hidden character.
pub const BLANK: char = '＿';

/// Pick up to `config.count` distinct poems of the requested tier.
///
/// An empty tier yields an empty list.
pub fn generate<'a, R: Rng>(rng: &mut R, config: &PoemConfig, catalog: &'a [Poem]) -> Vec<PoemExercise<'a>> {
    let batch = batch_tag(rng);
    let tier = poems_by_difficulty(catalog, config.difficulty);
    if tier.is_empty() {
        debug!(target: "worksheet_engine::poem", difficulty = %config.difficulty, "no poems at this tier");
        return Vec::new();
    }

    let selected = Bag::new_shuffled(rng, &tier).draw_n(config.count);

    selected
        .into_iter()
        .enumerate()
        .map(|(n, poem)| PoemExercise {
            id: record_id("PO", &batch, n),
            poem,
            show_answers: config.show_answers,
        })
        .collect()
}

impl PoemLine {
    pub fn is_blank(&self, index: usize) -> bool {
        self.blanks.contains(&index)
    }

    /// The line with hidden characters replaced by [`BLANK`].
    pub fn masked(&self) -> String {
        self.text
            .chars()
            .enumerate()
            .map(|(i, c)| if self.is_blank(i) { BLANK } else { c })
            .collect()
    }

    /// Hidden characters, in line order.
    pub fn hidden(&self) -> String {
        self.text
            .chars()
            .enumerate()
            .filter(|&(i, _)| self.is_blank(i))
            .map(|(_, c)| c)
            .collect()
    }

    /// Tone-marked pinyin, one syllable per character, space-separated.
    pub fn pinyin(&self) -> String {
        self.text
            .chars()
            .map(|c| match c.to_pinyin() {
                Some(py) => py.with_tone().to_string(),
                None => c.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PoemExercise<'_> {
    /// Lines as printed on the practice sheet.
    pub fn masked_lines(&self) -> Vec<String> {
        self.poem
            .lines
            .iter()
            .map(|l| if self.show_answers { l.text.to_string() } else { l.masked() })
            .collect()
    }

    /// Per line, the characters a student has to fill in.
    pub fn answer_key(&self) -> Vec<String> {
        self.poem.lines.iter().map(PoemLine::hidden).collect()
    }

    pub fn pinyin_lines(&self) -> Vec<String> {
        self.poem.lines.iter().map(PoemLine::pinyin).collect()
    }
}
