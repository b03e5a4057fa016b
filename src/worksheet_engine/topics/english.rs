//! English word tracing sheets.

use crate::worksheet_engine::models::{CaseStyle, EnglishConfig, EnglishSheet};

pub const ROWS_PER_PAGE: usize = 10;
/// A sheet always offers at least this many practice rows.
pub const MIN_ROWS: usize = 8;

pub fn build(config: &EnglishConfig) -> EnglishSheet {
    let text = apply_case(&config.text, config.case);
    let words = text.split_whitespace().map(str::to_string).collect();
    EnglishSheet { words, case: config.case }
}

/// `Capitalize` upper-cases the first word character after a non-word one,
/// where word characters are ASCII letters, digits and `_`.
pub fn apply_case(text: &str, case: CaseStyle) -> String {
    match case {
        CaseStyle::Original => text.to_string(),
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Capitalize => {
            let mut out = String::with_capacity(text.len());
            let mut prev_word = false;
            for c in text.chars() {
                let word = c.is_ascii_alphanumeric() || c == '_';
                if word && !prev_word {
                    out.push(c.to_ascii_uppercase());
                } else {
                    out.push(c);
                }
                prev_word = word;
            }
            out
        }
    }
}

impl EnglishSheet {
    pub fn pages(&self) -> impl Iterator<Item = &[String]> {
        self.words.chunks(ROWS_PER_PAGE)
    }

    /// Empty rows appended after the words on a short sheet.
    pub fn blank_rows(&self) -> usize {
        MIN_ROWS.saturating_sub(self.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(text: &str, case: CaseStyle) -> EnglishSheet {
        build(&EnglishConfig { text: text.into(), case })
    }

    #[test]
    fn case_styles() {
        assert_eq!(apply_case("apple Banana", CaseStyle::Original), "apple Banana");
        assert_eq!(apply_case("apple Banana", CaseStyle::Upper), "APPLE BANANA");
        assert_eq!(apply_case("apple Banana", CaseStyle::Lower), "apple banana");
        assert_eq!(apply_case("apple banana", CaseStyle::Capitalize), "Apple Banana");
        assert_eq!(apply_case("don't stop-me", CaseStyle::Capitalize), "Don'T Stop-Me");
    }

    #[test]
    fn words_split_on_any_whitespace() {
        let s = sheet("  cat\tdog\n\nelephant ", CaseStyle::Upper);
        assert_eq!(s.words, vec!["CAT", "DOG", "ELEPHANT"]);
        assert_eq!(s.blank_rows(), 5);
    }

    #[test]
    fn long_lists_page_by_ten() {
        let text = (0..23).map(|n| format!("w{n}")).collect::<Vec<_>>().join(" ");
        let s = sheet(&text, CaseStyle::Original);
        let pages: Vec<_> = s.pages().collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].len(), 3);
        assert_eq!(s.blank_rows(), 0);
    }
}
