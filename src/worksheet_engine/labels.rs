//! Language-keyed display strings for enum values.
//!
//! Only the words a printed sheet needs next to generated content live here:
//! difficulty badges, the price-list heading, currency units and titles.

use crate::worksheet_engine::{
    helpers::localized,
    models::{ArithmeticMode, Difficulty, Language, Subject},
};

/// Star badge used on algebra sheets.
pub fn difficulty_label(difficulty: Difficulty, language: Language) -> &'static str {
    match difficulty {
        Difficulty::Basic        => localized(language, "⭐ 初级", "⭐ Basic"),
        Difficulty::Intermediate => localized(language, "⭐⭐ 中级", "⭐⭐ Intermediate"),
        Difficulty::Advanced     => localized(language, "⭐⭐⭐ 高级", "⭐⭐⭐ Advanced"),
    }
}

/// Tier description for poem sheets, naming the verse form.
pub fn poem_difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Basic        => "⭐ 初级 - 五言绝句",
        Difficulty::Intermediate => "⭐⭐ 中级 - 七言绝句",
        Difficulty::Advanced     => "⭐⭐⭐ 高级 - 七言律诗/词",
    }
}

pub fn price_list_label(language: Language) -> &'static str {
    localized(language, "💰 价格表：", "💰 Price List:")
}

pub fn currency_symbol(language: Language) -> &'static str {
    localized(language, "元", "$")
}

/// Format an amount with the currency in its customary position.
pub fn price(amount: u32, language: Language) -> String {
    match language {
        Language::Zh => format!("{amount}{}", currency_symbol(language)),
        Language::En => format!("{}{amount}", currency_symbol(language)),
    }
}

pub fn arithmetic_title(mode: ArithmeticMode) -> &'static str {
    match mode {
        ArithmeticMode::Normal  => "Math Worksheet",
        ArithmeticMode::MakeTen => "Make a Ten",
        ArithmeticMode::TakeTen => "Take from Ten",
    }
}

pub fn sheet_title(subject: Subject, language: Language) -> &'static str {
    match subject {
        Subject::Arithmetic => localized(language, "口算练习", "Math Worksheet"),
        Subject::Algebra    => localized(language, "商店代数", "Shop Algebra"),
        Subject::Poem       => localized(language, "古诗填空", "Classical Poetry"),
        Subject::Hanzi      => localized(language, "汉字描红", "Chinese Writing"),
        Subject::English    => localized(language, "英语描红", "English Writing"),
    }
}
