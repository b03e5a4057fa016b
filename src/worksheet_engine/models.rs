use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::worksheet_engine::error::WorksheetError;

// ---------------------------------------------------------------------------
// Shared enums
// ---------------------------------------------------------------------------

/// Display language for labels and item names. Never affects sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Zh => write!(f, "zh"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = WorksheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Language::Zh),
            "en" | "en-us" | "en-gb" => Ok(Language::En),
            other => Err(WorksheetError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Difficulty tier 1..=3. Serialized as its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Basic, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn tier(self) -> u8 {
        match self {
            Difficulty::Basic        => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced     => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = WorksheetError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Difficulty::Basic),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Advanced),
            n => Err(WorksheetError::InvalidDifficulty(n)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.tier()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Basic        => write!(f, "Basic"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced     => write!(f, "Advanced"),
        }
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Add,
    Sub,
    Mul,
    /// Each question is independently an addition or a subtraction.
    Mix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArithmeticMode {
    #[default]
    Normal,
    /// 凑十法: complete the first addend to ten, then add the rest.
    MakeTen,
    /// 破十法: split the minuend into ten and its units, subtract from the ten.
    TakeTen,
}

impl fmt::Display for ArithmeticMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticMode::Normal  => write!(f, "normal"),
            ArithmeticMode::MakeTen => write!(f, "make-ten"),
            ArithmeticMode::TakeTen => write!(f, "take-ten"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "×")]
    Times,
}

impl Operator {
    pub fn apply(self, a: u32, b: u32) -> i64 {
        let (a, b) = (i64::from(a), i64::from(b));
        match self {
            Operator::Plus  => a + b,
            Operator::Minus => a - b,
            Operator::Times => a * b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Plus  => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
            Operator::Times => write!(f, "×"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub operation: Operation,
    /// Upper bound on the sum (add) or the operands (sub, mul).
    pub max: u32,
    pub count: usize,
    pub mode: ArithmeticMode,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self { operation: Operation::Add, max: 20, count: 20, mode: ArithmeticMode::Normal }
    }
}

/// Visual split of one operand into two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub part1: u32,
    pub part2: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticQuestion {
    pub id: String,
    pub num1: u32,
    pub num2: u32,
    pub operator: Operator,
    pub answer: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<Decomposition>,
}

impl fmt::Display for ArithmeticQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} =", self.num1, self.operator, self.num2)
    }
}

// ---------------------------------------------------------------------------
// Algebra (shop word problems)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Tool,
    Food,
    Material,
    Armor,
}

/// One purchasable entry of the shop catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    /// Canonical (Chinese) name.
    pub name: &'static str,
    pub name_en: &'static str,
    pub price: u32,
    pub category: ItemCategory,
    /// Used for on-screen previews and the expression string.
    pub emoji: &'static str,
    /// Image file name used by printed sheets.
    pub icon: &'static str,
}

impl Item {
    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::Zh => self.name,
            Language::En => self.name_en,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgebraConfig {
    /// Number of distinct items per question.
    pub difficulty: Difficulty,
    pub count: usize,
    pub language: Language,
}

impl Default for AlgebraConfig {
    fn default() -> Self {
        Self { difficulty: Difficulty::Intermediate, count: 20, language: Language::Zh }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemQuantity {
    pub item: Item,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgebraQuestion {
    pub id: String,
    /// Index into [`AlgebraWorksheet::item_pools`].
    pub pool_index: usize,
    pub items: Vec<ItemQuantity>,
    pub total: u32,
    pub expression: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgebraWorksheet {
    pub questions: Vec<AlgebraQuestion>,
    /// One price list per group of questions.
    pub item_pools: Vec<Vec<Item>>,
}

// ---------------------------------------------------------------------------
// Classical poems
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PoemLine {
    pub text: &'static str,
    /// Character indices hidden on the practice sheet.
    pub blanks: &'static [usize],
}

#[derive(Debug, Serialize)]
pub struct Poem {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub dynasty: &'static str,
    pub difficulty: Difficulty,
    pub lines: &'static [PoemLine],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemConfig {
    pub difficulty: Difficulty,
    pub count: usize,
    pub show_answers: bool,
    /// Display only; the selector ignores it.
    pub show_pinyin: bool,
}

impl Default for PoemConfig {
    fn default() -> Self {
        Self { difficulty: Difficulty::Basic, count: 3, show_answers: false, show_pinyin: false }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PoemExercise<'a> {
    pub id: String,
    pub poem: &'a Poem,
    pub show_answers: bool,
}

// ---------------------------------------------------------------------------
// Tracing sheets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    /// 田字格
    #[default]
    Tian,
    /// 米字格
    Mi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HanziConfig {
    pub text: String,
    pub grid: GridType,
    pub show_pinyin: bool,
    /// Print characters in light grey for tracing instead of solid black.
    pub trace: bool,
}

impl Default for HanziConfig {
    fn default() -> Self {
        Self { text: "多米学习站".into(), grid: GridType::Tian, show_pinyin: true, trace: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanziCell {
    pub character: char,
    pub pinyin: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HanziSheet {
    pub cells: Vec<HanziCell>,
    pub grid: GridType,
    pub show_pinyin: bool,
    pub trace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    #[default]
    Original,
    Upper,
    Lower,
    Capitalize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishConfig {
    pub text: String,
    pub case: CaseStyle,
}

impl Default for EnglishConfig {
    fn default() -> Self {
        Self { text: "Apple Banana Cat Dog Elephant".into(), case: CaseStyle::Original }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnglishSheet {
    pub words: Vec<String>,
    pub case: CaseStyle,
}

// ---------------------------------------------------------------------------
// Worksheet request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Arithmetic,
    Algebra,
    Poem,
    Hanzi,
    English,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Subject::Arithmetic => "Arithmetic",
            Subject::Algebra    => "Shop Algebra",
            Subject::Poem       => "Classical Poetry",
            Subject::Hanzi      => "Chinese Writing",
            Subject::English    => "English Writing",
        };
        write!(f, "{}", s)
    }
}

/// Which exercise to build, with its configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "subject", rename_all = "snake_case")]
pub enum Exercise {
    Arithmetic(ArithmeticConfig),
    Algebra(AlgebraConfig),
    Poem(PoemConfig),
    Hanzi(HanziConfig),
    English(EnglishConfig),
}

impl Exercise {
    pub fn subject(&self) -> Subject {
        match self {
            Exercise::Arithmetic(_) => Subject::Arithmetic,
            Exercise::Algebra(_)    => Subject::Algebra,
            Exercise::Poem(_)       => Subject::Poem,
            Exercise::Hanzi(_)      => Subject::Hanzi,
            Exercise::English(_)    => Subject::English,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetRequest {
    pub exercise: Exercise,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl WorksheetRequest {
    /// Entropy-seeded request for `exercise`.
    pub fn new(exercise: Exercise) -> Self {
        Self { exercise, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "subject", rename_all = "snake_case")]
pub enum WorksheetBody {
    Arithmetic {
        mode: ArithmeticMode,
        max: u32,
        questions: Vec<ArithmeticQuestion>,
    },
    Algebra {
        difficulty: Difficulty,
        language: Language,
        sheet: AlgebraWorksheet,
    },
    Poem {
        difficulty: Difficulty,
        show_pinyin: bool,
        exercises: Vec<PoemExercise<'static>>,
    },
    Hanzi(HanziSheet),
    English(EnglishSheet),
}

#[derive(Debug, Clone, Serialize)]
pub struct Worksheet {
    pub sheet_id: String,
    pub subject: Subject,
    pub body: WorksheetBody,
}
