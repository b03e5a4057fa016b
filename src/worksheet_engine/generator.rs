use rand::{rngs::StdRng, SeedableRng};
use rand::RngCore;
use tracing::info;

use crate::worksheet_engine::{
    catalog::{ITEMS, POEMS},
    models::{Exercise, Subject, Worksheet, WorksheetBody, WorksheetRequest},
    topics,
};

/// Generate a sheet ID from subject + seed.
fn make_sheet_id(subject: Subject, rng: &mut impl RngCore) -> String {
    let prefix = match subject {
        Subject::Arithmetic => "MA",
        Subject::Algebra    => "AL",
        Subject::Poem       => "PO",
        Subject::Hanzi      => "HZ",
        Subject::English    => "EN",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch: routes to the correct subject module.
pub fn generate_worksheet(request: WorksheetRequest) -> Worksheet {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let subject = request.exercise.subject();
    let sheet_id = make_sheet_id(subject, &mut rng);

    let body = match request.exercise {
        Exercise::Arithmetic(config) => WorksheetBody::Arithmetic {
            mode: config.mode,
            max: config.max,
            questions: topics::arithmetic::generate(&mut rng, &config),
        },

        Exercise::Algebra(config) => WorksheetBody::Algebra {
            difficulty: config.difficulty,
            language: config.language,
            sheet: topics::algebra::generate(&mut rng, &config, ITEMS),
        },

        Exercise::Poem(config) => WorksheetBody::Poem {
            difficulty: config.difficulty,
            show_pinyin: config.show_pinyin,
            exercises: topics::poem::generate(&mut rng, &config, POEMS),
        },

        Exercise::Hanzi(config) =>
            WorksheetBody::Hanzi(topics::hanzi::build(&config)),

        Exercise::English(config) =>
            WorksheetBody::English(topics::english::build(&config)),
    };

    info!(
        target: "worksheet_engine",
        %sheet_id, %subject, entries = body.len(), seeded = request.rng_seed.is_some(),
        "worksheet generated"
    );

    Worksheet { sheet_id, subject, body }
}

impl WorksheetBody {
    /// Number of records on the sheet (questions, poems, cells or words).
    pub fn len(&self) -> usize {
        match self {
            WorksheetBody::Arithmetic { questions, .. } => questions.len(),
            WorksheetBody::Algebra { sheet, .. }        => sheet.questions.len(),
            WorksheetBody::Poem { exercises, .. }       => exercises.len(),
            WorksheetBody::Hanzi(sheet)                 => sheet.cells.len(),
            WorksheetBody::English(sheet)               => sheet.words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
