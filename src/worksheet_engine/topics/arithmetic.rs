use rand::Rng;
use tracing::debug;

use crate::worksheet_engine::{
    helpers::{batch_tag, below, record_id},
    models::{
        ArithmeticConfig, ArithmeticMode, ArithmeticQuestion, Decomposition, Operation, Operator,
    },
};

/// Attempts per question slot before the slot is given up.
pub const MAX_ATTEMPTS: usize = 50;

/// Largest factor on a multiplication drill (the 9×9 table).
const TIMES_TABLE_MAX: u32 = 9;

/// Build up to `config.count` questions.
///
/// Each slot is retried up to [`MAX_ATTEMPTS`] times; a slot that never
/// satisfies its constraint is skipped, so the result may be shorter than
/// requested. With any `max >= 1` this does not happen in practice.
pub fn generate<R: Rng>(rng: &mut R, config: &ArithmeticConfig) -> Vec<ArithmeticQuestion> {
    let batch = batch_tag(rng);
    let questions = fill_slots(config.count, &batch, || attempt(rng, config));

    if questions.len() < config.count {
        debug!(
            target: "worksheet_engine::arithmetic",
            requested = config.count, generated = questions.len(),
            max = config.max, mode = %config.mode,
            "arithmetic sheet is short"
        );
    }
    questions
}

/// Run `attempt` up to [`MAX_ATTEMPTS`] times per slot and number the
/// questions that come out.
fn fill_slots<F>(count: usize, batch: &str, mut attempt: F) -> Vec<ArithmeticQuestion>
where
    F: FnMut() -> Option<ArithmeticQuestion>,
{
    let mut questions = Vec::new();

    for slot in 0..count {
        match (0..MAX_ATTEMPTS).find_map(|_| attempt()) {
            Some(mut q) => {
                q.id = record_id("MA", batch, questions.len());
                questions.push(q);
            }
            None => debug!(
                target: "worksheet_engine::arithmetic",
                slot, "question slot exhausted its attempts"
            ),
        }
    }

    questions
}

fn attempt<R: Rng>(rng: &mut R, config: &ArithmeticConfig) -> Option<ArithmeticQuestion> {
    match config.mode {
        ArithmeticMode::MakeTen => Some(make_ten(rng)),
        ArithmeticMode::TakeTen => Some(take_ten(rng)),
        ArithmeticMode::Normal  => normal(rng, config.operation, config.max),
    }
}

fn question(num1: u32, num2: u32, operator: Operator, decomposition: Option<Decomposition>) -> ArithmeticQuestion {
    ArithmeticQuestion {
        id: String::new(),
        num1,
        num2,
        operator,
        answer: operator.apply(num1, num2),
        decomposition,
    }
}

fn normal<R: Rng>(rng: &mut R, operation: Operation, max: u32) -> Option<ArithmeticQuestion> {
    let operator = match operation {
        Operation::Add => Operator::Plus,
        Operation::Sub => Operator::Minus,
        Operation::Mul => Operator::Times,
        Operation::Mix => if rng.gen_bool(0.5) { Operator::Plus } else { Operator::Minus },
    };

    match operator {
        Operator::Plus => {
            let (a, b) = (below(rng, max), below(rng, max));
            // Over-max pairs are retried by the caller.
            a.checked_add(b)
                .is_some_and(|sum| sum <= max)
                .then(|| question(a, b, Operator::Plus, None))
        }
        Operator::Minus => {
            let (a, b) = (below(rng, max), below(rng, max));
            let (a, b) = if a < b { (b, a) } else { (a, b) };
            Some(question(a, b, Operator::Minus, None))
        }
        Operator::Times => {
            let bound = max.clamp(1, TIMES_TABLE_MAX);
            let a = rng.gen_range(1..=bound);
            let b = rng.gen_range(1..=bound);
            Some(question(a, b, Operator::Times, None))
        }
    }
}

/// `8 + 5`: 5 splits into 2 (completing ten) and 3.
fn make_ten<R: Rng>(rng: &mut R) -> ArithmeticQuestion {
    let num1 = rng.gen_range(6..=9);
    let needed = 10 - num1;
    let num2 = rng.gen_range(needed + 1..=9);
    question(num1, num2, Operator::Plus, Some(Decomposition { part1: needed, part2: num2 - needed }))
}

/// `13 - 8`: 13 splits into 10 and 3; 10 - 8 = 2, then 2 + 3 = 5.
fn take_ten<R: Rng>(rng: &mut R) -> ArithmeticQuestion {
    let num1 = rng.gen_range(11..=18);
    let unit = num1 % 10;
    let num2 = rng.gen_range(unit + 1..=9);
    question(num1, num2, Operator::Minus, Some(Decomposition { part1: 10, part2: unit }))
}
