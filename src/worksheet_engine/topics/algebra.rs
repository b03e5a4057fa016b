use rand::Rng;
use tracing::{debug, warn};

use crate::worksheet_engine::{
    bag::sample_distinct,
    helpers::{batch_tag, record_id},
    models::{AlgebraConfig, AlgebraQuestion, AlgebraWorksheet, Item, ItemQuantity},
};

/// Questions that share one price list.
pub const QUESTIONS_PER_SET: usize = 5;
/// Distinct items on each price list.
pub const ITEMS_PER_POOL: usize = 4;

/// Build `config.count` shop questions over item pools drawn from `catalog`.
///
/// Questions are grouped in sets of [`QUESTIONS_PER_SET`]; each set draws its
/// own pool of [`ITEMS_PER_POOL`] distinct items, and each question buys
/// `difficulty` distinct items from that pool, 1..=9 of each.
pub fn generate<R: Rng>(rng: &mut R, config: &AlgebraConfig, catalog: &[Item]) -> AlgebraWorksheet {
    let batch = batch_tag(rng);
    let mut questions = Vec::new();
    let mut item_pools = Vec::new();

    if catalog.is_empty() {
        warn!(target: "worksheet_engine::algebra", "item catalog is empty; no questions generated");
        return AlgebraWorksheet { questions, item_pools };
    }

    let per_question = usize::from(config.difficulty.tier());
    let total_sets = config.count.div_ceil(QUESTIONS_PER_SET);

    for pool_index in 0..total_sets {
        let pool = sample_distinct(rng, catalog, ITEMS_PER_POOL);
        let in_set = QUESTIONS_PER_SET.min(config.count - pool_index * QUESTIONS_PER_SET);

        for _ in 0..in_set {
            let picks = sample_distinct(rng, &pool, per_question);
            let id = record_id("AL", &batch, questions.len());
            questions.push(build_question(rng, id, pool_index, picks));
        }
        item_pools.push(pool);
    }

    debug!(
        target: "worksheet_engine::algebra",
        questions = questions.len(), sets = item_pools.len(), difficulty = %config.difficulty,
        "algebra questions generated"
    );

    AlgebraWorksheet { questions, item_pools }
}

fn build_question<R: Rng>(rng: &mut R, id: String, pool_index: usize, picks: Vec<Item>) -> AlgebraQuestion {
    let items: Vec<ItemQuantity> = picks
        .into_iter()
        .map(|item| ItemQuantity { item, quantity: rng.gen_range(1..=9) })
        .collect();
    let total = items.iter().map(|iq| iq.item.price * iq.quantity).sum();
    let expression = items
        .iter()
        .map(|iq| format!("{} × {}", iq.item.emoji, iq.quantity))
        .collect::<Vec<_>>()
        .join(" + ");

    AlgebraQuestion { id, pool_index, items, total, expression }
}
