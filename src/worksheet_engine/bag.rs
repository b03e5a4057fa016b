use rand::Rng;

/// A shuffled copy of a slice that is drawn from without replacement.
///
/// Used wherever a generator needs "k distinct entries, uniformly": item
/// pools, per-question item picks and poem selection.
pub struct Bag<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Bag<T> {
    /// Copy `source` and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R, source: &[T]) -> Self {
        let mut entries = source.to_vec();

        // Fisher-Yates shuffle
        for i in (1..entries.len()).rev() {
            let j = rng.gen_range(0..=i);
            entries.swap(i, j);
        }

        Bag { entries, cursor: 0 }
    }

    /// Draw one entry, or `None` once the bag is empty.
    pub fn draw(&mut self) -> Option<T> {
        let entry = self.entries.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(entry)
    }

    /// Draw up to `n` entries; fewer if the bag runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<T> {
        let take = n.min(self.remaining());
        (0..take).filter_map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.entries.len() - self.cursor
    }
}

/// Uniformly pick `k` distinct entries of `source`.
pub fn sample_distinct<T: Clone, R: Rng>(rng: &mut R, source: &[T], k: usize) -> Vec<T> {
    Bag::new_shuffled(rng, source).draw_n(k)
}
