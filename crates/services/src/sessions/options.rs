use rand::Rng;

use study_core::model::Record;

use super::shuffle::shuffle;

/// Maximum number of answer options shown for a quiz question.
pub const MAX_OPTIONS: usize = 4;

/// Build the answer options for a quiz question: the question record plus up
/// to three distractors drawn without replacement from the rest of the pool.
///
/// Records sharing the question's identity key are excluded from the
/// candidate pool, so the correct record appears exactly once. When the pool
/// is small the result is simply shorter (`min(MAX_OPTIONS, eligible + 1)`
/// options), never padded. The combined list is shuffled to remove
/// positional bias.
pub fn sample_options<R: Rng + ?Sized>(
    question: &Record,
    pool: &[Record],
    rng: &mut R,
) -> Vec<Record> {
    let mut candidates: Vec<&Record> = pool
        .iter()
        .filter(|record| record.name() != question.name())
        .collect();

    // Partial Fisher–Yates: uniformly move `take` picks to the front.
    let take = candidates.len().min(MAX_OPTIONS - 1);
    for i in 0..take {
        let j = rng.random_range(i..candidates.len());
        candidates.swap(i, j);
    }

    let mut options: Vec<Record> = candidates.into_iter().take(take).cloned().collect();
    options.push(question.clone());
    shuffle(&mut options, rng);
    options
}
