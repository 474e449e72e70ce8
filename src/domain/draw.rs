use std::collections::HashSet;

use rand::Rng;

use crate::domain::range::NumberRange;

/// Draw `count` distinct numbers from `range`, skipping anything in
/// `excluded`. The result is ascending.
///
/// When the exclusions leave fewer than `count` candidates, the draw falls
/// back to the full range (exclusions ignored) and caps the result at the
/// range size. Callers normally rule that case out through validation; the
/// fallback keeps a starved candidate pool from turning into an error.
pub fn draw<R: Rng>(
    rng: &mut R,
    count: usize,
    range: NumberRange,
    excluded: &HashSet<u32>,
) -> Vec<u32> {
    let mut candidates: Vec<u32> = range.iter().filter(|n| !excluded.contains(n)).collect();

    if candidates.len() < count {
        candidates = range.iter().collect();
    }

    // Partial Fisher-Yates: pick a uniform index, swap-remove it.
    let take = count.min(candidates.len());
    let mut drawn = Vec::with_capacity(take);
    for _ in 0..take {
        let idx = rng.gen_range(0..candidates.len());
        drawn.push(candidates.swap_remove(idx));
    }

    drawn.sort_unstable();
    drawn
}
