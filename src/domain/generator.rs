use std::collections::HashSet;

use rand::Rng;

use crate::domain::draw;
use crate::domain::range::NumberRange;

/// One drawn combination, ascending and duplicate-free.
pub type Game = Vec<u32>;

/// Inputs for one generation call.
///
/// All values are assumed validated by the caller (see `config`): positive
/// counts, `numbers_per_game` feasible for the range, fixed numbers within
/// range and duplicate-free. The generator trusts these preconditions.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub number_of_games: usize,
    pub numbers_per_game: usize,
    pub range: NumberRange,
    pub maximize_unique: bool,
    pub fixed_numbers: Vec<u32>,
}

/// How many games fit in the range without repeating a number across games:
/// `floor((|range| - |fixed|) / (numbers_per_game - |fixed|))`.
///
/// When the fixed numbers already fill a game there is nothing left to draw
/// and every requested game counts as unique.
pub fn max_unique_games(params: &GenerateParams) -> usize {
    let fixed = valid_fixed(params);
    let remaining = params.numbers_per_game.saturating_sub(fixed.len());
    if remaining == 0 {
        return params.number_of_games;
    }
    (params.range.size() as usize - fixed.len()) / remaining
}

/// Generate the batch. Ordering is generation order: with
/// `maximize_unique`, all cross-game-unique games come first, then the
/// independent tail. Games are not tagged with their phase; consumers that
/// care track `max_unique_games` themselves.
pub fn generate<R: Rng>(rng: &mut R, params: &GenerateParams) -> Vec<Game> {
    let fixed = valid_fixed(params);
    let remaining = params.numbers_per_game.saturating_sub(fixed.len());

    // Fixed slots already cover the game: nothing to draw, every game is
    // the sorted fixed set, whatever its size.
    if remaining == 0 {
        let mut game = fixed;
        game.sort_unstable();
        return vec![game; params.number_of_games];
    }

    if !params.maximize_unique {
        return independent_games(rng, params, &fixed, remaining, params.number_of_games);
    }

    // Phase 1: a single pool of used numbers, seeded with the fixed set,
    // keeps any number from appearing in two games.
    let unique_target = params.number_of_games.min(max_unique_games(params));
    let mut games = Vec::with_capacity(params.number_of_games);
    let mut used: HashSet<u32> = fixed.iter().copied().collect();
    for _ in 0..unique_target {
        let drawn = draw::draw(rng, remaining, params.range, &used);
        used.extend(&drawn);
        games.push(merge_sorted(&fixed, drawn));
    }

    // Phase 2: requests beyond the unique capacity fall back to independent
    // draws; repeats across these games are expected.
    let tail = params.number_of_games - unique_target;
    games.extend(independent_games(rng, params, &fixed, remaining, tail));
    games
}

fn independent_games<R: Rng>(
    rng: &mut R,
    params: &GenerateParams,
    fixed: &[u32],
    remaining: usize,
    count: usize,
) -> Vec<Game> {
    let fixed_set: HashSet<u32> = fixed.iter().copied().collect();
    (0..count)
        .map(|_| merge_sorted(fixed, draw::draw(rng, remaining, params.range, &fixed_set)))
        .collect()
}

fn merge_sorted(fixed: &[u32], drawn: Vec<u32>) -> Game {
    let mut game = Vec::with_capacity(fixed.len() + drawn.len());
    game.extend_from_slice(fixed);
    game.extend(drawn);
    game.sort_unstable();
    game
}

// Defensive filter; range membership is already enforced at the boundary.
fn valid_fixed(params: &GenerateParams) -> Vec<u32> {
    params
        .fixed_numbers
        .iter()
        .copied()
        .filter(|n| params.range.contains(*n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn params(
        number_of_games: usize,
        numbers_per_game: usize,
        min: u32,
        max: u32,
        maximize_unique: bool,
        fixed_numbers: Vec<u32>,
    ) -> GenerateParams {
        GenerateParams {
            number_of_games,
            numbers_per_game,
            range: NumberRange::new(min, max),
            maximize_unique,
            fixed_numbers,
        }
    }

    fn assert_valid_game(game: &Game, p: &GenerateParams) {
        assert_eq!(game.len(), p.numbers_per_game);
        assert!(game.windows(2).all(|w| w[0] < w[1]), "not ascending: {game:?}");
        assert!(game.iter().all(|&n| p.range.contains(n)));
    }

    #[test]
    fn independent_mode_produces_requested_shape() {
        let mut rng = create_rng(Some(10));
        let p = params(5, 6, 1, 60, false, vec![]);
        let batch = generate(&mut rng, &p);
        assert_eq!(batch.len(), 5);
        for game in &batch {
            assert_valid_game(game, &p);
        }
    }

    #[test]
    fn fixed_numbers_appear_in_every_game() {
        let mut rng = create_rng(Some(11));
        let p = params(4, 6, 1, 60, false, vec![13, 42]);
        for game in generate(&mut rng, &p) {
            assert_valid_game(&game, &p);
            assert!(game.contains(&13));
            assert!(game.contains(&42));
        }
    }

    #[test]
    fn fully_fixed_game_degenerates_to_the_fixed_set() {
        let mut rng = create_rng(Some(12));
        let p = params(4, 3, 1, 60, false, vec![15, 5, 10]);
        let batch = generate(&mut rng, &p);
        assert_eq!(batch.len(), 4);
        for game in batch {
            assert_eq!(game, vec![5, 10, 15]);
        }
    }

    #[test]
    fn max_unique_games_formula() {
        // floor(60 / 6) = 10
        assert_eq!(max_unique_games(&params(99, 6, 1, 60, true, vec![])), 10);
        // floor((60 - 2) / 4) = 14
        assert_eq!(max_unique_games(&params(99, 6, 1, 60, true, vec![7, 8])), 14);
        // floor(10 / 5) = 2
        assert_eq!(max_unique_games(&params(5, 5, 1, 10, true, vec![])), 2);
        // Fully fixed: every requested game counts as unique.
        assert_eq!(max_unique_games(&params(7, 2, 1, 60, true, vec![1, 2])), 7);
    }

    #[test]
    fn unique_phase_never_repeats_a_number_across_games() {
        let mut rng = create_rng(Some(13));
        let p = params(10, 6, 1, 60, true, vec![]);
        let batch = generate(&mut rng, &p);
        assert_eq!(batch.len(), 10);

        let mut seen = HashSet::new();
        for game in &batch {
            assert_valid_game(game, &p);
            for &n in game {
                assert!(seen.insert(n), "number {n} repeated across unique games");
            }
        }
    }

    #[test]
    fn unique_phase_shares_fixed_numbers_only() {
        let mut rng = create_rng(Some(14));
        let p = params(5, 6, 1, 60, true, vec![1, 2]);
        let batch = generate(&mut rng, &p);
        // floor((60 - 2) / 4) = 14 >= 5, so the whole batch is phase 1.
        let mut seen: HashSet<u32> = HashSet::new();
        for game in &batch {
            for &n in game {
                if n != 1 && n != 2 {
                    assert!(seen.insert(n), "non-fixed number {n} repeated");
                }
            }
        }
    }

    #[test]
    fn overflow_tail_draws_independently() {
        let mut rng = create_rng(Some(15));
        let p = params(5, 5, 1, 10, true, vec![]);
        let batch = generate(&mut rng, &p);
        assert_eq!(batch.len(), 5);

        // Phase 1 capacity is floor(10 / 5) = 2 and those games partition
        // the range.
        let mut phase1: Vec<u32> = batch[0].iter().chain(batch[1].iter()).copied().collect();
        phase1.sort_unstable();
        assert_eq!(phase1, (1..=10).collect::<Vec<_>>());

        // The tail still has the right shape.
        for game in &batch[2..] {
            assert_valid_game(game, &p);
        }
    }

    #[test]
    fn out_of_range_fixed_numbers_are_filtered() {
        let mut rng = create_rng(Some(16));
        let p = params(3, 6, 10, 30, false, vec![5, 12, 99]);
        for game in generate(&mut rng, &p) {
            assert_valid_game(&game, &p);
            assert!(game.contains(&12));
            assert!(!game.contains(&5));
            assert!(!game.contains(&99));
        }
    }
}
