//! Game and batch drawing.

use std::collections::BTreeSet;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::LottoResult;
use crate::selection::{GAME_SIZE, Selection};
use crate::stats;

/// One drawn game: exactly 6 distinct numbers in 1-45, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game(Vec<u32>);

impl Game {
    /// The drawn numbers, ascending.
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    /// Whether the game contains a number.
    pub fn contains(&self, number: u32) -> bool {
        self.0.binary_search(&number).is_ok()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// An ordered sequence of independently drawn games sharing one
/// selection. Duplicate games across a batch are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// The drawn games, in draw order.
    pub games: Vec<Game>,
}

impl Batch {
    /// Number of games in the batch.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the batch holds no games.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// How many distinct numbers appear across the batch.
    pub fn distinct_numbers(&self) -> usize {
        self.games
            .iter()
            .flat_map(|g| g.numbers().iter().copied())
            .collect::<BTreeSet<u32>>()
            .len()
    }

    /// The ten most frequent numbers across the batch, descending by
    /// count, ties in first-appearance order.
    pub fn frequency_top10(&self) -> Vec<(u32, u32)> {
        stats::frequency_top(&self.games, 10)
    }
}

/// Draw a single validated game.
pub fn draw_game(selection: &Selection, rng: &mut StdRng) -> LottoResult<Game> {
    selection.validate()?;
    Ok(draw_unchecked(selection, rng))
}

/// Draw `count` independent games sharing the selection.
///
/// Validation runs once, before the first draw; every game is drawn
/// fresh from the full eligible pool.
pub fn draw_batch(selection: &Selection, count: usize, rng: &mut StdRng) -> LottoResult<Batch> {
    selection.validate()?;
    let games = (0..count).map(|_| draw_unchecked(selection, rng)).collect();
    Ok(Batch { games })
}

fn draw_unchecked(selection: &Selection, rng: &mut StdRng) -> Game {
    let mut numbers: BTreeSet<u32> = selection.included().collect();
    let mut pool: Vec<u32> = selection
        .eligible()
        .into_iter()
        .filter(|n| !numbers.contains(n))
        .collect();

    // validate() guarantees the pool can fill the game
    while numbers.len() < GAME_SIZE {
        let idx = rng.random_range(0..pool.len());
        numbers.insert(pool.swap_remove(idx));
    }

    Game(numbers.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LottoError;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn game_has_six_ascending_distinct_numbers() {
        let game = draw_game(&Selection::new(), &mut rng()).unwrap();
        assert_eq!(game.numbers().len(), 6);
        for pair in game.numbers().windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(game.numbers().iter().all(|n| (1..=45).contains(n)));
    }

    #[test]
    fn full_include_set_fixes_the_game() {
        let mut sel = Selection::new();
        for n in [1, 2, 3, 4, 5, 6] {
            sel.include(n).unwrap();
        }
        let batch = draw_batch(&sel, 10, &mut rng()).unwrap();
        for game in &batch.games {
            assert_eq!(game.numbers(), &[1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn degenerate_pool_of_exactly_six() {
        let mut sel = Selection::new();
        for n in 1..=39 {
            sel.exclude(n).unwrap();
        }
        let game = draw_game(&sel, &mut rng()).unwrap();
        assert_eq!(game.numbers(), &[40, 41, 42, 43, 44, 45]);
    }

    #[test]
    fn seven_includes_rejected() {
        let mut sel = Selection::new();
        for n in 1..=7 {
            sel.include(n).unwrap();
        }
        assert_eq!(
            draw_batch(&sel, 1, &mut rng()),
            Err(LottoError::TooManyIncluded(7))
        );
    }

    #[test]
    fn forty_excludes_rejected() {
        let mut sel = Selection::new();
        for n in 1..=40 {
            sel.exclude(n).unwrap();
        }
        assert_eq!(
            draw_batch(&sel, 1, &mut rng()),
            Err(LottoError::TooManyExcluded(40))
        );
    }

    #[test]
    fn batch_draws_requested_count() {
        let batch = draw_batch(&Selection::new(), 5, &mut rng()).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(!batch.is_empty());
    }

    #[test]
    fn batch_games_do_not_shrink_the_pool() {
        // With only 7 eligible numbers, every game still has 6 numbers:
        // the pool resets between games.
        let mut sel = Selection::new();
        for n in 1..=38 {
            sel.exclude(n).unwrap();
        }
        let batch = draw_batch(&sel, 20, &mut rng()).unwrap();
        for game in &batch.games {
            assert_eq!(game.numbers().len(), 6);
        }
    }

    #[test]
    fn deterministic_with_a_seeded_rng() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let sel = Selection::new();
        assert_eq!(
            draw_batch(&sel, 5, &mut a).unwrap(),
            draw_batch(&sel, 5, &mut b).unwrap()
        );
    }

    #[test]
    fn batch_round_trips_through_json() {
        let batch = draw_batch(&Selection::new(), 3, &mut rng()).unwrap();
        let json = serde_json::to_string(&batch).unwrap();
        let back: Batch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
    }

    #[test]
    fn game_display_is_comma_separated() {
        let mut sel = Selection::new();
        for n in [3, 11, 19, 27, 35, 43] {
            sel.include(n).unwrap();
        }
        let game = draw_game(&sel, &mut rng()).unwrap();
        assert_eq!(game.to_string(), "3, 11, 19, 27, 35, 43");
    }

    proptest! {
        #[test]
        fn drawn_games_always_valid(
            included in prop::collection::btree_set(1u32..=45, 0..=6),
            excluded in prop::collection::btree_set(1u32..=45, 0..=30),
            seed in any::<u64>(),
        ) {
            let mut sel = Selection::new();
            for &n in &included {
                sel.include(n).unwrap();
            }
            for &n in &excluded {
                if !included.contains(&n) {
                    sel.exclude(n).unwrap();
                }
            }

            let mut rng = StdRng::seed_from_u64(seed);
            let game = draw_game(&sel, &mut rng).unwrap();

            prop_assert_eq!(game.numbers().len(), 6);
            for pair in game.numbers().windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            prop_assert!(game.numbers().iter().all(|n| (1..=45).contains(n)));
            prop_assert!(sel.included().all(|n| game.contains(n)));
            prop_assert!(sel.excluded().all(|n| !game.contains(n)));
        }
    }
}
