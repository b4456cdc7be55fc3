//! Frequency statistics over a batch of games.

use crate::draw::Game;

/// Count occurrences per number across all games, descending by count.
///
/// Ties keep first-appearance order (the sort is stable), and at most
/// `top` entries are returned.
pub fn frequency_top(games: &[Game], top: usize) -> Vec<(u32, u32)> {
    let mut counts: Vec<(u32, u32)> = Vec::new();
    for game in games {
        for &n in game.numbers() {
            match counts.iter_mut().find(|(m, _)| *m == n) {
                Some(entry) => entry.1 += 1,
                None => counts.push((n, 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top);
    counts
}
