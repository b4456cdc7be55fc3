//! Must-include / must-exclude selection state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{LottoError, LottoResult};

/// Lowest ball number.
pub const MIN_NUMBER: u32 = 1;
/// Highest ball number.
pub const MAX_NUMBER: u32 = 45;
/// Numbers per game.
pub const GAME_SIZE: usize = 6;

/// The include/exclude configuration shared by every game in a batch.
///
/// The two sets are disjoint by construction: marking a number on one
/// side removes it from the other, mirroring a toggle board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    included: BTreeSet<u32>,
    excluded: BTreeSet<u32>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a number as must-include, unmarking it as excluded if needed.
    pub fn include(&mut self, number: u32) -> LottoResult<()> {
        check_range(number)?;
        self.excluded.remove(&number);
        self.included.insert(number);
        Ok(())
    }

    /// Mark a number as must-exclude, unmarking it as included if needed.
    pub fn exclude(&mut self, number: u32) -> LottoResult<()> {
        check_range(number)?;
        self.included.remove(&number);
        self.excluded.insert(number);
        Ok(())
    }

    /// Remove a number from both sides.
    pub fn unmark(&mut self, number: u32) {
        self.included.remove(&number);
        self.excluded.remove(&number);
    }

    /// Clear both sides.
    pub fn clear(&mut self) {
        self.included.clear();
        self.excluded.clear();
    }

    /// The must-include numbers, ascending.
    pub fn included(&self) -> impl Iterator<Item = u32> + '_ {
        self.included.iter().copied()
    }

    /// The must-exclude numbers, ascending.
    pub fn excluded(&self) -> impl Iterator<Item = u32> + '_ {
        self.excluded.iter().copied()
    }

    /// Whether a number is marked must-include.
    pub fn is_included(&self, number: u32) -> bool {
        self.included.contains(&number)
    }

    /// Whether a number is marked must-exclude.
    pub fn is_excluded(&self, number: u32) -> bool {
        self.excluded.contains(&number)
    }

    /// Numbers that a game may contain: the universe minus the excluded.
    pub fn eligible(&self) -> Vec<u32> {
        (MIN_NUMBER..=MAX_NUMBER)
            .filter(|n| !self.excluded.contains(n))
            .collect()
    }

    /// Validate that a draw is possible. Checks run in order and the
    /// first failure wins.
    pub fn validate(&self) -> LottoResult<()> {
        if self.included.len() > GAME_SIZE {
            return Err(LottoError::TooManyIncluded(self.included.len()));
        }
        if self.excluded.len() >= 40 {
            return Err(LottoError::TooManyExcluded(self.excluded.len()));
        }
        let eligible = 45 - self.excluded.len();
        if eligible < GAME_SIZE {
            return Err(LottoError::PoolTooSmall(eligible));
        }
        Ok(())
    }
}

fn check_range(number: u32) -> LottoResult<()> {
    if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
        Ok(())
    } else {
        Err(LottoError::OutOfRange(number))
    }
}

/// The display color group of a ball, by number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallColor {
    /// 1-10.
    Yellow,
    /// 11-20.
    Blue,
    /// 21-30.
    Red,
    /// 31-40.
    Gray,
    /// 41-45.
    Green,
}

impl BallColor {
    /// Color group for a ball number.
    pub fn for_number(number: u32) -> Self {
        match number {
            ..=10 => Self::Yellow,
            11..=20 => Self::Blue,
            21..=30 => Self::Red,
            31..=40 => Self::Gray,
            _ => Self::Green,
        }
    }
}
