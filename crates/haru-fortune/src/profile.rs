//! Birth profiles: the validated input to a fortune request.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FortuneError, FortuneResult};

/// Gender, as folded into the seed derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Contributes 1 to the seed.
    Male,
    /// Contributes 2 to the seed.
    Female,
}

impl Gender {
    /// Parse a gender from a user-supplied string.
    pub fn parse(s: &str) -> FortuneResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(FortuneError::InvalidGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// A validated birth date plus gender. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    date: NaiveDate,
    gender: Gender,
}

impl BirthProfile {
    /// Build a profile, rejecting dates that do not exist on the
    /// calendar (e.g. February 30th).
    pub fn new(year: i32, month: u32, day: u32, gender: Gender) -> FortuneResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(FortuneError::InvalidBirthDate { year, month, day })?;
        Ok(Self { date, gender })
    }

    /// The birth date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The birth year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The birth month (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The birth day of month (1-31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }
}
