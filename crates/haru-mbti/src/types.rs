//! The four type axes and the combined four-letter type.

use serde::{Deserialize, Serialize};

use crate::error::{MbtiError, MbtiResult};

/// Where energy is drawn from: E or I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Energy {
    /// Extraverted (E).
    Extraverted,
    /// Introverted (I).
    Introverted,
}

/// How information is taken in: S or N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Information {
    /// Sensing (S).
    Sensing,
    /// Intuitive (N).
    Intuitive,
}

/// How decisions are made: T or F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decisions {
    /// Thinking (T).
    Thinking,
    /// Feeling (F).
    Feeling,
}

/// How the outer life is organized: J or P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifestyle {
    /// Judging (J).
    Judging,
    /// Perceiving (P).
    Perceiving,
}

/// A full four-letter MBTI type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MbtiType {
    /// E/I axis.
    pub energy: Energy,
    /// S/N axis.
    pub information: Information,
    /// T/F axis.
    pub decisions: Decisions,
    /// J/P axis.
    pub lifestyle: Lifestyle,
}

impl MbtiType {
    /// Parse a type from a four-letter code, case-insensitively.
    pub fn parse(s: &str) -> MbtiResult<Self> {
        let code = s.trim().to_uppercase();
        let mut chars = code.chars();
        let (Some(a), Some(b), Some(c), Some(d), None) = (
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
        ) else {
            return Err(MbtiError::InvalidType(s.to_string()));
        };

        let energy = match a {
            'E' => Energy::Extraverted,
            'I' => Energy::Introverted,
            _ => return Err(MbtiError::InvalidType(s.to_string())),
        };
        let information = match b {
            'S' => Information::Sensing,
            'N' => Information::Intuitive,
            _ => return Err(MbtiError::InvalidType(s.to_string())),
        };
        let decisions = match c {
            'T' => Decisions::Thinking,
            'F' => Decisions::Feeling,
            _ => return Err(MbtiError::InvalidType(s.to_string())),
        };
        let lifestyle = match d {
            'J' => Lifestyle::Judging,
            'P' => Lifestyle::Perceiving,
            _ => return Err(MbtiError::InvalidType(s.to_string())),
        };

        Ok(Self {
            energy,
            information,
            decisions,
            lifestyle,
        })
    }

    /// The four-letter code, e.g. `"INTJ"`.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(4);
        code.push(match self.energy {
            Energy::Extraverted => 'E',
            Energy::Introverted => 'I',
        });
        code.push(match self.information {
            Information::Sensing => 'S',
            Information::Intuitive => 'N',
        });
        code.push(match self.decisions {
            Decisions::Thinking => 'T',
            Decisions::Feeling => 'F',
        });
        code.push(match self.lifestyle {
            Lifestyle::Judging => 'J',
            Lifestyle::Perceiving => 'P',
        });
        code
    }

    /// All 16 types, in E-before-I, S-before-N, T-before-F, J-before-P
    /// order.
    pub fn all() -> Vec<Self> {
        let mut out = Vec::with_capacity(16);
        for energy in [Energy::Extraverted, Energy::Introverted] {
            for information in [Information::Sensing, Information::Intuitive] {
                for decisions in [Decisions::Thinking, Decisions::Feeling] {
                    for lifestyle in [Lifestyle::Judging, Lifestyle::Perceiving] {
                        out.push(Self {
                            energy,
                            information,
                            decisions,
                            lifestyle,
                        });
                    }
                }
            }
        }
        out
    }
}

impl std::fmt::Display for MbtiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
