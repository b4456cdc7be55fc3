//! Character classes and pool assembly.

use serde::{Deserialize, Serialize};

use crate::error::{PassgenError, PassgenResult};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character classes the generated password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetOptions {
    /// Include `A`-`Z`.
    pub uppercase: bool,
    /// Include `a`-`z`.
    pub lowercase: bool,
    /// Include `0`-`9`.
    pub digits: bool,
    /// Include punctuation symbols.
    pub symbols: bool,
}

impl Default for CharsetOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetOptions {
    /// Assemble the drawing pool, failing if every class is off.
    pub fn pool(&self) -> PassgenResult<Vec<char>> {
        let mut pool = Vec::new();
        if self.uppercase {
            pool.extend(UPPERCASE.chars());
        }
        if self.lowercase {
            pool.extend(LOWERCASE.chars());
        }
        if self.digits {
            pool.extend(DIGITS.chars());
        }
        if self.symbols {
            pool.extend(SYMBOLS.chars());
        }
        if pool.is_empty() {
            return Err(PassgenError::EmptyCharset);
        }
        Ok(pool)
    }
}
