//! Character, word and line counting.

use serde::{Deserialize, Serialize};

/// What to include in the total character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Count whitespace characters.
    pub include_spaces: bool,
    /// Count line break characters.
    pub include_line_breaks: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            include_spaces: true,
            include_line_breaks: true,
        }
    }
}

/// Computed statistics for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Characters counted under the given options.
    pub total_chars: usize,
    /// Characters with all whitespace removed.
    pub chars_no_spaces: usize,
    /// Whitespace-separated words.
    pub words: usize,
    /// Lines; empty text has zero.
    pub lines: usize,
}

/// Compute all statistics for `text`.
pub fn analyze(text: &str, options: CountOptions) -> TextStats {
    TextStats {
        total_chars: total_chars(text, options),
        chars_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
        lines: if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
    }
}

fn total_chars(text: &str, options: CountOptions) -> usize {
    // Excluding spaces also drops line breaks, since they are
    // whitespace themselves.
    if !options.include_spaces {
        text.chars().filter(|c| !c.is_whitespace()).count()
    } else if !options.include_line_breaks {
        text.chars().filter(|&c| c != '\n').count()
    } else {
        text.chars().count()
    }
}
