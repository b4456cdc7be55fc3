//! Password strength rating.
//!
//! Seven additive criteria: three length milestones and the presence
//! of each character class.

use serde::{Deserialize, Serialize};

const CRITERIA: u32 = 7;

/// Strength label, thresholded on the criteria percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthGrade {
    /// 약함 (below 40%).
    Weak,
    /// 보통 (40% to below 70%).
    Fair,
    /// 강함 (70% and up).
    Strong,
}

impl std::fmt::Display for StrengthGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Weak => "약함",
            Self::Fair => "보통",
            Self::Strong => "강함",
        };
        write!(f, "{label}")
    }
}

/// A strength rating: criteria met, percentage and grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    /// Criteria met, out of seven.
    pub score: u32,
    /// Score as a percentage of all criteria.
    pub percent: f64,
    /// Thresholded label.
    pub grade: StrengthGrade,
}

/// Rate a password against the seven criteria.
pub fn rate(password: &str) -> Strength {
    let len = password.chars().count();
    let mut score = 0;
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }
    if len >= 16 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let percent = f64::from(score) / f64::from(CRITERIA) * 100.0;
    let grade = if percent < 40.0 {
        StrengthGrade::Weak
    } else if percent < 70.0 {
        StrengthGrade::Fair
    } else {
        StrengthGrade::Strong
    };

    Strength {
        score,
        percent,
        grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_weak() {
        let s = rate("");
        assert_eq!(s.score, 0);
        assert_eq!(s.grade, StrengthGrade::Weak);
    }

    #[test]
    fn short_lowercase_only_is_weak() {
        // One criterion: lowercase present. 1/7 is under 40%.
        let s = rate("abc");
        assert_eq!(s.score, 1);
        assert_eq!(s.grade, StrengthGrade::Weak);
    }

    #[test]
    fn medium_mixed_is_fair() {
        // Length 8, lower, upper and digit: 4/7 is about 57%.
        let s = rate("Abcdef12");
        assert_eq!(s.score, 4);
        assert_eq!(s.grade, StrengthGrade::Fair);
    }

    #[test]
    fn long_full_mix_is_strong() {
        let s = rate("Abcdef12!Abcdef1");
        assert_eq!(s.score, 7);
        assert_eq!(s.grade, StrengthGrade::Strong);
        assert!((s.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn five_of_seven_crosses_the_strong_line() {
        // Length 12 with lower and digit: 5/7 is about 71%.
        let s = rate("abcdefghij12");
        assert_eq!(s.score, 5);
        assert_eq!(s.grade, StrengthGrade::Strong);
    }

    #[test]
    fn grade_labels_are_korean() {
        assert_eq!(StrengthGrade::Weak.to_string(), "약함");
        assert_eq!(StrengthGrade::Fair.to_string(), "보통");
        assert_eq!(StrengthGrade::Strong.to_string(), "강함");
    }
}
