//! Compatibility between two types.
//!
//! Well-known pairs carry curated write-ups. Matching a type with
//! itself uses a fixed same-type reading. Everything else is derived
//! from axis agreement rules, with lightly jittered detail scores.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::types::MbtiType;

/// Compatibility grade, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// 천생연분 (curated top pairs only).
    Soulmate,
    /// 매우 좋음 (score 85 and up).
    Excellent,
    /// 좋음 (70 to 84).
    Good,
    /// 보통 (55 to 69).
    Fair,
    /// 노력 필요 (below 55).
    NeedsWork,
}

impl Grade {
    /// Grade for a derived score.
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 55 {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Soulmate => "천생연분",
            Self::Excellent => "매우 좋음",
            Self::Good => "좋음",
            Self::Fair => "보통",
            Self::NeedsWork => "노력 필요",
        };
        write!(f, "{label}")
    }
}

/// Per-aspect scores out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailScores {
    /// 의사소통.
    pub communication: u32,
    /// 감정 교류.
    pub emotion: u32,
    /// 가치관.
    pub value: u32,
    /// 협력.
    pub cooperation: u32,
}

/// A full compatibility reading for a pair of types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    /// First type of the pair.
    pub first: MbtiType,
    /// Second type of the pair.
    pub second: MbtiType,
    /// Overall score out of 100.
    pub score: u32,
    /// Grade label for the score.
    pub grade: Grade,
    /// One-paragraph overall assessment.
    pub overall: String,
    /// What works well in this pairing.
    pub strengths: Vec<String>,
    /// What to watch out for.
    pub weaknesses: Vec<String>,
    /// Relationship advice.
    pub advice: String,
    /// Per-aspect breakdown.
    pub details: DetailScores,
}

struct CuratedEntry {
    pair: (&'static str, &'static str),
    score: u32,
    grade: Grade,
    overall: &'static str,
    strengths: [&'static str; 3],
    weaknesses: [&'static str; 2],
    advice: &'static str,
    details: DetailScores,
}

const CURATED: [CuratedEntry; 3] = [
    CuratedEntry {
        pair: ("ENFP", "INTJ"),
        score: 95,
        grade: Grade::Soulmate,
        overall: "ENFP와 INTJ는 서로를 완벽하게 보완하는 이상적인 조합입니다. ENFP의 창의성과 열정이 INTJ의 전략적 사고와 만나 시너지를 발휘합니다.",
        strengths: [
            "ENFP의 창의력과 INTJ의 논리력이 완벽한 조화를 이룹니다",
            "서로의 약점을 보완하며 함께 성장할 수 있습니다",
            "ENFP가 INTJ의 감성을, INTJ가 ENFP의 이성을 깨워줍니다",
        ],
        weaknesses: [
            "ENFP의 즉흥성과 INTJ의 계획성이 충돌할 수 있습니다",
            "감정 표현 방식의 차이로 오해가 생길 수 있습니다",
        ],
        advice: "ENFP는 INTJ에게 더 많은 감정 표현을, INTJ는 ENFP에게 구체적인 계획을 제시해주세요. 서로의 차이를 매력으로 받아들이면 완벽한 파트너가 될 수 있습니다.",
        details: DetailScores {
            communication: 92,
            emotion: 88,
            value: 95,
            cooperation: 90,
        },
    },
    CuratedEntry {
        pair: ("INFP", "ENFJ"),
        score: 93,
        grade: Grade::Soulmate,
        overall: "INFP와 ENFJ는 깊은 감정적 교감과 이상주의를 공유하는 환상의 조합입니다. 서로를 깊이 이해하고 지지할 수 있습니다.",
        strengths: [
            "깊은 감정적 유대감을 형성할 수 있습니다",
            "이상과 가치관을 공유하며 함께 꿈을 이룰 수 있습니다",
            "ENFJ의 리더십과 INFP의 창의력이 조화롭습니다",
        ],
        weaknesses: [
            "둘 다 감정적이어서 객관성이 부족할 수 있습니다",
            "현실적인 문제에서 어려움을 겪을 수 있습니다",
        ],
        advice: "감정을 공유하되 때로는 객관적인 시각도 필요합니다. 서로의 감성을 존중하며 현실적인 목표도 함께 세워보세요.",
        details: DetailScores {
            communication: 95,
            emotion: 98,
            value: 92,
            cooperation: 88,
        },
    },
    CuratedEntry {
        pair: ("ESTP", "ISFJ"),
        score: 88,
        grade: Grade::Excellent,
        overall: "ESTP의 활동적인 에너지와 ISFJ의 안정적인 지원이 균형을 이루는 조합입니다.",
        strengths: [
            "ESTP의 모험심과 ISFJ의 신중함이 균형을 이룹니다",
            "ISFJ가 ESTP에게 안정감을, ESTP가 ISFJ에게 활력을 줍니다",
            "서로 다른 강점으로 보완적인 관계를 만듭니다",
        ],
        weaknesses: [
            "생활 방식과 우선순위가 다를 수 있습니다",
            "ESTP의 즉흥성과 ISFJ의 계획성이 충돌할 수 있습니다",
        ],
        advice: "ESTP는 ISFJ의 배려를 존중하고, ISFJ는 ESTP의 도전정신을 응원해주세요. 중간 지점을 찾는 노력이 필요합니다.",
        details: DetailScores {
            communication: 85,
            emotion: 82,
            value: 88,
            cooperation: 90,
        },
    },
];

/// Assess the compatibility of two types.
///
/// The result is curated for well-known pairs, fixed for same-type
/// pairs and derived from axis agreement otherwise. The randomness
/// only feathers the derived per-aspect detail scores.
pub fn assess(first: MbtiType, second: MbtiType, rng: &mut StdRng) -> Compatibility {
    let (a, b) = (first.code(), second.code());
    if let Some(entry) = CURATED
        .iter()
        .find(|e| e.pair == (a.as_str(), b.as_str()) || e.pair == (b.as_str(), a.as_str()))
    {
        return Compatibility {
            first,
            second,
            score: entry.score,
            grade: entry.grade,
            overall: entry.overall.to_string(),
            strengths: entry.strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: entry.weaknesses.iter().map(|s| s.to_string()).collect(),
            advice: entry.advice.to_string(),
            details: entry.details,
        };
    }

    if first == second {
        return same_type(first, second);
    }

    derived(first, second, rng)
}

fn same_type(first: MbtiType, second: MbtiType) -> Compatibility {
    Compatibility {
        first,
        second,
        score: 85,
        grade: Grade::Excellent,
        overall: "같은 성격 유형으로 서로를 잘 이해할 수 있습니다. 비슷한 가치관과 사고방식을 공유하여 편안한 관계를 유지할 수 있습니다."
            .to_string(),
        strengths: vec![
            "서로의 생각과 감정을 쉽게 이해할 수 있습니다".to_string(),
            "비슷한 관심사와 취미를 공유할 수 있습니다".to_string(),
            "의사소통이 원활하고 갈등이 적습니다".to_string(),
        ],
        weaknesses: vec![
            "같은 약점을 가지고 있어 서로 보완하기 어려울 수 있습니다".to_string(),
            "새로운 관점이나 다양성이 부족할 수 있습니다".to_string(),
        ],
        advice: "서로의 유사성을 장점으로 활용하되, 각자의 개성과 성장을 존중해주세요. 때로는 다른 시각을 가진 사람들과의 교류도 도움이 됩니다."
            .to_string(),
        details: DetailScores {
            communication: 90,
            emotion: 85,
            value: 90,
            cooperation: 80,
        },
    }
}

fn derived(first: MbtiType, second: MbtiType, rng: &mut StdRng) -> Compatibility {
    let mut score: u32 = 50;
    // Opposite outer-energy and decision styles complement each other;
    // a shared perceiving function keeps the pair on the same page.
    if first.energy != second.energy {
        score += 10;
    }
    if first.information == second.information {
        score += 15;
    }
    if first.decisions != second.decisions {
        score += 10;
    }
    if first.lifestyle != second.lifestyle {
        score += 10;
    }
    score = score.min(100);

    let detail = |rng: &mut StdRng| {
        let jittered = f64::from(score) + rng.random_range(-5.0..5.0);
        jittered.min(100.0).round() as u32
    };

    Compatibility {
        first,
        second,
        score,
        grade: Grade::from_score(score),
        overall: format!(
            "{}과 {}의 조합은 서로 다른 강점을 가지고 있어 보완적인 관계를 만들 수 있습니다. 서로의 차이를 이해하고 존중한다면 좋은 관계를 유지할 수 있습니다.",
            first.code(),
            second.code()
        ),
        strengths: vec![
            "서로 다른 관점을 통해 새로운 것을 배울 수 있습니다".to_string(),
            "각자의 강점으로 서로를 보완할 수 있습니다".to_string(),
            "다양한 경험과 성장의 기회를 제공합니다".to_string(),
        ],
        weaknesses: vec![
            "의사소통 방식의 차이로 오해가 생길 수 있습니다".to_string(),
            "우선순위나 가치관의 차이를 조율해야 합니다".to_string(),
            "서로의 성격 차이를 이해하는 노력이 필요합니다".to_string(),
        ],
        advice: "서로의 차이를 단점이 아닌 다양성으로 받아들이세요. 열린 마음으로 대화하고, 상대방의 입장에서 생각해보는 노력이 관계를 더욱 돈독하게 만들 것입니다."
            .to_string(),
        details: DetailScores {
            communication: detail(rng),
            emotion: detail(rng),
            value: detail(rng),
            cooperation: detail(rng),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn t(code: &str) -> MbtiType {
        MbtiType::parse(code).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn curated_pair_is_returned_verbatim() {
        let c = assess(t("ENFP"), t("INTJ"), &mut rng());
        assert_eq!(c.score, 95);
        assert_eq!(c.grade, Grade::Soulmate);
        assert_eq!(c.details.communication, 92);
        assert_eq!(c.strengths.len(), 3);
    }

    #[test]
    fn curated_lookup_is_symmetric() {
        let ab = assess(t("ISFJ"), t("ESTP"), &mut rng());
        assert_eq!(ab.score, 88);
        assert_eq!(ab.grade, Grade::Excellent);
        assert_eq!(ab.first, t("ISFJ"));
    }

    #[test]
    fn same_type_uses_fixed_reading() {
        let c = assess(t("ISTP"), t("ISTP"), &mut rng());
        assert_eq!(c.score, 85);
        assert_eq!(c.grade, Grade::Excellent);
        assert_eq!(
            c.details,
            DetailScores {
                communication: 90,
                emotion: 85,
                value: 90,
                cooperation: 80,
            }
        );
    }

    #[test]
    fn derived_score_follows_axis_rules() {
        // INTJ vs ESFP: E/I differ (+10), S/N differ (+0),
        // T/F differ (+10), J/P differ (+10).
        let c = assess(t("INTJ"), t("ESFP"), &mut rng());
        assert_eq!(c.score, 80);
        assert_eq!(c.grade, Grade::Good);

        // ISTJ vs ESFP: E/I differ (+10), shared sensing (+15),
        // T/F differ (+10), J/P differ (+10).
        let c = assess(t("ISTJ"), t("ESFP"), &mut rng());
        assert_eq!(c.score, 95);
        assert_eq!(c.grade, Grade::Excellent);

        // INTJ vs INTP: shared intuition (+15), J/P differ (+10).
        let c = assess(t("INTJ"), t("INTP"), &mut rng());
        assert_eq!(c.score, 75);

        // ISTJ vs INTJ: S/N differ and everything else matches,
        // so no bonus applies.
        let c = assess(t("ISTJ"), t("INTJ"), &mut rng());
        assert_eq!(c.score, 50);
        assert_eq!(c.grade, Grade::NeedsWork);
    }

    #[test]
    fn derived_details_stay_near_the_score() {
        let c = assess(t("INTJ"), t("ESFP"), &mut rng());
        for d in [
            c.details.communication,
            c.details.emotion,
            c.details.value,
            c.details.cooperation,
        ] {
            assert!(d >= c.score - 5 && d <= c.score + 5, "{d} too far from {}", c.score);
            assert!(d <= 100);
        }
    }

    #[test]
    fn derived_is_deterministic_under_a_fixed_seed() {
        let a = assess(t("ENTP"), t("ISFP"), &mut rng());
        let b = assess(t("ENTP"), t("ISFP"), &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::Excellent);
        assert_eq!(Grade::from_score(85), Grade::Excellent);
        assert_eq!(Grade::from_score(84), Grade::Good);
        assert_eq!(Grade::from_score(70), Grade::Good);
        assert_eq!(Grade::from_score(69), Grade::Fair);
        assert_eq!(Grade::from_score(55), Grade::Fair);
        assert_eq!(Grade::from_score(54), Grade::NeedsWork);
        assert_eq!(Grade::from_score(0), Grade::NeedsWork);
    }

    #[test]
    fn assessment_round_trips_through_json() {
        let c = assess(t("ENFP"), t("INTJ"), &mut rng());
        let json = serde_json::to_string(&c).unwrap();
        let back: Compatibility = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn grade_labels_are_korean() {
        assert_eq!(Grade::Soulmate.to_string(), "천생연분");
        assert_eq!(Grade::NeedsWork.to_string(), "노력 필요");
    }
}
