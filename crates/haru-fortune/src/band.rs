//! Threshold band tables for each fortune category.
//!
//! Each table is sorted descending by threshold; the first band whose
//! threshold does not exceed the score is selected. The last band has
//! threshold 0 and acts as the catch-all.

use crate::profile::Gender;

/// A themed reading category with its seed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Overall daily reading (offset 0).
    Overall,
    /// Love reading (offset 1).
    Love,
    /// Money reading (offset 2).
    Money,
    /// Health reading (offset 3).
    Health,
    /// Career reading (offset 4).
    Career,
}

impl Category {
    /// Offset added to the base seed for this category's jitter draw.
    pub fn offset(self) -> i64 {
        match self {
            Self::Overall => 0,
            Self::Love => 1,
            Self::Money => 2,
            Self::Health => 3,
            Self::Career => 4,
        }
    }
}

/// Offset added to the base seed for the lucky item draws.
pub const LUCKY_OFFSET: i64 = 5;

/// A narrative band for the overall reading.
#[derive(Debug, Clone, Copy)]
pub struct OverallBand {
    /// Minimum score for this band to apply.
    pub min: u32,
    /// Narrative text.
    pub text: &'static str,
    /// Keyword tags shown alongside the narrative.
    pub keywords: [&'static str; 4],
}

/// A narrative band for a themed reading (love, money, health, career).
#[derive(Debug, Clone, Copy)]
pub struct CategoryBand {
    /// Minimum score for this band to apply.
    pub min: u32,
    /// Narrative text.
    pub text: &'static str,
    /// One-line actionable tip.
    pub tip: &'static str,
}

/// Overall reading bands.
pub const OVERALL_BANDS: [OverallBand; 4] = [
    OverallBand {
        min: 90,
        text: "오늘은 매우 좋은 하루가 될 것입니다. 모든 일이 순조롭게 풀리고, 예상치 못한 행운이 찾아올 수 있습니다. 긍정적인 마음가짐으로 하루를 시작하세요.",
        keywords: ["행운", "성공", "기쁨", "만남"],
    },
    OverallBand {
        min: 75,
        text: "전반적으로 좋은 운세입니다. 주변 사람들과의 관계가 원만하고, 하던 일이 잘 풀릴 것입니다. 새로운 시도를 해보기에도 좋은 날입니다.",
        keywords: ["안정", "화합", "발전", "소통"],
    },
    OverallBand {
        min: 60,
        text: "평범하지만 안정적인 하루가 예상됩니다. 무리하지 않고 차분하게 하루를 보내는 것이 좋겠습니다. 작은 행복을 찾아보세요.",
        keywords: ["평온", "휴식", "성찰", "균형"],
    },
    OverallBand {
        min: 0,
        text: "조금은 주의가 필요한 날입니다. 서두르거나 무리하지 말고, 신중하게 행동하세요. 어려움이 있더라도 긍정적으로 극복할 수 있습니다.",
        keywords: ["인내", "신중", "극복", "성장"],
    },
];

const LOVE_BANDS_MALE: [CategoryBand; 4] = [
    CategoryBand {
        min: 85,
        text: "이성에게 호감을 살 수 있는 날입니다. 용기를 내어 마음을 표현해보세요. 솔로라면 새로운 만남의 기회가 있을 수 있습니다.",
        tip: "진심을 담은 대화를 나눠보세요",
    },
    CategoryBand {
        min: 70,
        text: "연인과의 관계가 안정적입니다. 작은 선물이나 따뜻한 말 한마디가 관계를 더욱 돈독하게 만들어줄 것입니다.",
        tip: "함께하는 시간을 소중히 여기세요",
    },
    CategoryBand {
        min: 55,
        text: "감정의 기복이 있을 수 있습니다. 서로를 이해하려는 노력이 필요한 시기입니다. 인내심을 가지고 대화하세요.",
        tip: "상대방의 입장에서 생각해보세요",
    },
    CategoryBand {
        min: 0,
        text: "오해가 생길 수 있으니 신중한 언행이 필요합니다. 감정적으로 대응하기보다는 이성적으로 접근하세요.",
        tip: "차분하게 마음을 가라앉히고 대화하세요",
    },
];

// Only the top band differs by gender.
const LOVE_BANDS_FEMALE: [CategoryBand; 4] = [
    CategoryBand {
        min: 85,
        text: "매력이 빛나는 날입니다. 주변 사람들에게 좋은 인상을 남길 수 있습니다. 커플이라면 더욱 깊은 유대감을 느낄 수 있습니다.",
        tip: "진심을 담은 대화를 나눠보세요",
    },
    LOVE_BANDS_MALE[1],
    LOVE_BANDS_MALE[2],
    LOVE_BANDS_MALE[3],
];

/// Love reading bands for the given gender.
pub fn love_bands(gender: Gender) -> &'static [CategoryBand; 4] {
    match gender {
        Gender::Male => &LOVE_BANDS_MALE,
        Gender::Female => &LOVE_BANDS_FEMALE,
    }
}

/// Money reading bands.
pub const MONEY_BANDS: [CategoryBand; 4] = [
    CategoryBand {
        min: 85,
        text: "금전적으로 좋은 소식이 있을 수 있습니다. 투자나 재테크에 관심을 가져보세요. 다만 신중한 판단은 필수입니다.",
        tip: "여유 자금으로 장기적인 투자를 고려해보세요",
    },
    CategoryBand {
        min: 70,
        text: "수입과 지출의 균형이 잘 맞는 시기입니다. 계획적인 소비가 미래의 재정 안정을 가져다줄 것입니다.",
        tip: "가계부를 작성하며 지출을 체크해보세요",
    },
    CategoryBand {
        min: 55,
        text: "예상치 못한 지출이 있을 수 있습니다. 충동구매를 자제하고 필요한 것만 구입하세요.",
        tip: "불필요한 구독 서비스를 정리해보세요",
    },
    CategoryBand {
        min: 0,
        text: "금전 관리에 각별히 신경 써야 하는 시기입니다. 큰 지출은 미루고, 저축을 우선시하세요.",
        tip: "현금 사용을 늘려 지출을 줄여보세요",
    },
];

/// Health reading bands.
pub const HEALTH_BANDS: [CategoryBand; 4] = [
    CategoryBand {
        min: 85,
        text: "컨디션이 최상입니다. 활력이 넘치는 하루가 될 것입니다. 운동이나 야외 활동을 즐기기에 좋은 날입니다.",
        tip: "새로운 운동을 시작해보세요",
    },
    CategoryBand {
        min: 70,
        text: "전반적으로 건강 상태가 양호합니다. 규칙적인 생활 습관을 유지하면 더욱 좋은 컨디션을 유지할 수 있습니다.",
        tip: "충분한 수분 섭취를 하세요",
    },
    CategoryBand {
        min: 55,
        text: "피로가 쌓일 수 있습니다. 충분한 휴식과 수면이 필요한 시기입니다. 무리하지 마세요.",
        tip: "스트레칭으로 몸을 풀어주세요",
    },
    CategoryBand {
        min: 0,
        text: "건강 관리에 신경 써야 합니다. 작은 증상도 방치하지 말고 적절히 대처하세요. 충분한 휴식이 필요합니다.",
        tip: "불편한 증상이 있다면 병원을 방문하세요",
    },
];

/// Career reading bands.
pub const CAREER_BANDS: [CategoryBand; 4] = [
    CategoryBand {
        min: 85,
        text: "업무에서 좋은 성과를 낼 수 있는 날입니다. 적극적으로 의견을 제시하고 새로운 프로젝트에 도전해보세요.",
        tip: "상사나 동료와 적극적으로 소통하세요",
    },
    CategoryBand {
        min: 70,
        text: "업무가 순조롭게 진행될 것입니다. 동료들과의 협업이 좋은 결과를 가져다줄 것입니다.",
        tip: "팀워크를 강화할 수 있는 시간을 가져보세요",
    },
    CategoryBand {
        min: 55,
        text: "일이 계획대로 풀리지 않을 수 있습니다. 인내심을 가지고 차근차근 해결해나가세요.",
        tip: "우선순위를 정하고 중요한 일부터 처리하세요",
    },
    CategoryBand {
        min: 0,
        text: "업무상 어려움이 있을 수 있습니다. 혼자 해결하려 하지 말고 동료나 상사에게 조언을 구하세요.",
        tip: "문제를 정확히 파악하고 도움을 요청하세요",
    },
];

/// Select the overall band for a score.
pub fn pick_overall(score: u32) -> &'static OverallBand {
    let bands: &'static [OverallBand; 4] = &OVERALL_BANDS;
    bands.iter().find(|b| score >= b.min).unwrap_or(&bands[3])
}

/// Select the themed band for a score.
pub fn pick(bands: &'static [CategoryBand; 4], score: u32) -> &'static CategoryBand {
    bands.iter().find(|b| score >= b.min).unwrap_or(&bands[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_sorted_descending_with_catch_all() {
        fn check(bands: &[CategoryBand; 4]) {
            for pair in bands.windows(2) {
                assert!(pair[0].min > pair[1].min);
            }
            assert_eq!(bands[3].min, 0);
        }
        check(love_bands(Gender::Male));
        check(love_bands(Gender::Female));
        check(&MONEY_BANDS);
        check(&HEALTH_BANDS);
        check(&CAREER_BANDS);

        for pair in OVERALL_BANDS.windows(2) {
            assert!(pair[0].min > pair[1].min);
        }
        assert_eq!(OVERALL_BANDS[3].min, 0);
    }

    #[test]
    fn high_score_selects_top_band() {
        assert_eq!(pick_overall(95).min, 90);
        assert_eq!(pick(&MONEY_BANDS, 95).min, 85);
        assert_eq!(pick(&HEALTH_BANDS, 85).min, 85);
    }

    #[test]
    fn low_score_selects_catch_all() {
        assert_eq!(pick_overall(45).min, 0);
        assert_eq!(pick(&MONEY_BANDS, 45).min, 0);
        assert_eq!(pick(&CAREER_BANDS, 0).min, 0);
    }

    #[test]
    fn mid_scores_select_matching_band() {
        assert_eq!(pick_overall(75).min, 75);
        assert_eq!(pick_overall(74).min, 60);
        assert_eq!(pick(&CAREER_BANDS, 70).min, 70);
        assert_eq!(pick(&CAREER_BANDS, 69).min, 55);
    }

    #[test]
    fn love_top_band_differs_by_gender() {
        let male = love_bands(Gender::Male);
        let female = love_bands(Gender::Female);
        assert_ne!(male[0].text, female[0].text);
        assert_eq!(male[1].text, female[1].text);
        assert_eq!(male[0].tip, female[0].tip);
    }

    #[test]
    fn category_offsets() {
        assert_eq!(Category::Overall.offset(), 0);
        assert_eq!(Category::Love.offset(), 1);
        assert_eq!(Category::Money.offset(), 2);
        assert_eq!(Category::Health.offset(), 3);
        assert_eq!(Category::Career.offset(), 4);
        assert_eq!(LUCKY_OFFSET, 5);
    }
}
