//! Narrative profiles for the 16 types.

use crate::types::MbtiType;

/// A narrative profile: title, description, traits, suggested jobs and
/// the best-matching types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProfile {
    /// Four-letter code this profile describes.
    pub code: &'static str,
    /// Short Korean title, e.g. "전략가".
    pub title: &'static str,
    /// One-paragraph Korean description.
    pub description: &'static str,
    /// Four trait keywords.
    pub traits: [&'static str; 4],
    /// Five suggested occupations.
    pub jobs: [&'static str; 5],
    /// Three best-matching type codes.
    pub best_matches: [&'static str; 3],
}

const PROFILES: [TypeProfile; 16] = [
    TypeProfile {
        code: "INTJ",
        title: "전략가",
        description: "상상력이 풍부하고 전략적인 사고를 하는 사람입니다. 모든 일에 계획을 세우는 것을 좋아합니다.",
        traits: ["독립적", "분석적", "혁신적", "목표지향적"],
        jobs: ["과학자", "엔지니어", "프로그래머", "전략 컨설턴트", "건축가"],
        best_matches: ["ENFP", "ENTP", "INFJ"],
    },
    TypeProfile {
        code: "INTP",
        title: "논리술사",
        description: "혁신적인 발명가로, 지식에 대한 끊임없는 갈증을 가지고 있습니다.",
        traits: ["논리적", "분석적", "객관적", "창의적"],
        jobs: ["연구원", "프로그래머", "수학자", "철학자", "IT 전문가"],
        best_matches: ["ENTJ", "ENFJ", "INFJ"],
    },
    TypeProfile {
        code: "ENTJ",
        title: "통솔자",
        description: "대담하고 상상력이 풍부하며 강한 의지를 가진 지도자입니다.",
        traits: ["리더십", "결단력", "효율성", "전략적"],
        jobs: ["CEO", "변호사", "경영 컨설턴트", "정치인", "군인"],
        best_matches: ["INTP", "INFP", "INTJ"],
    },
    TypeProfile {
        code: "ENTP",
        title: "변론가",
        description: "똑똑하고 호기심 많은 사색가로, 지적 도전을 즐깁니다.",
        traits: ["혁신적", "카리스마", "다재다능", "논쟁 좋아함"],
        jobs: ["기업가", "변호사", "마케터", "발명가", "컨설턴트"],
        best_matches: ["INFJ", "INTJ", "ENFJ"],
    },
    TypeProfile {
        code: "INFJ",
        title: "옹호자",
        description: "선의의 지지자이며, 조용하지만 영감을 주는 이상주의자입니다.",
        traits: ["이상주의적", "통찰력", "공감능력", "헌신적"],
        jobs: ["상담사", "작가", "교사", "HR 전문가", "심리학자"],
        best_matches: ["ENFP", "ENTP", "INTJ"],
    },
    TypeProfile {
        code: "INFP",
        title: "중재자",
        description: "항상 선을 행할 준비가 되어 있는 이타적이고 부드러운 사람입니다.",
        traits: ["이상주의적", "창의적", "공감적", "열정적"],
        jobs: ["작가", "예술가", "상담사", "사회복지사", "디자이너"],
        best_matches: ["ENFJ", "ENTJ", "INFJ"],
    },
    TypeProfile {
        code: "ENFJ",
        title: "선도자",
        description: "카리스마 있고 영감을 주는 지도자로, 듣는 이들을 사로잡습니다.",
        traits: ["카리스마", "이타적", "설득력", "공감능력"],
        jobs: ["교사", "HR 관리자", "정치인", "코치", "상담사"],
        best_matches: ["INFP", "ISFP", "INTP"],
    },
    TypeProfile {
        code: "ENFP",
        title: "활동가",
        description: "열정적이고 창의적인 사교적 자유로운 영혼입니다.",
        traits: ["열정적", "창의적", "사교적", "긍정적"],
        jobs: ["배우", "마케터", "기자", "상담사", "이벤트 플래너"],
        best_matches: ["INTJ", "INFJ", "ENTJ"],
    },
    TypeProfile {
        code: "ISTJ",
        title: "현실주의자",
        description: "사실을 중시하는 신뢰할 수 있고 실용적인 사람입니다.",
        traits: ["책임감", "조직적", "신뢰성", "실용적"],
        jobs: ["회계사", "공무원", "은행원", "관리자", "경찰"],
        best_matches: ["ESFP", "ESTP", "ISFJ"],
    },
    TypeProfile {
        code: "ISFJ",
        title: "수호자",
        description: "헌신적이고 따뜻한 수호자로, 언제나 사랑하는 사람을 지킬 준비가 되어 있습니다.",
        traits: ["헌신적", "세심함", "배려심", "책임감"],
        jobs: ["간호사", "교사", "사서", "행정직", "사회복지사"],
        best_matches: ["ESFP", "ESTP", "ISTJ"],
    },
    TypeProfile {
        code: "ESTJ",
        title: "경영자",
        description: "뛰어난 관리자로, 사물이나 사람을 관리하는 데 탁월합니다.",
        traits: ["조직력", "책임감", "현실적", "결단력"],
        jobs: ["경영자", "판사", "군인", "경찰관", "은행 관리자"],
        best_matches: ["ISFP", "ISTP", "ISTJ"],
    },
    TypeProfile {
        code: "ESFJ",
        title: "집정관",
        description: "배려심 깊고 사교적이며 인기가 많은 사람입니다.",
        traits: ["사교적", "배려심", "협조적", "책임감"],
        jobs: ["간호사", "교사", "영업사원", "HR 담당자", "이벤트 기획자"],
        best_matches: ["ISFP", "ISTP", "ISFJ"],
    },
    TypeProfile {
        code: "ISTP",
        title: "장인",
        description: "대담하고 실용적인 사고를 하는 장인입니다.",
        traits: ["독립적", "실용적", "논리적", "유연함"],
        jobs: ["엔지니어", "정비사", "운동선수", "소방관", "파일럿"],
        best_matches: ["ESFJ", "ESTJ", "ISFP"],
    },
    TypeProfile {
        code: "ISFP",
        title: "모험가",
        description: "유연하고 매력적인 예술가로, 항상 새로운 것을 탐구할 준비가 되어 있습니다.",
        traits: ["예술적", "유연함", "친절함", "낙천적"],
        jobs: ["예술가", "디자이너", "음악가", "사진작가", "요리사"],
        best_matches: ["ENFJ", "ESFJ", "ESTJ"],
    },
    TypeProfile {
        code: "ESTP",
        title: "사업가",
        description: "영리하고 에너지 넘치며 매우 민첩한 사람입니다.",
        traits: ["활동적", "현실적", "대담함", "사교적"],
        jobs: ["영업사원", "기업가", "운동선수", "소방관", "경찰"],
        best_matches: ["ISFJ", "ISTJ", "ESFP"],
    },
    TypeProfile {
        code: "ESFP",
        title: "연예인",
        description: "자발적이고 열정적이며 사교적인 사람입니다.",
        traits: ["사교적", "활발함", "즐거움", "친화력"],
        jobs: ["배우", "이벤트 기획자", "가이드", "영업사원", "코디네이터"],
        best_matches: ["ISTJ", "ISFJ", "ESTP"],
    },
];

/// Look up the profile for a type. Unknown codes fall back to INFP.
pub fn profile_for(mbti: MbtiType) -> &'static TypeProfile {
    let profiles: &'static [TypeProfile; 16] = &PROFILES;
    let code = mbti.code();
    profiles
        .iter()
        .find(|p| p.code == code)
        .unwrap_or(&profiles[5])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_profile() {
        for t in MbtiType::all() {
            assert_eq!(profile_for(t).code, t.code());
        }
    }

    #[test]
    fn profile_fields_are_complete() {
        for t in MbtiType::all() {
            let p = profile_for(t);
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(p.traits.iter().all(|s| !s.is_empty()));
            assert!(p.jobs.iter().all(|s| !s.is_empty()));
            for m in p.best_matches {
                assert!(MbtiType::parse(m).is_ok(), "{m} should be a valid type");
            }
        }
    }

    #[test]
    fn intj_profile_matches_table() {
        let p = profile_for(MbtiType::parse("INTJ").unwrap());
        assert_eq!(p.title, "전략가");
        assert_eq!(p.best_matches, ["ENFP", "ENTP", "INFJ"]);
    }
}
