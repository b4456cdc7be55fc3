//! The question bank and answer tally.

use serde::{Deserialize, Serialize};

use crate::error::{MbtiError, MbtiResult};
use crate::types::{Decisions, Energy, Information, Lifestyle, MbtiType};

/// One of the eight axis letters an answer contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    /// Extraverted.
    E,
    /// Introverted.
    I,
    /// Sensing.
    S,
    /// Intuitive.
    N,
    /// Thinking.
    T,
    /// Feeling.
    F,
    /// Judging.
    J,
    /// Perceiving.
    P,
}

/// An answer option: its display text and the letter it votes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// Korean answer text shown to the user.
    pub text: &'static str,
    /// The letter this answer counts toward.
    pub letter: Letter,
}

/// Which of a question's two answers was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    /// The first answer.
    First,
    /// The second answer.
    Second,
}

/// A binary question with two answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Korean question prompt.
    pub prompt: &'static str,
    /// First answer option.
    pub first: Answer,
    /// Second answer option.
    pub second: Answer,
}

impl Question {
    /// The answer a given choice selects.
    pub fn answer(&self, choice: Choice) -> &Answer {
        match choice {
            Choice::First => &self.first,
            Choice::Second => &self.second,
        }
    }
}

/// The fixed test: three questions per axis, twelve in total.
pub const QUESTIONS: [Question; 12] = [
    Question {
        prompt: "주말에 에너지를 충전하는 방법은?",
        first: Answer {
            text: "친구들과 만나서 함께 시간을 보낸다",
            letter: Letter::E,
        },
        second: Answer {
            text: "집에서 혼자 조용히 시간을 보낸다",
            letter: Letter::I,
        },
    },
    Question {
        prompt: "새로운 사람들을 만날 때 나는?",
        first: Answer {
            text: "먼저 다가가서 말을 건다",
            letter: Letter::E,
        },
        second: Answer {
            text: "상대방이 먼저 말을 걸기를 기다린다",
            letter: Letter::I,
        },
    },
    Question {
        prompt: "팀 프로젝트를 할 때 나는?",
        first: Answer {
            text: "여러 사람과 의견을 나누며 진행한다",
            letter: Letter::E,
        },
        second: Answer {
            text: "혼자 생각을 정리한 후 공유한다",
            letter: Letter::I,
        },
    },
    Question {
        prompt: "문제를 해결할 때 나는?",
        first: Answer {
            text: "현재 상황과 실제 데이터에 집중한다",
            letter: Letter::S,
        },
        second: Answer {
            text: "미래 가능성과 패턴을 찾는다",
            letter: Letter::N,
        },
    },
    Question {
        prompt: "새로운 것을 배울 때 선호하는 방법은?",
        first: Answer {
            text: "구체적인 예시와 실습을 통해 배운다",
            letter: Letter::S,
        },
        second: Answer {
            text: "전체적인 개념과 이론을 먼저 이해한다",
            letter: Letter::N,
        },
    },
    Question {
        prompt: "대화를 할 때 나는?",
        first: Answer {
            text: "구체적이고 상세한 내용을 말한다",
            letter: Letter::S,
        },
        second: Answer {
            text: "큰 그림과 아이디어 위주로 말한다",
            letter: Letter::N,
        },
    },
    Question {
        prompt: "친구가 고민을 털어놓을 때 나는?",
        first: Answer {
            text: "논리적인 해결책을 제시한다",
            letter: Letter::T,
        },
        second: Answer {
            text: "공감하며 위로를 먼저 한다",
            letter: Letter::F,
        },
    },
    Question {
        prompt: "의사 결정을 할 때 중요한 것은?",
        first: Answer {
            text: "객관적인 사실과 효율성",
            letter: Letter::T,
        },
        second: Answer {
            text: "사람들의 감정과 가치",
            letter: Letter::F,
        },
    },
    Question {
        prompt: "피드백을 줄 때 나는?",
        first: Answer {
            text: "직접적이고 솔직하게 말한다",
            letter: Letter::T,
        },
        second: Answer {
            text: "상대방 기분을 배려하며 말한다",
            letter: Letter::F,
        },
    },
    Question {
        prompt: "여행을 계획할 때 나는?",
        first: Answer {
            text: "상세한 일정표를 미리 만든다",
            letter: Letter::J,
        },
        second: Answer {
            text: "즉흥적으로 그때그때 정한다",
            letter: Letter::P,
        },
    },
    Question {
        prompt: "업무를 처리하는 방식은?",
        first: Answer {
            text: "마감일보다 미리 끝낸다",
            letter: Letter::J,
        },
        second: Answer {
            text: "마감일에 맞춰서 한다",
            letter: Letter::P,
        },
    },
    Question {
        prompt: "일상생활에서 나는?",
        first: Answer {
            text: "계획적이고 규칙적이다",
            letter: Letter::J,
        },
        second: Answer {
            text: "유연하고 자유롭다",
            letter: Letter::P,
        },
    },
];

/// Running vote counts across the eight letters.
///
/// Ties on an axis resolve to the first letter of the pair (E, S, T, J).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 8],
    answered: u32,
}

impl Tally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one letter vote.
    pub fn record(&mut self, letter: Letter) {
        self.counts[letter as usize] += 1;
        self.answered += 1;
    }

    /// Votes recorded for a letter.
    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[letter as usize]
    }

    /// Answers recorded so far.
    pub fn answered(&self) -> u32 {
        self.answered
    }

    /// Resolve the tally into a type once every question is answered.
    pub fn resolve(&self) -> MbtiResult<MbtiType> {
        let expected = QUESTIONS.len() as u32;
        if self.answered != expected {
            return Err(MbtiError::IncompleteTest {
                answered: self.answered,
                expected,
            });
        }
        Ok(MbtiType {
            energy: if self.count(Letter::E) >= self.count(Letter::I) {
                Energy::Extraverted
            } else {
                Energy::Introverted
            },
            information: if self.count(Letter::S) >= self.count(Letter::N) {
                Information::Sensing
            } else {
                Information::Intuitive
            },
            decisions: if self.count(Letter::T) >= self.count(Letter::F) {
                Decisions::Thinking
            } else {
                Decisions::Feeling
            },
            lifestyle: if self.count(Letter::J) >= self.count(Letter::P) {
                Lifestyle::Judging
            } else {
                Lifestyle::Perceiving
            },
        })
    }
}
