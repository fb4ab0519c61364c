use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Behavioral category scored by the diagnostic. The set and its order are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    DecisionMaking,
    HabitDesign,
    Communication,
    Leadership,
    Motivation,
    EnvironmentDesign,
}

impl Domain {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::DecisionMaking,
            Self::HabitDesign,
            Self::Communication,
            Self::Leadership,
            Self::Motivation,
            Self::EnvironmentDesign,
        ]
    }

    /// Position in the fixed domain order.
    pub const fn index(self) -> usize {
        match self {
            Self::DecisionMaking => 0,
            Self::HabitDesign => 1,
            Self::Communication => 2,
            Self::Leadership => 3,
            Self::Motivation => 4,
            Self::EnvironmentDesign => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DecisionMaking => "意思決定",
            Self::HabitDesign => "習慣デザイン",
            Self::Communication => "コミュニケーション",
            Self::Leadership => "リーダーシップ",
            Self::Motivation => "モチベーション",
            Self::EnvironmentDesign => "環境デザイン",
        }
    }

    /// Polar angle in degrees used when plotting the radar chart.
    pub const fn angle(self) -> u16 {
        self.index() as u16 * 60
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub domain: Domain,
    pub text: &'static str,
}

/// A single answer on the 1-5 agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LikertScore(u8);

impl LikertScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Value substituted for unanswered questions.
    pub const NEUTRAL: Self = Self(3);

    pub fn new(score: i64) -> Result<Self, DiagnosticError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&score) {
            Ok(Self(score as u8))
        } else {
            Err(DiagnosticError::ScoreOutOfRange { score })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LikertScore {
    type Error = DiagnosticError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

/// In-memory answers for one session, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, LikertScore>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites the answer for `id`, returning the previous score.
    pub fn record(&mut self, id: QuestionId, score: LikertScore) -> Option<LikertScore> {
        self.answers.insert(id, score)
    }

    pub fn get(&self, id: QuestionId) -> Option<LikertScore> {
        self.answers.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, LikertScore)> + '_ {
        self.answers.iter().map(|(id, score)| (*id, *score))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
    #[error("score {score} is outside the 1-5 answer scale")]
    ScoreOutOfRange { score: i64 },
    #[error("question {id} does not exist")]
    UnknownQuestion { id: QuestionId },
    #[error("question {answered} answered while question {current} is active")]
    NotCurrentQuestion {
        answered: QuestionId,
        current: QuestionId,
    },
    #[error("no question is active; start the diagnostic first")]
    SessionNotActive,
    #[error("answers could not be read: {0}")]
    MalformedAnswers(String),
}
