use super::bank::{DomainStep, QuestionBank};
use super::domain::{AnswerSheet, DiagnosticError, LikertScore, Question, QuestionId};
use super::report::{build_report, DiagnosticReport};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Intro,
    Questioning { index: usize },
    Result,
}

/// What an accepted answer did to the session.
///
/// Interactive front ends may delay acting on `Advanced` for pacing; the
/// session itself has already moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    Completed,
}

/// Single-user walk through the question bank: intro, one question at a time, result.
#[derive(Debug, Clone)]
pub struct DiagnosticSession {
    bank: Arc<QuestionBank>,
    state: SessionState,
    answers: AnswerSheet,
}

impl DiagnosticSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            state: SessionState::Intro,
            answers: AnswerSheet::new(),
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionBank::standard()))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::Questioning { index } => self.bank.question_at(index),
            _ => None,
        }
    }

    pub fn current_step(&self) -> Option<DomainStep> {
        match self.state {
            SessionState::Questioning { index } => self.bank.step_for(index),
            _ => None,
        }
    }

    /// Enter the first question, discarding any earlier answers.
    pub fn start(&mut self) {
        self.answers.clear();
        self.state = if self.bank.is_empty() {
            SessionState::Result
        } else {
            SessionState::Questioning { index: 0 }
        };
    }

    /// Record the answer for the active question and move forward.
    pub fn answer(&mut self, id: QuestionId, score: u8) -> Result<Transition, DiagnosticError> {
        let SessionState::Questioning { index } = self.state else {
            return Err(DiagnosticError::SessionNotActive);
        };

        let score = LikertScore::try_from(score)?;
        if self.bank.question(id).is_none() {
            return Err(DiagnosticError::UnknownQuestion { id });
        }

        let current = self
            .bank
            .question_at(index)
            .ok_or(DiagnosticError::SessionNotActive)?;
        if current.id != id {
            return Err(DiagnosticError::NotCurrentQuestion {
                answered: id,
                current: current.id,
            });
        }

        self.answers.record(id, score);

        let last = self.bank.len() - 1;
        if index < last {
            self.state = SessionState::Questioning { index: index + 1 };
            Ok(Transition::Advanced {
                from: index,
                to: index + 1,
            })
        } else {
            self.state = SessionState::Result;
            Ok(Transition::Completed)
        }
    }

    /// Step back one question. Returns `false` when there is nowhere to go.
    pub fn go_back(&mut self) -> bool {
        match self.state {
            SessionState::Questioning { index } if index > 0 => {
                self.state = SessionState::Questioning { index: index - 1 };
                true
            }
            _ => false,
        }
    }

    /// Return to the intro screen with an empty answer sheet.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.state = SessionState::Intro;
    }

    /// The report, once every question has been walked through.
    pub fn report(&self) -> Option<DiagnosticReport> {
        match self.state {
            SessionState::Result => Some(build_report(&self.answers, &self.bank)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_current(session: &mut DiagnosticSession, score: u8) -> Transition {
        let id = session.current_question().expect("active question").id;
        session.answer(id, score).expect("answer accepted")
    }

    #[test]
    fn starts_in_intro_and_rejects_answers() {
        let mut session = DiagnosticSession::standard();
        assert_eq!(session.state(), SessionState::Intro);
        assert_eq!(
            session.answer(QuestionId(1), 3),
            Err(DiagnosticError::SessionNotActive)
        );
    }

    #[test]
    fn answer_advances_one_question() {
        let mut session = DiagnosticSession::standard();
        session.start();
        assert_eq!(
            session.answer(QuestionId(1), 4),
            Ok(Transition::Advanced { from: 0, to: 1 })
        );
        assert_eq!(session.state(), SessionState::Questioning { index: 1 });
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn out_of_range_scores_are_rejected_without_advancing() {
        let mut session = DiagnosticSession::standard();
        session.start();
        assert_eq!(
            session.answer(QuestionId(1), 0),
            Err(DiagnosticError::ScoreOutOfRange { score: 0 })
        );
        assert_eq!(
            session.answer(QuestionId(1), 6),
            Err(DiagnosticError::ScoreOutOfRange { score: 6 })
        );
        assert_eq!(session.state(), SessionState::Questioning { index: 0 });
        assert!(session.answers().is_empty());
    }

    #[test]
    fn unknown_and_out_of_turn_questions_are_rejected() {
        let mut session = DiagnosticSession::standard();
        session.start();
        assert_eq!(
            session.answer(QuestionId(99), 3),
            Err(DiagnosticError::UnknownQuestion { id: QuestionId(99) })
        );
        assert_eq!(
            session.answer(QuestionId(5), 3),
            Err(DiagnosticError::NotCurrentQuestion {
                answered: QuestionId(5),
                current: QuestionId(1),
            })
        );
    }

    #[test]
    fn go_back_at_first_question_is_a_no_op() {
        let mut session = DiagnosticSession::standard();
        session.start();
        assert!(!session.go_back());
        assert_eq!(session.state(), SessionState::Questioning { index: 0 });
    }

    #[test]
    fn go_back_keeps_previous_answer_and_allows_overwrite() {
        let mut session = DiagnosticSession::standard();
        session.start();
        answer_current(&mut session, 2);
        assert!(session.go_back());
        assert_eq!(session.state(), SessionState::Questioning { index: 0 });
        assert_eq!(
            session.answers().get(QuestionId(1)).map(LikertScore::value),
            Some(2)
        );

        answer_current(&mut session, 5);
        assert_eq!(
            session.answers().get(QuestionId(1)).map(LikertScore::value),
            Some(5)
        );
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn last_answer_completes_and_locks_session() {
        let mut session = DiagnosticSession::standard();
        session.start();
        for _ in 0..17 {
            assert!(matches!(
                answer_current(&mut session, 4),
                Transition::Advanced { .. }
            ));
        }
        assert_eq!(answer_current(&mut session, 4), Transition::Completed);
        assert_eq!(session.state(), SessionState::Result);
        assert!(!session.go_back());
        assert_eq!(
            session.answer(QuestionId(18), 1),
            Err(DiagnosticError::SessionNotActive)
        );

        let report = session.report().expect("report available");
        assert_eq!(report.overall_score, 80);
    }

    #[test]
    fn restart_and_start_discard_answers() {
        let mut session = DiagnosticSession::standard();
        session.start();
        answer_current(&mut session, 1);
        session.restart();
        assert_eq!(session.state(), SessionState::Intro);
        assert!(session.answers().is_empty());
        assert!(session.report().is_none());

        session.start();
        answer_current(&mut session, 1);
        session.start();
        assert!(session.answers().is_empty());
        assert_eq!(session.state(), SessionState::Questioning { index: 0 });
    }
}
