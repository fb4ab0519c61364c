//! Organizational-behavior diagnostic: question bank, answer collection,
//! domain scoring, and the advice report built from those scores.
//!
//! Scoring and composition are pure; the only mutable state is the answer
//! sheet owned by a [`DiagnosticSession`].

mod bank;
pub mod domain;
pub mod report;
pub mod router;
pub mod scoring;
mod session;

pub use bank::{DomainStep, QuestionBank};
pub use domain::{AnswerSheet, DiagnosticError, Domain, LikertScore, Question, QuestionId};
pub use report::{
    build_report, compose, DiagnosticReport, DomainResult, OverallTier, RadarPoint, Tier,
};
pub use router::diagnostic_router;
pub use scoring::{aggregate, overall_score, DomainScore};
pub use session::{DiagnosticSession, SessionState, Transition};
