use super::bank::QuestionBank;
use super::domain::{AnswerSheet, Domain, LikertScore};
use serde::Serialize;

/// Percentage score for one domain before advice is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: u8,
}

const SCALE_TO_PERCENT: f64 = 20.0;

/// Reduce the answer sheet to one score per domain, in domain order.
///
/// Unanswered questions count as [`LikertScore::NEUTRAL`]. Each score is
/// `round(mean * 20)`, so answers on the 1-5 scale land in `20..=100`.
pub fn aggregate(answers: &AnswerSheet, bank: &QuestionBank) -> [DomainScore; Domain::COUNT] {
    let mut totals = [0u32; Domain::COUNT];
    let mut counts = [0u32; Domain::COUNT];

    for question in bank.questions() {
        let score = answers
            .get(question.id)
            .unwrap_or(LikertScore::NEUTRAL)
            .value();
        let slot = question.domain.index();
        totals[slot] += u32::from(score);
        counts[slot] += 1;
    }

    Domain::ordered().map(|domain| {
        let slot = domain.index();
        let mean = if counts[slot] == 0 {
            f64::from(LikertScore::NEUTRAL.value())
        } else {
            f64::from(totals[slot]) / f64::from(counts[slot])
        };

        DomainScore {
            domain,
            score: (mean * SCALE_TO_PERCENT).round().clamp(0.0, 100.0) as u8,
        }
    })
}

/// Rounded mean of the domain scores.
pub fn overall_score(scores: &[DomainScore]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let total: u32 = scores.iter().map(|entry| u32::from(entry.score)).sum();
    (f64::from(total) / scores.len() as f64).round() as u8
}
