mod advice;
mod chart;
pub mod views;

pub use chart::RadarPoint;
pub use views::{DiagnosticReport, DomainResult, OverallTier, Tier};

use super::bank::QuestionBank;
use super::domain::{AnswerSheet, Domain};
use super::scoring::{aggregate, overall_score, DomainScore};

/// Attach tiers and advice to the domain scores and derive the overall verdict.
pub fn compose(scores: &[DomainScore; Domain::COUNT]) -> DiagnosticReport {
    let domains: Vec<DomainResult> = scores
        .iter()
        .map(|entry| {
            let tier = Tier::from_score(entry.score);
            DomainResult {
                domain: entry.domain,
                label: entry.domain.label(),
                score: entry.score,
                tier,
                tier_label: tier.label(),
                advice: advice::domain_advice(entry.domain, tier),
                angle: entry.domain.angle(),
            }
        })
        .collect();

    let overall = overall_score(scores);
    let overall_tier = OverallTier::from_score(overall);

    // Ties resolve to the earliest domain in the fixed order.
    let mut strongest = scores[0];
    let mut focus = scores[0];
    for entry in &scores[1..] {
        if entry.score > strongest.score {
            strongest = *entry;
        }
        if entry.score < focus.score {
            focus = *entry;
        }
    }

    DiagnosticReport {
        overall_score: overall,
        overall_tier,
        overall_label: overall_tier.label(),
        overall_comment: advice::overall_comment(overall_tier),
        domains,
        strongest_domain: strongest.domain,
        focus_domain: focus.domain,
    }
}

/// Aggregate and compose in one step.
pub fn build_report(answers: &AnswerSheet, bank: &QuestionBank) -> DiagnosticReport {
    compose(&aggregate(answers, bank))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: u8) -> [DomainScore; Domain::COUNT] {
        Domain::ordered().map(|domain| DomainScore { domain, score })
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(70), Tier::High);
        assert_eq!(Tier::from_score(69), Tier::Mid);
        assert_eq!(Tier::from_score(45), Tier::Mid);
        assert_eq!(Tier::from_score(44), Tier::Low);
    }

    #[test]
    fn overall_ladder_boundaries() {
        assert_eq!(OverallTier::from_score(80), OverallTier::Excellent);
        assert_eq!(OverallTier::from_score(79), OverallTier::Good);
        assert_eq!(OverallTier::from_score(60), OverallTier::Good);
        assert_eq!(OverallTier::from_score(59), OverallTier::Developing);
        assert_eq!(OverallTier::from_score(40), OverallTier::Developing);
        assert_eq!(OverallTier::from_score(39), OverallTier::NeedsAttention);
    }

    #[test]
    fn compose_selects_advice_per_domain_tier() {
        let mut scores = uniform(60);
        scores[0].score = 90;
        scores[5].score = 30;

        let report = compose(&scores);
        assert_eq!(report.domains.len(), 6);
        assert_eq!(report.domains[0].tier, Tier::High);
        assert_eq!(
            report.domains[0].advice,
            advice::domain_advice(Domain::DecisionMaking, Tier::High)
        );
        assert_eq!(report.domains[2].tier, Tier::Mid);
        assert_eq!(report.domains[5].tier, Tier::Low);
        assert_eq!(report.strongest_domain, Domain::DecisionMaking);
        assert_eq!(report.focus_domain, Domain::EnvironmentDesign);
        assert_eq!(report.overall_score, 60);
        assert_eq!(report.overall_tier, OverallTier::Good);
    }

    #[test]
    fn equal_scores_pick_first_domain_for_highlights() {
        let report = compose(&uniform(72));
        assert_eq!(report.strongest_domain, Domain::DecisionMaking);
        assert_eq!(report.focus_domain, Domain::DecisionMaking);
    }

    #[test]
    fn overall_ladder_is_coarser_than_domain_tiers() {
        // 75 is already "high" per domain but only "good" overall.
        let report = compose(&uniform(75));
        assert!(report.domains.iter().all(|entry| entry.tier == Tier::High));
        assert_eq!(report.overall_tier, OverallTier::Good);
    }
}
