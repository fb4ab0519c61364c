use super::super::domain::Domain;
use serde::Serialize;

/// Advice tier for a single domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Mid,
    Low,
}

impl Tier {
    pub const HIGH_THRESHOLD: u8 = 70;
    pub const MID_THRESHOLD: u8 = 45;

    pub const fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MID_THRESHOLD {
            Self::Mid
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "強み",
            Self::Mid => "標準",
            Self::Low => "要強化",
        }
    }
}

/// Coarser four-step ladder used only for the overall commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallTier {
    Excellent,
    Good,
    Developing,
    NeedsAttention,
}

impl OverallTier {
    /// Place the overall score on the 80/60/40 ladder. An overall 80 is
    /// already `Excellent`, so uniform answers of 4 land here rather than
    /// on `Good`, even though every domain only reaches the 70+ `High` tier.
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Developing
        } else {
            Self::NeedsAttention
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "非常に良好",
            Self::Good => "良好",
            Self::Developing => "発展途上",
            Self::NeedsAttention => "要改善",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainResult {
    pub domain: Domain,
    pub label: &'static str,
    pub score: u8,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub advice: &'static str,
    pub angle: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub overall_score: u8,
    pub overall_tier: OverallTier,
    pub overall_label: &'static str,
    pub overall_comment: &'static str,
    pub domains: Vec<DomainResult>,
    pub strongest_domain: Domain,
    pub focus_domain: Domain,
}

impl DiagnosticReport {
    pub fn domain(&self, domain: Domain) -> Option<&DomainResult> {
        self.domains.iter().find(|entry| entry.domain == domain)
    }
}
