use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Statement severity shares the three-level scale.
pub type Severity = RiskLevel;

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "badge badge-low",
            RiskLevel::Medium => "badge badge-medium",
            RiskLevel::High => "badge badge-high",
        }
    }

    pub fn fpic_narrative(self) -> &'static str {
        match self {
            RiskLevel::High => "Tribal consultation gaps identified in recent permits",
            RiskLevel::Medium => "Some consultation delays noted in council records",
            RiskLevel::Low => "Strong tribal relations and consultation processes",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            ScoreBand::Good => "score-good",
            ScoreBand::Fair => "score-fair",
            ScoreBand::Poor => "score-poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_band_edges() {
        assert_eq!(ScoreBand::of(80), ScoreBand::Good);
        assert_eq!(ScoreBand::of(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59), ScoreBand::Poor);
    }

    #[test]
    fn displays_label() {
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
    }
}
