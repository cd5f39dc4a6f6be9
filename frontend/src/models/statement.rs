use chrono::NaiveDate;
use serde::Serialize;

use super::risk::{RiskLevel, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    Infrastructure,
    WaterRisk,
    FpicViolation,
    Environmental,
    Labor,
    Regulatory,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Infrastructure => "Infrastructure",
            Category::WaterRisk => "Water Risk",
            Category::FpicViolation => "FPIC Violation",
            Category::Environmental => "Environmental",
            Category::Labor => "Labor",
            Category::Regulatory => "Regulatory",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Infrastructure => "badge badge-blue",
            Category::WaterRisk => "badge badge-cyan",
            Category::FpicViolation => "badge badge-red",
            Category::Environmental => "badge badge-green",
            Category::Labor => "badge badge-purple",
            Category::Regulatory => "badge badge-orange",
        }
    }
}

/// A finding extracted from a transcript or filing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactStatement {
    pub id: &'static str,
    pub statement: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub fpic_risk: RiskLevel,
    pub score_impact: u32,
    pub date: &'static str,
    pub source: &'static str,
    pub selected: bool,
}

impl ImpactStatement {
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%B %d, %Y").to_string(),
            Err(_) => self.date.to_string(),
        }
    }
}

pub const DEFAULT_DATE_RANGE: &str = "2023-01-01 to 2024-03-31";

const fn stmt(
    id: &'static str,
    statement: &'static str,
    category: Category,
    severity: Severity,
    fpic_risk: RiskLevel,
    score_impact: u32,
    date: &'static str,
    source: &'static str,
) -> ImpactStatement {
    ImpactStatement {
        id,
        statement,
        category,
        severity,
        fpic_risk,
        score_impact,
        date,
        source,
        selected: false,
    }
}

const BUFFALO_NY: [ImpactStatement; 4] = [
    stmt(
        "1",
        "Water treatment upgrades postponed to 2028",
        Category::Infrastructure,
        RiskLevel::Medium,
        RiskLevel::Low,
        3,
        "2024-01-15",
        "City Council Meeting #2024-003",
    ),
    stmt(
        "2",
        "No community consultation for lithium corridor vote",
        Category::FpicViolation,
        RiskLevel::High,
        RiskLevel::High,
        6,
        "2024-02-08",
        "Planning Commission Minutes",
    ),
    stmt(
        "3",
        "Sewer bond blocked in budget committee",
        Category::Infrastructure,
        RiskLevel::High,
        RiskLevel::Low,
        4,
        "2024-01-22",
        "Budget Committee Transcript",
    ),
    stmt(
        "4",
        "Union strike authorization vote scheduled for Q2",
        Category::Labor,
        RiskLevel::High,
        RiskLevel::Low,
        5,
        "2024-03-01",
        "Labor Relations Board",
    ),
];

const CHICO_CA: [ImpactStatement; 3] = [
    stmt(
        "1",
        "Tribal consultation bypassed for pipeline expansion",
        Category::FpicViolation,
        RiskLevel::High,
        RiskLevel::High,
        8,
        "2023-11-12",
        "Environmental Impact Report",
    ),
    stmt(
        "2",
        "Water reservoir construction delayed indefinitely",
        Category::WaterRisk,
        RiskLevel::High,
        RiskLevel::Medium,
        6,
        "2024-01-08",
        "Water Board Meeting Minutes",
    ),
    stmt(
        "3",
        "Protest over pipeline expansion disrupts council meeting",
        Category::Environmental,
        RiskLevel::Medium,
        RiskLevel::High,
        4,
        "2024-02-14",
        "City Council Session #2024-007",
    ),
];

/// Fixed statement table keyed by canonical city id. Entries are handed out
/// fresh, with every `selected` flag cleared.
pub fn sample_statements(city_id: &str) -> Option<Vec<ImpactStatement>> {
    match city_id {
        "buffalo-ny" => Some(BUFFALO_NY.to_vec()),
        "chico-ca" => Some(CHICO_CA.to_vec()),
        _ => None,
    }
}

pub const STATEMENT_CITY_IDS: [&str; 2] = ["buffalo-ny", "chico-ca"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_long_form() {
        let statements = sample_statements("buffalo-ny").unwrap_or_default();
        assert_eq!(statements[0].display_date(), "January 15, 2024");
    }

    #[test]
    fn table_entries_start_unselected() {
        for id in STATEMENT_CITY_IDS {
            let statements = sample_statements(id).unwrap_or_default();
            assert!(!statements.is_empty());
            assert!(statements.iter().all(|s| !s.selected));
        }
    }
}
