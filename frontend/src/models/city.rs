use serde::Serialize;

use super::risk::RiskLevel;

#[derive(Clone, Debug, PartialEq)]
pub enum WaterSecurity {
    Percent(u8),
    Rated(&'static str),
}

impl WaterSecurity {
    pub fn display(&self) -> String {
        match self {
            WaterSecurity::Percent(p) => format!("{}%", p),
            WaterSecurity::Rated(label) => label.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthForecast {
    pub population_pct: f32,
    pub tax_base_pct: f32,
}

/// Precomputed risk and opportunity snapshot shown on the scorecard.
#[derive(Clone, Debug, PartialEq)]
pub struct CitySummary {
    pub name: &'static str,
    pub esg_score: u8,
    pub materiality_score: u8,
    pub material: bool,
    pub risk_level: RiskLevel,
    pub fpic_risk: RiskLevel,
    pub fpic_status: &'static str,
    pub fpic_details: &'static str,
    pub transcript_signal: &'static str,
    pub water_security: WaterSecurity,
    pub water_details: &'static str,
    pub tax_benefit: &'static str,
    pub permit_friction: &'static str,
    pub growth_forecast: GrowthForecast,
    pub report_price: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardCity {
    pub id: &'static str,
    pub name: &'static str,
    pub risk: RiskLevel,
    pub score: u8,
}

pub const DEFAULT_DASHBOARD_CITY: &str = "chico-ca";

pub const DASHBOARD_CITIES: [DashboardCity; 4] = [
    DashboardCity { id: "chico-ca", name: "Chico, CA", risk: RiskLevel::High, score: 72 },
    DashboardCity { id: "buffalo-ny", name: "Buffalo, NY", risk: RiskLevel::Medium, score: 68 },
    DashboardCity { id: "phoenix-az", name: "Phoenix, AZ", risk: RiskLevel::High, score: 62 },
    DashboardCity { id: "atlanta-ga", name: "Atlanta, GA", risk: RiskLevel::Medium, score: 74 },
];

pub fn dashboard_city(id: &str) -> Option<&'static DashboardCity> {
    DASHBOARD_CITIES.iter().find(|c| c.id == id)
}

/// Scorecard for one of the dashboard presets. Unknown ids fall back to the
/// default city.
pub fn summary_for(id: &str) -> CitySummary {
    let city = dashboard_city(id)
        .or_else(|| dashboard_city(DEFAULT_DASHBOARD_CITY))
        .copied()
        .unwrap_or(DASHBOARD_CITIES[0]);
    let chico = city.id == "chico-ca";
    let phoenix = city.id == "phoenix-az";

    CitySummary {
        name: city.name,
        esg_score: city.score,
        materiality_score: match city.id {
            "chico-ca" => 28,
            "buffalo-ny" => 24,
            _ => 32,
        },
        material: true,
        risk_level: city.risk,
        fpic_risk: if chico { RiskLevel::High } else { RiskLevel::Medium },
        fpic_status: if chico { "High litigation risk" } else { "Medium consultation gaps" },
        fpic_details: if chico {
            "Tribal consultation bypassed in 2023"
        } else {
            "Some delays in tribal outreach"
        },
        transcript_signal: if chico {
            "Protest over pipeline expansion (Feb 2024)"
        } else {
            "Union negotiations ongoing"
        },
        water_security: WaterSecurity::Rated(if phoenix { "Critical" } else { "Medium" }),
        water_details: if phoenix {
            "Moratorium on new permits"
        } else {
            "Reservoir delayed, 2040 projections weak"
        },
        tax_benefit: "Tier 1 QOZ + State incentives",
        permit_friction: if city.id == "buffalo-ny" {
            "6-month average delay"
        } else {
            "9-month average delay"
        },
        growth_forecast: GrowthForecast {
            population_pct: 3.8,
            tax_base_pct: 6.4,
        },
        report_price: 1200,
    }
}

pub const CALCULATOR_CITIES: [(&str, &str); 6] = [
    ("chico-ca", "Chico, California"),
    ("buffalo-ny", "Buffalo, New York"),
    ("phoenix-az", "Phoenix, Arizona"),
    ("atlanta-ga", "Atlanta, Georgia"),
    ("austin-tx", "Austin, Texas"),
    ("denver-co", "Denver, Colorado"),
];

pub fn display_name(key: &str) -> String {
    CALCULATOR_CITIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// A ranked hit from the semantic city search.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchCity {
    pub id: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub similarity: u8,
    pub esg_score: u8,
    pub materiality_score: u8,
    pub risk_level: RiskLevel,
    pub water_security: u8,
    pub fpic_risk: RiskLevel,
    pub tax_incentives: &'static str,
    pub population: &'static str,
    pub highlights: &'static [&'static str],
    pub coordinates: (f64, f64),
}

pub const COMPARISON_PRICE_PER_CITY: u32 = 400;

pub const SAMPLE_QUERIES: [&str; 3] = [
    "Manufacturing hub with water security",
    "Low-risk tech corridor",
    "Green energy friendly cities",
];

pub fn sample_cities() -> Vec<SearchCity> {
    vec![
        SearchCity {
            id: "austin-tx",
            name: "Austin",
            state: "TX",
            similarity: 94,
            esg_score: 78,
            materiality_score: 32,
            risk_level: RiskLevel::Medium,
            water_security: 72,
            fpic_risk: RiskLevel::Low,
            tax_incentives: "QOZ + State Tech Credits",
            population: "965K",
            highlights: &["Strong tech ecosystem", "Growing talent pool", "Moderate water stress"],
            coordinates: (-97.7431, 30.2672),
        },
        SearchCity {
            id: "denver-co",
            name: "Denver",
            state: "CO",
            similarity: 89,
            esg_score: 82,
            materiality_score: 28,
            risk_level: RiskLevel::Low,
            water_security: 68,
            fpic_risk: RiskLevel::Medium,
            tax_incentives: "Enterprise Zone + Green Credits",
            population: "715K",
            highlights: &[
                "Excellent infrastructure",
                "Strong regulatory framework",
                "Some tribal consultation gaps",
            ],
            coordinates: (-104.9903, 39.7392),
        },
        SearchCity {
            id: "raleigh-nc",
            name: "Raleigh",
            state: "NC",
            similarity: 87,
            esg_score: 75,
            materiality_score: 24,
            risk_level: RiskLevel::Low,
            water_security: 85,
            fpic_risk: RiskLevel::Low,
            tax_incentives: "Research Triangle Credits",
            population: "474K",
            highlights: &["Research Triangle proximity", "Excellent water security", "Stable permitting"],
            coordinates: (-78.6382, 35.7796),
        },
        SearchCity {
            id: "phoenix-az",
            name: "Phoenix",
            state: "AZ",
            similarity: 76,
            esg_score: 62,
            materiality_score: 45,
            risk_level: RiskLevel::High,
            water_security: 34,
            fpic_risk: RiskLevel::High,
            tax_incentives: "QOZ Available",
            population: "1.7M",
            highlights: &["Large market size", "Critical water constraints", "Tribal consultation issues"],
            coordinates: (-112.074, 33.4484),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_derive_city_specific_scorecards() {
        let chico = summary_for("chico-ca");
        assert_eq!(chico.materiality_score, 28);
        assert_eq!(chico.fpic_status, "High litigation risk");

        let buffalo = summary_for("buffalo-ny");
        assert_eq!(buffalo.materiality_score, 24);
        assert_eq!(buffalo.permit_friction, "6-month average delay");

        let phoenix = summary_for("phoenix-az");
        assert_eq!(phoenix.water_security, WaterSecurity::Rated("Critical"));
        assert_eq!(phoenix.esg_score, 62);
    }

    #[test]
    fn unknown_preset_falls_back_to_default() {
        assert_eq!(summary_for("nowhere").name, "Chico, CA");
    }

    #[test]
    fn display_name_echoes_unknown_keys() {
        assert_eq!(display_name("denver-co"), "Denver, Colorado");
        assert_eq!(display_name("reno-nv"), "reno-nv");
    }

    #[test]
    fn search_fixture_is_ranked_by_similarity() {
        let cities = sample_cities();
        assert_eq!(cities.len(), 4);
        assert!(cities.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }
}
