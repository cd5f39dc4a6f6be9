//! Colorado River case-study content. Read-only.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimelineStatus {
    Foundational,
    Expiring,
    Active,
    Critical,
}

impl TimelineStatus {
    pub const ALL: [TimelineStatus; 4] = [
        TimelineStatus::Foundational,
        TimelineStatus::Expiring,
        TimelineStatus::Active,
        TimelineStatus::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimelineStatus::Foundational => "Foundational",
            TimelineStatus::Expiring => "Expiring",
            TimelineStatus::Active => "Active",
            TimelineStatus::Critical => "Critical",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            TimelineStatus::Critical => "dot dot-red",
            TimelineStatus::Expiring => "dot dot-orange",
            TimelineStatus::Active => "dot dot-blue",
            TimelineStatus::Foundational => "dot dot-gray",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEvent {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub status: TimelineStatus,
}

pub const TIMELINE: [TimelineEvent; 8] = [
    TimelineEvent {
        year: 1922,
        title: "Colorado River Compact",
        description: "Allocated 7.5 MAF each to Upper and Lower Basin states",
        impact: "Overestimated flows at 16.4 MAF; actual flows average 12.3 MAF",
        status: TimelineStatus::Foundational,
    },
    TimelineEvent {
        year: 1928,
        title: "Boulder Canyon Project Act",
        description: "Authorized Hoover Dam construction",
        impact: "Allocated 4.4 MAF to California, 2.8 MAF to Arizona, 0.3 MAF to Nevada",
        status: TimelineStatus::Foundational,
    },
    TimelineEvent {
        year: 1963,
        title: "Arizona v. California",
        description: "Supreme Court affirmed Lower Basin allocations",
        impact: "Enabled Central Arizona Project, solidified water rights",
        status: TimelineStatus::Foundational,
    },
    TimelineEvent {
        year: 2007,
        title: "Interim Guidelines",
        description: "Shortage management based on Lake Mead levels",
        impact: "Cuts triggered at 1,075 feet elevation",
        status: TimelineStatus::Expiring,
    },
    TimelineEvent {
        year: 2019,
        title: "Drought Contingency Plan",
        description: "Voluntary water cuts agreement",
        impact: "Temporary relief, expires 2026",
        status: TimelineStatus::Expiring,
    },
    TimelineEvent {
        year: 2025,
        title: "Nebraska vs. Colorado",
        description: "South Platte River water rights lawsuit",
        impact: "Warning sign for Colorado River interstate disputes",
        status: TimelineStatus::Active,
    },
    TimelineEvent {
        year: 2026,
        title: "Guidelines Expiration",
        description: "Current water management agreements end",
        impact: "Potential legal chaos without new agreements",
        status: TimelineStatus::Critical,
    },
    TimelineEvent {
        year: 2027,
        title: "Dead Pool Projection",
        description: "Lake Mead could drop below 895 feet",
        impact: "Hoover Dam unable to generate power or supply water",
        status: TimelineStatus::Critical,
    },
];

/// Events matching `status`, or every event when `None`, oldest first.
pub fn timeline(status: Option<TimelineStatus>) -> Vec<&'static TimelineEvent> {
    TIMELINE
        .iter()
        .filter(|e| status.map_or(true, |s| e.status == s))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterRisk {
    Critical,
    High,
    Medium,
    Low,
}

impl WaterRisk {
    pub fn label(self) -> &'static str {
        match self {
            WaterRisk::Critical => "Critical",
            WaterRisk::High => "High",
            WaterRisk::Medium => "Medium",
            WaterRisk::Low => "Low",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            WaterRisk::Critical => "badge badge-high",
            WaterRisk::High => "badge badge-orange",
            WaterRisk::Medium => "badge badge-medium",
            WaterRisk::Low => "badge badge-low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CityRisk {
    pub name: &'static str,
    pub state: &'static str,
    pub water_dependency: u8,
    pub risk_level: WaterRisk,
    pub key_threats: &'static [&'static str],
    pub olympics_impact: bool,
}

pub const CITY_RISKS: [CityRisk; 4] = [
    CityRisk {
        name: "Las Vegas",
        state: "NV",
        water_dependency: 90,
        risk_level: WaterRisk::Critical,
        key_threats: &[
            "90% reliant on Lake Mead",
            "Dead pool at 895 feet eliminates supply",
            "Power grid disruption from Hoover Dam",
        ],
        olympics_impact: false,
    },
    CityRisk {
        name: "Los Angeles",
        state: "CA",
        water_dependency: 65,
        risk_level: WaterRisk::Critical,
        key_threats: &[
            "2028 Olympics water demands",
            "Colorado River Aqueduct dependency",
            "Global embarrassment risk",
        ],
        olympics_impact: true,
    },
    CityRisk {
        name: "Phoenix",
        state: "AZ",
        water_dependency: 75,
        risk_level: WaterRisk::High,
        key_threats: &[
            "Central Arizona Project reliance",
            "Industrial water needs",
            "Urban growth pressures",
        ],
        olympics_impact: false,
    },
    CityRisk {
        name: "San Diego",
        state: "CA",
        water_dependency: 55,
        risk_level: WaterRisk::High,
        key_threats: &[
            "Aqueduct supply cuts",
            "Desalination plant limitations",
            "Population growth demands",
        ],
        olympics_impact: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskFactor {
    pub category: &'static str,
    /// Percent, 0-100.
    pub probability: u8,
    /// 0-10.
    pub severity: u8,
    pub description: &'static str,
}

pub const RISK_FACTORS: [RiskFactor; 5] = [
    RiskFactor {
        category: "Interstate Disputes",
        probability: 85,
        severity: 9,
        description: "Post-2026 guideline failures could trigger Supreme Court battles",
    },
    RiskFactor {
        category: "Tribal Claims",
        probability: 70,
        severity: 8,
        description: "30 tribes hold 3.2 MAF in rights with infrastructure gaps",
    },
    RiskFactor {
        category: "Environmental Lawsuits",
        probability: 60,
        severity: 7,
        description: "Endangered Species Act could force ecological releases",
    },
    RiskFactor {
        category: "Power Grid Failure",
        probability: 40,
        severity: 10,
        description: "Hoover Dam power loss would destabilize regional grids",
    },
    RiskFactor {
        category: "International Disputes",
        probability: 50,
        severity: 6,
        description: "Mexico treaty violations over water quality issues",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    Filed,
    Active,
    Resolved,
}

impl ClaimStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::Filed => "Filed",
            ClaimStatus::Active => "Active",
            ClaimStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parties {
    pub plaintiff: &'static str,
    pub defendant: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalClaim {
    pub id: &'static str,
    pub jurisdiction: &'static str,
    pub topic: &'static str,
    pub summary: &'static str,
    pub parties: Parties,
    pub status: ClaimStatus,
    pub upstream_impact: bool,
    pub url: Option<&'static str>,
}

pub const LEGAL_CLAIMS: [LegalClaim; 2] = [
    LegalClaim {
        id: "NE-CO-2025",
        jurisdiction: "U.S. Supreme Court",
        topic: "Water Rights",
        summary: "Nebraska sues Colorado over South Platte River diversions, alleging 1.3 MAF annual loss",
        parties: Parties {
            plaintiff: "State of Nebraska",
            defendant: "State of Colorado",
        },
        status: ClaimStatus::Active,
        upstream_impact: true,
        url: Some("https://nebraskaexaminer.com/2025/07/16/nebraska-sues-colorado-over-south-platte-river-water-rights-perkins-county-canal/"),
    },
    LegalClaim {
        id: "NAVAJO-2023",
        jurisdiction: "U.S. Supreme Court",
        topic: "Tribal Rights",
        summary: "Navajo Nation water rights claim rejected, but legislative efforts continue",
        parties: Parties {
            plaintiff: "Navajo Nation",
            defendant: "United States",
        },
        status: ClaimStatus::Resolved,
        upstream_impact: false,
        url: None,
    },
];

pub const DEAD_POOL_FT: f64 = 895.0;
pub const LAKE_MEAD_LEVEL_FT: f64 = 1061.56;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_filter_keeps_order() {
        let critical = timeline(Some(TimelineStatus::Critical));
        let years: Vec<u16> = critical.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2026, 2027]);
        assert_eq!(timeline(None).len(), TIMELINE.len());
    }

    #[test]
    fn risk_factor_scales_hold() {
        assert!(RISK_FACTORS.iter().all(|f| f.probability <= 100 && f.severity <= 10));
    }
}
