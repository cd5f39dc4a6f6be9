#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub text: &'static str,
}

const fn feature(icon: &'static str, text: &'static str) -> Feature {
    Feature { icon, text }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierId {
    Lite,
    Standard,
    Strategic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub id: TierId,
    pub name: &'static str,
    pub price_per_report: u32,
    pub price_monthly: u32,
    pub description: &'static str,
    pub features: &'static [Feature],
    pub popular: bool,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    PerReport,
    Monthly,
}

impl PricingTier {
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::PerReport => self.price_per_report,
            BillingPeriod::Monthly => self.price_monthly,
        }
    }

    /// `$1200/report` or `$3600/month`.
    pub fn price_label(&self, period: BillingPeriod) -> String {
        match period {
            BillingPeriod::PerReport => format!("${}/report", self.price_per_report),
            BillingPeriod::Monthly => format!("${}/month", self.price_monthly),
        }
    }
}

pub const TIERS: [PricingTier; 3] = [
    PricingTier {
        id: TierId::Lite,
        name: "Lite",
        price_per_report: 600,
        price_monthly: 1800,
        description: "Essential city intelligence for initial screening",
        features: &[
            feature("✅", "ESG & Tax Score Analysis"),
            feature("✅", "Water + Housing Index"),
            feature("📄", "Downloadable PDF Report"),
            feature("✅", "Basic Risk Assessment"),
            feature("✅", "Email Support"),
        ],
        popular: false,
        accent: "tier-green",
    },
    PricingTier {
        id: TierId::Standard,
        name: "Standard",
        price_per_report: 1200,
        price_monthly: 3600,
        description: "Comprehensive analysis with regulatory insights",
        features: &[
            feature("✅", "Everything in Lite"),
            feature("⚖️", "FPIC Risk Assessment Log"),
            feature("✅", "Council Transcript Highlights"),
            feature("✅", "Infrastructure Permitting Score"),
            feature("✅", "Regulatory Timeline Analysis"),
            feature("✅", "Priority Support"),
        ],
        popular: true,
        accent: "tier-blue",
    },
    PricingTier {
        id: TierId::Strategic,
        name: "Strategic",
        price_per_report: 1800,
        price_monthly: 5400,
        description: "Executive-grade intelligence for $100M+ decisions",
        features: &[
            feature("✅", "Everything in Standard"),
            feature("📈", "3-Year Growth Forecasts"),
            feature("✅", "City Comparison Pack"),
            feature("📄", "CSV + Legal Dossier Export"),
            feature("⚖️", "Executive Risk Summary"),
            feature("✅", "Dedicated Account Manager"),
        ],
        popular: false,
        accent: "tier-purple",
    },
];

pub fn tier(id: TierId) -> &'static PricingTier {
    match id {
        TierId::Lite => &TIERS[0],
        TierId::Standard => &TIERS[1],
        TierId::Strategic => &TIERS[2],
    }
}

/// Decimal digits grouped in threes: `1,061`.
pub fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars with thousands separators: `$1,200`.
pub fn format_usd(amount: u32) -> String {
    format!("${}", group_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_labels_follow_period() {
        let standard = tier(TierId::Standard);
        assert_eq!(standard.price_label(BillingPeriod::PerReport), "$1200/report");
        assert_eq!(standard.price_label(BillingPeriod::Monthly), "$3600/month");
    }

    #[test]
    fn only_standard_is_popular() {
        let popular: Vec<_> = TIERS.iter().filter(|t| t.popular).map(|t| t.id).collect();
        assert_eq!(popular, vec![TierId::Standard]);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_usd(600), "$600");
        assert_eq!(format_usd(1200), "$1,200");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
        assert_eq!(group_thousands(1061), "1,061");
    }
}
