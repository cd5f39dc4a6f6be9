use super::risk::RiskLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptQuote {
    pub text: &'static str,
    pub tag: &'static str,
    pub source: &'static str,
    pub date: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpicSnapshot {
    pub city: &'static str,
    pub status: &'static str,
    pub risk: RiskLevel,
    pub risk_score: u8,
    pub last_updated: &'static str,
    pub quotes: &'static [TranscriptQuote],
}

pub const SAULT_STE_MARIE: FpicSnapshot = FpicSnapshot {
    city: "Sault Ste. Marie, ON",
    status: "Not Held",
    risk: RiskLevel::High,
    risk_score: 92,
    last_updated: "June 2025",
    quotes: &[
        TranscriptQuote {
            text: "No formal engagement with Batchewana Nation took place prior to zoning vote.",
            tag: "#NoConsultation",
            source: "Council Transcript",
            date: "2023-09-14",
        },
        TranscriptQuote {
            text: "The motion to consult was tabled indefinitely without community input.",
            tag: "#PermittingDelay",
            source: "City Minutes",
            date: "2024-01-12",
        },
        TranscriptQuote {
            text: "Protests were registered by local leadership but no FPIC hearing was held.",
            tag: "#FPICViolation",
            source: "Indigenous Radio",
            date: "2024-03-09",
        },
    ],
};

pub const PRICING_HINT: &str = "Full legal briefs are available in our Standard and Strategic tiers";
