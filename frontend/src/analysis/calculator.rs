use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::models::risk::RiskLevel;
use crate::workflow::{Outcome, ResultProvider};

pub const MATERIALITY_RANGE: RangeInclusive<u8> = 20..=59;
pub const ESG_RANGE: RangeInclusive<u8> = 60..=89;
pub const WATER_SECURITY_RANGE: RangeInclusive<u8> = 40..=79;
pub const INFRASTRUCTURE_RANGE: RangeInclusive<u8> = 60..=89;

/// The calculator flags "Material" above this score.
pub const MATERIAL_THRESHOLD: u8 = 30;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorResult {
    pub city: String,
    pub materiality_score: u8,
    pub esg_score: u8,
    pub risk_level: RiskLevel,
    pub water_security: u8,
    pub fpic_risk: RiskLevel,
    pub infrastructure_score: u8,
}

impl CalculatorResult {
    pub fn is_material(&self) -> bool {
        self.materiality_score > MATERIAL_THRESHOLD
    }

    pub fn esg_rating(&self) -> &'static str {
        esg_rating(self.esg_score)
    }
}

pub fn esg_rating(score: u8) -> &'static str {
    if score > 75 {
        "Excellent"
    } else if score > 60 {
        "Good"
    } else {
        "Fair"
    }
}

fn pick_level<R: Rng + ?Sized>(rng: &mut R) -> RiskLevel {
    RiskLevel::ALL[rng.gen_range(0..RiskLevel::ALL.len())]
}

/// Uniform draw of a fake analysis within the fixed ranges.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, city: &str) -> CalculatorResult {
    CalculatorResult {
        city: city.to_string(),
        materiality_score: rng.gen_range(MATERIALITY_RANGE),
        esg_score: rng.gen_range(ESG_RANGE),
        risk_level: pick_level(rng),
        water_security: rng.gen_range(WATER_SECURITY_RANGE),
        fpic_risk: pick_level(rng),
        infrastructure_score: rng.gen_range(INFRASTRUCTURE_RANGE),
    }
}

/// Seeded from the wall clock; tests seed explicitly instead.
pub fn clock_seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(chrono::Utc::now().timestamp_millis() as u64)
}

pub struct RandomCalculator<R> {
    rng: R,
}

impl<R: Rng> RandomCalculator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ResultProvider for RandomCalculator<R> {
    type Input = String;
    type Output = CalculatorResult;

    fn resolve(&mut self, city: &String) -> Outcome<CalculatorResult> {
        Outcome::Found(generate(&mut self.rng, city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousand_runs_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let result = generate(&mut rng, "chico-ca");
            assert!((20..=59).contains(&result.materiality_score));
            assert!((60..=89).contains(&result.esg_score));
            assert!(RiskLevel::ALL.contains(&result.risk_level));
            assert!((40..=79).contains(&result.water_security));
            assert!(RiskLevel::ALL.contains(&result.fpic_risk));
            assert!((60..=89).contains(&result.infrastructure_score));
        }
    }

    #[test]
    fn same_seed_same_result() {
        let a = generate(&mut ChaCha8Rng::seed_from_u64(42), "austin-tx");
        let b = generate(&mut ChaCha8Rng::seed_from_u64(42), "austin-tx");
        assert_eq!(a, b);
    }

    #[test]
    fn every_risk_level_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let level = generate(&mut rng, "x").risk_level;
            if !seen.contains(&level) {
                seen.push(level);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn labels_use_calculator_thresholds() {
        assert_eq!(esg_rating(76), "Excellent");
        assert_eq!(esg_rating(75), "Good");
        assert_eq!(esg_rating(60), "Fair");

        let mut result = generate(&mut ChaCha8Rng::seed_from_u64(3), "x");
        result.materiality_score = 30;
        assert!(!result.is_material());
        result.materiality_score = 31;
        assert!(result.is_material());
    }
}
