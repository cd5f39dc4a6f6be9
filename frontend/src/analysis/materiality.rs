//! Score = Scale x Scope x Irremediability x Likelihood, each factor on 0-10.

/// The dashboard slider view flags material impact above this score.
pub const DASHBOARD_THRESHOLD: f32 = 25.0;

pub const FACTOR_MAX: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Factor {
    Scale,
    Scope,
    Irremediability,
    Likelihood,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::Scale,
        Factor::Scope,
        Factor::Irremediability,
        Factor::Likelihood,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Factor::Scale => "Scale Impact",
            Factor::Scope => "Scope Reach",
            Factor::Irremediability => "Irremediability",
            Factor::Likelihood => "Likelihood",
        }
    }

    /// Captions for the low and high ends of the slider.
    pub fn bounds(self) -> (&'static str, &'static str) {
        match self {
            Factor::Scale => ("Minimal", "Severe"),
            Factor::Scope => ("Local", "Regional"),
            Factor::Irremediability => ("Reversible", "Permanent"),
            Factor::Likelihood => ("Unlikely", "Certain"),
        }
    }

    pub fn descriptor(self, value: f32) -> &'static str {
        match self {
            Factor::Scale if value >= 7.0 => "High Impact",
            Factor::Scale if value >= 4.0 => "Moderate Impact",
            Factor::Scale => "Low Impact",
            Factor::Scope if value >= 6.0 => "Regional",
            Factor::Scope if value >= 3.0 => "Municipal",
            Factor::Scope => "Local",
            Factor::Irremediability if value >= 7.0 => "Permanent",
            Factor::Irremediability if value >= 4.0 => "Moderate",
            Factor::Irremediability => "Reversible",
            Factor::Likelihood if value >= 8.0 => "Very Likely",
            Factor::Likelihood if value >= 5.0 => "Likely",
            Factor::Likelihood => "Unlikely",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialityFactors {
    pub scale: f32,
    pub scope: f32,
    pub irremediability: f32,
    pub likelihood: f32,
}

impl Default for MaterialityFactors {
    fn default() -> Self {
        Self {
            scale: 7.2,
            scope: 6.8,
            irremediability: 5.4,
            likelihood: 8.1,
        }
    }
}

impl MaterialityFactors {
    pub fn get(&self, factor: Factor) -> f32 {
        match factor {
            Factor::Scale => self.scale,
            Factor::Scope => self.scope,
            Factor::Irremediability => self.irremediability,
            Factor::Likelihood => self.likelihood,
        }
    }

    /// Values outside 0-10 are clamped; NaN counts as 0.
    pub fn set(&mut self, factor: Factor, value: f32) {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, FACTOR_MAX) };
        match factor {
            Factor::Scale => self.scale = value,
            Factor::Scope => self.scope = value,
            Factor::Irremediability => self.irremediability = value,
            Factor::Likelihood => self.likelihood = value,
        }
    }

    pub fn score(&self) -> f32 {
        Factor::ALL.iter().map(|f| self.get(*f)).product::<f32>()
    }

    pub fn is_material(&self) -> bool {
        self.score() > DASHBOARD_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_product_of_factors() {
        let factors = MaterialityFactors {
            scale: 10.0,
            scope: 10.0,
            irremediability: 10.0,
            likelihood: 10.0,
        };
        assert!((factors.score() - 10_000.0).abs() < 1e-2);

        let defaults = MaterialityFactors::default();
        let expected = 7.2_f32 * 6.8 * 5.4 * 8.1;
        assert!((defaults.score() - expected).abs() < 1e-2);
    }

    #[test]
    fn defaults_are_material() {
        assert!(MaterialityFactors::default().is_material());
    }

    #[test]
    fn threshold_is_strictly_greater() {
        let mut factors = MaterialityFactors {
            scale: 1.0,
            scope: 1.0,
            irremediability: 5.0,
            likelihood: 5.0,
        };
        assert!(!factors.is_material());
        factors.set(Factor::Scale, 1.1);
        assert!(factors.is_material());
    }

    #[test]
    fn set_clamps_out_of_range_values() {
        let mut factors = MaterialityFactors::default();
        factors.set(Factor::Scale, 14.0);
        factors.set(Factor::Scope, -2.0);
        factors.set(Factor::Likelihood, f32::NAN);
        assert_eq!(factors.scale, 10.0);
        assert_eq!(factors.scope, 0.0);
        assert_eq!(factors.likelihood, 0.0);
        assert_eq!(factors.score(), 0.0);
    }

    #[test]
    fn default_descriptors() {
        let defaults = MaterialityFactors::default();
        let words: Vec<&str> = Factor::ALL
            .iter()
            .map(|f| f.descriptor(defaults.get(*f)))
            .collect();
        assert_eq!(words, vec!["High Impact", "Regional", "Moderate", "Very Likely"]);
    }
}
