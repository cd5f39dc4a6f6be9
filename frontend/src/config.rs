use log::Level;

/// Artificial delays for every simulated action, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub calculator_ms: u32,
    pub search_stages_ms: [u32; 3],
    pub extractor_ms: u32,
    pub brief_unlock_ms: u32,
    pub pricing_hint_ms: u32,
    pub contact_submit_ms: u32,
    pub purchase_ms: u32,
    pub sample_download_ms: u32,
    pub toast_short_ms: u32,
    pub toast_long_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            calculator_ms: 3000,
            search_stages_ms: [1000, 1000, 1500],
            extractor_ms: 2000,
            brief_unlock_ms: 1500,
            pricing_hint_ms: 3000,
            contact_submit_ms: 2000,
            purchase_ms: 1500,
            sample_download_ms: 1000,
            toast_short_ms: 3000,
            toast_long_ms: 5000,
        }
    }
}

pub fn timings() -> Timings {
    Timings::default()
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Transition tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
