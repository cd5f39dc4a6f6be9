use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "Please try again or contact support.";

/// Failure kinds a backed implementation of the simulated actions has to tell apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
    #[error("rate limited, retry in {retry_after_secs} s")]
    RateLimited { retry_after_secs: u32 },
}

impl ActionError {
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Validation(reason) => reason.clone(),
            ActionError::Timeout { .. } => {
                "The request took too long. Please try again.".to_string()
            }
            ActionError::RateLimited { retry_after_secs } => {
                format!("Too many requests. Please wait {} seconds.", retry_after_secs)
            }
            ActionError::Network(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_fall_back_to_generic_message() {
        let err = ActionError::Network("connection reset".to_string());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert_eq!(err.to_string(), "network error: connection reset");
    }

    #[test]
    fn rate_limit_message_carries_wait_time() {
        let err = ActionError::RateLimited { retry_after_secs: 30 };
        assert!(err.user_message().contains("30 seconds"));
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = ActionError::Validation("Company name is required.".to_string());
        assert_eq!(err.user_message(), "Company name is required.");
    }
}
