//! Stand-ins for the endpoints a backed build would call. Each one logs the
//! request it would send and succeeds.

use log::info;
use serde::Serialize;

use crate::error::ActionError;
use crate::forms::contact::ContactPayload;
use crate::models::pricing::PricingTier;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest<'a> {
    pub tier: &'a str,
    pub price_label: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRequest<'a> {
    pub tier: &'a str,
}

fn encode<T: Serialize>(body: &T) -> Result<String, ActionError> {
    serde_json::to_string(body).map_err(|e| ActionError::Validation(e.to_string()))
}

pub fn submit_contact(payload: &ContactPayload) -> Result<(), ActionError> {
    let body = encode(payload)?;
    info!("POST /api/contact {}", body);
    Ok(())
}

/// Returns the toast description for the checkout redirect.
pub fn start_checkout(tier: &PricingTier, price_label: &str) -> Result<String, ActionError> {
    let body = encode(&CheckoutRequest {
        tier: tier.name,
        price_label,
    })?;
    info!("POST /api/checkout {}", body);
    Ok(format!("Redirecting to secure checkout for {}...", price_label))
}

pub fn download_sample(tier: &PricingTier) -> Result<String, ActionError> {
    let body = encode(&SampleRequest { tier: tier.name })?;
    info!("POST /api/sample-report {}", body);
    Ok(format!("{} sample report is downloading...", tier.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pricing::{tier, BillingPeriod, TierId};

    #[test]
    fn checkout_text_carries_price_label() {
        let standard = tier(TierId::Standard);
        let label = standard.price_label(BillingPeriod::Monthly);
        assert_eq!(
            start_checkout(standard, &label).unwrap(),
            "Redirecting to secure checkout for $3600/month..."
        );
    }

    #[test]
    fn sample_text_names_the_tier() {
        assert_eq!(
            download_sample(tier(TierId::Lite)).unwrap(),
            "Lite sample report is downloading..."
        );
    }

    #[test]
    fn contact_submission_succeeds() {
        assert!(submit_contact(&ContactPayload::default()).is_ok());
    }
}
