//! Application Configuration

/// Subscription price in kobo, charged once
pub const SUBSCRIPTION_AMOUNT_KOBO: i64 = 500;

/// Billing application configuration
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Amount charged per subscription, gateway minor unit
    pub amount_kobo: i64,
    /// Absolute URL the gateway redirects back to after payment
    pub callback_url: String,
}

impl BillingConfig {
    /// Build from the public base URL of this deployment
    pub fn new(public_base_url: &str) -> Self {
        Self {
            amount_kobo: SUBSCRIPTION_AMOUNT_KOBO,
            callback_url: format!("{}/paystack/callback", public_base_url.trim_end_matches('/')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_built_from_base() {
        let config = BillingConfig::new("https://example.com/");
        assert_eq!(config.callback_url, "https://example.com/paystack/callback");
        assert_eq!(config.amount_kobo, 500);
    }
}
