//! Paystack REST client
//!
//! Minimal client for the Paystack transaction API
//! (https://api.paystack.co). Auth is a Bearer secret key.

use serde::{Deserialize, Serialize};

use crate::domain::gateway::{PaymentGateway, PaymentIntent, PaymentVerification};
use crate::error::{BillingError, BillingResult};

const PAYSTACK_API_BASE: &str = "https://api.paystack.co";

/// Gateway-side status string for a completed payment
const VERIFY_SUCCESS_STATUS: &str = "success";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct InitializeRequest<'a> {
    email: &'a str,
    /// Minor unit (kobo)
    amount: i64,
    callback_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    status: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct InitializeData {
    authorization_url: String,
    reference: String,
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    status: String,
    customer: Option<VerifyCustomer>,
}

#[derive(Debug, Deserialize)]
struct VerifyCustomer {
    email: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Paystack API client
#[derive(Clone)]
pub struct PaystackClient {
    http: reqwest::Client,
    secret_key: String,
    base_url: String,
}

impl PaystackClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
            base_url: PAYSTACK_API_BASE.to_string(),
        }
    }

    /// Create a client against a custom base URL (local stub servers)
    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
            base_url: base_url.into(),
        }
    }

    /// POST a request and decode the standard envelope
    async fn read_envelope<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> BillingResult<ApiEnvelope<T>> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BillingError::Gateway(format!("read body: {e}")))?;

        if !status.is_success() {
            return Err(BillingError::Gateway(format!(
                "api status={} body={}",
                status.as_u16(),
                body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| BillingError::Gateway(format!("invalid response: {e}; body={body}")))
    }
}

impl PaymentGateway for PaystackClient {
    async fn initialize(
        &self,
        email: &str,
        amount: i64,
        callback_url: &str,
    ) -> BillingResult<PaymentIntent> {
        let request = InitializeRequest {
            email,
            amount,
            callback_url,
        };

        let response = self
            .http
            .post(format!("{}/transaction/initialize", self.base_url))
            .bearer_auth(&self.secret_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BillingError::Gateway(format!("transport: {e}")))?;

        let envelope: ApiEnvelope<InitializeData> = Self::read_envelope(response).await?;

        if !envelope.status {
            return Err(BillingError::Gateway(format!(
                "initialize declined: {}",
                envelope.message
            )));
        }

        let data = envelope.data.ok_or_else(|| {
            BillingError::Gateway("initialize response missing data".to_string())
        })?;

        Ok(PaymentIntent {
            authorization_url: data.authorization_url,
            reference: data.reference,
        })
    }

    async fn verify(&self, reference: &str) -> BillingResult<PaymentVerification> {
        let response = self
            .http
            .get(format!("{}/transaction/verify/{}", self.base_url, reference))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| BillingError::Gateway(format!("transport: {e}")))?;

        let envelope: ApiEnvelope<VerifyData> = Self::read_envelope(response).await?;

        if !envelope.status {
            return Err(BillingError::Gateway(format!(
                "verify declined: {}",
                envelope.message
            )));
        }

        let data = envelope
            .data
            .ok_or_else(|| BillingError::Gateway("verify response missing data".to_string()))?;

        Ok(PaymentVerification {
            success: data.status == VERIFY_SUCCESS_STATUS,
            customer_email: data.customer.and_then(|c| c.email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_response_parsing() {
        let json = r#"{
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/abc123",
                "access_code": "abc123",
                "reference": "ref-xyz"
            }
        }"#;
        let envelope: ApiEnvelope<InitializeData> = serde_json::from_str(json).unwrap();
        assert!(envelope.status);
        let data = envelope.data.unwrap();
        assert_eq!(data.authorization_url, "https://checkout.paystack.com/abc123");
        assert_eq!(data.reference, "ref-xyz");
    }

    #[test]
    fn test_verify_response_parsing() {
        let json = r#"{
            "status": true,
            "message": "Verification successful",
            "data": {
                "status": "success",
                "customer": { "email": "alice@x.com" }
            }
        }"#;
        let envelope: ApiEnvelope<VerifyData> = serde_json::from_str(json).unwrap();
        let data = envelope.data.unwrap();
        assert_eq!(data.status, VERIFY_SUCCESS_STATUS);
        assert_eq!(data.customer.unwrap().email.unwrap(), "alice@x.com");
    }

    #[test]
    fn test_verify_failed_status_parses() {
        let json = r#"{
            "status": true,
            "data": { "status": "abandoned", "customer": null }
        }"#;
        let envelope: ApiEnvelope<VerifyData> = serde_json::from_str(json).unwrap();
        let data = envelope.data.unwrap();
        assert_ne!(data.status, VERIFY_SUCCESS_STATUS);
    }
}
