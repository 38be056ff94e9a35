/**
 * Stripe Checkout
 *
 * This module creates Stripe subscription checkout sessions via the
 * Stripe REST API (form-encoded POST to /v1/checkout/sessions).
 *
 * The route is public: payment is initiated before the user has an
 * account-bound subscription, and Stripe owns the rest of the flow.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::server::config::StripeConfig;

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Stripe client configuration held in application state
#[derive(Clone)]
pub struct BillingConfig {
    client: reqwest::Client,
    secret_key: String,
    price_id: String,
    public_url: String,
}

/// Checkout session as returned by Stripe
///
/// Stripe sends many more fields; only the redirect URL is relevant
/// here, and it is also the whole response body for the client.
#[derive(Serialize, Deserialize, Debug)]
pub struct CheckoutSession {
    /// URL the client should redirect the browser to
    pub url: String,
}

impl BillingConfig {
    /// Build the billing configuration from the Stripe settings
    pub fn new(stripe: StripeConfig, public_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: stripe.secret_key,
            price_id: stripe.price_id,
            public_url,
        }
    }

    /// Create a subscription checkout session
    ///
    /// Success redirects to the dashboard; cancellation returns to the
    /// landing page.
    pub async fn create_checkout_session(&self) -> Result<CheckoutSession, reqwest::Error> {
        let success_url = format!("{}/dashboard", self.public_url);
        let cancel_url = self.public_url.clone();

        let params = [
            ("payment_method_types[0]", "card"),
            ("mode", "subscription"),
            ("line_items[0][price]", self.price_id.as_str()),
            ("line_items[0][quantity]", "1"),
            ("success_url", success_url.as_str()),
            ("cancel_url", cancel_url.as_str()),
        ];

        self.client
            .post(CHECKOUT_SESSIONS_URL)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<CheckoutSession>()
            .await
    }
}

/// Checkout handler for POST /api/checkout
///
/// # Errors
///
/// * `502 Bad Gateway` - If the Stripe request fails
/// * `503 Service Unavailable` - If Stripe is not configured
pub async fn checkout(
    State(billing): State<Option<BillingConfig>>,
) -> Result<Json<CheckoutSession>, AppError> {
    let billing = billing.ok_or_else(|| {
        tracing::error!("Stripe not configured");
        AppError::ServiceUnavailable
    })?;

    let session = billing.create_checkout_session().await?;

    tracing::info!("Checkout session created");

    Ok(Json(session))
}
