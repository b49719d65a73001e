//! Servicio de pagos (Stripe Checkout)
//!
//! Crea sesiones de checkout contra la API HTTP de Stripe. El precio es
//! fijo por pack y el tipo de compra viaja en los metadatos de la sesión;
//! el webhook lo lee después para subir el plan y el límite de vehículos.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EnvironmentConfig;

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Pack comprado - determina plan y límite de vehículos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseType {
    Home,
    Family,
}

impl PurchaseType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(PurchaseType::Home),
            "family" => Some(PurchaseType::Family),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseType::Home => "home",
            PurchaseType::Family => "family",
        }
    }

    /// Límite de vehículos que otorga el pack
    pub fn vehicles_limit(&self) -> i32 {
        match self {
            PurchaseType::Home => 3,
            PurchaseType::Family => 5,
        }
    }

    /// Precio fijo en céntimos de euro
    pub fn unit_amount(&self) -> u32 {
        match self {
            PurchaseType::Home => 1495,
            PurchaseType::Family => 2495,
        }
    }

    pub fn product_name(&self) -> &'static str {
        match self {
            PurchaseType::Home => "Pack Home (3 Vehicles)",
            PurchaseType::Family => "Pack Family (5 Vehicles)",
        }
    }

    pub fn product_description(&self) -> &'static str {
        match self {
            PurchaseType::Home => "Upgrade to manage up to 3 vehicles.",
            PurchaseType::Family => "Upgrade to manage up to 5 vehicles.",
        }
    }
}

/// Sesión de checkout creada en Stripe
#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

pub struct StripeService {
    client: reqwest::Client,
    secret_key: String,
    success_url: String,
    cancel_url: String,
}

impl StripeService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            secret_key: config.stripe_secret_key.clone(),
            success_url: config.checkout_success_url.clone(),
            cancel_url: config.checkout_cancel_url.clone(),
        }
    }

    /// Crear una sesión de checkout de pago único para un pack
    pub async fn create_checkout_session(
        &self,
        user_id: Uuid,
        email: &str,
        purchase_type: PurchaseType,
    ) -> Result<CheckoutSession> {
        log::info!(
            "💳 Creando sesión de checkout '{}' para usuario {}",
            purchase_type.as_str(),
            user_id
        );

        let params: Vec<(&str, String)> = vec![
            ("payment_method_types[0]", "card".to_string()),
            ("mode", "payment".to_string()),
            ("line_items[0][quantity]", "1".to_string()),
            (
                "line_items[0][price_data][currency]",
                "eur".to_string(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                purchase_type.unit_amount().to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                purchase_type.product_name().to_string(),
            ),
            (
                "line_items[0][price_data][product_data][description]",
                purchase_type.product_description().to_string(),
            ),
            ("success_url", self.success_url.clone()),
            ("cancel_url", self.cancel_url.clone()),
            ("customer_email", email.to_string()),
            ("metadata[user_id]", user_id.to_string()),
            (
                "metadata[purchase_type]",
                purchase_type.as_str().to_string(),
            ),
        ];

        let response = self
            .client
            .post(CHECKOUT_SESSIONS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Stripe devolvió {}: {}", status, error_text);
            return Err(anyhow!("Stripe checkout failed: {}", status));
        }

        let session: CheckoutSession = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse checkout session: {}", e))?;

        log::info!("✅ Sesión de checkout creada: {}", session.id);
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_type_limits() {
        assert_eq!(PurchaseType::Home.vehicles_limit(), 3);
        assert_eq!(PurchaseType::Family.vehicles_limit(), 5);
    }

    #[test]
    fn test_purchase_type_parse() {
        assert_eq!(PurchaseType::parse("home"), Some(PurchaseType::Home));
        assert_eq!(PurchaseType::parse("family"), Some(PurchaseType::Family));
        assert_eq!(PurchaseType::parse("premium"), None);
    }

    #[test]
    fn test_purchase_type_prices() {
        assert_eq!(PurchaseType::Family.unit_amount(), 2495);
        assert!(PurchaseType::Home.unit_amount() < PurchaseType::Family.unit_amount());
    }
}
