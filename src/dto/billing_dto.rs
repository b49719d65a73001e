use serde::{Deserialize, Serialize};

use crate::services::stripe_service::PurchaseType;

/// Request de checkout: qué pack quiere comprar el usuario
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub purchase_type: PurchaseType,
}

/// Response con la sesión creada para redirigir al cliente
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: Option<String>,
}

/// Evento recibido en el webhook de la pasarela.
/// Solo se modela el contrato de datos que consumimos:
/// checkout.session.completed con los metadatos de la sesión.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookEventData,
}

#[derive(Debug, Deserialize)]
pub struct WebhookEventData {
    pub object: WebhookSessionObject,
}

#[derive(Debug, Deserialize)]
pub struct WebhookSessionObject {
    pub id: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub metadata: Option<WebhookSessionMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookSessionMetadata {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub purchase_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_event_deserializes_stripe_payload() {
        let payload = serde_json::json!({
            "id": "evt_123",
            "type": "checkout.session.completed",
            "data": {
                "object": {
                    "id": "cs_test_123",
                    "customer": "cus_abc",
                    "metadata": {
                        "user_id": "00000000-0000-0000-0000-000000000001",
                        "purchase_type": "family"
                    }
                }
            }
        });

        let event: WebhookEvent = serde_json::from_value(payload).unwrap();
        assert_eq!(event.event_type, "checkout.session.completed");
        let metadata = event.data.object.metadata.unwrap();
        assert_eq!(metadata.purchase_type.as_deref(), Some("family"));
    }

    #[test]
    fn test_webhook_event_without_metadata() {
        let payload = serde_json::json!({
            "type": "checkout.session.completed",
            "data": { "object": { "id": "cs_test_456" } }
        });

        let event: WebhookEvent = serde_json::from_value(payload).unwrap();
        assert!(event.data.object.metadata.is_none());
    }
}
