use sqlx::PgPool;
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::dto::billing_dto::{CheckoutRequest, CheckoutResponse, WebhookEvent};
use crate::repositories::profile_repository::ProfileRepository;
use crate::services::stripe_service::{PurchaseType, StripeService};
use crate::utils::errors::AppError;

pub struct BillingController {
    profiles: ProfileRepository,
    stripe: StripeService,
    webhook_secret: String,
}

impl BillingController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            profiles: ProfileRepository::new(pool),
            stripe: StripeService::new(config),
            webhook_secret: config.stripe_webhook_secret.clone(),
        }
    }

    /// Crear la sesión de checkout para el pack solicitado
    pub async fn checkout(
        &self,
        user_id: Uuid,
        email: &str,
        request: CheckoutRequest,
    ) -> Result<CheckoutResponse, AppError> {
        let session = self
            .stripe
            .create_checkout_session(user_id, email, request.purchase_type)
            .await
            .map_err(|e| AppError::ExternalApi(e.to_string()))?;

        Ok(CheckoutResponse {
            session_id: session.id,
            url: session.url,
        })
    }

    /// Procesar el callback de la pasarela. Solo nos interesa
    /// checkout.session.completed: sube el plan y el límite de vehículos
    /// según el purchase_type de los metadatos.
    pub async fn webhook(
        &self,
        signature: Option<&str>,
        event: WebhookEvent,
    ) -> Result<(), AppError> {
        // Verificación por secreto compartido del endpoint
        match signature {
            Some(sig) if sig == self.webhook_secret => {}
            _ => {
                return Err(AppError::Unauthorized(
                    "Firma de webhook inválida".to_string(),
                ))
            }
        }

        if event.event_type != "checkout.session.completed" {
            log::debug!("Webhook ignorado: {}", event.event_type);
            return Ok(());
        }

        let session = event.data.object;
        let Some(metadata) = session.metadata else {
            log::warn!("⚠️ Sesión {} sin metadatos, se ignora", session.id);
            return Ok(());
        };

        let (Some(user_id), Some(purchase_type)) = (metadata.user_id, metadata.purchase_type)
        else {
            log::warn!("⚠️ Sesión {} con metadatos incompletos, se ignora", session.id);
            return Ok(());
        };

        let user_id = Uuid::parse_str(&user_id)
            .map_err(|_| AppError::BadRequest("user_id inválido en metadatos".to_string()))?;

        let purchase_type = PurchaseType::parse(&purchase_type).ok_or_else(|| {
            AppError::BadRequest(format!("purchase_type desconocido: {}", purchase_type))
        })?;

        self.profiles
            .upgrade_plan(
                user_id,
                purchase_type.as_str(),
                purchase_type.vehicles_limit(),
                session.customer,
            )
            .await?;

        log::info!(
            "💰 Plan actualizado a '{}' ({} vehículos) para usuario {}",
            purchase_type.as_str(),
            purchase_type.vehicles_limit(),
            user_id
        );

        Ok(())
    }
}
