use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
use crate::middleware::auth::generate_jwt_token;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct AuthController {
    users: UserRepository,
    profiles: ProfileRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
            config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();

        if self.users.email_exists(&email).await? {
            return Err(AppError::Conflict(
                "Ya existe una cuenta con este email".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self.users.create(email, password_hash).await?;

        // Toda cuenta nueva arranca con el plan gratuito (1 vehículo)
        self.profiles.create_default(user.id).await?;

        log::info!("👤 Cuenta creada: {}", user.id);

        let (token, expires_at) = generate_jwt_token(user.id, &self.config)?;

        Ok(AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
            expires_at: expires_at.to_rfc3339(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let (token, expires_at) = generate_jwt_token(user.id, &self.config)?;

        Ok(AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
            expires_at: expires_at.to_rfc3339(),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<MeResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil no encontrado".to_string()))?;

        Ok(MeResponse {
            user_id: user.id,
            email: user.email,
            plan: profile.plan,
            vehicles_limit: profile.vehicles_limit,
        })
    }
}
