//! User service for registration, login, and profile access
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed by reference and carries pre-computed keys.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRecord, UserRepository};
use fittrack_shared::models::UserRole;
use fittrack_shared::types::{AuthTokens, RegisterRequest, UserProfile};
use fittrack_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        request: RegisterRequest,
    ) -> Result<AuthTokens, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::Validation("Name cannot be empty".to_string()));
        }
        if !request.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        validation::validate_password(&request.password).map_err(ApiError::Validation)?;

        // A registered email is claimed exactly once
        if UserRepository::email_exists(pool, &request.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(request.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            CreateUser {
                name: request.name,
                email: request.email,
                password_hash,
                fitness_goal: request.fitness_goal,
                height: request.height,
                weight: request.weight,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let role = Self::parse_role(&user)?;
        Self::issue_tokens(jwt_service, user.id, role)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same Unauthorized
    /// response so callers cannot probe which part was wrong.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        UserRepository::touch_last_active(pool, user.id)
            .await
            .map_err(ApiError::Internal)?;

        let role = Self::parse_role(&user)?;
        Self::issue_tokens(jwt_service, user.id, role)
    }

    /// Refresh the token pair using a refresh token
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // Re-read the user so a role change takes effect on refresh
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        let role = Self::parse_role(&user)?;
        Self::issue_tokens(jwt_service, user.id, role)
    }

    /// Get user profile
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let role = Self::parse_role(&user)?;

        Ok(UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
            fitness_goal: user.fitness_goal,
            height: user.height,
            weight: user.weight,
            created_at: user.created_at,
            last_active_at: user.last_active_at,
        })
    }

    fn parse_role(user: &UserRecord) -> Result<UserRole, ApiError> {
        user.role
            .parse()
            .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::Internal(e.into()))
    }

    fn issue_tokens(
        jwt_service: &JwtService,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id, role)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id, role)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}
