use contracts::system::auth::{AuthResponse, LoginRequest};

use crate::shared::api::{ApiClient, ApiError};

/// Login with email and password
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.post("/auth/login", request).await
}

/// Validate the stored token; the server answers with a fresh token and the user
pub async fn check_status(client: &ApiClient) -> Result<AuthResponse, ApiError> {
    client.get("/auth/check-status").await
}

/// Session restore at startup: without a stored token nothing is requested
pub async fn restore_session(
    client: &ApiClient,
    token: Option<String>,
) -> Result<AuthResponse, ApiError> {
    if token.is_none() {
        return Err(ApiError::NoSession);
    }
    check_status(client).await
}
