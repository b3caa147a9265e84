use contracts::shared::api_error::ApiError;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RegisterRequest, LOGIN_ENDPOINT, REGISTER_ENDPOINT,
};

use crate::shared::api_utils::post_anonymous;

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_anonymous(LOGIN_ENDPOINT, &request).await
}

/// The response body is ignored; a new account still has to sign in.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    post_anonymous::<_, serde_json::Value>(REGISTER_ENDPOINT, request).await?;
    Ok(())
}
