//! Movement books (incorporations here, disposals in `a010_disposal`) share
//! the record shape, so the calls take the book's endpoint.

use contracts::domain::a009_incorporation::aggregate::{Movement, MovementDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, post_empty};

pub async fn fetch_movements(endpoint: &str) -> Result<Vec<Movement>, ApiError> {
    get_json(endpoint).await
}

pub async fn create_movement(endpoint: &str, dto: &MovementDto) -> Result<(), ApiError> {
    post_empty(endpoint, dto).await
}
