use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::system::notifications::{read_all_endpoint, read_endpoint, Notification, ENDPOINT};

use crate::shared::api_utils::{get_json, patch_empty};

pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    get_json(ENDPOINT).await
}

pub async fn mark_read(id: EntityId) -> Result<(), ApiError> {
    patch_empty(&read_endpoint(id)).await
}

pub async fn mark_all_read() -> Result<(), ApiError> {
    patch_empty(&read_all_endpoint()).await
}
