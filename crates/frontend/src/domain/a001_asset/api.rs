use contracts::domain::a001_asset::aggregate::{Asset, AssetDto, ENDPOINT};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_empty, put_empty};

fn item_path(id: EntityId) -> String {
    format!("{}/{}", ENDPOINT, id)
}

pub async fn fetch_assets() -> Result<Vec<Asset>, ApiError> {
    get_json(ENDPOINT).await
}

pub async fn fetch_asset(id: EntityId) -> Result<Asset, ApiError> {
    get_json(&item_path(id)).await
}

/// Create when `dto.id` is empty, update otherwise.
pub async fn save_asset(dto: &AssetDto) -> Result<(), ApiError> {
    match dto.id {
        Some(id) => put_empty(&item_path(id), dto).await,
        None => post_empty(ENDPOINT, dto).await,
    }
}

pub async fn delete_asset(id: EntityId) -> Result<(), ApiError> {
    delete(&item_path(id)).await
}
