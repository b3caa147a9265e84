use contracts::domain::a002_component::aggregate::{Component, ComponentDto, ENDPOINT};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_empty, put_empty};

fn item_path(id: EntityId) -> String {
    format!("{}/{}", ENDPOINT, id)
}

pub async fn fetch_components() -> Result<Vec<Component>, ApiError> {
    get_json(ENDPOINT).await
}

/// Parts currently installed in `asset_id`. The API has no filtered
/// endpoint, so the whole list is fetched and narrowed here.
pub async fn fetch_installed(asset_id: EntityId) -> Result<Vec<Component>, ApiError> {
    let all = fetch_components().await?;
    Ok(all.into_iter().filter(|c| c.is_installed_in(asset_id)).collect())
}

pub async fn create_component(dto: &ComponentDto) -> Result<(), ApiError> {
    post_empty(ENDPOINT, dto).await
}

pub async fn update_component(id: EntityId, dto: &ComponentDto) -> Result<(), ApiError> {
    put_empty(&item_path(id), dto).await
}

pub async fn delete_component(id: EntityId) -> Result<(), ApiError> {
    delete(&item_path(id)).await
}
