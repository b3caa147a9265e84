use contracts::domain::a011_missing_good::aggregate::{MissingGood, MissingGoodDto, ENDPOINT};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_empty};

pub async fn fetch_missing_goods() -> Result<Vec<MissingGood>, ApiError> {
    get_json(ENDPOINT).await
}

pub async fn create_missing_good(dto: &MissingGoodDto) -> Result<(), ApiError> {
    post_empty(ENDPOINT, dto).await
}

pub async fn delete_missing_good(id: EntityId) -> Result<(), ApiError> {
    delete(&format!("{}/{}", ENDPOINT, id)).await
}
