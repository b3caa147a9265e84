use contracts::domain::a012_component_transfer::aggregate::{
    ComponentTransfer, CreateComponentTransfer, ENDPOINT,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, post_empty};

pub async fn fetch_transfers() -> Result<Vec<ComponentTransfer>, ApiError> {
    get_json(ENDPOINT).await
}

pub async fn record_transfer(request: &CreateComponentTransfer) -> Result<(), ApiError> {
    post_empty(ENDPOINT, request).await
}
