use contracts::domain::a005_model::aggregate::{Model, ENDPOINT};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_models() -> Result<Vec<Model>, ApiError> {
    get_json(ENDPOINT).await
}
