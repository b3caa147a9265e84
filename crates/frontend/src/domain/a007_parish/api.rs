use contracts::domain::a007_parish::aggregate::{Parish, ENDPOINT};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_parishes() -> Result<Vec<Parish>, ApiError> {
    get_json(ENDPOINT).await
}
