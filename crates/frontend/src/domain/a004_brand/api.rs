use contracts::domain::a004_brand::aggregate::{Brand, ENDPOINT};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_brands() -> Result<Vec<Brand>, ApiError> {
    get_json(ENDPOINT).await
}
