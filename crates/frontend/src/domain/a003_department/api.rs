use contracts::domain::a003_department::aggregate::{Department, ENDPOINT};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_departments() -> Result<Vec<Department>, ApiError> {
    get_json(ENDPOINT).await
}
