use contracts::domain::a006_subgroup::aggregate::{Subgroup, ENDPOINT};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_subgroups() -> Result<Vec<Subgroup>, ApiError> {
    get_json(ENDPOINT).await
}
