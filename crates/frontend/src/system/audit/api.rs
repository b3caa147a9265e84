use contracts::shared::api_error::ApiError;
use contracts::system::audit::{AuditEntry, ENDPOINT};

use crate::shared::api_utils::get_json;

pub async fn fetch_audit() -> Result<Vec<AuditEntry>, ApiError> {
    get_json(ENDPOINT).await
}
