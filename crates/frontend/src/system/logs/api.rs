use contracts::shared::api_error::ApiError;
use contracts::shared::logger::SystemLogEntry;
use contracts::system::audit::LOGS_ENDPOINT;

use crate::shared::api_utils::get_json;

pub async fn fetch_logs() -> Result<Vec<SystemLogEntry>, ApiError> {
    get_json(LOGS_ENDPOINT).await
}
