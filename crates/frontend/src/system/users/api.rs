use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::system::users::{Role, UpdateUserDto, User, ENDPOINT, ROLES_ENDPOINT};

use crate::shared::api_utils::{get_json, put_empty};

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json(ENDPOINT).await
}

pub async fn fetch_roles() -> Result<Vec<Role>, ApiError> {
    get_json(ROLES_ENDPOINT).await
}

pub async fn update_user(id: EntityId, dto: &UpdateUserDto) -> Result<(), ApiError> {
    put_empty(&format!("{}/{}", ENDPOINT, id), dto).await
}
