use serde::{Deserialize, Serialize};

use crate::domain::common::{Catalog, EntityId};
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/user";
pub const ROLES_ENDPOINT: &str = "/roles";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role_id: Option<EntityId>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Searchable for User {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.full_name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.role_name.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
}

impl Catalog for Role {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<EntityId>,
    pub is_active: bool,
}

impl From<&User> for UpdateUserDto {
    fn from(u: &User) -> Self {
        Self {
            full_name: u.full_name.clone(),
            email: u.email.clone(),
            role_id: u.role_id,
            is_active: u.is_active,
        }
    }
}
