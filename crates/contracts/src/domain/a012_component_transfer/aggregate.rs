use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/transfer-component";

/// History row written after a component changes computer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTransfer {
    pub id: EntityId,
    pub component_id: EntityId,
    #[serde(default)]
    pub component_name: Option<String>,
    #[serde(default)]
    pub from_asset_id: Option<EntityId>,
    #[serde(default)]
    pub from_asset_code: Option<String>,
    #[serde(default)]
    pub to_asset_id: Option<EntityId>,
    #[serde(default)]
    pub to_asset_code: Option<String>,
    #[serde(default)]
    pub reason: String,
    pub transferred_at: String,
    #[serde(default)]
    pub user: Option<String>,
}

impl Searchable for ComponentTransfer {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.component_name.clone().unwrap_or_default(),
            self.from_asset_code.clone().unwrap_or_default(),
            self.to_asset_code.clone().unwrap_or_default(),
            self.reason.clone(),
            self.user.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateComponentTransfer {
    pub component_id: EntityId,
    pub from_asset_id: Option<EntityId>,
    pub to_asset_id: Option<EntityId>,
    pub reason: String,
}
