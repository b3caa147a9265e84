use serde::{Deserialize, Serialize};

use crate::domain::common::{Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

/// Subgroups of the furniture group (the only group the registry tracks).
pub const ENDPOINT: &str = "/subgroup/muebles";

/// Classification bucket tied to a movement-accounting code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subgroup {
    pub id: EntityId,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub movement_code: String,
}

impl Catalog for Subgroup {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.description)
    }
}

impl Searchable for Subgroup {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.movement_code.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubgroupDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub code: String,
    pub description: String,
    pub movement_code: String,
}

impl From<&Subgroup> for SubgroupDto {
    fn from(s: &Subgroup) -> Self {
        Self {
            id: Some(s.id),
            code: s.code.clone(),
            description: s.description.clone(),
            movement_code: s.movement_code.clone(),
        }
    }
}

impl SubgroupDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.code.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ApiError::Validation("Código y descripción son obligatorios".into()));
        }
        if self.movement_code.trim().is_empty() {
            return Err(ApiError::Validation("El código contable es obligatorio".into()));
        }
        Ok(())
    }
}
