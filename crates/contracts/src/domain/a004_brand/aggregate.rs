use serde::{Deserialize, Serialize};

use crate::domain::common::{Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/brand";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: EntityId,
    pub name: String,
}

impl Catalog for Brand {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Brand {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BrandDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
}

impl From<&Brand> for BrandDto {
    fn from(b: &Brand) -> Self {
        Self {
            id: Some(b.id),
            name: b.name.clone(),
        }
    }
}

impl BrandDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("El nombre de la marca es obligatorio".into()));
        }
        Ok(())
    }
}
