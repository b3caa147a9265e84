use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/parish";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parish {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub municipality: Option<String>,
}

impl Catalog for Parish {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Parish {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.name.clone(), self.municipality.clone().unwrap_or_default()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParishDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub municipality: Option<String>,
}

impl From<&Parish> for ParishDto {
    fn from(p: &Parish) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            municipality: p.municipality.clone(),
        }
    }
}

impl ParishDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("El nombre de la parroquia es obligatorio".into()));
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            municipality: self.municipality.as_deref().and_then(non_blank),
        }
    }
}
