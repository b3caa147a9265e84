use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/dept";

/// Organizational unit that holds assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub responsible: Option<String>,
    #[serde(default)]
    pub parish_id: Option<EntityId>,
}

impl Catalog for Department {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

impl Searchable for Department {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.responsible.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DepartmentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub responsible: Option<String>,
    pub parish_id: Option<EntityId>,
}

impl From<&Department> for DepartmentDto {
    fn from(d: &Department) -> Self {
        Self {
            id: Some(d.id),
            code: d.code.clone(),
            name: d.name.clone(),
            responsible: d.responsible.clone(),
            parish_id: d.parish_id,
        }
    }
}

impl DepartmentDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.code.trim().is_empty() {
            return Err(ApiError::Validation("El código es obligatorio".into()));
        }
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("El nombre es obligatorio".into()));
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            responsible: self.responsible.as_deref().and_then(non_blank),
            ..self.clone()
        }
    }
}
