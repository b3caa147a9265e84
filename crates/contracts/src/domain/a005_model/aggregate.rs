use serde::{Deserialize, Serialize};

use crate::domain::common::{Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/model";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: EntityId,
    pub name: String,
    pub brand_id: EntityId,
    #[serde(default)]
    pub brand_name: Option<String>,
}

impl Catalog for Model {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Model {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.name.clone(), self.brand_name.clone().unwrap_or_default()]
    }
}

/// Models offered once a brand is picked.
pub fn models_for_brand(models: &[Model], brand_id: Option<EntityId>) -> Vec<Model> {
    match brand_id {
        Some(brand_id) => models
            .iter()
            .filter(|m| m.brand_id == brand_id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub brand_id: Option<EntityId>,
}

impl From<&Model> for ModelDto {
    fn from(m: &Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name.clone(),
            brand_id: Some(m.brand_id),
        }
    }
}

impl ModelDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("El nombre del modelo es obligatorio".into()));
        }
        if self.brand_id.is_none() {
            return Err(ApiError::Validation("Seleccione una marca".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: EntityId, brand_id: EntityId) -> Model {
        Model {
            id,
            name: format!("M{}", id),
            brand_id,
            brand_name: None,
        }
    }

    #[test]
    fn filters_by_brand() {
        let models = vec![model(1, 10), model(2, 20), model(3, 10)];
        let ids: Vec<EntityId> = models_for_brand(&models, Some(10)).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(models_for_brand(&models, None).is_empty());
    }

    #[test]
    fn brand_is_required() {
        let dto = ModelDto {
            id: None,
            name: "ThinkCentre".into(),
            brand_id: None,
        };
        assert!(dto.validate().is_err());
    }
}
