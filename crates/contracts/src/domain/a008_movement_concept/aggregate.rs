use serde::{Deserialize, Serialize};

use crate::domain::common::{Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

/// Which movement book a concept belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConceptKind {
    Incorporation,
    Disposal,
}

impl ConceptKind {
    pub const fn endpoint(self) -> &'static str {
        match self {
            ConceptKind::Incorporation => "/concept-incorp",
            ConceptKind::Disposal => "/concept-desincorp",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConceptKind::Incorporation => "Conceptos de incorporación",
            ConceptKind::Disposal => "Conceptos de desincorporación",
        }
    }
}

/// Movement concept (e.g. "02 Compra", "51 Venta")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConcept {
    pub id: EntityId,
    pub code: String,
    pub description: String,
}

impl Catalog for MovementConcept {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.description)
    }
}

impl Searchable for MovementConcept {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.code.clone(), self.description.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MovementConceptDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub code: String,
    pub description: String,
}

impl From<&MovementConcept> for MovementConceptDto {
    fn from(c: &MovementConcept) -> Self {
        Self {
            id: Some(c.id),
            code: c.code.clone(),
            description: c.description.clone(),
        }
    }
}

impl MovementConceptDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.code.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ApiError::Validation("Código y descripción son obligatorios".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_use_their_own_books() {
        assert_eq!(ConceptKind::Incorporation.endpoint(), "/concept-incorp");
        assert_eq!(ConceptKind::Disposal.endpoint(), "/concept-desincorp");
    }

    #[test]
    fn display_name_joins_code() {
        let c = MovementConcept {
            id: 1,
            code: "02".into(),
            description: "Compra".into(),
        };
        assert_eq!(c.display_name(), "02 - Compra");
    }
}
