use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/incorp";

/// Accession or write-off movement of an asset.
///
/// Incorporations and disposals share the same record shape; they differ
/// only in endpoint and concept book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: EntityId,
    pub asset_id: EntityId,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_description: Option<String>,
    pub concept_id: EntityId,
    #[serde(default)]
    pub concept_name: Option<String>,
    pub quantity: i32,
    pub amount: f64,
    /// ISO date
    pub date: String,
    #[serde(default)]
    pub department_id: Option<EntityId>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

pub type Incorporation = Movement;

impl Searchable for Movement {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.asset_code.clone().unwrap_or_default(),
            self.asset_description.clone().unwrap_or_default(),
            self.concept_name.clone().unwrap_or_default(),
            self.department_name.clone().unwrap_or_default(),
            self.date.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementDto {
    pub asset_id: Option<EntityId>,
    pub concept_id: Option<EntityId>,
    pub quantity: i32,
    pub amount: f64,
    pub date: String,
    pub department_id: Option<EntityId>,
    pub observations: Option<String>,
}

impl MovementDto {
    pub fn new(today: &str) -> Self {
        Self {
            asset_id: None,
            concept_id: None,
            quantity: 1,
            amount: 0.0,
            date: today.to_string(),
            department_id: None,
            observations: None,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.asset_id.is_none() {
            return Err(ApiError::Validation("Seleccione un bien".into()));
        }
        if self.concept_id.is_none() {
            return Err(ApiError::Validation("Seleccione un concepto".into()));
        }
        if self.quantity < 1 {
            return Err(ApiError::Validation("La cantidad debe ser al menos 1".into()));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ApiError::Validation("El monto no puede ser negativo".into()));
        }
        if chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(ApiError::Validation("Fecha inválida".into()));
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            observations: self.observations.as_deref().and_then(non_blank),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MovementDto {
        MovementDto {
            asset_id: Some(3),
            concept_id: Some(1),
            amount: 120.0,
            ..MovementDto::new("2024-05-02")
        }
    }

    #[test]
    fn complete_movement_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn missing_references_and_bad_values() {
        let mut dto = filled();
        dto.concept_id = None;
        assert_eq!(
            dto.validate(),
            Err(ApiError::Validation("Seleccione un concepto".into()))
        );

        let mut dto = filled();
        dto.quantity = 0;
        assert!(dto.validate().is_err());

        let mut dto = filled();
        dto.date = "02/05/2024".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn decodes_minimal_row() {
        let json = r#"{"id":1,"asset_id":2,"concept_id":3,"quantity":1,"amount":10.5,"date":"2024-01-31"}"#;
        let row: Incorporation = serde_json::from_str(json).unwrap();
        assert_eq!(row.asset_code, None);
        assert_eq!(row.amount, 10.5);
    }
}
