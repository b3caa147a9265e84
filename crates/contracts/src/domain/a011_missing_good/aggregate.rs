use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/missing-goods";

/// Discrepancy between the recorded and physically verified count of an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingGood {
    pub id: EntityId,
    pub asset_id: EntityId,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub department_id: EntityId,
    #[serde(default)]
    pub department_name: Option<String>,
    pub recorded_quantity: i32,
    pub verified_quantity: i32,
    /// Computed by the server
    #[serde(default)]
    pub difference: Option<i32>,
    pub unit_value: f64,
    #[serde(default)]
    pub official: Option<String>,
    pub reported_at: String,
    #[serde(default)]
    pub observations: Option<String>,
}

impl MissingGood {
    pub fn missing_units(&self) -> i32 {
        self.difference
            .unwrap_or(self.recorded_quantity - self.verified_quantity)
            .max(0)
    }

    pub fn missing_value(&self) -> f64 {
        f64::from(self.missing_units()) * self.unit_value
    }
}

impl Searchable for MissingGood {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.asset_code.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            self.department_name.clone().unwrap_or_default(),
            self.official.clone().unwrap_or_default(),
        ]
    }
}

/// Footer of the missing goods report
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MissingGoodsSummary {
    pub lines: usize,
    pub missing_units: i64,
    pub missing_value: f64,
}

impl MissingGoodsSummary {
    pub fn from_rows(rows: &[MissingGood]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            lines: acc.lines + 1,
            missing_units: acc.missing_units + i64::from(row.missing_units()),
            missing_value: acc.missing_value + row.missing_value(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingGoodDto {
    pub asset_id: Option<EntityId>,
    pub department_id: Option<EntityId>,
    pub recorded_quantity: i32,
    pub verified_quantity: i32,
    pub official: Option<String>,
    pub reported_at: String,
    pub observations: Option<String>,
}

impl MissingGoodDto {
    pub fn new(today: &str) -> Self {
        Self {
            asset_id: None,
            department_id: None,
            recorded_quantity: 1,
            verified_quantity: 0,
            official: None,
            reported_at: today.to_string(),
            observations: None,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.asset_id.is_none() {
            return Err(ApiError::Validation("Seleccione un bien".into()));
        }
        if self.department_id.is_none() {
            return Err(ApiError::Validation("Seleccione un departamento".into()));
        }
        if self.recorded_quantity < 1 || self.verified_quantity < 0 {
            return Err(ApiError::Validation("Cantidades inválidas".into()));
        }
        if self.verified_quantity > self.recorded_quantity {
            return Err(ApiError::Validation(
                "La cantidad verificada no puede superar la registrada".into(),
            ));
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            official: self.official.as_deref().and_then(non_blank),
            observations: self.observations.as_deref().and_then(non_blank),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(recorded: i32, verified: i32, value: f64, difference: Option<i32>) -> MissingGood {
        MissingGood {
            id: 1,
            asset_id: 1,
            asset_code: None,
            description: None,
            department_id: 1,
            department_name: None,
            recorded_quantity: recorded,
            verified_quantity: verified,
            difference,
            unit_value: value,
            official: None,
            reported_at: "2024-06-01".into(),
            observations: None,
        }
    }

    #[test]
    fn server_difference_wins_over_local_one() {
        assert_eq!(row(5, 3, 10.0, None).missing_units(), 2);
        assert_eq!(row(5, 3, 10.0, Some(4)).missing_units(), 4);
        assert_eq!(row(2, 5, 10.0, None).missing_units(), 0);
    }

    #[test]
    fn summary_totals() {
        let rows = vec![row(5, 3, 10.0, None), row(1, 0, 250.0, None)];
        let summary = MissingGoodsSummary::from_rows(&rows);
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.missing_units, 3);
        assert_eq!(summary.missing_value, 270.0);
        assert_eq!(MissingGoodsSummary::from_rows(&[]), MissingGoodsSummary::default());
    }

    #[test]
    fn verified_may_not_exceed_recorded() {
        let mut dto = MissingGoodDto::new("2024-06-01");
        dto.asset_id = Some(1);
        dto.department_id = Some(2);
        dto.recorded_quantity = 3;
        dto.verified_quantity = 2;
        assert!(dto.validate().is_ok());

        dto.verified_quantity = 3;
        assert!(dto.validate().is_ok());

        dto.verified_quantity = 4;
        assert_eq!(
            dto.validate(),
            Err(ApiError::Validation(
                "La cantidad verificada no puede superar la registrada".into()
            ))
        );
    }
}
