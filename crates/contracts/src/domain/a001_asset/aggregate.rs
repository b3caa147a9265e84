use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, Catalog, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/furniture";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    #[default]
    Furniture,
    Computer,
    Vehicle,
    #[serde(other)]
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Furniture,
        AssetCategory::Computer,
        AssetCategory::Vehicle,
        AssetCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetCategory::Furniture => "Mobiliario",
            AssetCategory::Computer => "Equipo de computación",
            AssetCategory::Vehicle => "Vehículo",
            AssetCategory::Other => "Otro",
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            AssetCategory::Furniture => "furniture",
            AssetCategory::Computer => "computer",
            AssetCategory::Vehicle => "vehicle",
            AssetCategory::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "furniture" => AssetCategory::Furniture,
            "computer" => AssetCategory::Computer,
            "vehicle" => AssetCategory::Vehicle,
            _ => AssetCategory::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Active,
    Disposed,
    Missing,
}

impl AssetStatus {
    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Active => "Activo",
            AssetStatus::Disposed => "Desincorporado",
            AssetStatus::Missing => "Faltante",
        }
    }
}

/// Tracked item of movable property (bien mueble)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: EntityId,
    /// Inventory number printed on the label
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub category: AssetCategory,
    #[serde(default)]
    pub status: AssetStatus,
    pub quantity: i32,
    pub unit_value: f64,
    /// Computed by the server
    #[serde(default)]
    pub total_value: Option<f64>,
    #[serde(default)]
    pub serial: Option<String>,
    pub department_id: EntityId,
    #[serde(default)]
    pub department_name: Option<String>,
    pub subgroup_id: EntityId,
    #[serde(default)]
    pub subgroup_name: Option<String>,
    #[serde(default)]
    pub brand_id: Option<EntityId>,
    #[serde(default)]
    pub model_id: Option<EntityId>,
    #[serde(default)]
    pub parish_id: Option<EntityId>,
    #[serde(default)]
    pub acquired_at: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

impl Asset {
    /// Only computer-type assets carry replaceable components.
    pub fn accepts_components(&self) -> bool {
        self.category == AssetCategory::Computer
    }

    pub fn total(&self) -> f64 {
        self.total_value
            .unwrap_or(self.unit_value * f64::from(self.quantity))
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.description)
    }
}

impl Catalog for Asset {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.label()
    }
}

impl Searchable for Asset {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.serial.clone().unwrap_or_default(),
            self.department_name.clone().unwrap_or_default(),
            self.subgroup_name.clone().unwrap_or_default(),
        ]
    }
}

/// Create / update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub code: String,
    pub description: String,
    pub category: AssetCategory,
    pub quantity: i32,
    pub unit_value: f64,
    pub serial: Option<String>,
    pub department_id: Option<EntityId>,
    pub subgroup_id: Option<EntityId>,
    pub brand_id: Option<EntityId>,
    pub model_id: Option<EntityId>,
    pub parish_id: Option<EntityId>,
    pub acquired_at: Option<String>,
    pub observations: Option<String>,
}

impl Default for AssetDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            description: String::new(),
            category: AssetCategory::Furniture,
            quantity: 1,
            unit_value: 0.0,
            serial: None,
            department_id: None,
            subgroup_id: None,
            brand_id: None,
            model_id: None,
            parish_id: None,
            acquired_at: None,
            observations: None,
        }
    }
}

impl From<&Asset> for AssetDto {
    fn from(a: &Asset) -> Self {
        Self {
            id: Some(a.id),
            code: a.code.clone(),
            description: a.description.clone(),
            category: a.category,
            quantity: a.quantity,
            unit_value: a.unit_value,
            serial: a.serial.clone(),
            department_id: Some(a.department_id),
            subgroup_id: Some(a.subgroup_id),
            brand_id: a.brand_id,
            model_id: a.model_id,
            parish_id: a.parish_id,
            acquired_at: a.acquired_at.clone(),
            observations: a.observations.clone(),
        }
    }
}

impl AssetDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.code.trim().is_empty() {
            return Err(ApiError::Validation("El número de bien es obligatorio".into()));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::Validation("La descripción es obligatoria".into()));
        }
        if self.quantity < 1 {
            return Err(ApiError::Validation("La cantidad debe ser al menos 1".into()));
        }
        if !self.unit_value.is_finite() || self.unit_value < 0.0 {
            return Err(ApiError::Validation("El valor unitario no puede ser negativo".into()));
        }
        if self.department_id.is_none() {
            return Err(ApiError::Validation("Seleccione un departamento".into()));
        }
        if self.subgroup_id.is_none() {
            return Err(ApiError::Validation("Seleccione un subgrupo".into()));
        }
        Ok(())
    }

    /// Trim text fields and drop blank optionals before sending.
    pub fn normalized(&self) -> Self {
        let mut dto = self.clone();
        dto.code = dto.code.trim().to_string();
        dto.description = dto.description.trim().to_string();
        dto.serial = dto.serial.as_deref().and_then(non_blank);
        dto.acquired_at = dto.acquired_at.as_deref().and_then(non_blank);
        dto.observations = dto.observations.as_deref().and_then(non_blank);
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> AssetDto {
        AssetDto {
            code: "BN-0001".into(),
            description: "Escritorio de metal".into(),
            department_id: Some(1),
            subgroup_id: Some(2),
            unit_value: 150.0,
            ..AssetDto::default()
        }
    }

    #[test]
    fn decodes_server_shape_with_defaults() {
        let json = r#"{
            "id": 4, "code": "BN-0004", "description": "Laptop",
            "category": "computer", "quantity": 1, "unit_value": 900.5,
            "department_id": 3, "subgroup_id": 7, "department_name": "Informática"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.category, AssetCategory::Computer);
        assert_eq!(asset.status, AssetStatus::Active);
        assert!(asset.accepts_components());
        assert_eq!(asset.total(), 900.5);
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let json = r#"{"id":1,"code":"x","description":"y","category":"boat","quantity":2,
            "unit_value":1.0,"department_id":1,"subgroup_id":1,"total_value":5.0}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.category, AssetCategory::Other);
        assert!(!asset.accepts_components());
        assert_eq!(asset.total(), 5.0);
    }

    #[test]
    fn dto_validation() {
        assert!(valid_dto().validate().is_ok());

        let mut dto = valid_dto();
        dto.code = "  ".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.quantity = 0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.unit_value = -1.0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.subgroup_id = None;
        assert_eq!(
            dto.validate(),
            Err(ApiError::Validation("Seleccione un subgrupo".into()))
        );
    }

    #[test]
    fn normalized_drops_blank_optionals() {
        let mut dto = valid_dto();
        dto.code = " BN-9 ".into();
        dto.serial = Some("   ".into());
        dto.observations = Some(" ok ".into());
        let dto = dto.normalized();
        assert_eq!(dto.code, "BN-9");
        assert_eq!(dto.serial, None);
        assert_eq!(dto.observations.as_deref(), Some("ok"));
    }

    #[test]
    fn category_keys_round_trip() {
        for category in AssetCategory::ALL {
            assert_eq!(AssetCategory::from_key(category.as_key()), category);
        }
    }
}
