use serde::{Deserialize, Serialize};

use super::kind::ComponentKind;
use crate::domain::common::{non_blank, EntityId};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::Searchable;

pub const ENDPOINT: &str = "/components";

/// Replaceable computer part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub brand_id: Option<EntityId>,
    #[serde(default)]
    pub model_id: Option<EntityId>,
    /// Computer the part is installed in; `None` when in stock
    #[serde(default)]
    pub asset_id: Option<EntityId>,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::classify(&self.name)
    }

    pub fn is_free(&self) -> bool {
        self.asset_id.is_none()
    }

    pub fn is_installed_in(&self, asset_id: EntityId) -> bool {
        self.asset_id == Some(asset_id)
    }

    pub fn label(&self) -> String {
        match self.serial.as_deref() {
            Some(serial) if !serial.is_empty() => format!("{} ({})", self.name, serial),
            _ => self.name.clone(),
        }
    }
}

impl Searchable for Component {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.serial.clone().unwrap_or_default(),
            self.asset_code.clone().unwrap_or_default(),
            self.kind().label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub serial: Option<String>,
    pub brand_id: Option<EntityId>,
    pub model_id: Option<EntityId>,
    pub asset_id: Option<EntityId>,
    pub observations: Option<String>,
}

impl From<&Component> for ComponentDto {
    fn from(c: &Component) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            serial: c.serial.clone(),
            brand_id: c.brand_id,
            model_id: c.model_id,
            asset_id: c.asset_id,
            observations: c.observations.clone(),
        }
    }
}

impl ComponentDto {
    /// Same record with its owning computer replaced (`None` detaches it).
    pub fn with_asset(component: &Component, asset_id: Option<EntityId>) -> Self {
        Self {
            asset_id,
            ..Self::from(component)
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("El nombre del componente es obligatorio".into()));
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        let mut dto = self.clone();
        dto.name = dto.name.trim().to_string();
        dto.serial = dto.serial.as_deref().and_then(non_blank);
        dto.observations = dto.observations.as_deref().and_then(non_blank);
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ram() -> Component {
        Component {
            id: 11,
            name: "Memoria RAM DDR4 8GB".into(),
            serial: Some("SN-77".into()),
            brand_id: None,
            model_id: None,
            asset_id: Some(3),
            asset_code: Some("BN-0003".into()),
            observations: None,
        }
    }

    #[test]
    fn with_asset_only_touches_owner() {
        let dto = ComponentDto::with_asset(&ram(), None);
        assert_eq!(dto.id, Some(11));
        assert_eq!(dto.asset_id, None);
        assert_eq!(dto.serial.as_deref(), Some("SN-77"));
        assert_eq!(dto.name, "Memoria RAM DDR4 8GB");
    }

    #[test]
    fn kind_and_ownership() {
        let c = ram();
        assert_eq!(c.kind(), ComponentKind::Ram);
        assert!(c.is_installed_in(3));
        assert!(!c.is_free());
        assert_eq!(c.label(), "Memoria RAM DDR4 8GB (SN-77)");
    }

    #[test]
    fn serializes_detached_owner_as_null() {
        let dto = ComponentDto::with_asset(&ram(), None);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["asset_id"].is_null());
        assert_eq!(json["id"], 11);
    }

    #[test]
    fn blank_name_is_rejected() {
        let dto = ComponentDto {
            name: "  ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
