//! Add / transfer / replace of computer components as a list of API steps.
//!
//! The registry has no transactional endpoint for these moves. Each one is a
//! short sequence of independent calls (update the component's owner, write a
//! history row) that the dashboard runs in order, stopping at the first
//! failure. Planning validates everything that can be checked beforehand.

use thiserror::Error;

use super::aggregate::CreateComponentTransfer;
use crate::domain::a001_asset::aggregate::Asset;
use crate::domain::a002_component::aggregate::{Component, ComponentDto};
use crate::domain::a002_component::kind::{check_slot, SlotConflict};
use crate::domain::common::EntityId;
use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ComponentOperation {
    /// Install a part from stock
    Add { component: Component, target: Asset },
    /// Move an installed part to another computer
    Transfer {
        component: Component,
        from: Asset,
        to: Asset,
        reason: String,
    },
    /// Swap an installed part for one from stock
    Replace {
        old: Component,
        new: Component,
        asset: Asset,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferStep {
    Detach { component: Component },
    Attach { component: Component, asset_id: EntityId },
    Record(CreateComponentTransfer),
}

impl TransferStep {
    /// `(component id, payload)` for the steps that update a component.
    pub fn component_update(&self) -> Option<(EntityId, ComponentDto)> {
        match self {
            TransferStep::Detach { component } => {
                Some((component.id, ComponentDto::with_asset(component, None)))
            }
            TransferStep::Attach { component, asset_id } => {
                Some((component.id, ComponentDto::with_asset(component, Some(*asset_id))))
            }
            TransferStep::Record(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TransferStep::Detach { component } => format!("retirar «{}»", component.name),
            TransferStep::Attach { component, .. } => format!("instalar «{}»", component.name),
            TransferStep::Record(_) => "registrar el traslado".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("El bien {0} no admite componentes")]
    NotAComputer(String),

    #[error("El componente «{0}» ya está instalado en otro equipo")]
    AlreadyInstalled(String),

    #[error("El componente «{component}» no está instalado en {asset}")]
    NotInstalledHere { component: String, asset: String },

    #[error("El equipo de origen y destino es el mismo")]
    SameAsset,

    #[error("No se puede reemplazar {old} por {new}: son de tipos distintos")]
    KindMismatch { old: String, new: String },

    #[error("Indique el motivo del movimiento")]
    MissingReason,

    #[error(transparent)]
    Slot(#[from] SlotConflict),
}

/// Validate `operation` and lay out its calls.
///
/// `target_installed` is what currently sits in the receiving computer
/// (`target` for Add, `to` for Transfer, `asset` for Replace).
pub fn plan(
    operation: &ComponentOperation,
    target_installed: &[Component],
) -> Result<Vec<TransferStep>, PlanError> {
    match operation {
        ComponentOperation::Add { component, target } => {
            ensure_computer(target)?;
            if !component.is_free() {
                return Err(PlanError::AlreadyInstalled(component.name.clone()));
            }
            check_slot(target_installed, &component.name, Some(component.id))?;
            Ok(vec![TransferStep::Attach {
                component: component.clone(),
                asset_id: target.id,
            }])
        }
        ComponentOperation::Transfer {
            component,
            from,
            to,
            reason,
        } => {
            ensure_computer(to)?;
            if from.id == to.id {
                return Err(PlanError::SameAsset);
            }
            if !component.is_installed_in(from.id) {
                return Err(PlanError::NotInstalledHere {
                    component: component.name.clone(),
                    asset: from.code.clone(),
                });
            }
            let reason = required_reason(reason)?;
            check_slot(target_installed, &component.name, Some(component.id))?;
            Ok(vec![
                TransferStep::Attach {
                    component: component.clone(),
                    asset_id: to.id,
                },
                TransferStep::Record(CreateComponentTransfer {
                    component_id: component.id,
                    from_asset_id: Some(from.id),
                    to_asset_id: Some(to.id),
                    reason,
                }),
            ])
        }
        ComponentOperation::Replace {
            old,
            new,
            asset,
            reason,
        } => {
            ensure_computer(asset)?;
            if !old.is_installed_in(asset.id) {
                return Err(PlanError::NotInstalledHere {
                    component: old.name.clone(),
                    asset: asset.code.clone(),
                });
            }
            if !new.is_free() {
                return Err(PlanError::AlreadyInstalled(new.name.clone()));
            }
            if old.kind() != new.kind() {
                return Err(PlanError::KindMismatch {
                    old: old.kind().label().to_string(),
                    new: new.kind().label().to_string(),
                });
            }
            let reason = required_reason(reason)?;
            check_slot(target_installed, &new.name, Some(old.id))?;
            Ok(vec![
                TransferStep::Detach {
                    component: old.clone(),
                },
                TransferStep::Attach {
                    component: new.clone(),
                    asset_id: asset.id,
                },
                TransferStep::Record(CreateComponentTransfer {
                    component_id: new.id,
                    from_asset_id: None,
                    to_asset_id: Some(asset.id),
                    reason: format!("{} (reemplaza a «{}»)", reason, old.name),
                }),
            ])
        }
    }
}

fn ensure_computer(asset: &Asset) -> Result<(), PlanError> {
    if asset.accepts_components() {
        Ok(())
    } else {
        Err(PlanError::NotAComputer(asset.code.clone()))
    }
}

fn required_reason(reason: &str) -> Result<String, PlanError> {
    let reason = reason.trim();
    if reason.is_empty() {
        Err(PlanError::MissingReason)
    } else {
        Ok(reason.to_string())
    }
}

/// Result of running a plan that stopped part-way.
///
/// Nothing is rolled back: `completed` steps stay applied on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct StepFailure {
    pub completed: Vec<TransferStep>,
    pub failed: TransferStep,
    pub error: ApiError,
}

impl StepFailure {
    pub fn summary(&self) -> String {
        let mut text = format!("No se pudo {}: {}", self.failed.describe(), self.error);
        if !self.completed.is_empty() {
            let done: Vec<String> = self.completed.iter().map(TransferStep::describe).collect();
            text.push_str(&format!(
                ". Pasos ya aplicados: {}. Verifique el equipo manualmente.",
                done.join(", ")
            ));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::aggregate::{AssetCategory, AssetStatus};

    fn computer(id: EntityId) -> Asset {
        Asset {
            id,
            code: format!("PC-{}", id),
            description: "Computadora de escritorio".into(),
            category: AssetCategory::Computer,
            status: AssetStatus::Active,
            quantity: 1,
            unit_value: 500.0,
            total_value: None,
            serial: None,
            department_id: 1,
            department_name: None,
            subgroup_id: 1,
            subgroup_name: None,
            brand_id: None,
            model_id: None,
            parish_id: None,
            acquired_at: None,
            observations: None,
        }
    }

    fn part(id: EntityId, name: &str, asset_id: Option<EntityId>) -> Component {
        Component {
            id,
            name: name.into(),
            serial: None,
            brand_id: None,
            model_id: None,
            asset_id,
            asset_code: None,
            observations: None,
        }
    }

    #[test]
    fn add_is_a_single_attach() {
        let op = ComponentOperation::Add {
            component: part(5, "Memoria 8GB", None),
            target: computer(1),
        };
        let steps = plan(&op, &[part(6, "Memoria 4GB", Some(1))]).unwrap();
        assert_eq!(steps.len(), 1);
        let (id, dto) = steps[0].component_update().unwrap();
        assert_eq!(id, 5);
        assert_eq!(dto.asset_id, Some(1));
    }

    #[test]
    fn add_rejects_furniture_and_installed_parts() {
        let mut desk = computer(2);
        desk.category = AssetCategory::Furniture;
        let op = ComponentOperation::Add {
            component: part(5, "Disco 1TB", None),
            target: desk,
        };
        assert_eq!(plan(&op, &[]), Err(PlanError::NotAComputer("PC-2".into())));

        let op = ComponentOperation::Add {
            component: part(5, "Disco 1TB", Some(9)),
            target: computer(1),
        };
        assert!(matches!(plan(&op, &[]), Err(PlanError::AlreadyInstalled(_))));
    }

    #[test]
    fn add_respects_slot_rule() {
        let op = ComponentOperation::Add {
            component: part(5, "Procesador i7", None),
            target: computer(1),
        };
        let res = plan(&op, &[part(7, "CPU i3", Some(1))]);
        assert!(matches!(res, Err(PlanError::Slot(_))));
    }

    #[test]
    fn transfer_attaches_then_records() {
        let op = ComponentOperation::Transfer {
            component: part(5, "Fuente 500W", Some(1)),
            from: computer(1),
            to: computer(2),
            reason: " equipo dañado ".into(),
        };
        let steps = plan(&op, &[]).unwrap();
        assert_eq!(steps.len(), 2);
        assert!(matches!(steps[0], TransferStep::Attach { asset_id: 2, .. }));
        match &steps[1] {
            TransferStep::Record(record) => {
                assert_eq!(record.from_asset_id, Some(1));
                assert_eq!(record.to_asset_id, Some(2));
                assert_eq!(record.reason, "equipo dañado");
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn transfer_guards() {
        let same = ComponentOperation::Transfer {
            component: part(5, "Disco", Some(1)),
            from: computer(1),
            to: computer(1),
            reason: "x".into(),
        };
        assert_eq!(plan(&same, &[]), Err(PlanError::SameAsset));

        let elsewhere = ComponentOperation::Transfer {
            component: part(5, "Disco", Some(3)),
            from: computer(1),
            to: computer(2),
            reason: "x".into(),
        };
        assert!(matches!(plan(&elsewhere, &[]), Err(PlanError::NotInstalledHere { .. })));

        let no_reason = ComponentOperation::Transfer {
            component: part(5, "Disco", Some(1)),
            from: computer(1),
            to: computer(2),
            reason: "   ".into(),
        };
        assert_eq!(plan(&no_reason, &[]), Err(PlanError::MissingReason));

        let occupied = ComponentOperation::Transfer {
            component: part(5, "Tarjeta madre MSI", Some(1)),
            from: computer(1),
            to: computer(2),
            reason: "x".into(),
        };
        assert!(matches!(
            plan(&occupied, &[part(8, "Motherboard Asus", Some(2))]),
            Err(PlanError::Slot(_))
        ));
    }

    #[test]
    fn replace_detaches_attaches_and_records() {
        let installed = vec![part(1, "CPU i3", Some(4)), part(2, "Memoria 4GB", Some(4))];
        let op = ComponentOperation::Replace {
            old: installed[0].clone(),
            new: part(3, "Procesador i5", None),
            asset: computer(4),
            reason: "mejora".into(),
        };
        let steps = plan(&op, &installed).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].component_update().unwrap().1.asset_id, None);
        assert_eq!(steps[1].component_update().unwrap().1.asset_id, Some(4));
        assert!(matches!(&steps[2], TransferStep::Record(r) if r.component_id == 3));
    }

    #[test]
    fn replace_requires_same_kind() {
        let op = ComponentOperation::Replace {
            old: part(1, "CPU i3", Some(4)),
            new: part(3, "Memoria 8GB", None),
            asset: computer(4),
            reason: "mejora".into(),
        };
        assert!(matches!(plan(&op, &[]), Err(PlanError::KindMismatch { .. })));
    }

    #[test]
    fn failure_summary_lists_applied_steps() {
        let detach = TransferStep::Detach {
            component: part(1, "CPU i3", Some(4)),
        };
        let attach = TransferStep::Attach {
            component: part(3, "CPU i5", None),
            asset_id: 4,
        };
        let failure = StepFailure {
            completed: vec![detach],
            failed: attach,
            error: ApiError::Network("timeout".into()),
        };
        let text = failure.summary();
        assert!(text.starts_with("No se pudo instalar «CPU i5»"));
        assert!(text.contains("retirar «CPU i3»"));
    }
}
