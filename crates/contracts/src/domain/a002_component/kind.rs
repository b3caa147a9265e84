//! Component type detection and the one-per-computer slot rule.
//!
//! Components carry no type field; the type is inferred from the free-text
//! name, so "Procesador Intel i5" and "CPU Ryzen 5" are both CPUs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::Component;
use crate::domain::common::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Motherboard,
    Cpu,
    PowerSupply,
    Disk,
    Ram,
    Other,
}

/// Checked top to bottom; the first kind with a matching keyword wins.
const KEYWORDS: &[(ComponentKind, &[&str])] = &[
    (
        ComponentKind::Motherboard,
        &["tarjeta madre", "motherboard", "placa base", "mainboard"],
    ),
    (ComponentKind::Cpu, &["cpu", "procesador", "processor"]),
    (ComponentKind::PowerSupply, &["fuente", "power supply", "psu"]),
    (ComponentKind::Disk, &["disco", "disk", "hdd", "ssd"]),
    (ComponentKind::Ram, &["ram", "memoria", "memory"]),
];

impl ComponentKind {
    pub fn classify(name: &str) -> Self {
        let lowered = name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(kind, _)| *kind)
            .unwrap_or(ComponentKind::Other)
    }

    /// A computer holds at most one motherboard, CPU and power supply.
    pub fn is_unique_per_asset(self) -> bool {
        matches!(
            self,
            ComponentKind::Motherboard | ComponentKind::Cpu | ComponentKind::PowerSupply
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Motherboard => "Tarjeta madre",
            ComponentKind::Cpu => "Procesador",
            ComponentKind::PowerSupply => "Fuente de poder",
            ComponentKind::Disk => "Disco",
            ComponentKind::Ram => "Memoria RAM",
            ComponentKind::Other => "Otro",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("El equipo ya tiene {} instalado: {}", .kind.label().to_lowercase(), .existing_name)]
pub struct SlotConflict {
    pub kind: ComponentKind,
    pub existing_id: EntityId,
    pub existing_name: String,
}

/// Whether a part named `candidate_name` may be installed next to `installed`.
///
/// `ignoring` excludes a part that is about to leave the computer (the old
/// part of a replacement, or the candidate itself when it is already there).
pub fn check_slot(
    installed: &[Component],
    candidate_name: &str,
    ignoring: Option<EntityId>,
) -> Result<(), SlotConflict> {
    let kind = ComponentKind::classify(candidate_name);
    if !kind.is_unique_per_asset() {
        return Ok(());
    }
    match installed
        .iter()
        .filter(|c| Some(c.id) != ignoring)
        .find(|c| c.kind() == kind)
    {
        Some(existing) => Err(SlotConflict {
            kind,
            existing_id: existing.id,
            existing_name: existing.name.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: EntityId, name: &str) -> Component {
        Component {
            id,
            name: name.to_string(),
            serial: None,
            brand_id: None,
            model_id: None,
            asset_id: Some(1),
            asset_code: None,
            observations: None,
        }
    }

    #[test]
    fn classifies_by_substring_case_insensitive() {
        assert_eq!(ComponentKind::classify("Tarjeta Madre ASUS"), ComponentKind::Motherboard);
        assert_eq!(ComponentKind::classify("CPU Intel i5"), ComponentKind::Cpu);
        assert_eq!(ComponentKind::classify("Procesador AMD"), ComponentKind::Cpu);
        assert_eq!(ComponentKind::classify("Fuente de poder 500W"), ComponentKind::PowerSupply);
        assert_eq!(ComponentKind::classify("Disco duro 1TB"), ComponentKind::Disk);
        assert_eq!(ComponentKind::classify("SSD Kingston"), ComponentKind::Disk);
        assert_eq!(ComponentKind::classify("memoria ddr3"), ComponentKind::Ram);
        assert_eq!(ComponentKind::classify("Tarjeta de video"), ComponentKind::Other);
    }

    #[test]
    fn earlier_kinds_take_precedence() {
        // mentions both, motherboard is checked first
        assert_eq!(
            ComponentKind::classify("Motherboard con CPU integrado"),
            ComponentKind::Motherboard
        );
        assert_eq!(ComponentKind::classify("Disco RAM"), ComponentKind::Disk);
    }

    #[test]
    fn uniqueness_per_kind() {
        assert!(ComponentKind::Cpu.is_unique_per_asset());
        assert!(ComponentKind::Motherboard.is_unique_per_asset());
        assert!(ComponentKind::PowerSupply.is_unique_per_asset());
        assert!(!ComponentKind::Ram.is_unique_per_asset());
        assert!(!ComponentKind::Disk.is_unique_per_asset());
        assert!(!ComponentKind::Other.is_unique_per_asset());
    }

    #[test]
    fn second_cpu_is_a_conflict() {
        let installed = vec![part(1, "CPU Intel i3"), part(2, "Memoria 4GB")];
        let err = check_slot(&installed, "Procesador Ryzen", None).unwrap_err();
        assert_eq!(err.kind, ComponentKind::Cpu);
        assert_eq!(err.existing_id, 1);
        assert_eq!(
            err.to_string(),
            "El equipo ya tiene procesador instalado: CPU Intel i3"
        );
    }

    #[test]
    fn unrestricted_kinds_stack() {
        let installed = vec![part(1, "Memoria 4GB"), part(2, "Disco 500GB")];
        assert!(check_slot(&installed, "Memoria 8GB", None).is_ok());
        assert!(check_slot(&installed, "Disco SSD", None).is_ok());
    }

    #[test]
    fn ignored_part_frees_its_slot() {
        let installed = vec![part(1, "Fuente 450W")];
        assert!(check_slot(&installed, "Fuente 600W", None).is_err());
        assert!(check_slot(&installed, "Fuente 600W", Some(1)).is_ok());
    }
}
