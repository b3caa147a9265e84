pub mod a001_asset;
pub mod a002_component;
pub mod a003_department;
pub mod a004_brand;
pub mod a005_model;
pub mod a006_subgroup;
pub mod a007_parish;
pub mod a008_movement_concept;
pub mod a009_incorporation;
pub mod a010_disposal;
pub mod a011_missing_good;
pub mod a012_component_transfer;
