use contracts::domain::a001_asset::aggregate::{Asset, AssetCategory, AssetDto};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_asset::api;

/// State and commands of the asset form
#[derive(Clone, Copy)]
pub struct AssetDetailsViewModel {
    pub form: RwSignal<AssetDto>,
    /// Record as last loaded from the server; drives the components panel.
    pub loaded: RwSignal<Option<Asset>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl AssetDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AssetDto::default()),
            loaded: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Parts can only be managed on a saved computer.
    pub fn shows_components(&self) -> bool {
        self.loaded
            .with(|a| a.as_ref().map(Asset::accepts_components).unwrap_or(false))
    }

    pub fn total_value(&self) -> f64 {
        self.form
            .with(|f| f.unit_value * f64::from(f.quantity.max(0)))
    }

    pub fn set_category(&self, key: &str) {
        let category = AssetCategory::from_key(key);
        self.form.update(|f| f.category = category);
    }

    pub fn load_if_needed(&self, id: Option<EntityId>) {
        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_asset(id).await {
                Ok(asset) => {
                    vm.form.set(AssetDto::from(&asset));
                    vm.loaded.set(Some(asset));
                }
                Err(e) => vm.error.set(Some(format!("Error al cargar el bien: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        let dto = current.normalized();
        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let result = api::save_asset(&dto).await;
            vm.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }
}

impl Default for AssetDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
