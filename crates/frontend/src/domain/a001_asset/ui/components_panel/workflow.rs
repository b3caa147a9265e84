//! Add / Transfer / Replace modals for the parts of one computer.

use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::a002_component::aggregate::Component;
use contracts::domain::a012_component_transfer::{plan, ComponentOperation, TransferStep};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_asset::api::fetch_assets;
use crate::domain::a002_component::api::fetch_components;
use crate::domain::a012_component_transfer::runner::run_plan;
use crate::shared::components::form_fields::{id_select, Options};
use crate::shared::icons::icon;
use crate::shared::list_utils::error_box;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toast;

#[derive(Debug, Clone, PartialEq)]
pub enum Workflow {
    Add,
    Transfer(Component),
    Replace(Component),
}

impl Workflow {
    fn title(&self) -> &'static str {
        match self {
            Workflow::Add => "Agregar componente",
            Workflow::Transfer(_) => "Trasladar componente",
            Workflow::Replace(_) => "Reemplazar componente",
        }
    }

    fn choice_label(&self) -> &'static str {
        match self {
            Workflow::Transfer(_) => "Equipo de destino",
            _ => "Componente en almacén",
        }
    }

    fn needs_reason(&self) -> bool {
        !matches!(self, Workflow::Add)
    }
}

/// What the picker offers: stock parts for Add (same kind only for Replace),
/// other computers for Transfer.
pub fn choice_options(
    workflow: &Workflow,
    asset: &Asset,
    components: &[Component],
    assets: &[Asset],
) -> Options {
    match workflow {
        Workflow::Add => components
            .iter()
            .filter(|c| c.is_free())
            .map(|c| (c.id, c.label()))
            .collect(),
        Workflow::Replace(old) => components
            .iter()
            .filter(|c| c.is_free() && c.kind() == old.kind())
            .map(|c| (c.id, c.label()))
            .collect(),
        Workflow::Transfer(_) => assets
            .iter()
            .filter(|a| a.accepts_components() && a.id != asset.id)
            .map(|a| (a.id, a.label()))
            .collect(),
    }
}

fn installed_in(components: &[Component], asset_id: EntityId) -> Vec<Component> {
    components
        .iter()
        .filter(|c| c.is_installed_in(asset_id))
        .cloned()
        .collect()
}

/// Turn the modal's inputs into planned API steps, or a message for the user.
///
/// Parts are always resolved by id from `components`, never from the copy the
/// panel held when the modal opened.
pub fn plan_workflow(
    workflow: &Workflow,
    asset: &Asset,
    choice: Option<EntityId>,
    reason: &str,
    components: &[Component],
    assets: &[Asset],
) -> Result<Vec<TransferStep>, String> {
    let find_component = |id: EntityId| {
        components
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| "El componente ya no existe".to_string())
    };

    let (operation, receiving) = match workflow {
        Workflow::Add => {
            let id = choice.ok_or_else(|| "Seleccione un componente".to_string())?;
            let op = ComponentOperation::Add {
                component: find_component(id)?,
                target: asset.clone(),
            };
            (op, asset.id)
        }
        Workflow::Transfer(component) => {
            let id = choice.ok_or_else(|| "Seleccione el equipo de destino".to_string())?;
            let to = assets
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or_else(|| "El equipo de destino ya no existe".to_string())?;
            let op = ComponentOperation::Transfer {
                component: find_component(component.id)?,
                from: asset.clone(),
                to,
                reason: reason.to_string(),
            };
            (op, id)
        }
        Workflow::Replace(old) => {
            let id = choice.ok_or_else(|| "Seleccione el componente nuevo".to_string())?;
            let op = ComponentOperation::Replace {
                old: find_component(old.id)?,
                new: find_component(id)?,
                asset: asset.clone(),
                reason: reason.to_string(),
            };
            (op, asset.id)
        }
    };

    plan(&operation, &installed_in(components, receiving)).map_err(|e| e.to_string())
}

pub fn workflow_modal(
    handle: ModalHandle,
    asset: Asset,
    workflow: Workflow,
    on_done: Callback<()>,
) -> AnyView {
    let toast = use_toast();
    let asset = StoredValue::new(asset);
    let workflow = StoredValue::new(workflow);
    let components: RwSignal<Vec<Component>> = RwSignal::new(Vec::new());
    let assets: RwSignal<Vec<Asset>> = RwSignal::new(Vec::new());
    let choice = RwSignal::new(None::<EntityId>);
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let running = RwSignal::new(false);

    let refresh_components = move || {
        spawn_local(async move {
            match fetch_components().await {
                Ok(list) => components.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };
    // always fresh: another user may have moved parts since the panel loaded
    refresh_components();
    if workflow.with_value(|w| matches!(w, Workflow::Transfer(_))) {
        spawn_local(async move {
            match fetch_assets().await {
                Ok(list) => assets.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    let options = Signal::derive(move || {
        components.with(|c| {
            assets.with(|a| {
                workflow.with_value(|w| asset.with_value(|asset| choice_options(w, asset, c, a)))
            })
        })
    });

    let confirm = move || {
        let planned = components.with_untracked(|c| {
            assets.with_untracked(|a| {
                workflow.with_value(|w| {
                    asset.with_value(|asset| {
                        plan_workflow(w, asset, choice.get_untracked(), &reason.get_untracked(), c, a)
                    })
                })
            })
        });
        let steps = match planned {
            Ok(steps) => steps,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        running.set(true);
        spawn_local(async move {
            let result = run_plan(steps).await;
            running.set(false);
            match result {
                Ok(()) => {
                    toast.success("Operación completada");
                    handle.close();
                }
                Err(failure) => {
                    let summary = failure.summary();
                    toast.error(summary.clone());
                    error.set(Some(summary));
                    // a retry must plan against what the completed steps left behind
                    refresh_components();
                }
            }
            // partial runs change the server too
            on_done.run(());
        });
    };

    let subject = workflow.with_value(|w| match w {
        Workflow::Add => None,
        Workflow::Transfer(c) | Workflow::Replace(c) => Some(c.label()),
    });
    let title = workflow.with_value(Workflow::title);
    let choice_label = workflow.with_value(Workflow::choice_label);
    let needs_reason = workflow.with_value(Workflow::needs_reason);
    let asset_label = asset.with_value(Asset::label);

    view! {
        <div class="details-container">
            <ModalHeader title=title on_close=handle.close_callback() />
            {error_box(error)}
            <div class="details-form">
                <div class="form__group">
                    <label class="form__label">"Equipo"</label>
                    <div class="form__static">{asset_label}</div>
                </div>
                {subject.map(|s| view! {
                    <div class="form__group">
                        <label class="form__label">"Componente"</label>
                        <div class="form__static">{s}</div>
                    </div>
                })}
                <div class="form__group">
                    <label class="form__label">{choice_label}</label>
                    {id_select(options, choice, "Seleccione...")}
                </div>
                <Show when=move || needs_reason>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"Motivo"</label>
                        <textarea
                            class="form__textarea"
                            rows="3"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| confirm()
                    disabled=Signal::derive(move || running.get())
                >
                    {icon("check")}
                    " Confirmar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_asset::aggregate::{AssetCategory, AssetStatus};

    fn computer(id: EntityId) -> Asset {
        Asset {
            id,
            code: format!("PC-{}", id),
            description: "Computadora".into(),
            category: AssetCategory::Computer,
            status: AssetStatus::Active,
            quantity: 1,
            unit_value: 400.0,
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
    fn add_offers_stock_only() {
        let parts = vec![part(1, "Memoria 8GB", None), part(2, "Disco 1TB", Some(1))];
        let options = choice_options(&Workflow::Add, &computer(1), &parts, &[]);
        assert_eq!(options, vec![(1, "Memoria 8GB".to_string())]);
    }

    #[test]
    fn replace_offers_same_kind() {
        let old = part(1, "CPU i3", Some(1));
        let parts = vec![old.clone(), part(2, "Procesador i5", None), part(3, "Memoria", None)];
        let options = choice_options(&Workflow::Replace(old), &computer(1), &parts, &[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].0, 2);
    }

    #[test]
    fn transfer_offers_other_computers() {
        let mut desk = computer(3);
        desk.category = AssetCategory::Furniture;
        let assets = vec![computer(1), computer(2), desk];
        let wf = Workflow::Transfer(part(5, "Disco", Some(1)));
        let options = choice_options(&wf, &computer(1), &[], &assets);
        assert_eq!(options.iter().map(|o| o.0).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn missing_choice_is_reported() {
        let err = plan_workflow(&Workflow::Add, &computer(1), None, "", &[], &[]).unwrap_err();
        assert_eq!(err, "Seleccione un componente");
    }

    #[test]
    fn transfer_checks_slots_on_the_target() {
        let moving = part(5, "Fuente 600W", Some(1));
        let parts = vec![moving.clone(), part(6, "PSU 500W", Some(2))];
        let assets = vec![computer(1), computer(2)];
        let res = plan_workflow(
            &Workflow::Transfer(moving),
            &computer(1),
            Some(2),
            "falla",
            &parts,
            &assets,
        );
        assert!(res.unwrap_err().contains("ya tiene"));
    }

    #[test]
    fn transfer_uses_current_location_of_the_part() {
        let opened_with = part(5, "Disco 1TB", Some(1));
        let moved_meanwhile = part(5, "Disco 1TB", Some(3));
        let assets = vec![computer(1), computer(2), computer(3)];
        let res = plan_workflow(
            &Workflow::Transfer(opened_with),
            &computer(1),
            Some(2),
            "reasignación",
            &[moved_meanwhile],
            &assets,
        );
        assert!(res.unwrap_err().contains("no está instalado"));
    }

    #[test]
    fn replace_uses_current_location_of_the_part() {
        let opened_with = part(1, "CPU i3", Some(1));
        let parts = vec![part(1, "CPU i3", None), part(2, "Procesador i5", None)];
        let res = plan_workflow(
            &Workflow::Replace(opened_with),
            &computer(1),
            Some(2),
            "mejora",
            &parts,
            &[],
        );
        assert!(res.unwrap_err().contains("no está instalado"));
    }

    #[test]
    fn deleted_part_is_reported() {
        let opened_with = part(9, "Memoria 8GB", Some(1));
        let res = plan_workflow(
            &Workflow::Transfer(opened_with),
            &computer(1),
            Some(2),
            "falla",
            &[],
            &[computer(1), computer(2)],
        );
        assert_eq!(res.unwrap_err(), "El componente ya no existe");
    }

    #[test]
    fn replace_plans_three_steps() {
        let old = part(1, "CPU i3", Some(1));
        let parts = vec![old.clone(), part(2, "Procesador i5", None)];
        let steps = plan_workflow(
            &Workflow::Replace(old),
            &computer(1),
            Some(2),
            "mejora",
            &parts,
            &[],
        )
        .unwrap();
        assert_eq!(steps.len(), 3);
    }
}
