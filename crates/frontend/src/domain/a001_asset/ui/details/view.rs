use contracts::domain::a001_asset::aggregate::AssetCategory;
use contracts::domain::a005_model::aggregate::{models_for_brand, Model};
use contracts::domain::common::{non_blank, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::view_model::AssetDetailsViewModel;
use crate::domain::a001_asset::ui::components_panel::ComponentsPanel;
use crate::domain::a003_department::api::fetch_departments;
use crate::domain::a004_brand::api::fetch_brands;
use crate::domain::a005_model::api::fetch_models;
use crate::domain::a006_subgroup::api::fetch_subgroups;
use crate::domain::a007_parish::api::fetch_parishes;
use crate::shared::components::form_fields::{
    catalog_options, int_field, load_options, money_field, opt_text_field, select_field,
    text_field, textarea_field,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::error_box;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::number_utils::format_money;

#[component]
pub fn AssetDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = AssetDetailsViewModel::new();
    vm.load_if_needed(id);

    let departments = load_options(fetch_departments);
    let subgroups = load_options(fetch_subgroups);
    let brands = load_options(fetch_brands);
    let parishes = load_options(fetch_parishes);
    let models: RwSignal<Vec<Model>> = RwSignal::new(Vec::new());
    spawn_local(async move {
        if let Ok(list) = fetch_models().await {
            models.set(list);
        }
    });
    let model_options = Signal::derive(move || {
        let brand_id = vm.form.with(|f| f.brand_id);
        models.with(|m| catalog_options(&models_for_brand(m, brand_id)))
    });

    let title = if id.is_some() { "Editar bien" } else { "Nuevo bien" };

    view! {
        <div class="details-container asset-details">
            <ModalHeader title=title on_close=on_close />
            {error_box(vm.error)}
            <Show when=move || vm.loading.get()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <div class="details-form details-form--two-columns">
                {text_field("Número de bien", vm.form, |f| f.code.clone(), |f, v| f.code = v)}
                {text_field("Descripción", vm.form, |f| f.description.clone(), |f, v| f.description = v)}
                <div class="form__group">
                    <label class="form__label">"Categoría"</label>
                    <select
                        class="form__select"
                        prop:value=move || vm.form.with(|f| f.category.as_key())
                        on:change=move |ev| vm.set_category(&event_target_value(&ev))
                    >
                        {AssetCategory::ALL
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <option
                                        value=c.as_key()
                                        selected=move || vm.form.with(|f| f.category == c)
                                    >
                                        {c.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                {opt_text_field("Serial", vm.form, |f| f.serial.clone(), |f, v| f.serial = v)}
                {int_field("Cantidad", vm.form, |f| f.quantity, |f, v| f.quantity = v)}
                {money_field("Valor unitario", vm.form, |f| f.unit_value, |f, v| f.unit_value = v)}
                <div class="form__group">
                    <label class="form__label">"Valor total"</label>
                    <input
                        type="text"
                        class="form__input"
                        readonly=true
                        prop:value=move || format_money(vm.total_value())
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Fecha de adquisición"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || vm.form.with(|f| f.acquired_at.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = non_blank(&event_target_value(&ev));
                            vm.form.update(|f| f.acquired_at = value);
                        }
                    />
                </div>
                {select_field("Departamento", vm.form, departments, |f| f.department_id, |f, v| f.department_id = v)}
                {select_field("Subgrupo", vm.form, subgroups, |f| f.subgroup_id, |f, v| f.subgroup_id = v)}
                {select_field(
                    "Marca",
                    vm.form,
                    brands,
                    |f| f.brand_id,
                    |f, v| {
                        if f.brand_id != v {
                            f.model_id = None;
                        }
                        f.brand_id = v;
                    },
                )}
                {select_field("Modelo", vm.form, model_options, |f| f.model_id, |f, v| f.model_id = v)}
                {select_field("Parroquia", vm.form, parishes, |f| f.parish_id, |f, v| f.parish_id = v)}
                {textarea_field("Observaciones", vm.form, |f| f.observations.clone(), |f, v| f.observations = v)}
            </div>

            <Show when=move || vm.shows_components()>
                {move || vm.loaded.get().map(|asset| view! { <ComponentsPanel asset=asset /> })}
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                >
                    {icon("check")}
                    {move || if vm.is_edit_mode() { " Guardar" } else { " Crear" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
