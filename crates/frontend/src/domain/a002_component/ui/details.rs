//! Create / edit form for a component. The owning computer is not edited
//! here: installing and moving parts goes through the asset's components panel.

use contracts::domain::a002_component::aggregate::ComponentDto;
use contracts::domain::a005_model::aggregate::{models_for_brand, Model};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a002_component::api;
use crate::domain::a004_brand::api::fetch_brands;
use crate::domain::a005_model::api::fetch_models;
use crate::shared::components::form_fields::{
    catalog_options, load_options, opt_text_field, select_field, text_field, textarea_field,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::error_box;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toast;

pub fn component_form(handle: ModalHandle, dto: ComponentDto, on_saved: Callback<()>) -> AnyView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let brands = load_options(fetch_brands);
    let models: RwSignal<Vec<Model>> = RwSignal::new(Vec::new());
    spawn_local(async move {
        if let Ok(list) = fetch_models().await {
            models.set(list);
        }
    });
    let model_options = Signal::derive(move || {
        let brand_id = form.with(|f| f.brand_id);
        models.with(|m| catalog_options(&models_for_brand(m, brand_id)))
    });

    let save = move || {
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let dto = dto.normalized();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match dto.id {
                Some(id) => api::update_component(id, &dto).await,
                None => api::create_component(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("Componente guardado");
                    handle.close();
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let title = if is_edit { "Editar componente" } else { "Nuevo componente" };

    view! {
        <div class="details-container">
            <ModalHeader title=title on_close=handle.close_callback() />
            {error_box(error)}
            <div class="details-form">
                {text_field("Nombre", form, |f| f.name.clone(), |f, v| f.name = v)}
                <div class="form__hint">
                    {move || {
                        let name = form.with(|f| f.name.clone());
                        format!(
                            "Tipo detectado: {}",
                            contracts::domain::a002_component::ComponentKind::classify(&name).label(),
                        )
                    }}
                </div>
                {opt_text_field("Serial", form, |f| f.serial.clone(), |f, v| f.serial = v)}
                {select_field(
                    "Marca",
                    form,
                    brands,
                    |f| f.brand_id,
                    |f, v| {
                        if f.brand_id != v {
                            f.model_id = None;
                        }
                        f.brand_id = v;
                    },
                )}
                {select_field("Modelo", form, model_options, |f| f.model_id, |f, v| f.model_id = v)}
                {textarea_field("Observaciones", form, |f| f.observations.clone(), |f, v| f.observations = v)}
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    {icon("check")}
                    " Guardar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
    .into_any()
}
