use contracts::domain::a005_model::aggregate::{Model, ModelDto, ENDPOINT};
use leptos::prelude::*;

use crate::domain::a004_brand::api::fetch_brands;
use crate::shared::components::catalog_page::{catalog_page, CatalogDef};
use crate::shared::components::form_fields::{load_options, select_field, text_field};

static MODELS: CatalogDef<Model, ModelDto> = CatalogDef {
    page_id: "a005_model--list",
    title: "Modelos",
    noun: "modelo",
    endpoint: ENDPOINT,
    columns: &["Modelo", "Marca"],
    cells: |m| vec![m.name.clone(), m.brand_name.clone().unwrap_or_default()],
    id_of: |m| m.id,
    to_dto: |m| ModelDto::from(m),
    new_dto: ModelDto::default,
    prepare: |d| {
        d.validate()?;
        Ok(ModelDto {
            name: d.name.trim().to_string(),
            ..d.clone()
        })
    },
    form: model_form,
};

fn model_form(form: RwSignal<ModelDto>) -> AnyView {
    let brands = load_options(fetch_brands);
    view! {
        {select_field("Marca", form, brands, |f| f.brand_id, |f, v| f.brand_id = v)}
        {text_field("Nombre", form, |f| f.name.clone(), |f, v| f.name = v)}
    }
    .into_any()
}

#[component]
pub fn ModelList() -> impl IntoView {
    catalog_page(&MODELS)
}
