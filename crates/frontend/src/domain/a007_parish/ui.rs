use contracts::domain::a007_parish::aggregate::{Parish, ParishDto, ENDPOINT};
use leptos::prelude::*;

use crate::shared::components::catalog_page::{catalog_page, CatalogDef};
use crate::shared::components::form_fields::{opt_text_field, text_field};

static PARISHES: CatalogDef<Parish, ParishDto> = CatalogDef {
    page_id: "a007_parish--list",
    title: "Parroquias",
    noun: "parroquia",
    endpoint: ENDPOINT,
    columns: &["Nombre", "Municipio"],
    cells: |p| vec![p.name.clone(), p.municipality.clone().unwrap_or_default()],
    id_of: |p| p.id,
    to_dto: |p| ParishDto::from(p),
    new_dto: ParishDto::default,
    prepare: |d| {
        d.validate()?;
        Ok(d.normalized())
    },
    form: parish_form,
};

fn parish_form(form: RwSignal<ParishDto>) -> AnyView {
    view! {
        {text_field("Nombre", form, |f| f.name.clone(), |f, v| f.name = v)}
        {opt_text_field("Municipio", form, |f| f.municipality.clone(), |f, v| f.municipality = v)}
    }
    .into_any()
}

#[component]
pub fn ParishList() -> impl IntoView {
    catalog_page(&PARISHES)
}
