use contracts::domain::a003_department::aggregate::{Department, DepartmentDto, ENDPOINT};
use leptos::prelude::*;

use crate::domain::a007_parish::api::fetch_parishes;
use crate::shared::components::catalog_page::{catalog_page, CatalogDef};
use crate::shared::components::form_fields::{load_options, opt_text_field, select_field, text_field};

static DEPARTMENTS: CatalogDef<Department, DepartmentDto> = CatalogDef {
    page_id: "a003_department--list",
    title: "Departamentos",
    noun: "departamento",
    endpoint: ENDPOINT,
    columns: &["Código", "Nombre", "Responsable"],
    cells: |d| {
        vec![
            d.code.clone(),
            d.name.clone(),
            d.responsible.clone().unwrap_or_default(),
        ]
    },
    id_of: |d| d.id,
    to_dto: |d| DepartmentDto::from(d),
    new_dto: DepartmentDto::default,
    prepare: |d| {
        d.validate()?;
        Ok(d.normalized())
    },
    form: department_form,
};

fn department_form(form: RwSignal<DepartmentDto>) -> AnyView {
    let parishes = load_options(fetch_parishes);
    view! {
        {text_field("Código", form, |f| f.code.clone(), |f, v| f.code = v)}
        {text_field("Nombre", form, |f| f.name.clone(), |f, v| f.name = v)}
        {opt_text_field("Responsable", form, |f| f.responsible.clone(), |f, v| f.responsible = v)}
        {select_field("Parroquia", form, parishes, |f| f.parish_id, |f, v| f.parish_id = v)}
    }
    .into_any()
}

#[component]
pub fn DepartmentList() -> impl IntoView {
    catalog_page(&DEPARTMENTS)
}
