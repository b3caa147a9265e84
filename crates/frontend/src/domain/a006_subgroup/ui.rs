use contracts::domain::a006_subgroup::aggregate::{Subgroup, SubgroupDto, ENDPOINT};
use leptos::prelude::*;

use crate::shared::components::catalog_page::{catalog_page, CatalogDef};
use crate::shared::components::form_fields::text_field;

static SUBGROUPS: CatalogDef<Subgroup, SubgroupDto> = CatalogDef {
    page_id: "a006_subgroup--list",
    title: "Subgrupos",
    noun: "subgrupo",
    endpoint: ENDPOINT,
    columns: &["Código", "Descripción", "Código contable"],
    cells: |s| vec![s.code.clone(), s.description.clone(), s.movement_code.clone()],
    id_of: |s| s.id,
    to_dto: |s| SubgroupDto::from(s),
    new_dto: SubgroupDto::default,
    prepare: |d| {
        d.validate()?;
        Ok(SubgroupDto {
            id: d.id,
            code: d.code.trim().to_string(),
            description: d.description.trim().to_string(),
            movement_code: d.movement_code.trim().to_string(),
        })
    },
    form: subgroup_form,
};

fn subgroup_form(form: RwSignal<SubgroupDto>) -> AnyView {
    view! {
        {text_field("Código", form, |f| f.code.clone(), |f, v| f.code = v)}
        {text_field("Descripción", form, |f| f.description.clone(), |f, v| f.description = v)}
        {text_field("Código contable", form, |f| f.movement_code.clone(), |f, v| f.movement_code = v)}
    }
    .into_any()
}

#[component]
pub fn SubgroupList() -> impl IntoView {
    catalog_page(&SUBGROUPS)
}
