use contracts::domain::a004_brand::aggregate::{Brand, BrandDto, ENDPOINT};
use leptos::prelude::*;

use crate::shared::components::catalog_page::{catalog_page, CatalogDef};
use crate::shared::components::form_fields::text_field;

static BRANDS: CatalogDef<Brand, BrandDto> = CatalogDef {
    page_id: "a004_brand--list",
    title: "Marcas",
    noun: "marca",
    endpoint: ENDPOINT,
    columns: &["Nombre"],
    cells: |b| vec![b.name.clone()],
    id_of: |b| b.id,
    to_dto: |b| BrandDto::from(b),
    new_dto: BrandDto::default,
    prepare: |d| {
        d.validate()?;
        Ok(BrandDto {
            name: d.name.trim().to_string(),
            ..d.clone()
        })
    },
    form: brand_form,
};

fn brand_form(form: RwSignal<BrandDto>) -> AnyView {
    text_field("Nombre", form, |f| f.name.clone(), |f, v| f.name = v).into_any()
}

#[component]
pub fn BrandList() -> impl IntoView {
    catalog_page(&BRANDS)
}
