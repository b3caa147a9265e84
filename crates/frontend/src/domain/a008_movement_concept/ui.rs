//! Both concept books share one screen; only the endpoint and title differ.

use contracts::domain::a008_movement_concept::aggregate::{
    ConceptKind, MovementConcept, MovementConceptDto,
};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;

use crate::shared::components::catalog_page::{catalog_page, CatalogDef};
use crate::shared::components::form_fields::text_field;

fn prepare(d: &MovementConceptDto) -> Result<MovementConceptDto, ApiError> {
    d.validate()?;
    Ok(MovementConceptDto {
        id: d.id,
        code: d.code.trim().to_string(),
        description: d.description.trim().to_string(),
    })
}

fn concept_form(form: RwSignal<MovementConceptDto>) -> AnyView {
    view! {
        {text_field("Código", form, |f| f.code.clone(), |f, v| f.code = v)}
        {text_field("Descripción", form, |f| f.description.clone(), |f, v| f.description = v)}
    }
    .into_any()
}

fn cells(c: &MovementConcept) -> Vec<String> {
    vec![c.code.clone(), c.description.clone()]
}

static INCORPORATION_CONCEPTS: CatalogDef<MovementConcept, MovementConceptDto> = CatalogDef {
    page_id: "a008_concept_incorporation--list",
    title: ConceptKind::Incorporation.label(),
    noun: "concepto",
    endpoint: ConceptKind::Incorporation.endpoint(),
    columns: &["Código", "Descripción"],
    cells,
    id_of: |c| c.id,
    to_dto: |c| MovementConceptDto::from(c),
    new_dto: MovementConceptDto::default,
    prepare,
    form: concept_form,
};

static DISPOSAL_CONCEPTS: CatalogDef<MovementConcept, MovementConceptDto> = CatalogDef {
    page_id: "a008_concept_disposal--list",
    title: ConceptKind::Disposal.label(),
    noun: "concepto",
    endpoint: ConceptKind::Disposal.endpoint(),
    columns: &["Código", "Descripción"],
    cells,
    id_of: |c| c.id,
    to_dto: |c| MovementConceptDto::from(c),
    new_dto: MovementConceptDto::default,
    prepare,
    form: concept_form,
};

#[component]
pub fn IncorporationConceptList() -> impl IntoView {
    catalog_page(&INCORPORATION_CONCEPTS)
}

#[component]
pub fn DisposalConceptList() -> impl IntoView {
    catalog_page(&DISPOSAL_CONCEPTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_books_point_at_their_endpoints() {
        assert_eq!(INCORPORATION_CONCEPTS.endpoint, "/concept-incorp");
        assert_eq!(DISPOSAL_CONCEPTS.endpoint, "/concept-desincorp");
    }

    #[test]
    fn prepare_trims_and_validates() {
        let dto = MovementConceptDto {
            id: None,
            code: " 02 ".into(),
            description: " Compra ".into(),
        };
        let ready = prepare(&dto).unwrap();
        assert_eq!(ready.code, "02");
        assert_eq!(ready.description, "Compra");

        let blank = MovementConceptDto::default();
        assert!(prepare(&blank).is_err());
    }
}
