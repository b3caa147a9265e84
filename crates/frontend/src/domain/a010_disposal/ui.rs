use contracts::domain::a008_movement_concept::aggregate::ConceptKind;
use contracts::domain::a010_disposal::aggregate::ENDPOINT;
use leptos::prelude::*;

use crate::domain::a009_incorporation::ui::{movement_list, MovementBook};

static DISPOSALS: MovementBook = MovementBook {
    page_id: "a010_disposal--list",
    title: "Desincorporaciones",
    new_title: "Nueva desincorporación",
    endpoint: ENDPOINT,
    concepts: ConceptKind::Disposal,
};

#[component]
pub fn DisposalList() -> impl IntoView {
    movement_list(&DISPOSALS)
}
