use contracts::domain::a008_movement_concept::aggregate::{ConceptKind, MovementConcept};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_concepts(kind: ConceptKind) -> Result<Vec<MovementConcept>, ApiError> {
    get_json(kind.endpoint()).await
}
