//! Runs a planned add / transfer / replace against the API, one call at a
//! time. The first failing call stops the run; earlier calls stay applied.

use contracts::domain::a012_component_transfer::{StepFailure, TransferStep};
use contracts::shared::api_error::ApiError;

use super::api::record_transfer;
use crate::domain::a002_component::api::update_component;

async fn run_step(step: &TransferStep) -> Result<(), ApiError> {
    match step {
        TransferStep::Record(request) => record_transfer(request).await,
        other => match other.component_update() {
            Some((id, dto)) => update_component(id, &dto).await,
            None => Ok(()),
        },
    }
}

pub async fn run_plan(steps: Vec<TransferStep>) -> Result<(), StepFailure> {
    let mut completed = Vec::with_capacity(steps.len());
    for step in steps {
        log::info!("Component workflow: {}", step.describe());
        match run_step(&step).await {
            Ok(()) => completed.push(step),
            Err(error) => {
                log::error!("Component workflow stopped at '{}': {}", step.describe(), error);
                return Err(StepFailure {
                    completed,
                    failed: step,
                    error,
                });
            }
        }
    }
    Ok(())
}
