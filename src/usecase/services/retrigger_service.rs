use std::sync::Arc;

use tracing::{info, warn};

use crate::usecase::ports::backend::PipelineBackend;

/// What happened to one retrigger attempt. `Rejected` is the backend
/// answering the mutation with a false payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetriggerOutcome {
    Triggered,
    Rejected,
    TransportFailed,
    InvalidId(String),
}

impl RetriggerOutcome {
    pub fn message(&self) -> String {
        match self {
            RetriggerOutcome::Triggered => "Successfully Retriggered the Content".to_string(),
            RetriggerOutcome::Rejected => {
                "Failed to Retrigger the Content. Unexpected response from the server.".to_string()
            }
            RetriggerOutcome::TransportFailed => {
                "Failed to Retrigger the Content. Please try again later.".to_string()
            }
            RetriggerOutcome::InvalidId(id) => {
                format!("Failed to Retrigger the Content. Invalid trace id \"{id}\".")
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RetriggerOutcome::Triggered)
    }

    /// Selection clears on any answered mutation, stays put when nothing was
    /// sent or the call itself failed.
    pub fn clears_selection(&self) -> bool {
        matches!(self, RetriggerOutcome::Triggered | RetriggerOutcome::Rejected)
    }
}

/// Converts row identifiers to the integer list the mutation expects. The
/// first non-numeric identifier aborts the whole batch.
pub fn parse_trace_ids(selected_ids: &[String]) -> Result<Vec<i64>, String> {
    selected_ids
        .iter()
        .map(|id| id.parse::<i64>().map_err(|_| id.clone()))
        .collect()
}

pub struct RetriggerService {
    backend: Arc<dyn PipelineBackend>,
}

impl RetriggerService {
    pub fn new(backend: Arc<dyn PipelineBackend>) -> Self {
        Self { backend }
    }

    /// Issues exactly one mutation with the full id list.
    pub async fn execute(&self, selected_ids: &[String]) -> RetriggerOutcome {
        let trace_ids = match parse_trace_ids(selected_ids) {
            Ok(trace_ids) => trace_ids,
            Err(bad_id) => {
                warn!("refusing retrigger, non-numeric id {bad_id:?}");
                return RetriggerOutcome::InvalidId(bad_id);
            }
        };

        match self.backend.retrigger_pipeline(trace_ids).await {
            Ok(true) => {
                info!("retriggered {} record(s)", selected_ids.len());
                RetriggerOutcome::Triggered
            }
            Ok(false) => {
                warn!("retrigger mutation answered false");
                RetriggerOutcome::Rejected
            }
            Err(err) => {
                warn!("retrigger mutation failed: {err}");
                RetriggerOutcome::TransportFailed
            }
        }
    }
}
