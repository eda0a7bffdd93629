use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::enums::FilterEnums;
use crate::domain::entities::listing::ListingVariables;
use crate::domain::entities::records::{ExtractionData, LoadData, TransformData};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend reported an error: {0}")]
    Server(String),
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

#[async_trait]
pub trait PipelineBackend: Send + Sync {
    async fn list_extractions(
        &self,
        variables: ListingVariables,
    ) -> Result<ExtractionData, BackendError>;
    async fn list_transforms(
        &self,
        variables: ListingVariables,
    ) -> Result<TransformData, BackendError>;
    async fn list_loads(&self, variables: ListingVariables) -> Result<LoadData, BackendError>;
    async fn filter_enums(&self) -> Result<FilterEnums, BackendError>;
    async fn retrigger_pipeline(&self, trace_ids: Vec<i64>) -> Result<bool, BackendError>;
}
