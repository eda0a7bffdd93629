use std::sync::Arc;

use crate::domain::entities::enums::FilterEnums;
use crate::domain::entities::listing::{ListingVariables, Stage};
use crate::domain::entities::records::StageData;
use crate::usecase::ports::backend::{BackendError, PipelineBackend};

pub struct ListingService {
    backend: Arc<dyn PipelineBackend>,
}

impl ListingService {
    pub fn new(backend: Arc<dyn PipelineBackend>) -> Self {
        Self { backend }
    }

    pub async fn fetch_stage(
        &self,
        stage: Stage,
        variables: ListingVariables,
    ) -> Result<StageData, BackendError> {
        match stage {
            Stage::Extraction => self
                .backend
                .list_extractions(variables)
                .await
                .map(StageData::Extraction),
            Stage::Transform => self
                .backend
                .list_transforms(variables)
                .await
                .map(StageData::Transform),
            Stage::Load => self.backend.list_loads(variables).await.map(StageData::Load),
        }
    }

    pub async fn filter_enums(&self) -> Result<FilterEnums, BackendError> {
        self.backend.filter_enums().await
    }
}
