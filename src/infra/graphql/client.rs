use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::entities::enums::FilterEnums;
use crate::domain::entities::listing::ListingVariables;
use crate::domain::entities::records::{
    EntityCounts, ExtractionData, LoadData, SourceStatusCount, StatusCount, TransformData,
};
use crate::infra::graphql::queries;
use crate::usecase::ports::backend::{BackendError, PipelineBackend};

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

pub struct GraphqlClient {
    endpoint: String,
    http: Client,
}

impl GraphqlClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    async fn execute(&self, operation: &str, query: &str, variables: Value) -> Result<Value, BackendError> {
        debug!("issuing GraphQL operation {operation}");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Server(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;
        parse_envelope(&body)
    }
}

/// A non-empty `errors` array is a backend failure even under HTTP 200.
pub(crate) fn parse_envelope(body: &str) -> Result<Value, BackendError> {
    let envelope: GraphqlEnvelope =
        serde_json::from_str(body).map_err(|err| BackendError::Decode(err.to_string()))?;
    if let Some(first) = envelope.errors.first() {
        return Err(BackendError::Server(first.message.clone()));
    }
    envelope
        .data
        .ok_or_else(|| BackendError::Decode("response carried no data".to_string()))
}

fn decode_field<T: DeserializeOwned>(data: &Value, field: &str) -> Result<T, BackendError> {
    let value = data
        .get(field)
        .cloned()
        .ok_or_else(|| BackendError::Decode(format!("missing field {field}")))?;
    serde_json::from_value(value).map_err(|err| BackendError::Decode(format!("{field}: {err}")))
}

/// Status aggregates arrive as a single-element array; an empty one counts
/// as all zeroes.
fn first_status_count(data: &Value, field: &str) -> Result<StatusCount, BackendError> {
    let counts: Vec<StatusCount> = decode_field(data, field)?;
    Ok(counts.into_iter().next().unwrap_or_default())
}

fn first_entity_counts(data: &Value, field: &str) -> Result<EntityCounts, BackendError> {
    let counts: Vec<EntityCounts> = decode_field(data, field)?;
    Ok(counts.into_iter().next().unwrap_or_default())
}

pub(crate) fn decode_extraction_data(data: &Value) -> Result<ExtractionData, BackendError> {
    Ok(ExtractionData {
        page: decode_field(data, "listExtractions")?,
        status: first_status_count(data, "statusCountExtraction")?,
        source_counts: decode_field::<Vec<SourceStatusCount>>(data, "statusSourceCountsExtraction")?,
    })
}

pub(crate) fn decode_transform_data(data: &Value) -> Result<TransformData, BackendError> {
    Ok(TransformData {
        page: decode_field(data, "listTransforms")?,
        status: first_status_count(data, "statusCountTransform")?,
        source_counts: decode_field::<Vec<SourceStatusCount>>(data, "statusSourceCountsTransform")?,
    })
}

pub(crate) fn decode_load_data(data: &Value) -> Result<LoadData, BackendError> {
    Ok(LoadData {
        page: decode_field(data, "listLoads")?,
        entities: first_entity_counts(data, "entityCountsLoad")?,
        source_counts: decode_field::<Vec<SourceStatusCount>>(data, "statusSourceCountsLoad")?,
    })
}

pub(crate) fn decode_filter_enums(data: &Value) -> Result<FilterEnums, BackendError> {
    decode_field(data, "enums")
}

pub(crate) fn decode_retrigger(data: &Value) -> Result<bool, BackendError> {
    decode_field(data, "retriggerPipeline")
}

fn listing_variables_value(variables: &ListingVariables) -> Result<Value, BackendError> {
    serde_json::to_value(variables).map_err(|err| BackendError::Decode(err.to_string()))
}

#[async_trait]
impl PipelineBackend for GraphqlClient {
    async fn list_extractions(
        &self,
        variables: ListingVariables,
    ) -> Result<ExtractionData, BackendError> {
        let variables = listing_variables_value(&variables)?;
        let data = self
            .execute("Extractions", queries::EXTRACTIONS, variables)
            .await?;
        decode_extraction_data(&data)
    }

    async fn list_transforms(
        &self,
        variables: ListingVariables,
    ) -> Result<TransformData, BackendError> {
        let variables = listing_variables_value(&variables)?;
        let data = self
            .execute("Transforms", queries::TRANSFORMS, variables)
            .await?;
        decode_transform_data(&data)
    }

    async fn list_loads(&self, variables: ListingVariables) -> Result<LoadData, BackendError> {
        let variables = listing_variables_value(&variables)?;
        let data = self.execute("Loads", queries::LOADS, variables).await?;
        decode_load_data(&data)
    }

    async fn filter_enums(&self) -> Result<FilterEnums, BackendError> {
        let data = self
            .execute("FilterEnums", queries::FILTER_ENUMS, json!({}))
            .await?;
        decode_filter_enums(&data)
    }

    async fn retrigger_pipeline(&self, trace_ids: Vec<i64>) -> Result<bool, BackendError> {
        let variables = json!({ "data": { "traceId": trace_ids } });
        let data = self
            .execute("RetriggerPipeline", queries::RETRIGGER_PIPELINE, variables)
            .await?;
        decode_retrigger(&data)
    }
}
