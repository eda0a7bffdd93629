use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::enums::{enum_label, EnumOption, FilterEnums};
use crate::domain::entities::listing::{
    non_empty, ListingFilter, ListingVariables, SortDirection, Stage,
};
use crate::domain::entities::records::{
    format_timestamp, EntityCounts, ExtractionData, ExtractionRecord, ExtractionRef, ListingPage,
    LoadData, LoadRecord, SourceStatusCount, StageData, StatusCount, TransformData,
    TransformRecord, EXTRACTION_COLUMNS, LOAD_COLUMNS, TRANSFORM_COLUMNS,
};
use crate::infra::graphql::client::{
    decode_extraction_data, decode_filter_enums, decode_load_data, decode_retrigger,
    decode_transform_data, parse_envelope,
};
use crate::ui::listing::{table_container_style, table_header_cell_style, ListingConfig};
use crate::ui::state::filter_state::FilterState;
use crate::ui::state::selection::SelectionState;
use crate::usecase::ports::backend::{BackendError, PipelineBackend};
use crate::usecase::services::listing_service::ListingService;
use crate::usecase::services::retrigger_service::{
    parse_trace_ids, RetriggerOutcome, RetriggerService,
};
use crate::*;

fn sample_enums() -> FilterEnums {
    FilterEnums {
        source: vec![EnumOption {
            key: "GDACS".to_string(),
            label: "GDACS feed".to_string(),
        }],
        validation_status: vec![EnumOption {
            key: "SUCCESS".to_string(),
            label: "Success".to_string(),
        }],
        status: vec![EnumOption {
            key: "FAILED".to_string(),
            label: "Failed".to_string(),
        }],
        item_type: vec![EnumOption {
            key: "EVENT".to_string(),
            label: "Event".to_string(),
        }],
        load_status: vec![EnumOption {
            key: "PENDING".to_string(),
            label: "Pending".to_string(),
        }],
    }
}

fn sample_extraction_record() -> ExtractionRecord {
    ExtractionRecord {
        id: "11".to_string(),
        hazard_type: Some("EQ".to_string()),
        parent_id: None,
        resp_code: Some(200),
        resp_data_type: Some("json".to_string()),
        source: Some("GDACS".to_string()),
        source_validation_status: Some("SUCCESS".to_string()),
        status: Some("FAILED".to_string()),
        trace_id: Some("77".to_string()),
        url: Some("https://example.org/feed".to_string()),
    }
}

fn sample_extraction_data() -> ExtractionData {
    ExtractionData {
        page: ListingPage {
            total_count: 3,
            page_info: None,
            results: vec![sample_extraction_record()],
        },
        status: StatusCount {
            failed_count: 1,
            in_progress_count: 0,
            pending_count: 2,
            success_count: 4,
        },
        source_counts: vec![SourceStatusCount {
            source: "GDACS".to_string(),
            failed_count: 1,
            in_progress_count: 0,
            pending_count: 2,
            success_count: 4,
        }],
    }
}

fn sample_transform_data() -> TransformData {
    TransformData {
        page: ListingPage {
            total_count: 1,
            page_info: None,
            results: vec![TransformRecord {
                id: "5".to_string(),
                created_at: Some("2025-03-04T10:20:30+00:00".to_string()),
                started_at: None,
                ended_at: None,
                status: Some("FAILED".to_string()),
                source: Some("GDACS".to_string()),
                trace_id: Some("77".to_string()),
                extraction: Some(ExtractionRef { pk: Some(9) }),
            }],
        },
        status: StatusCount::default(),
        source_counts: Vec::new(),
    }
}

fn sample_load_data() -> LoadData {
    LoadData {
        page: ListingPage {
            total_count: 2,
            page_info: None,
            results: vec![LoadRecord {
                id: "8".to_string(),
                created_at: Some("2025-03-04T10:20:30+00:00".to_string()),
                item_type: Some("EVENT".to_string()),
                status: Some("PENDING".to_string()),
                source: Some("GDACS".to_string()),
                trace_id: Some("78".to_string()),
            }],
        },
        entities: EntityCounts {
            event_count: 5,
            hazard_count: 2,
            impact_count: 1,
        },
        source_counts: Vec::new(),
    }
}

#[test]
fn filter_edit_resets_page_and_applies_immediately() {
    let mut state = FilterState::<ListingFilter>::new(20);
    state.set_page(3);

    state.update_filter(|filter| filter.source = Some("GDACS".to_string()));

    assert_eq!(state.page(), 1, "filter edits should land back on page 1");
    assert_eq!(state.applied_filter(), state.raw_filter());
    assert_eq!(state.applied_filter().source.as_deref(), Some("GDACS"));
}

#[test]
fn filtered_tracks_non_default_applied_filter() {
    let mut state = FilterState::<ListingFilter>::new(20);
    assert!(!state.filtered());

    state.update_filter(|filter| filter.trace_id = Some("42".to_string()));
    assert!(state.filtered());

    state.reset_filter();
    assert!(!state.filtered(), "reset should restore the default filter");
    assert_eq!(state.page(), 1);
}

#[test]
fn offset_follows_page_and_page_size() {
    let mut state = FilterState::<ListingFilter>::new(20);

    assert_eq!(state.offset(), 0);
    state.set_page(3);
    assert_eq!(state.offset(), 40);
    assert_eq!(state.limit(), 20);

    state.set_page_size(50);
    assert_eq!(state.page(), 1, "page size changes should reset the page");
    assert_eq!(state.offset(), 0);
    assert_eq!(state.limit(), 50);
}

#[test]
fn page_never_drops_below_one() {
    let mut state = FilterState::<ListingFilter>::new(20);
    state.set_page(0);
    assert_eq!(state.page(), 1);
}

#[test]
fn toggle_sort_flips_direction_and_replaces_field() {
    let mut state = FilterState::<ListingFilter>::new(20);
    state.set_page(2);

    state.toggle_sort("id");
    let sort = state.sort().expect("sort should be active");
    assert_eq!(sort.field, "id");
    assert_eq!(sort.direction, SortDirection::Asc);

    state.toggle_sort("id");
    let sort = state.sort().expect("sort should stay active");
    assert_eq!(sort.direction, SortDirection::Desc);

    state.toggle_sort("status");
    let sort = state.sort().expect("sort should move to the new field");
    assert_eq!(sort.field, "status");
    assert_eq!(sort.direction, SortDirection::Asc);

    assert_eq!(state.page(), 2, "sort changes should not reset the page");
}

#[test]
fn set_sort_overrides_field_and_direction() {
    let mut state = FilterState::<ListingFilter>::new(20);
    state.set_sort("createdAt", SortDirection::Desc);

    let sort = state.sort().expect("sort should be active");
    assert_eq!(sort.field, "createdAt");
    assert_eq!(sort.direction, SortDirection::Desc);
}

#[test]
fn empty_inputs_clear_filter_fields() {
    assert_eq!(non_empty(String::new()), None);
    assert_eq!(non_empty("GDACS".to_string()), Some("GDACS".to_string()));
}

#[test]
fn select_all_replaces_previous_selection() {
    let mut selection = SelectionState::new();
    selection.toggle("1", true);

    let page_ids = vec!["7".to_string(), "8".to_string()];
    selection.select_page(&page_ids, true);

    assert_eq!(selection.len(), 2, "select all should replace, not union");
    assert!(!selection.contains("1"));
    assert!(selection.is_page_selected(&page_ids));

    selection.select_page(&page_ids, false);
    assert!(selection.is_empty());
}

#[test]
fn page_selection_requires_non_empty_page() {
    let selection = SelectionState::new();
    assert!(!selection.is_page_selected(&[]));
}

#[test]
fn toggle_is_idempotent() {
    let mut selection = SelectionState::new();

    selection.toggle("5", true);
    selection.toggle("5", true);
    assert_eq!(selection.len(), 1);

    selection.toggle("5", false);
    selection.toggle("5", false);
    assert!(selection.is_empty());
}

#[test]
fn banner_reappears_after_selection_change() {
    let mut selection = SelectionState::new();
    selection.toggle("5", true);
    assert!(selection.banner_visible());

    selection.dismiss_banner();
    assert!(!selection.banner_visible());
    assert!(!selection.is_empty(), "dismissing must not clear the selection");

    selection.toggle("6", true);
    assert!(selection.banner_visible(), "any selection change re-shows the banner");

    selection.clear();
    assert!(!selection.banner_visible());
}

#[test]
fn enum_label_resolves_known_keys_only() {
    let options = sample_enums().source;

    assert_eq!(enum_label(Some("GDACS"), &options), Some("GDACS feed"));
    assert_eq!(enum_label(Some("USGS"), &options), None);
    assert_eq!(enum_label(Some("GDACS"), &[]), None);
    assert_eq!(enum_label(None, &options), None);
}

#[test]
fn compose_folds_date_bounds_into_one_range() {
    let mut filter = ListingFilter::default();
    filter.created_at_start = Some("2025-01-01".to_string());

    let variables = ListingVariables::compose(&filter, 0, 20, None);
    let range = variables.filters.created_at.as_ref().expect("range should be present");
    assert_eq!(range.gte.as_deref(), Some("2025-01-01"));
    assert_eq!(range.lte, None);

    filter.created_at_end = Some("2025-02-01".to_string());
    let variables = ListingVariables::compose(&filter, 0, 20, None);
    let range = variables.filters.created_at.as_ref().expect("range should be present");
    assert_eq!(range.lte.as_deref(), Some("2025-02-01"));

    let variables = ListingVariables::compose(&ListingFilter::default(), 0, 20, None);
    assert!(variables.filters.created_at.is_none(), "no bounds, no range object");
}

#[test]
fn compose_wraps_trace_id_in_exact_match() {
    let filter = ListingFilter {
        trace_id: Some("42".to_string()),
        ..ListingFilter::default()
    };

    let variables = ListingVariables::compose(&filter, 0, 20, None);
    let exact = variables.filters.trace_id.expect("trace id should be wrapped");
    assert_eq!(exact.eq, "42");
}

#[test]
fn compose_serializes_without_empty_keys() {
    let variables = ListingVariables::compose(&ListingFilter::default(), 0, 20, None);
    let value = serde_json::to_value(&variables).expect("variables should serialize");

    assert_eq!(
        value,
        json!({
            "pagination": { "offset": 0, "limit": 20 },
            "filters": {}
        }),
        "unset fields and the absent order must not appear in the payload"
    );
}

#[test]
fn compose_serializes_filters_in_backend_shape() {
    let filter = ListingFilter {
        created_at_start: Some("2025-01-01".to_string()),
        trace_id: Some("42".to_string()),
        source: Some("GDACS".to_string()),
        item_type: Some("EVENT".to_string()),
        ..ListingFilter::default()
    };
    let mut state = FilterState::<ListingFilter>::new(20);
    state.update_filter(|fields| *fields = filter);
    state.toggle_sort("createdAt");
    state.toggle_sort("createdAt");

    let variables = ListingVariables::compose(
        state.applied_filter(),
        state.offset(),
        state.limit(),
        state.sort(),
    );
    let value = serde_json::to_value(&variables).expect("variables should serialize");

    assert_eq!(value["order"], json!({ "createdAt": "DESC" }));
    assert_eq!(value["filters"]["createdAt"], json!({ "gte": "2025-01-01" }));
    assert_eq!(value["filters"]["traceId"], json!({ "eq": "42" }));
    assert_eq!(value["filters"]["source"], json!("GDACS"));
    assert_eq!(value["filters"]["itemType"], json!("EVENT"));
}

#[test]
fn parse_trace_ids_accepts_decimal_strings() {
    let ids = vec!["1".to_string(), "23".to_string()];
    let parsed = parse_trace_ids(&ids).expect("numeric ids should parse");
    assert_eq!(parsed, vec![1, 23]);
}

#[test]
fn parse_trace_ids_reports_first_bad_id() {
    let ids = vec!["1".to_string(), "abc".to_string(), "3".to_string()];
    let error = parse_trace_ids(&ids).expect_err("non-numeric id should fail");
    assert_eq!(error, "abc");
}

#[test]
fn retrigger_outcome_messages_match_notifications() {
    assert_eq!(
        RetriggerOutcome::Triggered.message(),
        "Successfully Retriggered the Content"
    );
    assert_eq!(
        RetriggerOutcome::Rejected.message(),
        "Failed to Retrigger the Content. Unexpected response from the server."
    );
    assert_eq!(
        RetriggerOutcome::TransportFailed.message(),
        "Failed to Retrigger the Content. Please try again later."
    );
    assert!(
        RetriggerOutcome::InvalidId("abc".to_string())
            .message()
            .contains("\"abc\""),
        "invalid-id notice should name the offending id"
    );
}

#[test]
fn retrigger_outcome_selection_policy() {
    assert!(RetriggerOutcome::Triggered.clears_selection());
    assert!(RetriggerOutcome::Rejected.clears_selection());
    assert!(!RetriggerOutcome::TransportFailed.clears_selection());
    assert!(!RetriggerOutcome::InvalidId("x".to_string()).clears_selection());

    assert!(RetriggerOutcome::Triggered.is_success());
    assert!(!RetriggerOutcome::Rejected.is_success());
}

struct FakeBackend {
    extraction: Option<ExtractionData>,
    transform: Option<TransformData>,
    load: Option<LoadData>,
    enums: FilterEnums,
    retrigger_response: Result<bool, BackendError>,
    retrigger_calls: Mutex<Vec<Vec<i64>>>,
}

impl FakeBackend {
    fn with_retrigger(response: Result<bool, BackendError>) -> Self {
        FakeBackend {
            extraction: None,
            transform: None,
            load: None,
            enums: FilterEnums::default(),
            retrigger_response: response,
            retrigger_calls: Mutex::new(Vec::new()),
        }
    }

    fn with_listings() -> Self {
        FakeBackend {
            extraction: Some(sample_extraction_data()),
            transform: Some(sample_transform_data()),
            load: Some(sample_load_data()),
            enums: sample_enums(),
            retrigger_response: Ok(true),
            retrigger_calls: Mutex::new(Vec::new()),
        }
    }

    fn recorded_calls(&self) -> Vec<Vec<i64>> {
        self.retrigger_calls
            .lock()
            .expect("call log lock should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl PipelineBackend for FakeBackend {
    async fn list_extractions(
        &self,
        _variables: ListingVariables,
    ) -> Result<ExtractionData, BackendError> {
        self.extraction
            .clone()
            .ok_or_else(|| BackendError::Transport("no extraction fixture".to_string()))
    }

    async fn list_transforms(
        &self,
        _variables: ListingVariables,
    ) -> Result<TransformData, BackendError> {
        self.transform
            .clone()
            .ok_or_else(|| BackendError::Transport("no transform fixture".to_string()))
    }

    async fn list_loads(&self, _variables: ListingVariables) -> Result<LoadData, BackendError> {
        self.load
            .clone()
            .ok_or_else(|| BackendError::Transport("no load fixture".to_string()))
    }

    async fn filter_enums(&self) -> Result<FilterEnums, BackendError> {
        Ok(self.enums.clone())
    }

    async fn retrigger_pipeline(&self, trace_ids: Vec<i64>) -> Result<bool, BackendError> {
        self.retrigger_calls
            .lock()
            .expect("call log lock should not be poisoned")
            .push(trace_ids);
        self.retrigger_response.clone()
    }
}

#[tokio::test]
async fn execute_maps_true_payload_to_triggered() {
    let backend = Arc::new(FakeBackend::with_retrigger(Ok(true)));
    let service = RetriggerService::new(backend.clone());

    let outcome = service
        .execute(&["1".to_string(), "2".to_string()])
        .await;

    assert_eq!(outcome, RetriggerOutcome::Triggered);
    assert_eq!(backend.recorded_calls(), vec![vec![1, 2]]);
}

#[tokio::test]
async fn execute_maps_false_payload_to_rejected() {
    let backend = Arc::new(FakeBackend::with_retrigger(Ok(false)));
    let service = RetriggerService::new(backend.clone());

    let outcome = service.execute(&["1".to_string()]).await;

    assert_eq!(outcome, RetriggerOutcome::Rejected);
    assert!(outcome.clears_selection());
}

#[tokio::test]
async fn execute_maps_backend_error_to_transport_failure() {
    let backend = Arc::new(FakeBackend::with_retrigger(Err(BackendError::Transport(
        "connection refused".to_string(),
    ))));
    let service = RetriggerService::new(backend.clone());

    let outcome = service.execute(&["1".to_string()]).await;

    assert_eq!(outcome, RetriggerOutcome::TransportFailed);
    assert!(!outcome.clears_selection());
}

#[tokio::test]
async fn execute_refuses_non_numeric_ids_without_calling_backend() {
    let backend = Arc::new(FakeBackend::with_retrigger(Ok(true)));
    let service = RetriggerService::new(backend.clone());

    let outcome = service
        .execute(&["12".to_string(), "x".to_string()])
        .await;

    assert_eq!(outcome, RetriggerOutcome::InvalidId("x".to_string()));
    assert!(
        backend.recorded_calls().is_empty(),
        "nothing should reach the backend on invalid input"
    );
}

#[tokio::test]
async fn fetch_stage_wraps_each_stage_payload() {
    let backend = Arc::new(FakeBackend::with_listings());
    let service = ListingService::new(backend);
    let variables = ListingVariables::compose(&ListingFilter::default(), 0, 20, None);

    let extraction = service
        .fetch_stage(Stage::Extraction, variables.clone())
        .await
        .expect("extraction fetch should succeed");
    assert!(matches!(extraction, StageData::Extraction(_)));
    assert_eq!(extraction.total_count(), 3);
    assert_eq!(extraction.page_ids(), vec!["11".to_string()]);

    let transform = service
        .fetch_stage(Stage::Transform, variables.clone())
        .await
        .expect("transform fetch should succeed");
    assert!(matches!(transform, StageData::Transform(_)));

    let load = service
        .fetch_stage(Stage::Load, variables)
        .await
        .expect("load fetch should succeed");
    assert!(matches!(load, StageData::Load(_)));
}

#[test]
fn parse_envelope_rejects_error_arrays() {
    let body = r#"{"data": {"retriggerPipeline": true}, "errors": [{"message": "boom"}]}"#;

    let result = parse_envelope(body);

    assert_eq!(
        result,
        Err(BackendError::Server("boom".to_string())),
        "a non-empty errors array is a failure even with data present"
    );
}

#[test]
fn parse_envelope_requires_data() {
    assert!(matches!(
        parse_envelope("{}"),
        Err(BackendError::Decode(_))
    ));
    assert!(matches!(
        parse_envelope("not json"),
        Err(BackendError::Decode(_))
    ));
}

#[test]
fn extraction_response_decodes_from_wire_shape() {
    let body = r#"{
        "data": {
            "listExtractions": {
                "totalCount": 2,
                "pageInfo": { "limit": 20, "offset": 0 },
                "results": [
                    {
                        "id": "11",
                        "hazardType": "EQ",
                        "parentId": null,
                        "respCode": 200,
                        "respDataType": "json",
                        "source": "GDACS",
                        "sourceValidationStatus": "SUCCESS",
                        "status": "FAILED",
                        "traceId": "77",
                        "url": "https://example.org/feed"
                    }
                ]
            },
            "statusCountExtraction": [
                { "failedCount": 1, "inProgressCount": 2, "pendingCount": 3, "successCount": 4 }
            ],
            "statusSourceCountsExtraction": [
                { "source": "GDACS", "failedCount": 1, "inProgressCount": 0, "pendingCount": 0, "successCount": 5 }
            ]
        }
    }"#;

    let data = parse_envelope(body).expect("envelope should parse");
    let decoded = decode_extraction_data(&data).expect("extraction payload should decode");

    assert_eq!(decoded.page.total_count, 2);
    assert_eq!(decoded.page.results.len(), 1);
    assert_eq!(decoded.page.results[0].id, "11");
    assert_eq!(decoded.page.results[0].resp_code, Some(200));
    assert_eq!(decoded.page.results[0].parent_id, None);
    assert_eq!(decoded.status.success_count, 4);
    assert_eq!(decoded.source_counts[0].total(), 6);
}

#[test]
fn empty_status_aggregate_counts_as_zero() {
    let body = r#"{
        "data": {
            "listExtractions": { "totalCount": 0, "pageInfo": null, "results": [] },
            "statusCountExtraction": [],
            "statusSourceCountsExtraction": []
        }
    }"#;

    let data = parse_envelope(body).expect("envelope should parse");
    let decoded = decode_extraction_data(&data).expect("extraction payload should decode");

    assert_eq!(decoded.status, StatusCount::default());
}

#[test]
fn transform_response_decodes_nested_extraction_pk() {
    let body = r#"{
        "data": {
            "listTransforms": {
                "totalCount": 1,
                "pageInfo": { "limit": 20, "offset": 0 },
                "results": [
                    {
                        "id": "5",
                        "createdAt": "2025-03-04T10:20:30+00:00",
                        "startedAt": null,
                        "endedAt": null,
                        "status": "FAILED",
                        "source": "GDACS",
                        "traceId": "77",
                        "extraction": { "pk": 9 }
                    }
                ]
            },
            "statusCountTransform": [
                { "failedCount": 0, "inProgressCount": 0, "pendingCount": 0, "successCount": 1 }
            ],
            "statusSourceCountsTransform": []
        }
    }"#;

    let data = parse_envelope(body).expect("envelope should parse");
    let decoded = decode_transform_data(&data).expect("transform payload should decode");

    let record = &decoded.page.results[0];
    assert_eq!(record.extraction.as_ref().and_then(|e| e.pk), Some(9));
    assert_eq!(record.started_at, None);
}

#[test]
fn load_response_decodes_entity_counts() {
    let body = r#"{
        "data": {
            "listLoads": {
                "totalCount": 2,
                "pageInfo": { "limit": 20, "offset": 0 },
                "results": [
                    {
                        "id": "8",
                        "createdAt": "2025-03-04T10:20:30+00:00",
                        "itemType": "EVENT",
                        "status": "PENDING",
                        "source": "GDACS",
                        "traceId": "78"
                    }
                ]
            },
            "entityCountsLoad": [
                { "eventCount": 5, "hazardCount": 2, "impactCount": 1 }
            ],
            "statusSourceCountsLoad": []
        }
    }"#;

    let data = parse_envelope(body).expect("envelope should parse");
    let decoded = decode_load_data(&data).expect("load payload should decode");

    assert_eq!(decoded.entities.event_count, 5);
    assert_eq!(decoded.entities.hazard_count, 2);
    assert_eq!(decoded.entities.impact_count, 1);
    assert_eq!(decoded.page.results[0].item_type.as_deref(), Some("EVENT"));
}

#[test]
fn filter_enums_decode_all_five_tables() {
    let body = r#"{
        "data": {
            "enums": {
                "ExtractionDataSource": [{ "key": "GDACS", "label": "GDACS feed" }],
                "ExtractionDataSourceValidationStatus": [{ "key": "SUCCESS", "label": "Success" }],
                "ExtractionDataStatus": [{ "key": "FAILED", "label": "Failed" }],
                "PyStacLoadDataItemType": [{ "key": "EVENT", "label": "Event" }],
                "PyStacLoadDataStatus": [{ "key": "PENDING", "label": "Pending" }]
            }
        }
    }"#;

    let data = parse_envelope(body).expect("envelope should parse");
    let decoded = decode_filter_enums(&data).expect("enum tables should decode");

    assert_eq!(decoded.source.len(), 1);
    assert_eq!(decoded.validation_status.len(), 1);
    assert_eq!(decoded.status.len(), 1);
    assert_eq!(decoded.item_type.len(), 1);
    assert_eq!(decoded.load_status.len(), 1);
    assert_eq!(decoded.status_options(Stage::Load)[0].key, "PENDING");
    assert_eq!(decoded.status_options(Stage::Extraction)[0].key, "FAILED");
}

#[test]
fn retrigger_decode_reads_boolean_payload() {
    let data = parse_envelope(r#"{"data": {"retriggerPipeline": false}}"#)
        .expect("envelope should parse");
    assert_eq!(decode_retrigger(&data), Ok(false));
}

#[test]
fn extraction_cells_align_with_columns() {
    let record = sample_extraction_record();

    let cells = record.cells();

    assert_eq!(cells.len(), EXTRACTION_COLUMNS.len());
    assert_eq!(cells[0].text, "11");
    assert_eq!(cells[2].text, "FAILED", "extraction cells stay raw");
    let url_cell = cells.last().expect("url cell should exist");
    assert_eq!(url_cell.href.as_deref(), Some("https://example.org/feed"));
}

#[test]
fn transform_cells_resolve_labels_and_timestamps() {
    let enums = sample_enums();
    let record = sample_transform_data().page.results.remove(0);

    let cells = record.cells(&enums);

    assert_eq!(cells.len(), TRANSFORM_COLUMNS.len());
    assert_eq!(cells[1].text, "GDACS feed");
    assert_eq!(cells[2].text, "Failed");
    assert_eq!(cells[3].text, "03/04/2025 10:20:30");
    assert_eq!(cells[4].text, "", "missing timestamps render empty");
    assert_eq!(cells[6].text, "9");
}

#[test]
fn load_cells_use_the_load_status_table() {
    let enums = sample_enums();
    let record = sample_load_data().page.results.remove(0);

    let cells = record.cells(&enums);

    assert_eq!(cells.len(), LOAD_COLUMNS.len());
    assert_eq!(cells[1].text, "Event");
    assert_eq!(cells[2].text, "Pending", "load status resolves against its own table");
    assert_eq!(cells[3].text, "GDACS feed");
}

#[test]
fn unknown_enum_keys_render_blank() {
    let record = LoadRecord {
        id: "9".to_string(),
        created_at: None,
        item_type: Some("UNKNOWN".to_string()),
        status: None,
        source: None,
        trace_id: None,
    };

    let cells = record.cells(&sample_enums());

    assert_eq!(cells[1].text, "");
}

#[test]
fn format_timestamp_renders_american_date_or_raw() {
    assert_eq!(
        format_timestamp("2025-03-04T10:20:30+00:00"),
        "03/04/2025 10:20:30"
    );
    assert_eq!(format_timestamp("yesterday"), "yesterday");
}

#[test]
fn key_figures_follow_stage_layout() {
    let extraction = StageData::Extraction(sample_extraction_data());
    let figures = extraction.key_figures();
    assert_eq!(figures.len(), 3);
    assert_eq!(figures[0].label, "Total Extractions Succeeded");
    assert_eq!(figures[0].value, 4);
    assert_eq!(figures[1].label, "Total Extractions Failed");
    assert_eq!(figures[2].label, "Total Extractions Pending");

    let load = StageData::Load(sample_load_data());
    let figures = load.key_figures();
    assert_eq!(figures[0].label, "Unique Events");
    assert_eq!(figures[0].value, 5);
    assert_eq!(figures[1].label, "Unique Hazards");
    assert_eq!(figures[2].label, "Unique Impacts");
}

#[test]
fn listing_config_varies_per_stage() {
    let extraction = ListingConfig::for_stage(Stage::Extraction);
    assert_eq!(extraction.heading, "All Extraction");
    assert!(!extraction.show_item_type_filter);
    assert_eq!(extraction.columns().len(), EXTRACTION_COLUMNS.len());

    let transform = ListingConfig::for_stage(Stage::Transform);
    assert_eq!(transform.heading, "All Transformation");
    assert_eq!(transform.columns().len(), TRANSFORM_COLUMNS.len());

    let load = ListingConfig::for_stage(Stage::Load);
    assert_eq!(load.heading, "All Load");
    assert!(load.show_item_type_filter);
    assert_eq!(load.page_size, 20);
}

#[test]
fn sticky_header_styles_include_positioning() {
    let style = table_header_cell_style();

    assert!(style.contains("position: sticky"));
    assert!(style.contains("top: 0"));
    assert!(style.contains("z-index"));
}

#[test]
fn table_container_style_allows_scroll() {
    let style = table_container_style();

    assert!(style.contains("overflow: auto"));
    assert!(style.contains("flex: 1"));
}
