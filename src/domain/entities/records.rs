use serde::Deserialize;

use crate::domain::entities::enums::{enum_label, EnumOption, FilterEnums};
use crate::domain::entities::listing::Stage;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    pub id: String,
    pub hazard_type: Option<String>,
    pub parent_id: Option<String>,
    pub resp_code: Option<i64>,
    pub resp_data_type: Option<String>,
    pub source: Option<String>,
    pub source_validation_status: Option<String>,
    pub status: Option<String>,
    pub trace_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractionRef {
    pub pk: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRecord {
    pub id: String,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub trace_id: Option<String>,
    pub extraction: Option<ExtractionRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRecord {
    pub id: String,
    pub created_at: Option<String>,
    pub item_type: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub trace_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    #[serde(default)]
    pub failed_count: i64,
    #[serde(default)]
    pub in_progress_count: i64,
    #[serde(default)]
    pub pending_count: i64,
    #[serde(default)]
    pub success_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStatusCount {
    pub source: String,
    #[serde(default)]
    pub failed_count: i64,
    #[serde(default)]
    pub in_progress_count: i64,
    #[serde(default)]
    pub pending_count: i64,
    #[serde(default)]
    pub success_count: i64,
}

impl SourceStatusCount {
    pub fn total(&self) -> i64 {
        self.failed_count + self.in_progress_count + self.pending_count + self.success_count
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    #[serde(default)]
    pub event_count: i64,
    #[serde(default)]
    pub hazard_count: i64,
    #[serde(default)]
    pub impact_count: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<R> {
    pub total_count: i64,
    pub page_info: Option<PageInfo>,
    pub results: Vec<R>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionData {
    pub page: ListingPage<ExtractionRecord>,
    pub status: StatusCount,
    pub source_counts: Vec<SourceStatusCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformData {
    pub page: ListingPage<TransformRecord>,
    pub status: StatusCount,
    pub source_counts: Vec<SourceStatusCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadData {
    pub page: ListingPage<LoadRecord>,
    pub entities: EntityCounts,
    pub source_counts: Vec<SourceStatusCount>,
}

/// One stage's fetch result, unified so a single listing view can render any
/// of the three stages.
#[derive(Debug, Clone, PartialEq)]
pub enum StageData {
    Extraction(ExtractionData),
    Transform(TransformData),
    Load(LoadData),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFigure {
    pub label: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub id: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

pub const EXTRACTION_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { field: "id", label: "Id", sortable: true },
    ColumnSpec { field: "hazardType", label: "Hazard Type", sortable: false },
    ColumnSpec { field: "status", label: "Status", sortable: true },
    ColumnSpec { field: "source", label: "Source", sortable: true },
    ColumnSpec { field: "sourceValidationStatus", label: "Source validation Status", sortable: false },
    ColumnSpec { field: "respCode", label: "Response Code", sortable: false },
    ColumnSpec { field: "respDataType", label: "Response data Type", sortable: false },
    ColumnSpec { field: "parentId", label: "Parent Id", sortable: false },
    ColumnSpec { field: "traceId", label: "Trace Id", sortable: true },
    ColumnSpec { field: "url", label: "Source url", sortable: false },
];

pub const TRANSFORM_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { field: "id", label: "Transform Id", sortable: true },
    ColumnSpec { field: "source", label: "Source", sortable: false },
    ColumnSpec { field: "status", label: "Status", sortable: true },
    ColumnSpec { field: "createdAt", label: "Created at", sortable: true },
    ColumnSpec { field: "startedAt", label: "Started at", sortable: false },
    ColumnSpec { field: "endedAt", label: "End at", sortable: false },
    ColumnSpec { field: "extraction", label: "Extraction Id", sortable: false },
    ColumnSpec { field: "traceId", label: "Trace Id", sortable: true },
];

pub const LOAD_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { field: "id", label: "Load Id", sortable: true },
    ColumnSpec { field: "itemType", label: "Item Type", sortable: false },
    ColumnSpec { field: "status", label: "Status", sortable: true },
    ColumnSpec { field: "source", label: "Source", sortable: false },
    ColumnSpec { field: "createdAt", label: "Created at", sortable: true },
    ColumnSpec { field: "traceId", label: "Trace Id", sortable: true },
];

pub fn stage_columns(stage: Stage) -> &'static [ColumnSpec] {
    match stage {
        Stage::Extraction => EXTRACTION_COLUMNS,
        Stage::Transform => TRANSFORM_COLUMNS,
        Stage::Load => LOAD_COLUMNS,
    }
}

/// Renders an RFC 3339 timestamp as `MM/DD/YYYY HH:MM:SS`, falling back to
/// the raw value when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.format("%m/%d/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn text_cell(value: &Option<String>) -> Cell {
    Cell {
        text: value.clone().unwrap_or_default(),
        href: None,
    }
}

fn label_cell(value: &Option<String>, options: &[EnumOption]) -> Cell {
    Cell {
        text: enum_label(value.as_deref(), options)
            .unwrap_or_default()
            .to_string(),
        href: None,
    }
}

fn timestamp_cell(value: &Option<String>) -> Cell {
    Cell {
        text: value.as_deref().map(format_timestamp).unwrap_or_default(),
        href: None,
    }
}

impl ExtractionRecord {
    pub fn cells(&self) -> Vec<Cell> {
        vec![
            Cell { text: self.id.clone(), href: None },
            text_cell(&self.hazard_type),
            text_cell(&self.status),
            text_cell(&self.source),
            text_cell(&self.source_validation_status),
            Cell {
                text: self.resp_code.map(|code| code.to_string()).unwrap_or_default(),
                href: None,
            },
            text_cell(&self.resp_data_type),
            text_cell(&self.parent_id),
            text_cell(&self.trace_id),
            Cell {
                text: self.url.clone().unwrap_or_default(),
                href: self.url.clone(),
            },
        ]
    }
}

impl TransformRecord {
    pub fn cells(&self, enums: &FilterEnums) -> Vec<Cell> {
        vec![
            Cell { text: self.id.clone(), href: None },
            label_cell(&self.source, &enums.source),
            label_cell(&self.status, enums.status_options(Stage::Transform)),
            timestamp_cell(&self.created_at),
            timestamp_cell(&self.started_at),
            timestamp_cell(&self.ended_at),
            Cell {
                text: self
                    .extraction
                    .as_ref()
                    .and_then(|linked| linked.pk)
                    .map(|pk| pk.to_string())
                    .unwrap_or_default(),
                href: None,
            },
            text_cell(&self.trace_id),
        ]
    }
}

impl LoadRecord {
    pub fn cells(&self, enums: &FilterEnums) -> Vec<Cell> {
        vec![
            Cell { text: self.id.clone(), href: None },
            label_cell(&self.item_type, &enums.item_type),
            label_cell(&self.status, enums.status_options(Stage::Load)),
            label_cell(&self.source, &enums.source),
            timestamp_cell(&self.created_at),
            text_cell(&self.trace_id),
        ]
    }
}

fn status_figures(status: &StatusCount, labels: [&'static str; 3]) -> Vec<KeyFigure> {
    vec![
        KeyFigure { label: labels[0], value: status.success_count },
        KeyFigure { label: labels[1], value: status.failed_count },
        KeyFigure { label: labels[2], value: status.pending_count },
    ]
}

impl StageData {
    pub fn total_count(&self) -> i64 {
        match self {
            StageData::Extraction(data) => data.page.total_count,
            StageData::Transform(data) => data.page.total_count,
            StageData::Load(data) => data.page.total_count,
        }
    }

    pub fn page_ids(&self) -> Vec<String> {
        match self {
            StageData::Extraction(data) => {
                data.page.results.iter().map(|record| record.id.clone()).collect()
            }
            StageData::Transform(data) => {
                data.page.results.iter().map(|record| record.id.clone()).collect()
            }
            StageData::Load(data) => {
                data.page.results.iter().map(|record| record.id.clone()).collect()
            }
        }
    }

    pub fn key_figures(&self) -> Vec<KeyFigure> {
        match self {
            StageData::Extraction(data) => status_figures(
                &data.status,
                [
                    "Total Extractions Succeeded",
                    "Total Extractions Failed",
                    "Total Extractions Pending",
                ],
            ),
            StageData::Transform(data) => status_figures(
                &data.status,
                [
                    "Total Transforms Succeeded",
                    "Total Transforms Failed",
                    "Total Transforms Pending",
                ],
            ),
            StageData::Load(data) => vec![
                KeyFigure { label: "Unique Events", value: data.entities.event_count },
                KeyFigure { label: "Unique Hazards", value: data.entities.hazard_count },
                KeyFigure { label: "Unique Impacts", value: data.entities.impact_count },
            ],
        }
    }

    pub fn source_counts(&self) -> &[SourceStatusCount] {
        match self {
            StageData::Extraction(data) => &data.source_counts,
            StageData::Transform(data) => &data.source_counts,
            StageData::Load(data) => &data.source_counts,
        }
    }

    pub fn rows(&self, enums: &FilterEnums) -> Vec<RowCells> {
        match self {
            StageData::Extraction(data) => data
                .page
                .results
                .iter()
                .map(|record| RowCells { id: record.id.clone(), cells: record.cells() })
                .collect(),
            StageData::Transform(data) => data
                .page
                .results
                .iter()
                .map(|record| RowCells { id: record.id.clone(), cells: record.cells(enums) })
                .collect(),
            StageData::Load(data) => data
                .page
                .results
                .iter()
                .map(|record| RowCells { id: record.id.clone(), cells: record.cells(enums) })
                .collect(),
        }
    }
}
