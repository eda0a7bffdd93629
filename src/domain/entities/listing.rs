use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extraction,
    Transform,
    Load,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Extraction => "Extraction",
            Stage::Transform => "Transformation",
            Stage::Load => "Load",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn order_value(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Filter values as entered in the filter bar. Unset fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub created_at_start: Option<String>,
    pub created_at_end: Option<String>,
    pub trace_id: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub item_type: Option<String>,
}

pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Exact {
    pub eq: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<Exact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

/// Variables for one listing fetch, ready to serialize into the request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListingVariables {
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<BTreeMap<String, String>>,
    pub filters: DataFilter,
}

impl ListingVariables {
    /// Date bounds fold into a single range object (omitted when both are
    /// absent), the trace id becomes an exact match, the remaining fields
    /// pass through as equality filters.
    pub fn compose(
        filter: &ListingFilter,
        offset: i64,
        limit: i64,
        sort: Option<&SortSpec>,
    ) -> Self {
        let created_at = if filter.created_at_start.is_some() || filter.created_at_end.is_some() {
            Some(DateRange {
                gte: filter.created_at_start.clone(),
                lte: filter.created_at_end.clone(),
            })
        } else {
            None
        };
        let trace_id = filter.trace_id.clone().map(|value| Exact { eq: value });
        let order = sort.map(|spec| {
            let mut mapping = BTreeMap::new();
            mapping.insert(spec.field.clone(), spec.direction.order_value().to_string());
            mapping
        });

        ListingVariables {
            pagination: Pagination { offset, limit },
            order,
            filters: DataFilter {
                created_at,
                trace_id,
                source: filter.source.clone(),
                status: filter.status.clone(),
                item_type: filter.item_type.clone(),
            },
        }
    }
}
