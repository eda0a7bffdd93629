pub const EXTRACTIONS: &str = r#"
query Extractions($pagination: OffsetPaginationInput!, $order: ExtractionOrder, $filters: ExtractionFilter) {
  listExtractions(pagination: $pagination, order: $order, filters: $filters) {
    totalCount
    pageInfo {
      limit
      offset
    }
    results {
      id
      hazardType
      parentId
      respCode
      respDataType
      source
      sourceValidationStatus
      status
      traceId
      url
    }
  }
  statusCountExtraction {
    failedCount
    inProgressCount
    pendingCount
    successCount
  }
  statusSourceCountsExtraction {
    source
    failedCount
    inProgressCount
    pendingCount
    successCount
  }
}
"#;

pub const TRANSFORMS: &str = r#"
query Transforms($pagination: OffsetPaginationInput!, $order: TransformOrder, $filters: TransformFilter) {
  listTransforms(pagination: $pagination, order: $order, filters: $filters) {
    totalCount
    pageInfo {
      limit
      offset
    }
    results {
      id
      createdAt
      startedAt
      endedAt
      status
      source
      traceId
      extraction {
        pk
      }
    }
  }
  statusCountTransform {
    failedCount
    inProgressCount
    pendingCount
    successCount
  }
  statusSourceCountsTransform {
    source
    failedCount
    inProgressCount
    pendingCount
    successCount
  }
}
"#;

pub const LOADS: &str = r#"
query Loads($pagination: OffsetPaginationInput!, $order: LoadOrder, $filters: LoadFilter) {
  listLoads(pagination: $pagination, order: $order, filters: $filters) {
    totalCount
    pageInfo {
      limit
      offset
    }
    results {
      id
      createdAt
      itemType
      status
      source
      traceId
    }
  }
  entityCountsLoad {
    eventCount
    hazardCount
    impactCount
  }
  statusSourceCountsLoad {
    source
    failedCount
    inProgressCount
    pendingCount
    successCount
  }
}
"#;

pub const FILTER_ENUMS: &str = r#"
query FilterEnums {
  enums {
    ExtractionDataSource {
      key
      label
    }
    ExtractionDataSourceValidationStatus {
      key
      label
    }
    ExtractionDataStatus {
      key
      label
    }
    PyStacLoadDataItemType {
      key
      label
    }
    PyStacLoadDataStatus {
      key
      label
    }
  }
}
"#;

pub const RETRIGGER_PIPELINE: &str = r#"
mutation RetriggerPipeline($data: PipelineRetriggerInput!) {
  retriggerPipeline(data: $data)
}
"#;
