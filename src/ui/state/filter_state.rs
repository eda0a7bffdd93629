use crate::domain::entities::listing::{SortDirection, SortSpec};

/// Filter, pagination and sort state for one listing view. Edits apply
/// immediately, so the raw and applied filter are kept in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F> {
    raw: F,
    applied: F,
    page: i64,
    page_size: i64,
    sort: Option<SortSpec>,
}

impl<F: Default + Clone + PartialEq> FilterState<F> {
    pub fn new(page_size: i64) -> Self {
        Self {
            raw: F::default(),
            applied: F::default(),
            page: 1,
            page_size: page_size.max(1),
            sort: None,
        }
    }

    /// Any filter edit lands on page 1.
    pub fn update_filter(&mut self, mutate: impl FnOnce(&mut F)) {
        mutate(&mut self.raw);
        self.applied = self.raw.clone();
        self.page = 1;
    }

    pub fn reset_filter(&mut self) {
        self.raw = F::default();
        self.applied = F::default();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.sort = Some(SortSpec {
            field: field.to_string(),
            direction,
        });
    }

    /// A new column starts ascending; the active column flips direction.
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(spec) if spec.field == field => spec.direction = spec.direction.reversed(),
            _ => {
                self.sort = Some(SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Asc,
                })
            }
        }
    }

    pub fn raw_filter(&self) -> &F {
        &self.raw
    }

    pub fn applied_filter(&self) -> &F {
        &self.applied
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn filtered(&self) -> bool {
        self.applied != F::default()
    }
}
