use std::collections::BTreeSet;

/// Checked row identifiers for one listing view, plus the banner-dismissed
/// flag. Dismissing the banner never clears the selection; any selection
/// change brings the banner back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<String>,
    banner_dismissed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
        self.banner_dismissed = false;
    }

    /// Select-all replaces the whole selection with the current page's ids,
    /// never unions across pages.
    pub fn select_page(&mut self, page_ids: &[String], checked: bool) {
        self.selected.clear();
        if checked {
            self.selected.extend(page_ids.iter().cloned());
        }
        self.banner_dismissed = false;
    }

    pub fn is_page_selected(&self, page_ids: &[String]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.selected.contains(id))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.banner_dismissed = false;
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_dismissed = true;
    }

    pub fn banner_visible(&self) -> bool {
        !self.selected.is_empty() && !self.banner_dismissed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn id_list(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}
