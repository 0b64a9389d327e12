//! MedicinesState - Medicine Catalog Page State

use crate::domain::medicine::{Medicine, MedicineDraft};
use crate::domain::query::{ListQuery, Paginated, SortOrder};

/// Rows per page on the list views
pub const PAGE_SIZE: u32 = 10;

/// State for the medicines page, its editor, details and image-search modals
#[derive(Debug, Default)]
pub struct MedicinesState {
    /// Fetched page of the catalog
    pub medicines: Vec<Medicine>,
    /// Total records server-side
    pub total: u64,
    /// 1-based current page
    pub page: u32,
    /// Total page count reported by the backend
    pub total_pages: u32,
    /// Client-side search over the fetched page
    pub filter: String,
    /// Server-side sort column
    pub sort_by: Option<String>,
    /// Server-side sort direction
    pub sort_order: Option<SortOrder>,
    /// List fetch in flight
    pub loading: bool,

    /// Editor modal open
    pub editor_open: bool,
    /// Record being edited, `None` when creating
    pub editing_id: Option<String>,
    /// Editor form fields
    pub draft: MedicineDraft,
    /// Create/update request in flight
    pub saving: bool,

    /// Details modal content
    pub details: Option<Medicine>,
    /// Carousel position in the details modal
    pub image_index: usize,

    /// Row awaiting delete confirmation
    pub confirm_delete: Option<Medicine>,

    /// Image-search modal open
    pub search_open: bool,
    /// Typed path of the image to search with
    pub search_path: String,
    /// Search request in flight
    pub searching: bool,
    /// Matches from the last completed search
    pub search_matches: Vec<Medicine>,
    /// Whether a search has completed since the modal opened
    pub search_done: bool,
    /// Whether the last search errored (hides the empty-result text)
    pub search_failed: bool,
}

impl MedicinesState {
    /// Query for the current page, size and sort
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.page.max(1)),
            limit: Some(PAGE_SIZE),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            ..Default::default()
        }
    }

    /// A fetched page arrived
    pub fn update_page(&mut self, page: Paginated<Medicine>) {
        self.medicines = page.data;
        self.total = page.total;
        self.page = page.page.max(1);
        self.total_pages = page.total_pages;
        self.loading = false;
    }

    /// Set the search text; returns true when the page moved and a re-fetch
    /// is needed
    pub fn set_filter(&mut self, filter: String) -> bool {
        let page_moved = self.page > 1 && filter != self.filter;
        self.filter = filter;
        if page_moved {
            self.page = 1;
        }
        page_moved
    }

    /// Rows matching the search text, name or brand, either language
    pub fn filtered(&self) -> Vec<&Medicine> {
        if self.filter.trim().is_empty() {
            return self.medicines.iter().collect();
        }
        let needle = self.filter.trim().to_lowercase();
        self.medicines
            .iter()
            .filter(|m| {
                let mut haystacks = vec![m.name.as_str()];
                haystacks.extend(m.name_bn.as_deref());
                haystacks.extend(m.brand.as_deref());
                haystacks.extend(m.brand_bn.as_deref());
                haystacks
                    .iter()
                    .any(|h| h.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Move to a page, clamped to the known range; returns true when it
    /// actually moved
    pub fn set_page(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages.max(1));
        if clamped == self.page {
            return false;
        }
        self.page = clamped;
        true
    }

    /// Sort by a column, flipping direction on repeat clicks
    pub fn toggle_sort(&mut self, column: &str) {
        match (&self.sort_by, self.sort_order) {
            (Some(current), Some(order)) if current == column => {
                self.sort_order = Some(order.toggled());
            }
            _ => {
                self.sort_by = Some(column.to_string());
                self.sort_order = Some(SortOrder::Asc);
            }
        }
        self.page = 1;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Open the editor empty for a new record
    pub fn open_create(&mut self) {
        self.editor_open = true;
        self.editing_id = None;
        self.draft = MedicineDraft::default();
        self.saving = false;
    }

    /// Open the editor pre-filled from a row
    pub fn open_edit(&mut self, medicine: &Medicine) {
        self.editor_open = true;
        self.editing_id = Some(medicine.id.clone());
        self.draft = MedicineDraft::from_medicine(medicine);
        self.saving = false;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.saving = false;
    }

    pub fn save_started(&mut self) {
        self.saving = true;
    }

    /// Save finished; the editor closes only on success
    pub fn save_finished(&mut self, saved: bool) {
        self.saving = false;
        if saved {
            self.editor_open = false;
            self.editing_id = None;
            self.draft = MedicineDraft::default();
        }
    }

    /// Show the details modal for a row
    pub fn open_details(&mut self, medicine: Medicine) {
        self.image_index = 0;
        self.details = Some(medicine);
    }

    /// Fresh copy of the open record arrived (after an image delete)
    pub fn details_loaded(&mut self, medicine: Medicine) {
        if let Some(current) = &self.details {
            if current.id == medicine.id {
                let images = medicine.images.len();
                if images == 0 {
                    self.image_index = 0;
                } else if self.image_index >= images {
                    self.image_index = images - 1;
                }
                self.details = Some(medicine);
            }
        }
    }

    pub fn close_details(&mut self) {
        self.details = None;
        self.image_index = 0;
    }

    /// Step the carousel forward, wrapping
    pub fn next_image(&mut self) {
        if let Some(details) = &self.details {
            let count = details.images.len();
            if count > 0 {
                self.image_index = (self.image_index + 1) % count;
            }
        }
    }

    /// Step the carousel back, wrapping
    pub fn prev_image(&mut self) {
        if let Some(details) = &self.details {
            let count = details.images.len();
            if count > 0 {
                self.image_index = (self.image_index + count - 1) % count;
            }
        }
    }

    pub fn request_delete(&mut self, medicine: Medicine) {
        self.confirm_delete = Some(medicine);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Open the image-search modal with clean state
    pub fn open_search(&mut self) {
        self.search_open = true;
        self.search_path.clear();
        self.search_matches.clear();
        self.search_done = false;
        self.search_failed = false;
        self.searching = false;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    pub fn set_search_path(&mut self, path: String) {
        self.search_path = path;
    }

    pub fn search_started(&mut self) {
        self.searching = true;
        self.search_done = false;
        self.search_failed = false;
    }

    pub fn search_completed(&mut self, matches: Vec<Medicine>, failed: bool) {
        self.search_matches = matches;
        self.searching = false;
        self.search_done = true;
        self.search_failed = failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medicine(id: &str, name: &str, brand: Option<&str>) -> Medicine {
        Medicine {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.map(|b| b.to_string()),
            ..Default::default()
        }
    }

    fn loaded_state() -> MedicinesState {
        let mut state = MedicinesState::default();
        state.update_page(Paginated {
            data: vec![
                medicine("m1", "Napa", Some("Beximco")),
                medicine("m2", "Seclo", Some("Square")),
                medicine("m3", "Ace", Some("Square")),
            ],
            total: 23,
            page: 1,
            limit: PAGE_SIZE,
            total_pages: 3,
        });
        state
    }

    #[test]
    fn test_update_page_fills_counters() {
        let state = loaded_state();
        assert_eq!(state.medicines.len(), 3);
        assert_eq!(state.total, 23);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);
    }

    #[test]
    fn test_filter_matches_name_or_brand() {
        let mut state = loaded_state();
        state.set_filter("square".to_string());
        let names: Vec<_> = state.filtered().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["Seclo", "Ace"]);

        state.set_filter("nap".to_string());
        assert_eq!(state.filtered().len(), 1);

        state.set_filter(String::new());
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_filter_matches_bangla_name() {
        let mut state = MedicinesState::default();
        let mut m = medicine("m1", "Napa", None);
        m.name_bn = Some("নাপা".to_string());
        state.update_page(Paginated {
            data: vec![m, medicine("m2", "Seclo", None)],
            total: 2,
            page: 1,
            limit: PAGE_SIZE,
            total_pages: 1,
        });
        state.set_filter("নাপা".to_string());
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = loaded_state();
        state.set_page(3);
        assert!(state.set_filter("napa".to_string()));
        assert_eq!(state.page, 1);
        // Same filter again does not move the page.
        assert!(!state.set_filter("napa".to_string()));
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = loaded_state();
        assert!(state.set_page(2));
        assert_eq!(state.page, 2);
        assert!(state.set_page(99));
        assert_eq!(state.page, 3);
        assert!(!state.set_page(3));
        state.set_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut state = loaded_state();
        state.toggle_sort("name");
        assert_eq!(state.sort_by.as_deref(), Some("name"));
        assert_eq!(state.sort_order, Some(SortOrder::Asc));

        state.toggle_sort("name");
        assert_eq!(state.sort_order, Some(SortOrder::Desc));

        state.toggle_sort("createdAt");
        assert_eq!(state.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(state.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_query_carries_page_and_sort() {
        let mut state = loaded_state();
        state.set_page(2);
        state.sort_by = Some("name".to_string());
        state.sort_order = Some(SortOrder::Desc);
        let pairs = state.query().query_pairs();
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("limit", "10".to_string())));
        assert!(pairs.contains(&("sortOrder", "DESC".to_string())));
    }

    #[test]
    fn test_editor_lifecycle() {
        let mut state = loaded_state();
        let row = state.medicines[0].clone();
        state.open_edit(&row);
        assert!(state.editor_open);
        assert_eq!(state.editing_id.as_deref(), Some("m1"));
        assert_eq!(state.draft.name, "Napa");

        state.save_started();
        assert!(state.saving);

        // A failed save keeps the form open for another try.
        state.save_finished(false);
        assert!(state.editor_open);

        state.save_finished(true);
        assert!(!state.editor_open);
        assert!(state.editing_id.is_none());
    }

    #[test]
    fn test_carousel_wraps() {
        let mut state = MedicinesState::default();
        let mut m = medicine("m1", "Napa", None);
        m.images = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
        state.open_details(m);

        state.next_image();
        state.next_image();
        assert_eq!(state.image_index, 2);
        state.next_image();
        assert_eq!(state.image_index, 0);
        state.prev_image();
        assert_eq!(state.image_index, 2);
    }

    #[test]
    fn test_details_reload_clamps_carousel() {
        let mut state = MedicinesState::default();
        let mut m = medicine("m1", "Napa", None);
        m.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        state.open_details(m.clone());
        state.next_image();
        assert_eq!(state.image_index, 1);

        // One image was deleted server-side.
        m.images.pop();
        state.details_loaded(m);
        assert_eq!(state.image_index, 0);
    }

    #[test]
    fn test_search_lifecycle() {
        let mut state = MedicinesState::default();
        state.open_search();
        assert!(state.search_open);
        assert!(!state.search_done);

        state.set_search_path("/tmp/strip.jpg".to_string());
        state.search_started();
        assert!(state.searching);

        state.search_completed(vec![medicine("m9", "Napa Extra", None)], false);
        assert!(!state.searching);
        assert!(state.search_done);
        assert_eq!(state.search_matches.len(), 1);

        // Reopening starts clean.
        state.close_search();
        state.open_search();
        assert!(state.search_matches.is_empty());
    }
}
