//! UsersState - User Management Page State

use crate::domain::query::{ListQuery, Paginated, SortOrder};
use crate::domain::user::{User, UserUpdate, ROLE_ADMIN, ROLE_USER};
use crate::state::medicines_state::PAGE_SIZE;
use crate::utils::format::to_ymd;

/// Role counts for the stats cards, computed from the fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleStats {
    pub total: u64,
    pub regular: usize,
    pub admins: usize,
}

/// State for the users page and its editor modal
#[derive(Debug, Default)]
pub struct UsersState {
    /// Fetched page of accounts
    pub users: Vec<User>,
    /// Total records server-side
    pub total: u64,
    /// 1-based current page
    pub page: u32,
    /// Total page count reported by the backend
    pub total_pages: u32,
    /// Client-side search over the fetched page
    pub filter: String,
    /// Server-side role filter
    pub role_filter: Option<String>,
    /// Server-side sort column
    pub sort_by: Option<String>,
    /// Server-side sort direction
    pub sort_order: Option<SortOrder>,
    /// List fetch in flight
    pub loading: bool,

    /// Account open in the editor modal
    pub editing: Option<User>,
    /// Editor form fields
    pub draft: UserDraft,
    /// Update request in flight
    pub saving: bool,

    /// Row awaiting delete confirmation
    pub confirm_delete: Option<User>,
}

/// Editable fields in the user editor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
    pub location: String,
    pub bio: String,
    pub role: String,
}

impl UserDraft {
    /// Pre-fill from a row, normalizing the date of birth
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            gender: user.gender.clone().unwrap_or_default(),
            date_of_birth: user
                .date_of_birth
                .as_deref()
                .and_then(to_ymd)
                .unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            role: user.role.clone(),
        }
    }

    /// JSON body for the update call, blanks omitted
    pub fn update_payload(&self) -> UserUpdate {
        let field = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        UserUpdate {
            name: field(&self.name),
            email: field(&self.email),
            phone: field(&self.phone),
            gender: field(&self.gender),
            date_of_birth: to_ymd(&self.date_of_birth),
            location: field(&self.location),
            bio: field(&self.bio),
        }
    }
}

impl UsersState {
    /// Query for the current page, size, sort and role filter
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.page.max(1)),
            limit: Some(PAGE_SIZE),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            role: self.role_filter.clone(),
            ..Default::default()
        }
    }

    /// A fetched page arrived
    pub fn update_page(&mut self, page: Paginated<User>) {
        self.users = page.data;
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

    /// Set the role filter; always re-fetched server-side from page 1
    pub fn set_role_filter(&mut self, role: Option<String>) {
        self.role_filter = role;
        self.page = 1;
    }

    /// Rows matching the search text, name or email
    pub fn filtered(&self) -> Vec<&User> {
        if self.filter.trim().is_empty() {
            return self.users.iter().collect();
        }
        let needle = self.filter.trim().to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
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

    /// Counters for the stats cards
    pub fn role_stats(&self) -> RoleStats {
        RoleStats {
            total: self.total,
            regular: self.users.iter().filter(|u| u.role == ROLE_USER).count(),
            admins: self.users.iter().filter(|u| u.role == ROLE_ADMIN).count(),
        }
    }

    /// Open the editor pre-filled from a row
    pub fn open_edit(&mut self, user: &User) {
        self.draft = UserDraft::from_user(user);
        self.editing = Some(user.clone());
        self.saving = false;
    }

    /// A fresh copy of the account arrived while its editor is open.
    ///
    /// The list row can be stale, so the form re-fills from the server's
    /// copy unless a save is already in flight.
    pub fn details_loaded(&mut self, user: &User) {
        let open_for = self.editing.as_ref().map(|u| u.id.as_str());
        if open_for != Some(user.id.as_str()) || self.saving {
            return;
        }
        self.draft = UserDraft::from_user(user);
        self.editing = Some(user.clone());
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
        self.saving = false;
    }

    pub fn save_started(&mut self) {
        self.saving = true;
    }

    /// Save finished; the editor closes only on success
    pub fn save_finished(&mut self, saved: bool) {
        self.saving = false;
        if saved {
            self.editing = None;
        }
    }

    pub fn request_delete(&mut self, user: User) {
        self.confirm_delete = Some(user);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, email: &str, role: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            ..Default::default()
        }
    }

    fn loaded_state() -> UsersState {
        let mut state = UsersState::default();
        state.update_page(Paginated {
            data: vec![
                user("u1", "Farhana Akter", "farhana@example.com", ROLE_ADMIN),
                user("u2", "Rahim Uddin", "rahim@example.com", ROLE_USER),
                user("u3", "Karim Hossain", "karim@example.com", ROLE_USER),
            ],
            total: 42,
            page: 1,
            limit: PAGE_SIZE,
            total_pages: 5,
        });
        state
    }

    #[test]
    fn test_role_stats() {
        let state = loaded_state();
        let stats = state.role_stats();
        assert_eq!(stats.total, 42);
        assert_eq!(stats.regular, 2);
        assert_eq!(stats.admins, 1);
    }

    #[test]
    fn test_filter_matches_name_or_email() {
        let mut state = loaded_state();
        state.set_filter("rahim".to_string());
        assert_eq!(state.filtered().len(), 1);

        state.set_filter("example.com".to_string());
        assert_eq!(state.filtered().len(), 3);

        state.set_filter("nobody".to_string());
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_role_filter_resets_page_and_reaches_query() {
        let mut state = loaded_state();
        state.set_page(3);
        state.set_role_filter(Some(ROLE_USER.to_string()));
        assert_eq!(state.page, 1);
        let pairs = state.query().query_pairs();
        assert!(pairs.contains(&("role", "user".to_string())));
    }

    #[test]
    fn test_draft_from_user_normalizes_dob() {
        let mut u = user("u1", "Farhana", "farhana@example.com", ROLE_USER);
        u.date_of_birth = Some("1992-07-14T00:00:00.000Z".to_string());
        let draft = UserDraft::from_user(&u);
        assert_eq!(draft.date_of_birth, "1992-07-14");
    }

    #[test]
    fn test_update_payload_skips_blanks() {
        let draft = UserDraft {
            name: "Farhana Akter".to_string(),
            email: "farhana@example.com".to_string(),
            date_of_birth: "1992-07-14".to_string(),
            ..Default::default()
        };
        let payload = draft.update_payload();
        assert_eq!(payload.name.as_deref(), Some("Farhana Akter"));
        assert_eq!(payload.date_of_birth.as_deref(), Some("1992-07-14"));
        assert!(payload.phone.is_none());
        assert!(payload.bio.is_none());
    }

    #[test]
    fn test_update_payload_drops_invalid_dob() {
        let draft = UserDraft {
            name: "x".to_string(),
            email: "x@example.com".to_string(),
            date_of_birth: "next tuesday".to_string(),
            ..Default::default()
        };
        assert!(draft.update_payload().date_of_birth.is_none());
    }

    #[test]
    fn test_editor_lifecycle() {
        let mut state = loaded_state();
        let row = state.users[1].clone();
        state.open_edit(&row);
        assert!(state.editing.is_some());
        assert_eq!(state.draft.email, "rahim@example.com");
        assert_eq!(state.draft.role, ROLE_USER);

        state.save_started();
        state.save_finished(false);
        assert!(state.editing.is_some());

        state.save_finished(true);
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_details_refresh_refills_open_editor() {
        let mut state = loaded_state();
        let row = state.users[1].clone();
        state.open_edit(&row);

        let mut fresh = row.clone();
        fresh.bio = Some("Pharmacist in Dhaka".to_string());
        state.details_loaded(&fresh);
        assert_eq!(state.draft.bio, "Pharmacist in Dhaka");

        // A refresh for some other account is ignored.
        let other = state.users[2].clone();
        state.details_loaded(&other);
        assert_eq!(state.draft.email, "rahim@example.com");

        // So is one that lands mid-save.
        state.save_started();
        let mut late = row.clone();
        late.bio = Some("changed again".to_string());
        state.details_loaded(&late);
        assert_eq!(state.draft.bio, "Pharmacist in Dhaka");
    }
}
