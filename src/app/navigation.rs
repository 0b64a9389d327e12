//! Navigation - Active Page

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Dashboard with catalog statistics
    #[default]
    Dashboard,
    /// Medicines page - catalog list and editors
    Medicines,
    /// Users page - account management
    Users,
    /// Profile page - signed-in admin's own account
    Profile,
}

impl ActivePage {
    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "nav-dashboard",
            ActivePage::Medicines => "nav-medicines",
            ActivePage::Users => "nav-users",
            ActivePage::Profile => "nav-profile",
        }
    }

    /// Get all available pages for the sidebar
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Dashboard,
            ActivePage::Medicines,
            ActivePage::Users,
            ActivePage::Profile,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_dashboard() {
        assert_eq!(ActivePage::default(), ActivePage::Dashboard);
    }

    #[test]
    fn test_all_pages_have_distinct_title_keys() {
        let keys: Vec<_> = ActivePage::all().iter().map(|p| p.title_key()).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
