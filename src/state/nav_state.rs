//! NavState - Sidebar Navigation State

use crate::app::navigation::ActivePage;

/// State for sidebar navigation
#[derive(Debug, Default)]
pub struct NavState {
    /// Currently active page
    pub active_page: ActivePage,
}

impl NavState {
    /// Set the active page (from sidebar click or keyboard shortcut)
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let state = NavState::default();
        assert_eq!(state.active_page, ActivePage::Dashboard);
    }

    #[test]
    fn test_switch_page() {
        let mut state = NavState::default();
        state.set_active_page(ActivePage::Medicines);
        assert_eq!(state.active_page, ActivePage::Medicines);
    }
}
