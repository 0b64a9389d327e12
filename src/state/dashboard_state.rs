//! DashboardState - Overview Counters

/// State for the dashboard stat cards
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Catalog size
    pub total_medicines: u64,
    /// Registered accounts
    pub total_users: u64,
    /// Accounts with the regular `user` role
    pub active_users: u64,
    /// Stats fetch in flight
    pub loading: bool,
    /// Whether stats have been fetched at least once
    pub loaded: bool,
}

impl DashboardState {
    /// Counters arrived
    pub fn update_stats(&mut self, total_medicines: u64, total_users: u64, active_users: u64) {
        self.total_medicines = total_medicines;
        self.total_users = total_users;
        self.active_users = active_users;
        self.loading = false;
        self.loaded = true;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_stats() {
        let mut state = DashboardState::default();
        state.set_loading(true);
        state.update_stats(128, 42, 39);
        assert_eq!(state.total_medicines, 128);
        assert_eq!(state.total_users, 42);
        assert_eq!(state.active_users, 39);
        assert!(!state.loading);
        assert!(state.loaded);
    }
}
