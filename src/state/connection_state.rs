//! ConnectionState - Reachability of External Collaborators

use std::collections::HashMap;

/// Connection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionTarget {
    /// The REST backend
    Api,
    /// The image-search ML service behind it
    ImageSearch,
}

impl ConnectionTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionTarget::Api => "API",
            ConnectionTarget::ImageSearch => "Image Search",
        }
    }
}

/// Status of a single target
#[derive(Debug, Clone, Default)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub detail: Option<String>,
}

/// State for all external connections
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    statuses: HashMap<ConnectionTarget, ConnectionStatus>,
}

impl ConnectionState {
    /// Set status for a connection target
    pub fn set_status(&mut self, target: ConnectionTarget, connected: bool, detail: Option<String>) {
        self.statuses
            .insert(target, ConnectionStatus { connected, detail });
    }

    /// Get status for a connection target
    pub fn get_status(&self, target: ConnectionTarget) -> Option<&ConnectionStatus> {
        self.statuses.get(&target)
    }

    /// Check if a target is connected; unknown counts as down
    pub fn is_connected(&self, target: ConnectionTarget) -> bool {
        self.statuses
            .get(&target)
            .map(|s| s.connected)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_target_is_down() {
        let state = ConnectionState::default();
        assert!(!state.is_connected(ConnectionTarget::Api));
    }

    #[test]
    fn test_status_updates_replace() {
        let mut state = ConnectionState::default();
        state.set_status(ConnectionTarget::Api, true, None);
        assert!(state.is_connected(ConnectionTarget::Api));

        state.set_status(
            ConnectionTarget::Api,
            false,
            Some("connection refused".to_string()),
        );
        assert!(!state.is_connected(ConnectionTarget::Api));
        let status = state.get_status(ConnectionTarget::Api).unwrap();
        assert_eq!(status.detail.as_deref(), Some("connection refused"));
    }
}
