//! Dashboard Controller
//!
//! Kicks off the stats fetch for the overview cards.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::services::service_hub::{ServiceCommand, ServiceHub};

/// Dashboard page controller
pub struct DashboardController {
    entities: AppEntities,
}

impl DashboardController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the overview counters
    pub fn refresh(&self, cx: &mut App) {
        self.entities.dashboard.update(cx, |dashboard, cx| {
            dashboard.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchStats);
        }
    }

    /// Fetch once on first open
    pub fn refresh_if_stale(&self, cx: &mut App) {
        let loaded = {
            let dashboard = self.entities.dashboard.read(cx);
            dashboard.loaded || dashboard.loading
        };
        if !loaded {
            self.refresh(cx);
        }
    }
}
