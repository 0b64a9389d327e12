//! Login Controller
//!
//! Validates credentials and hands them to the service hub.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::session::LoginRequest;
use crate::services::service_hub::{ServiceCommand, ServiceHub};

/// Login page controller
pub struct LoginController {
    entities: AppEntities,
}

impl LoginController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Validate the form and send the login request
    pub fn submit(&self, email: String, password: String, remember: bool, cx: &mut App) {
        let request = LoginRequest::new(email, password);

        // Empty fields stay an inline form error, no request goes out.
        if let Err(err) = request.validate() {
            self.entities.session.update(cx, |session, cx| {
                session.login_failed(err.toast_message());
                cx.notify();
            });
            return;
        }

        self.entities.session.update(cx, |session, cx| {
            session.login_started();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::Login { request, remember });
        }
    }
}
