//! Users Controller
//!
//! Drives account fetches, edits, role changes and deletes.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::user::User;
use crate::services::service_hub::{ServiceCommand, ServiceHub};

/// Users page controller
pub struct UsersController {
    entities: AppEntities,
}

impl UsersController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the current page of accounts
    pub fn refresh(&self, cx: &mut App) {
        let query = self.entities.users.update(cx, |users, cx| {
            users.set_loading(true);
            cx.notify();
            users.query()
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchUsers { query });
        }
    }

    /// Move to a page and re-fetch when it changed
    pub fn set_page(&self, page: u32, cx: &mut App) {
        let moved = self.entities.users.update(cx, |users, cx| {
            let moved = users.set_page(page);
            cx.notify();
            moved
        });
        if moved {
            self.refresh(cx);
        }
    }

    /// Sort by a column and re-fetch
    pub fn toggle_sort(&self, column: &str, cx: &mut App) {
        self.entities.users.update(cx, |users, cx| {
            users.toggle_sort(column);
            cx.notify();
        });
        self.refresh(cx);
    }

    /// Update the client-side search text; a page reset re-fetches
    pub fn set_filter(&self, filter: String, cx: &mut App) {
        let page_moved = self.entities.users.update(cx, |users, cx| {
            let moved = users.set_filter(filter);
            cx.notify();
            moved
        });
        if page_moved {
            self.refresh(cx);
        }
    }

    /// Filter by role server-side, from page 1
    pub fn set_role_filter(&self, role: Option<String>, cx: &mut App) {
        self.entities.users.update(cx, |users, cx| {
            users.set_role_filter(role);
            cx.notify();
        });
        self.refresh(cx);
    }

    /// Open the editor and ask for a fresh copy of the account
    pub fn open_edit(&self, user: &User, cx: &mut App) {
        self.entities.users.update(cx, |users, cx| {
            users.open_edit(user);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchUserDetails {
                id: user.id.clone(),
            });
        }
    }

    /// Send the editor draft; the role rides along only when it changed
    pub fn save(&self, cx: &mut App) {
        let payload = self.entities.users.update(cx, |users, cx| {
            users.editing.clone().map(|editing| {
                users.save_started();
                cx.notify();
                (editing, users.draft.clone(), users.query())
            })
        });
        let Some((editing, draft, refetch)) = payload else {
            return;
        };

        let role = (draft.role != editing.role).then(|| draft.role.clone());
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::UpdateUser {
                id: editing.id,
                update: draft.update_payload(),
                role,
                refetch,
            });
        }
    }

    /// Delete a confirmed account
    pub fn delete(&self, user: &User, cx: &mut App) {
        let refetch = self.entities.users.update(cx, |users, cx| {
            users.cancel_delete();
            cx.notify();
            users.query()
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::DeleteUser {
                id: user.id.clone(),
                refetch,
            });
        }
    }
}
