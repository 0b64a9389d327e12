//! ServiceHub - Background API Worker
//!
//! Owns the HTTP client on a worker thread and turns UI commands into
//! backend calls, publishing results back as `AppEvent`s over the shared
//! flume channel. Commands run as independent tasks, so a slow upload
//! never blocks a page fetch queued behind it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use gpui::Global;
use parking_lot::RwLock;

use crate::domain::medicine::MedicineDraft;
use crate::domain::query::ListQuery;
use crate::domain::session::{LoginRequest, Session};
use crate::domain::settings::AppSettings;
use crate::domain::user::{ROLE_USER, UserUpdate};
use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;
use crate::services::api_client::ApiClient;
use crate::services::runtime;
use crate::state::connection_state::ConnectionTarget;
use crate::utils::config_store;

/// Commands the UI can send to the worker
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Ask the backend whether the cookie jar still holds a live admin session
    CheckSession,
    /// Log in; `remember` persists the form values for the next launch
    Login { request: LoginRequest, remember: bool },
    /// Log out and drop the session cookie
    Logout,
    /// Save the signed-in profile's editable fields
    UpdateProfile { update: UserUpdate },
    /// Upload a new avatar
    UpdateProfileImage { path: PathBuf },
    /// Remove the avatar
    RemoveProfileImage,
    /// Upload a new cover photo
    UpdateProfileCover { path: PathBuf },
    /// Remove the cover photo
    RemoveProfileCover,
    /// Fetch a catalog page
    FetchMedicines { query: ListQuery },
    /// Fetch one medicine for the details view
    FetchMedicineDetails { id: String },
    /// Create a medicine, then reload the list with `refetch`
    CreateMedicine {
        draft: MedicineDraft,
        refetch: ListQuery,
    },
    /// Update a medicine, then reload the list with `refetch`
    UpdateMedicine {
        id: String,
        draft: MedicineDraft,
        refetch: ListQuery,
    },
    /// Delete a medicine, then reload the list with `refetch`
    DeleteMedicine { id: String, refetch: ListQuery },
    /// Delete one stored image, then refresh the details view
    DeleteMedicineImage { id: String, image_name: String },
    /// Find medicines that look like the photo at `path`
    SearchByImage { path: PathBuf },
    /// Fetch a page of accounts
    FetchUsers { query: ListQuery },
    /// Re-fetch one account to refresh an open editor
    FetchUserDetails { id: String },
    /// Update an account, optionally changing its role, then reload with `refetch`
    UpdateUser {
        id: String,
        update: UserUpdate,
        role: Option<String>,
        refetch: ListQuery,
    },
    /// Delete an account, then reload the list with `refetch`
    DeleteUser { id: String, refetch: ListQuery },
    /// Fetch the dashboard counters
    FetchStats,
}

/// Last reported reachability per target, so `ConnectionChanged` fires only
/// on transitions
type Reachability = Arc<RwLock<HashMap<ConnectionTarget, bool>>>;

/// ServiceHub bridges the UI and the background API worker
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the worker
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its worker thread
    pub fn new(event_tx: flume::Sender<AppEvent>, settings: &AppSettings) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        let base_url = settings.effective_base_url();
        let timeout = Duration::from_secs(settings.api.timeout_secs.max(1));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
        };

        Self::start_worker(command_rx, event_tx, base_url.clone(), timeout);

        // Send initial log
        let _ = hub
            .event_tx
            .send(AppEvent::info(format!("Service hub started for {base_url}")));

        hub
    }

    /// Start the worker thread that owns the HTTP client
    fn start_worker(
        command_rx: flume::Receiver<ServiceCommand>,
        event_tx: flume::Sender<AppEvent>,
        base_url: String,
        timeout: Duration,
    ) {
        std::thread::spawn(move || {
            let client = match ApiClient::new(base_url, timeout) {
                Ok(client) => client,
                Err(err) => {
                    let _ = event_tx.send(AppEvent::error(format!(
                        "Failed to build HTTP client: {err}"
                    )));
                    return;
                }
            };
            let reachability: Reachability = Arc::new(RwLock::new(HashMap::new()));

            runtime::block_on(async move {
                while let Ok(command) = command_rx.recv_async().await {
                    let worker = Worker {
                        client: client.clone(),
                        event_tx: event_tx.clone(),
                        reachability: reachability.clone(),
                    };
                    runtime::spawn_in_tokio(async move {
                        worker.handle(command).await;
                    });
                }
            });
        });
    }

    /// Queue a command for the worker
    pub fn send(&self, command: ServiceCommand) {
        let _ = self.command_tx.send(command);
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Whether the backend was reached at all. An API-level rejection still
/// proves the server answered.
fn reachable<T>(result: &Result<T>) -> bool {
    !matches!(result, Err(Error::Http { .. }))
}

/// One in-flight command execution
struct Worker {
    client: ApiClient,
    event_tx: flume::Sender<AppEvent>,
    reachability: Reachability,
}

impl Worker {
    fn emit(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Record a target's reachability, emitting `ConnectionChanged` only
    /// when it flips
    fn note_status(&self, target: ConnectionTarget, connected: bool) {
        {
            let mut map = self.reachability.write();
            if map.get(&target).copied() == Some(connected) {
                return;
            }
            map.insert(target, connected);
        }
        if connected {
            self.emit(AppEvent::info(format!("{} connection is up", target.label())));
        } else {
            self.emit(AppEvent::warn(format!("{} connection is down", target.label())));
        }
        let detail = connected.then(|| self.client.base_url().to_string());
        self.emit(AppEvent::ConnectionChanged {
            target,
            connected,
            detail,
        });
    }

    fn note_api_outcome<T>(&self, result: &Result<T>) {
        self.note_status(ConnectionTarget::Api, reachable(result));
    }

    async fn handle(&self, command: ServiceCommand) {
        match command {
            ServiceCommand::CheckSession => self.check_session().await,
            ServiceCommand::Login { request, remember } => self.login(request, remember).await,
            ServiceCommand::Logout => self.logout().await,
            ServiceCommand::UpdateProfile { update } => self.update_profile(update).await,
            ServiceCommand::UpdateProfileImage { path } => {
                let result = self.client.update_profile_image(&path).await;
                self.finish_profile_upload(result, "Profile photo updated")
                    .await;
            }
            ServiceCommand::RemoveProfileImage => {
                let result = self.client.remove_profile_image().await;
                self.finish_profile_upload(result, "Profile photo removed")
                    .await;
            }
            ServiceCommand::UpdateProfileCover { path } => {
                let result = self.client.update_profile_cover(&path).await;
                self.finish_profile_upload(result, "Cover photo updated")
                    .await;
            }
            ServiceCommand::RemoveProfileCover => {
                let result = self.client.remove_profile_cover().await;
                self.finish_profile_upload(result, "Cover photo removed")
                    .await;
            }
            ServiceCommand::FetchMedicines { query } => self.fetch_medicines(query).await,
            ServiceCommand::FetchMedicineDetails { id } => self.fetch_medicine_details(&id).await,
            ServiceCommand::CreateMedicine { draft, refetch } => {
                let name = draft.name.clone();
                let result = self.client.create_medicine(&draft).await;
                self.finish_medicine_save(
                    result,
                    refetch,
                    format!("Created medicine {name}"),
                    "Medicine created successfully",
                )
                .await;
            }
            ServiceCommand::UpdateMedicine { id, draft, refetch } => {
                let result = self.client.update_medicine(&id, &draft).await;
                self.finish_medicine_save(
                    result,
                    refetch,
                    format!("Updated medicine {id}"),
                    "Medicine updated successfully",
                )
                .await;
            }
            ServiceCommand::DeleteMedicine { id, refetch } => {
                self.delete_medicine(&id, refetch).await
            }
            ServiceCommand::DeleteMedicineImage { id, image_name } => {
                self.delete_medicine_image(&id, &image_name).await
            }
            ServiceCommand::SearchByImage { path } => self.search_by_image(&path).await,
            ServiceCommand::FetchUsers { query } => self.fetch_users(query).await,
            ServiceCommand::FetchUserDetails { id } => self.fetch_user_details(&id).await,
            ServiceCommand::UpdateUser {
                id,
                update,
                role,
                refetch,
            } => self.update_user(&id, update, role, refetch).await,
            ServiceCommand::DeleteUser { id, refetch } => self.delete_user(&id, refetch).await,
            ServiceCommand::FetchStats => self.fetch_stats().await,
        }
    }

    // ==================== Session ====================

    async fn check_session(&self) {
        self.emit(AppEvent::info("Checking stored session"));
        let result = self.client.fetch_profile().await;
        self.note_api_outcome(&result);
        match result.and_then(Session::for_admin) {
            Ok(session) => {
                self.emit(AppEvent::info(format!(
                    "Signed in as {}",
                    session.profile.email
                )));
                self.emit(AppEvent::SessionResolved {
                    user: Some(session.profile),
                });
            }
            Err(err) => {
                self.emit(AppEvent::debug(format!("No usable session: {err}")));
                self.emit(AppEvent::SessionResolved { user: None });
            }
        }
    }

    async fn login(&self, request: LoginRequest, remember: bool) {
        self.emit(AppEvent::info(format!("Logging in as {}", request.email)));
        let result = self.client.login(&request).await;
        self.note_api_outcome(&result);
        match result.and_then(Session::for_admin) {
            Ok(session) => {
                self.remember_login(&request, remember);
                self.emit(AppEvent::info(format!(
                    "Login successful for {}",
                    session.profile.email
                )));
                self.emit(AppEvent::LoginSucceeded {
                    user: session.profile,
                });
            }
            Err(err) => {
                self.emit(AppEvent::warn(format!("Login failed: {err}")));
                self.emit(AppEvent::LoginFailed {
                    message: err.toast_message(),
                });
            }
        }
    }

    /// Persist or clear the remembered form values. Runs on the worker
    /// thread, keeping the disk write off the UI thread.
    fn remember_login(&self, request: &LoginRequest, remember: bool) {
        let result = config_store::load_settings().and_then(|mut settings| {
            settings.remember.enabled = remember;
            if remember {
                settings.remember.email = request.email.clone();
                settings.remember.password = Some(request.password.clone());
            } else {
                settings.remember.email = String::new();
                settings.remember.password = None;
            }
            config_store::save_settings(&settings)
        });
        if let Err(err) = result {
            self.emit(AppEvent::warn(format!(
                "Could not save remembered login: {err}"
            )));
        }
    }

    async fn logout(&self) {
        let result = self.client.logout().await;
        self.note_api_outcome(&result);
        if let Err(err) = result {
            self.emit(AppEvent::warn(format!("Logout request failed: {err}")));
        }
        // The local session ends even when the request failed.
        self.emit(AppEvent::info("Logged out"));
        self.emit(AppEvent::LoggedOut);
    }

    // ==================== Profile ====================

    async fn update_profile(&self, update: UserUpdate) {
        let result = self.client.update_profile(&update).await;
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info("Profile updated"));
                self.emit(AppEvent::success_toast("Profile updated successfully"));
                self.emit(AppEvent::ProfileSaveFinished);
                self.refresh_profile().await;
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Profile update failed: {err}")));
                self.emit(AppEvent::error_toast(err.toast_message()));
                self.emit(AppEvent::ProfileSaveFinished);
            }
        }
    }

    async fn finish_profile_upload(&self, result: Result<()>, success: &str) {
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info(success));
                self.emit(AppEvent::success_toast(success));
                self.emit(AppEvent::ProfileUploadFinished);
                self.refresh_profile().await;
            }
            Err(err) => {
                self.emit(AppEvent::error(format!(
                    "Profile image change failed: {err}"
                )));
                self.emit(AppEvent::error_toast(err.toast_message()));
                self.emit(AppEvent::ProfileUploadFinished);
            }
        }
    }

    /// Re-fetch the signed-in profile after a mutation so the header and
    /// profile page show the server's copy
    async fn refresh_profile(&self) {
        match self.client.fetch_profile().await {
            Ok(user) => self.emit(AppEvent::ProfileUpdated { user }),
            Err(err) => self.emit(AppEvent::warn(format!("Profile refresh failed: {err}"))),
        }
    }

    // ==================== Medicines ====================

    async fn fetch_medicines(&self, query: ListQuery) {
        let result = self.client.fetch_medicines(&query).await;
        self.note_api_outcome(&result);
        match result {
            Ok(page) => {
                self.emit(AppEvent::debug(format!(
                    "Loaded {} of {} medicines",
                    page.data.len(),
                    page.total
                )));
                self.emit(AppEvent::MedicinesLoaded { page });
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Medicines fetch failed: {err}")));
                self.emit(AppEvent::error_toast("Failed to fetch medicines"));
                self.emit(AppEvent::MedicinesLoadFailed);
            }
        }
    }

    async fn fetch_medicine_details(&self, id: &str) {
        let result = self.client.fetch_medicine(id).await;
        self.note_api_outcome(&result);
        match result {
            Ok(medicine) => self.emit(AppEvent::MedicineDetailsLoaded { medicine }),
            Err(err) => {
                self.emit(AppEvent::error(format!("Medicine fetch failed: {err}")));
                self.emit(AppEvent::error_toast("Failed to fetch medicine details"));
            }
        }
    }

    async fn finish_medicine_save(
        &self,
        result: Result<()>,
        refetch: ListQuery,
        log_line: String,
        toast: &str,
    ) {
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info(log_line));
                self.emit(AppEvent::success_toast(toast));
                self.emit(AppEvent::MedicineSaveFinished { saved: true });
                self.reload_medicines(refetch).await;
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Medicine save failed: {err}")));
                self.emit(AppEvent::error_toast(err.toast_message()));
                self.emit(AppEvent::MedicineSaveFinished { saved: false });
            }
        }
    }

    async fn delete_medicine(&self, id: &str, refetch: ListQuery) {
        let result = self.client.delete_medicine(id).await;
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info(format!("Deleted medicine {id}")));
                self.emit(AppEvent::success_toast("Medicine deleted successfully"));
                self.reload_medicines(refetch).await;
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Medicine delete failed: {err}")));
                self.emit(AppEvent::error_toast(err.toast_message()));
            }
        }
    }

    async fn delete_medicine_image(&self, id: &str, image_name: &str) {
        let result = self.client.delete_medicine_image(id, image_name).await;
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info(format!(
                    "Deleted image {image_name} from medicine {id}"
                )));
                self.emit(AppEvent::success_toast("Image deleted successfully"));
                match self.client.fetch_medicine(id).await {
                    Ok(medicine) => self.emit(AppEvent::MedicineDetailsLoaded { medicine }),
                    Err(err) => {
                        self.emit(AppEvent::warn(format!("Details refresh failed: {err}")))
                    }
                }
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Image delete failed: {err}")));
                self.emit(AppEvent::error_toast(err.toast_message()));
            }
        }
    }

    async fn search_by_image(&self, path: &Path) {
        self.emit(AppEvent::info("Running image search"));
        let result = self.client.search_by_image(path).await;
        self.note_api_outcome(&result);
        // The search service sits behind the API and only counts as up when
        // a search actually succeeds.
        self.note_status(ConnectionTarget::ImageSearch, result.is_ok());
        match result {
            Ok(matches) => {
                self.emit(AppEvent::info(format!(
                    "Image search found {} match(es)",
                    matches.len()
                )));
                self.emit(AppEvent::success_toast(format!(
                    "Found {} matching medicine(s)",
                    matches.len()
                )));
                self.emit(AppEvent::SearchCompleted {
                    matches,
                    failed: false,
                });
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Image search failed: {err}")));
                let message = match &err {
                    Error::Api { message, .. } if !message.is_empty() => message.clone(),
                    _ => "Failed to search by image. Please try again.".to_string(),
                };
                self.emit(AppEvent::error_toast(message));
                self.emit(AppEvent::SearchCompleted {
                    matches: Vec::new(),
                    failed: true,
                });
            }
        }
    }

    /// Reload the catalog page after a mutation
    async fn reload_medicines(&self, query: ListQuery) {
        match self.client.fetch_medicines(&query).await {
            Ok(page) => self.emit(AppEvent::MedicinesLoaded { page }),
            Err(err) => {
                self.emit(AppEvent::error(format!("Medicines reload failed: {err}")));
                self.emit(AppEvent::MedicinesLoadFailed);
            }
        }
    }

    // ==================== Users ====================

    async fn fetch_users(&self, query: ListQuery) {
        let result = self.client.fetch_users(&query).await;
        self.note_api_outcome(&result);
        match result {
            Ok(page) => {
                self.emit(AppEvent::debug(format!(
                    "Loaded {} of {} users",
                    page.data.len(),
                    page.total
                )));
                self.emit(AppEvent::UsersLoaded { page });
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Users fetch failed: {err}")));
                self.emit(AppEvent::error_toast("Failed to fetch users"));
                self.emit(AppEvent::UsersLoadFailed);
            }
        }
    }

    async fn fetch_user_details(&self, id: &str) {
        let result = self.client.fetch_user(id).await;
        self.note_api_outcome(&result);
        match result {
            Ok(user) => self.emit(AppEvent::UserDetailsLoaded { user }),
            // The editor already holds the list row; a failed refresh only
            // costs freshness.
            Err(err) => self.emit(AppEvent::warn(format!("User refresh failed: {err}"))),
        }
    }

    async fn update_user(
        &self,
        id: &str,
        update: UserUpdate,
        role: Option<String>,
        refetch: ListQuery,
    ) {
        let result = async {
            self.client.update_user(id, &update).await?;
            if let Some(role) = &role {
                self.client.update_user_role(id, role).await?;
            }
            Ok(())
        }
        .await;
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info(format!("Updated user {id}")));
                self.emit(AppEvent::success_toast(
                    "User information has been updated successfully!",
                ));
                if let Some(role) = &role {
                    self.emit(AppEvent::success_toast(format!(
                        "User role has been changed to {role}!"
                    )));
                }
                self.emit(AppEvent::UserSaveFinished { saved: true });
                self.reload_users(refetch).await;
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("User update failed: {err}")));
                self.emit(AppEvent::error_toast(err.toast_message()));
                self.emit(AppEvent::UserSaveFinished { saved: false });
            }
        }
    }

    async fn delete_user(&self, id: &str, refetch: ListQuery) {
        let result = self.client.delete_user(id).await;
        self.note_api_outcome(&result);
        match result {
            Ok(()) => {
                self.emit(AppEvent::info(format!("Deleted user {id}")));
                self.emit(AppEvent::success_toast("User deleted successfully"));
                self.reload_users(refetch).await;
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("User delete failed: {err}")));
                self.emit(AppEvent::error_toast(err.toast_message()));
            }
        }
    }

    /// Reload the accounts page after a mutation
    async fn reload_users(&self, query: ListQuery) {
        match self.client.fetch_users(&query).await {
            Ok(page) => self.emit(AppEvent::UsersLoaded { page }),
            Err(err) => {
                self.emit(AppEvent::error(format!("Users reload failed: {err}")));
                self.emit(AppEvent::UsersLoadFailed);
            }
        }
    }

    // ==================== Dashboard ====================

    async fn fetch_stats(&self) {
        let medicines_query = ListQuery::count_only();
        let users_query = ListQuery::count_only();
        let active_query = ListQuery {
            role: Some(ROLE_USER.to_string()),
            ..ListQuery::count_only()
        };

        let (medicines, users, active) = tokio::join!(
            self.client.fetch_medicines(&medicines_query),
            self.client.fetch_users(&users_query),
            self.client.fetch_users(&active_query),
        );

        let totals = medicines.and_then(|medicines| {
            let users = users?;
            let active = active?;
            Ok((medicines.total, users.total, active.total))
        });
        self.note_api_outcome(&totals);
        match totals {
            Ok((total_medicines, total_users, active_users)) => {
                self.emit(AppEvent::debug(format!(
                    "Stats: {total_medicines} medicines, {total_users} users"
                )));
                self.emit(AppEvent::StatsLoaded {
                    total_medicines,
                    total_users,
                    active_users,
                });
            }
            Err(err) => {
                self.emit(AppEvent::error(format!("Stats fetch failed: {err}")));
                self.emit(AppEvent::StatsLoadFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_emits_startup_log() {
        let (event_tx, event_rx) = flume::unbounded();
        let hub = ServiceHub::new(event_tx, &AppSettings::default());

        let event = event_rx
            .recv_timeout(std::time::Duration::from_secs(1))
            .unwrap();
        assert!(matches!(event, AppEvent::Log { .. }));

        // The queue accepts commands without blocking.
        hub.send(ServiceCommand::FetchStats);
    }

    #[test]
    fn test_reachable_distinguishes_transport_failures() {
        assert!(reachable(&Ok(())));
        assert!(reachable(&Err::<(), _>(Error::Api {
            status: 404,
            message: "Medicine not found".to_string(),
        })));
        assert!(!reachable(&Err::<(), _>(Error::Http {
            source: transport_error(),
        })));
    }

    // An invalid URL makes reqwest fail before touching the network.
    fn transport_error() -> reqwest::Error {
        runtime::block_on(async {
            reqwest::Client::new()
                .get("http://")
                .send()
                .await
                .unwrap_err()
        })
    }
}
