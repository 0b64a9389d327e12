//! Profile Controller
//!
//! Drives saves and avatar/cover uploads for the signed-in account.

use std::path::PathBuf;

use gpui::App;

use crate::app::entities::AppEntities;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::upload::validate_image;

/// Profile page controller
pub struct ProfileController {
    entities: AppEntities,
}

impl ProfileController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Save the editable profile fields
    pub fn save(&self, cx: &mut App) {
        let update = self.entities.profile.update(cx, |profile, cx| {
            profile.save_started();
            cx.notify();
            profile.update_payload()
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::UpdateProfile { update });
        }
    }

    /// Upload the avatar at the typed path; a bad file never leaves the client
    pub fn upload_avatar(&self, cx: &mut App) -> Result<(), String> {
        let path = self.entities.profile.read(cx).avatar_path.clone();
        self.upload(path, cx, |path| ServiceCommand::UpdateProfileImage { path })
    }

    /// Upload the cover photo at the typed path
    pub fn upload_cover(&self, cx: &mut App) -> Result<(), String> {
        let path = self.entities.profile.read(cx).cover_path.clone();
        self.upload(path, cx, |path| ServiceCommand::UpdateProfileCover { path })
    }

    /// Remove the stored avatar
    pub fn remove_avatar(&self, cx: &mut App) {
        self.remove(cx, ServiceCommand::RemoveProfileImage);
    }

    /// Remove the stored cover photo
    pub fn remove_cover(&self, cx: &mut App) {
        self.remove(cx, ServiceCommand::RemoveProfileCover);
    }

    fn upload(
        &self,
        path: String,
        cx: &mut App,
        command: impl FnOnce(PathBuf) -> ServiceCommand,
    ) -> Result<(), String> {
        let path = PathBuf::from(path.trim());
        validate_image(&path).map_err(|err| err.toast_message())?;

        self.entities.profile.update(cx, |profile, cx| {
            profile.upload_started();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(command(path));
        }
        Ok(())
    }

    fn remove(&self, cx: &mut App, command: ServiceCommand) {
        self.entities.profile.update(cx, |profile, cx| {
            profile.upload_started();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(command);
        }
    }
}
