//! Medicines Controller
//!
//! Drives catalog fetches, saves, deletes, and the image search.

use std::path::PathBuf;

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::medicine::Medicine;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::upload::validate_image;

/// Medicines page controller
pub struct MedicinesController {
    entities: AppEntities,
}

impl MedicinesController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the current page of the catalog
    pub fn refresh(&self, cx: &mut App) {
        let query = self.entities.medicines.update(cx, |medicines, cx| {
            medicines.set_loading(true);
            cx.notify();
            medicines.query()
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchMedicines { query });
        }
    }

    /// Move to a page and re-fetch when it changed
    pub fn set_page(&self, page: u32, cx: &mut App) {
        let moved = self.entities.medicines.update(cx, |medicines, cx| {
            let moved = medicines.set_page(page);
            cx.notify();
            moved
        });
        if moved {
            self.refresh(cx);
        }
    }

    /// Sort by a column and re-fetch
    pub fn toggle_sort(&self, column: &str, cx: &mut App) {
        self.entities.medicines.update(cx, |medicines, cx| {
            medicines.toggle_sort(column);
            cx.notify();
        });
        self.refresh(cx);
    }

    /// Update the client-side search text; a page reset re-fetches
    pub fn set_filter(&self, filter: String, cx: &mut App) {
        let page_moved = self.entities.medicines.update(cx, |medicines, cx| {
            let moved = medicines.set_filter(filter);
            cx.notify();
            moved
        });
        if page_moved {
            self.refresh(cx);
        }
    }

    /// Send the editor draft, creating or updating
    pub fn save(&self, cx: &mut App) {
        let (editing_id, draft, refetch) = self.entities.medicines.update(cx, |medicines, cx| {
            medicines.save_started();
            cx.notify();
            (
                medicines.editing_id.clone(),
                medicines.draft.clone(),
                medicines.query(),
            )
        });

        let command = match editing_id {
            Some(id) => ServiceCommand::UpdateMedicine { id, draft, refetch },
            None => ServiceCommand::CreateMedicine { draft, refetch },
        };
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(command);
        }
    }

    /// Delete a confirmed row
    pub fn delete(&self, medicine: &Medicine, cx: &mut App) {
        let refetch = self.entities.medicines.update(cx, |medicines, cx| {
            medicines.cancel_delete();
            cx.notify();
            medicines.query()
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::DeleteMedicine {
                id: medicine.id.clone(),
                refetch,
            });
        }
    }

    /// Delete one image of the record open in the details modal
    pub fn delete_image(&self, id: String, image_name: String, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::DeleteMedicineImage { id, image_name });
        }
    }

    /// Open the details modal and ask for a fresh copy
    pub fn open_details(&self, medicine: Medicine, cx: &mut App) {
        let id = medicine.id.clone();
        self.entities.medicines.update(cx, |medicines, cx| {
            medicines.open_details(medicine);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchMedicineDetails { id });
        }
    }

    /// Run the image search; a bad file never leaves the client
    pub fn search(&self, path: &str, cx: &mut App) -> Result<(), String> {
        let path = PathBuf::from(path.trim());
        validate_image(&path).map_err(|err| err.toast_message())?;

        self.entities.medicines.update(cx, |medicines, cx| {
            medicines.search_started();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::SearchByImage { path });
        }
        Ok(())
    }
}
