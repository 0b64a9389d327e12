//! Eventing - Service to UI Event Flow

pub mod app_event;
