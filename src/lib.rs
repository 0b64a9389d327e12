//! MediVision Admin Library
//!
//! This crate provides the application logic for MediVision Admin, a native
//! dashboard for managing the MediVision medicine catalog and its user
//! accounts against the REST backend.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
