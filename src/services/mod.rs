//! Service Layer
//!
//! Everything that talks to the backend lives here. The UI sends a
//! `ServiceCommand` to the [`service_hub::ServiceHub`] global; the worker
//! runs it against the REST API through [`api_client::ApiClient`] on the
//! shared tokio runtime and answers with `AppEvent`s.
//!
//! ```text
//! ┌────────────┐  ServiceCommand  ┌────────────┐  HTTP  ┌─────────┐
//! │   UI /     │ ───────────────▶ │ ServiceHub │ ─────▶ │ backend │
//! │ Workspace  │ ◀─────────────── │   worker   │ ◀───── │   API   │
//! └────────────┘     AppEvent     └────────────┘        └─────────┘
//! ```

pub mod api_client;
pub mod runtime;
pub mod service_hub;
