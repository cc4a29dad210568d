//! Application layer services implementing the editing workflows.
//!
//! Services consume the collaborator traits from
//! [`crate::domain::repositories`] and expose the operations a presentation
//! layer calls.
//!
//! # Available Services
//!
//! - [`services::link_editor::LinkEditor`] - Link list editing, validation and guarded saves
//! - [`services::profile_service::ProfileService`] - Personal details
//! - [`services::preview_service::PreviewService`] - Shareable profile page model

pub mod services;
