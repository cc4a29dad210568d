//! # DevLinks
//!
//! Link-in-bio profile editing: an ordered list of links to developer
//! platforms, profile details, and a preview of the shareable profile page.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, link validation rules and collaborator traits
//! - **Application Layer** ([`application`]) - Link editor, profile and preview services
//! - **Infrastructure Layer** ([`infrastructure`]) - Store implementations
//!
//! ## Saving links
//!
//! [`LinkEditor`](application::services::LinkEditor) validates every entry
//! before handing a snapshot to a [`LinkPersister`](domain::repositories::LinkPersister).
//! A save result that arrives after the collection was edited again is
//! discarded instead of marking the newer edits as saved.
//!
//! ```ignore
//! let store = Arc::new(InMemoryProfileStore::with_demo_profile());
//! let mut editor = LinkEditor::load(store.as_ref(), store.clone(), EditorOptions::default()).await?;
//!
//! let id = editor.add_entry()?;
//! editor.update_entry(&id, LinkField::Platform, "GitLab");
//! editor.update_entry(&id, LinkField::Url, "https://gitlab.com/johndoe");
//! assert!(editor.save().await.is_saved());
//! ```
//!
//! ## Configuration
//!
//! Session configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BeginSave, DisplayState, EditorOptions, EditorStatus, LinkEditor, PreviewService,
        ProfileService, SaveOutcome,
    };
    pub use crate::domain::entities::{
        LinkCollection, LinkEntry, LinkField, LinkId, Platform, Profile, ProfileDetails,
    };
    pub use crate::domain::validation::{LinkErrorKind, ValidationReport};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryProfileStore;
}
