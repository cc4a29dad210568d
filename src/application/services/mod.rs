//! Editing and presentation services for the application layer.

pub mod link_editor;
pub mod preview_service;
pub mod profile_service;

pub use link_editor::{
    BeginSave, DisplayState, EditorOptions, EditorStatus, LinkEditor, PendingSave, SaveCompletion,
    SaveOutcome, SaveTicket,
};
pub use preview_service::{LinkCard, PreviewService, ProfilePreview};
pub use profile_service::ProfileService;
