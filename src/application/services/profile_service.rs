//! Profile details service.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::entities::{Profile, ProfileDetails};
use crate::domain::repositories::ProfileRepository;
use crate::error::AppError;

/// Service for reading and editing the personal details of a profile.
pub struct ProfileService<R: ProfileRepository> {
    repository: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    /// Creates a new profile service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the current profile.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn load(&self) -> Result<Profile, AppError> {
        self.repository.get().await
    }

    /// Validates and stores new personal details.
    ///
    /// Fields are trimmed first; blank fields are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email or picture is malformed;
    /// nothing is stored in that case. Propagates repository errors.
    pub async fn update_details(&self, details: ProfileDetails) -> Result<Profile, AppError> {
        let details = details.normalized();
        details.validate()?;

        let profile = self.repository.update_details(details).await?;
        info!(name = %profile.display_name(), "Profile details updated");
        Ok(profile)
    }
}
