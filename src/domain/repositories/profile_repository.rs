//! Repository trait for profile details.

use crate::domain::entities::{Profile, ProfileDetails};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the signed-in user's profile.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryProfileStore`] - In-memory store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/in_memory_store.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the current profile, links included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no profile exists.
    async fn get(&self) -> Result<Profile, AppError>;

    /// Replaces the personal details and returns the updated profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no profile exists.
    /// Returns [`AppError::Persistence`] if the write fails.
    async fn update_details(&self, details: ProfileDetails) -> Result<Profile, AppError>;
}
