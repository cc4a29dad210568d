//! Collaborator traits for loading and persisting a profile's links.

use crate::domain::entities::LinkCollection;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of the link collection an editor starts from.
///
/// Invoked once when a [`crate::application::services::LinkEditor`] is loaded.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryProfileStore`] - In-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkLoader: Send + Sync {
    /// Loads the saved links, or an empty collection when none exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] when the backing store is unreachable.
    async fn load(&self) -> Result<LinkCollection, AppError>;
}

/// Durable storage for a validated link collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryProfileStore`] - In-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkPersister: Send + Sync {
    /// Stores `links` as the profile's complete, ordered link list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the collection could not be stored.
    /// The caller may retry.
    async fn persist(&self, links: &LinkCollection) -> Result<(), AppError>;
}
