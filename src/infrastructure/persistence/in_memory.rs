//! In-memory profile store.

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{LinkCollection, LinkEntry, LinkId, Profile, ProfileDetails};
use crate::domain::repositories::{LinkLoader, LinkPersister, ProfileRepository};
use crate::error::AppError;

/// Profile storage held in process memory.
///
/// Implements every collaborator trait, so one store can back a
/// [`crate::application::services::LinkEditor`] and a
/// [`crate::application::services::ProfileService`] at once. Optional latency
/// and one-shot failure injection make slow or flaky backends reproducible.
pub struct InMemoryProfileStore {
    profile: RwLock<Option<Profile>>,
    latency: Duration,
    fail_next_persist: AtomicBool,
    persist_count: AtomicUsize,
}

impl InMemoryProfileStore {
    /// Creates a store holding an empty profile.
    pub fn new() -> Self {
        Self::with_profile(Profile::default())
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
            latency: Duration::ZERO,
            fail_next_persist: AtomicBool::new(false),
            persist_count: AtomicUsize::new(0),
        }
    }

    /// Creates a store with no profile at all; profile reads report not found.
    pub fn unprovisioned() -> Self {
        Self {
            profile: RwLock::new(None),
            ..Self::new()
        }
    }

    /// Creates a store seeded with the demo profile.
    pub fn with_demo_profile() -> Self {
        Self::with_profile(demo_profile())
    }

    /// Delays every read and write by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes the next `persist` call fail once.
    pub fn fail_next_persist(&self) {
        self.fail_next_persist.store(true, Ordering::SeqCst);
    }

    /// Number of successful `persist` calls so far.
    pub fn persist_count(&self) -> usize {
        self.persist_count.load(Ordering::SeqCst)
    }

    /// Copy of the stored profile, if any.
    pub async fn snapshot(&self) -> Option<Profile> {
        self.profile.read().await.clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkLoader for InMemoryProfileStore {
    async fn load(&self) -> Result<LinkCollection, AppError> {
        self.simulate_latency().await;

        let profile = self.profile.read().await;
        Ok(profile
            .as_ref()
            .map(|p| p.links.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl LinkPersister for InMemoryProfileStore {
    async fn persist(&self, links: &LinkCollection) -> Result<(), AppError> {
        self.simulate_latency().await;

        if self.fail_next_persist.swap(false, Ordering::SeqCst) {
            return Err(AppError::persistence(
                "Failed to save links. Please try again.",
                json!({ "links": links.len() }),
            ));
        }

        let mut guard = self.profile.write().await;
        let profile = guard
            .as_mut()
            .ok_or_else(|| AppError::not_found("Profile not found", json!({})))?;
        profile.links = links.clone();
        self.persist_count.fetch_add(1, Ordering::SeqCst);
        debug!(links = links.len(), "Stored links in memory");

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn get(&self) -> Result<Profile, AppError> {
        self.simulate_latency().await;

        self.profile
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::not_found("Profile not found", json!({})))
    }

    async fn update_details(&self, details: ProfileDetails) -> Result<Profile, AppError> {
        self.simulate_latency().await;

        let mut guard = self.profile.write().await;
        let profile = guard
            .as_mut()
            .ok_or_else(|| AppError::not_found("Profile not found", json!({})))?;
        profile.apply_details(details);

        Ok(profile.clone())
    }
}

/// The sample profile used by the demo session.
pub fn demo_profile() -> Profile {
    let links = [
        ("1", "Github", "https://github.com/johndoe"),
        ("2", "Twitter", "https://twitter.com/johndoe"),
        ("3", "LinkedIn", "https://linkedin.com/in/johndoe"),
        ("4", "YouTube", "https://youtube.com/johndoe"),
    ]
    .into_iter()
    .map(|(id, platform, url)| LinkEntry::new(LinkId::new(id), platform, url))
    .collect::<Vec<_>>();

    Profile {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("john.doe@example.com".to_string()),
        picture: Some("https://randomuser.me/api/portraits/men/1.jpg".to_string()),
        links: LinkCollection::try_from(links).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_is_consistent() {
        let profile = demo_profile();
        assert_eq!(profile.links.len(), 4);
        assert_eq!(profile.display_name(), "John Doe");
    }

    #[tokio::test]
    async fn test_fail_next_persist_is_one_shot() {
        let store = InMemoryProfileStore::new();
        store.fail_next_persist();

        assert!(store.persist(&LinkCollection::new()).await.is_err());
        assert!(store.persist(&LinkCollection::new()).await.is_ok());
        assert_eq!(store.persist_count(), 1);
    }

    #[tokio::test]
    async fn test_unprovisioned_store() {
        let store = InMemoryProfileStore::unprovisioned();

        assert!(matches!(store.get().await, Err(AppError::NotFound { .. })));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_persist_without_profile_is_not_found() {
        let store = InMemoryProfileStore::unprovisioned();

        let result = store.persist(&LinkCollection::new()).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert!(store.snapshot().await.is_none());
        assert_eq!(store.persist_count(), 0);
    }
}
