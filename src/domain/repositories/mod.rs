//! Collaborator trait definitions for the domain layer.
//!
//! These traits abstract where profiles and links are stored. The editor and
//! services depend only on them; concrete stores live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`LinkLoader`] / [`LinkPersister`] - Link collection load and save
//! - [`ProfileRepository`] - Profile details
//!
//! Mock implementations are generated with `mockall` for unit tests.

pub mod link_repository;
pub mod profile_repository;

pub use link_repository::{LinkLoader, LinkPersister};
pub use profile_repository::ProfileRepository;

#[cfg(test)]
pub use link_repository::{MockLinkLoader, MockLinkPersister};
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
