//! Domain layer containing profile entities, link validation and
//! collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (links, platforms, profile)
//! - [`validation`] - Save-time rules for link entries
//! - [`repositories`] - Load/persist trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation.
//! Editing workflows are in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod validation;
