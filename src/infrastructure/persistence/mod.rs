//! Profile store implementations.
//!
//! # Stores
//!
//! - [`InMemoryProfileStore`] - Process-local store implementing every
//!   collaborator trait, with optional demo data, latency and failure injection

pub mod in_memory;

pub use in_memory::{InMemoryProfileStore, demo_profile};
