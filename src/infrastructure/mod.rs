//! Infrastructure layer for storage backends.
//!
//! This layer implements the collaborator traits defined by the domain layer.
//! Real transports (HTTP, device storage) plug in here behind the same traits.
//!
//! # Modules
//!
//! - [`persistence`] - Profile store implementations

pub mod persistence;
