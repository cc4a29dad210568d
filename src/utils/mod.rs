//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Random link id generation
//! - [`url_normalizer`] - Turning stored link text into an openable URL

pub mod id_generator;
pub mod url_normalizer;
