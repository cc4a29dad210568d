//! Core domain entities representing the profile data model.
//!
//! Entities are plain data structures; validation of link entries lives in
//! [`crate::domain::validation`] and editing workflows in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`LinkEntry`] - One platform + URL pair, keyed by [`LinkId`]
//! - [`LinkCollection`] - Ordered, id-unique list of entries
//! - [`Platform`] - Closed set of supported platforms with [`PlatformStyle`] metadata
//! - [`Profile`] - Personal details plus links
//! - [`ProfileDetails`] - The editable personal details

pub mod collection;
pub mod link;
pub mod platform;
pub mod profile;

pub use collection::{DuplicateLinkId, LinkCollection};
pub use link::{LinkEntry, LinkField, LinkId};
pub use platform::{Platform, PlatformStyle, UnknownPlatform, style_for};
pub use profile::{Profile, ProfileDetails};
