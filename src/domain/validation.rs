//! Save-time validation of link entries.
//!
//! Rules are entry-local: no uniqueness or reachability checks across
//! entries. Each field reports only its first failing rule.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::domain::entities::{LinkCollection, LinkEntry, LinkField, LinkId, Platform};

/// Optional http(s) scheme, a dotted domain, optional path. ASCII only.
static LINK_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})[/A-Za-z0-9_ .-]*/?$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkErrorKind {
    MissingPlatform,
    MissingUrl,
    InvalidUrlFormat,
}

impl LinkErrorKind {
    pub fn field(self) -> LinkField {
        match self {
            LinkErrorKind::MissingPlatform => LinkField::Platform,
            LinkErrorKind::MissingUrl | LinkErrorKind::InvalidUrlFormat => LinkField::Url,
        }
    }

    /// Inline message shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            LinkErrorKind::MissingPlatform => "Platform selection is required",
            LinkErrorKind::MissingUrl => "This field is required",
            LinkErrorKind::InvalidUrlFormat => "Enter a valid URL",
        }
    }
}

impl fmt::Display for LinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A failed rule on one field of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: LinkField,
    pub kind: LinkErrorKind,
    pub message: &'static str,
}

impl From<LinkErrorKind> for FieldError {
    fn from(kind: LinkErrorKind) -> Self {
        Self {
            field: kind.field(),
            kind,
            message: kind.message(),
        }
    }
}

/// Field errors keyed by entry id. Entries without errors are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<LinkId, Vec<FieldError>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_for(&self, id: &LinkId) -> &[FieldError] {
        self.errors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Error kinds reported for an entry, in field order.
    pub fn kinds_for(&self, id: &LinkId) -> Vec<LinkErrorKind> {
        self.errors_for(id).iter().map(|e| e.kind).collect()
    }

    pub fn invalid_entries(&self) -> impl Iterator<Item = &LinkId> {
        self.errors.keys()
    }

    /// Number of entries with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn validate_platform(platform: &str) -> Option<LinkErrorKind> {
    match platform.parse::<Platform>() {
        Ok(_) => None,
        Err(_) => Some(LinkErrorKind::MissingPlatform),
    }
}

fn validate_url(url: &str) -> Option<LinkErrorKind> {
    if url.trim().is_empty() {
        Some(LinkErrorKind::MissingUrl)
    } else if !LINK_URL_REGEX.is_match(url) {
        Some(LinkErrorKind::InvalidUrlFormat)
    } else {
        None
    }
}

/// Checks a single entry.
pub fn validate_entry(entry: &LinkEntry) -> Vec<FieldError> {
    [validate_platform(&entry.platform), validate_url(&entry.url)]
        .into_iter()
        .flatten()
        .map(FieldError::from)
        .collect()
}

/// Checks every entry of a collection independently.
pub fn validate_collection(collection: &LinkCollection) -> ValidationReport {
    let errors = collection
        .iter()
        .filter_map(|entry| {
            let field_errors = validate_entry(entry);
            (!field_errors.is_empty()).then(|| (entry.id.clone(), field_errors))
        })
        .collect();

    ValidationReport { errors }
}
