//! Link entry entity: one platform + URL pair on a profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::platform::Platform;

/// Opaque identifier of a link entry.
///
/// Stable for the entry's lifetime. Fresh ids come from
/// [`crate::utils::id_generator::generate_link_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Editable field of a link entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkField {
    Platform,
    Url,
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkField::Platform => f.write_str("platform"),
            LinkField::Url => f.write_str("url"),
        }
    }
}

/// A single link on a profile.
///
/// `platform` and `url` hold whatever the user typed or picked; they are only
/// checked when the collection is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub id: LinkId,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

impl LinkEntry {
    /// Creates an entry with no platform and no URL.
    pub fn blank(id: LinkId) -> Self {
        Self {
            id,
            platform: String::new(),
            url: String::new(),
        }
    }

    pub fn new(id: LinkId, platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            platform: platform.into(),
            url: url.into(),
        }
    }

    /// The selected platform, if the text names a supported one.
    pub fn platform_kind(&self) -> Option<Platform> {
        self.platform.parse().ok()
    }

    pub fn set(&mut self, field: LinkField, value: String) {
        match field {
            LinkField::Platform => self.platform = value,
            LinkField::Url => self.url = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entry() {
        let entry = LinkEntry::blank(LinkId::new("a1"));

        assert_eq!(entry.id.as_str(), "a1");
        assert!(entry.platform.is_empty());
        assert!(entry.url.is_empty());
        assert!(entry.platform_kind().is_none());
    }

    #[test]
    fn test_set_fields() {
        let mut entry = LinkEntry::blank(LinkId::new("a1"));
        entry.set(LinkField::Platform, "Github".to_string());
        entry.set(LinkField::Url, "https://github.com/alice".to_string());

        assert_eq!(entry.platform_kind(), Some(Platform::Github));
        assert_eq!(entry.url, "https://github.com/alice");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = LinkEntry::new(LinkId::new("7"), "Twitter", "https://x.com/a");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], "7");
        assert_eq!(value["platform"], "Twitter");
        assert_eq!(value["url"], "https://x.com/a");
    }

    #[test]
    fn test_entry_missing_fields_default_to_empty() {
        let entry: LinkEntry = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(entry.platform.is_empty());
        assert!(entry.url.is_empty());
    }
}
