//! Profile entity: personal details plus the link collection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use super::collection::LinkCollection;

/// Compiled regex for profile email validation.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").unwrap());

/// A user's link-in-bio profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
    #[serde(default)]
    pub links: LinkCollection,
}

impl Profile {
    /// Name shown on the profile page.
    ///
    /// "First Last" when both are set, whichever one is set otherwise,
    /// and "User" when neither is.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => "User".to_string(),
        }
    }

    pub fn details(&self) -> ProfileDetails {
        ProfileDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            picture: self.picture.clone(),
        }
    }

    /// Replaces the personal details, leaving the links untouched.
    pub fn apply_details(&mut self, details: ProfileDetails) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
        self.email = details.email;
        self.picture = details.picture;
    }
}

/// The editable personal details of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProfileDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(regex(path = "*EMAIL_REGEX", message = "Invalid email address"))]
    pub email: Option<String>,

    /// Picture location (must be a valid URL when present).
    #[validate(url(message = "Invalid picture URL"))]
    pub picture: Option<String>,
}

impl ProfileDetails {
    /// Trims every field and turns blank ones into `None`.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            first_name: clean(self.first_name),
            last_name: clean(self.last_name),
            email: clean(self.email),
            picture: clean(self.picture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: Option<&str>, last: Option<&str>) -> Profile {
        Profile {
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            ..Profile::default()
        }
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(profile(Some("John"), Some("Doe")).display_name(), "John Doe");
        assert_eq!(profile(Some("John"), None).display_name(), "John");
        assert_eq!(profile(None, Some("Doe")).display_name(), "Doe");
        assert_eq!(profile(None, None).display_name(), "User");
    }

    #[test]
    fn test_normalized_drops_blank_fields() {
        let details = ProfileDetails {
            first_name: Some("  Jane ".to_string()),
            last_name: Some("   ".to_string()),
            email: Some(String::new()),
            picture: None,
        }
        .normalized();

        assert_eq!(details.first_name.as_deref(), Some("Jane"));
        assert!(details.last_name.is_none());
        assert!(details.email.is_none());
    }

    #[test]
    fn test_email_validation() {
        let ok = ProfileDetails {
            email: Some("john.doe@example.com".to_string()),
            ..ProfileDetails::default()
        };
        assert!(ok.validate().is_ok());

        let bad = ProfileDetails {
            email: Some("john doe".to_string()),
            ..ProfileDetails::default()
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_missing_email_is_valid() {
        assert!(ProfileDetails::default().validate().is_ok());
    }

    #[test]
    fn test_picture_must_be_url() {
        let bad = ProfileDetails {
            picture: Some("not a url".to_string()),
            ..ProfileDetails::default()
        };
        assert!(bad.validate().is_err());

        let ok = ProfileDetails {
            picture: Some("https://randomuser.me/api/portraits/men/1.jpg".to_string()),
            ..ProfileDetails::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_apply_details_keeps_links() {
        use crate::domain::entities::{LinkEntry, LinkId};

        let mut profile = Profile::default();
        profile
            .links
            .push(LinkEntry::new(LinkId::new("1"), "Github", "https://github.com/a"))
            .unwrap();

        profile.apply_details(ProfileDetails {
            first_name: Some("Ada".to_string()),
            ..ProfileDetails::default()
        });

        assert_eq!(profile.display_name(), "Ada");
        assert_eq!(profile.links.len(), 1);
    }
}
