//! Read-only model of the shareable profile page.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::entities::{LinkEntry, LinkId, PlatformStyle, Profile, style_for};
use crate::utils::url_normalizer::normalize_link_url;

/// Message offered alongside the share URL.
pub const SHARE_MESSAGE: &str = "Check out my DevLinks profile!";

/// Text shown in place of a missing email.
pub const NO_EMAIL: &str = "No email provided";

/// One link button on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkCard {
    pub id: LinkId,
    pub label: String,
    pub style: PlatformStyle,
    pub text_color: &'static str,
    /// Where tapping the card leads; `None` when the URL cannot be opened.
    pub target: Option<Url>,
}

impl LinkCard {
    fn from_entry(entry: &LinkEntry) -> Self {
        let platform = entry.platform_kind();

        let target = match normalize_link_url(&entry.url) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(id = %entry.id, error = %e, "Link cannot be opened");
                None
            }
        };

        Self {
            id: entry.id.clone(),
            label: platform
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| entry.platform.clone()),
            style: style_for(&entry.platform),
            text_color: platform.map_or("#FFFFFF", |p| p.text_color()),
            target,
        }
    }
}

/// Everything the profile page displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePreview {
    pub display_name: String,
    pub email_line: String,
    pub picture: Option<String>,
    pub share_url: String,
    pub share_message: &'static str,
    pub cards: Vec<LinkCard>,
}

/// Builds [`ProfilePreview`]s for a fixed share location.
#[derive(Debug, Clone)]
pub struct PreviewService {
    share_base_url: String,
    handle: String,
}

impl PreviewService {
    pub fn new(share_base_url: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            share_base_url: share_base_url.into(),
            handle: handle.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.share_base_url.clone(), config.profile_handle.clone())
    }

    /// Public URL of the profile page.
    pub fn share_url(&self) -> String {
        format!(
            "{}/{}",
            self.share_base_url.trim_end_matches('/'),
            self.handle
        )
    }

    /// Renders the profile page model. Cards keep the collection order.
    pub fn preview(&self, profile: &Profile) -> ProfilePreview {
        ProfilePreview {
            display_name: profile.display_name(),
            email_line: profile
                .email
                .clone()
                .unwrap_or_else(|| NO_EMAIL.to_string()),
            picture: profile.picture.clone(),
            share_url: self.share_url(),
            share_message: SHARE_MESSAGE,
            cards: profile.links.iter().map(LinkCard::from_entry).collect(),
        }
    }
}
