//! Supported link platforms and their display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported external platform.
///
/// The serialized form is the platform text stored on a link entry
/// (e.g. `"Github"`, `"Dev.to"`), which is not always the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Github,
    GitLab,
    Hashnode,
    CodePen,
    CodeWars,
    StackOverflow,
    Twitch,
    YouTube,
    LinkedIn,
    #[serde(rename = "Dev.to")]
    DevTo,
    #[serde(rename = "freeCodeCamp")]
    FreeCodeCamp,
    FrontendMentor,
    Twitter,
    Facebook,
}

/// Display color and icon for a platform card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

impl PlatformStyle {
    /// Style used for empty or unrecognised platform text.
    pub const FALLBACK: PlatformStyle = PlatformStyle {
        color: "transparent",
        icon: "link",
    };
}

/// Returned when platform text names no supported platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0:?}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// Every platform, in picker order.
    pub const ALL: [Platform; 14] = [
        Platform::Github,
        Platform::GitLab,
        Platform::Hashnode,
        Platform::CodePen,
        Platform::CodeWars,
        Platform::StackOverflow,
        Platform::Twitch,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::DevTo,
        Platform::FreeCodeCamp,
        Platform::FrontendMentor,
        Platform::Twitter,
        Platform::Facebook,
    ];

    /// The text stored in a link entry's `platform` field.
    pub fn value(self) -> &'static str {
        match self {
            Platform::Github => "Github",
            Platform::GitLab => "GitLab",
            Platform::Hashnode => "Hashnode",
            Platform::CodePen => "CodePen",
            Platform::CodeWars => "CodeWars",
            Platform::StackOverflow => "StackOverflow",
            Platform::Twitch => "Twitch",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::DevTo => "Dev.to",
            Platform::FreeCodeCamp => "freeCodeCamp",
            Platform::FrontendMentor => "FrontendMentor",
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
        }
    }

    /// Human-readable label for pickers and cards.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Github => "GitHub",
            Platform::StackOverflow => "Stack Overflow",
            Platform::FrontendMentor => "Frontend Mentor",
            other => other.value(),
        }
    }

    pub fn style(self) -> PlatformStyle {
        let (color, icon) = match self {
            Platform::Github => ("#1A1A1A", "github"),
            Platform::GitLab => ("#EB4925", "git-branch"),
            Platform::Hashnode => ("#0330D1", "hash"),
            Platform::CodePen => ("#333333", "code"),
            Platform::CodeWars => ("#8A1A50", "code"),
            Platform::StackOverflow => ("#EC7100", "layers"),
            Platform::Twitch => ("#EE3FC8", "tv"),
            Platform::YouTube => ("#EE3939", "youtube"),
            Platform::LinkedIn => ("#2D68FF", "linkedin"),
            Platform::DevTo => ("#333333", "terminal"),
            Platform::FreeCodeCamp => ("#302267", "code"),
            Platform::FrontendMentor => ("#FFFFFF", "layout"),
            Platform::Twitter => ("#43B7E9", "twitter"),
            Platform::Facebook => ("#2442AC", "facebook"),
        };
        PlatformStyle { color, icon }
    }

    /// Text color for a card drawn in this platform's color.
    ///
    /// Frontend Mentor's card is white, so it needs dark text.
    pub fn text_color(self) -> &'static str {
        match self {
            Platform::FrontendMentor => "#000000",
            _ => "#FFFFFF",
        }
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.value() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Looks up the card style for raw platform text.
///
/// Unknown or empty text falls back to [`PlatformStyle::FALLBACK`].
pub fn style_for(platform: &str) -> PlatformStyle {
    platform
        .parse::<Platform>()
        .map(Platform::style)
        .unwrap_or(PlatformStyle::FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_value() {
        for platform in Platform::ALL {
            assert_eq!(platform.value().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("github".parse::<Platform>().is_err());
        assert!("GitHub".parse::<Platform>().is_err());
        assert_eq!("Github".parse::<Platform>(), Ok(Platform::Github));
    }

    #[test]
    fn test_parse_unusual_values() {
        assert_eq!("Dev.to".parse::<Platform>(), Ok(Platform::DevTo));
        assert_eq!("freeCodeCamp".parse::<Platform>(), Ok(Platform::FreeCodeCamp));
    }

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!("".parse::<Platform>(), Err(UnknownPlatform(String::new())));
    }

    #[test]
    fn test_style_lookup() {
        assert_eq!(
            style_for("Github"),
            PlatformStyle {
                color: "#1A1A1A",
                icon: "github"
            }
        );
        assert_eq!(style_for("LinkedIn").color, "#2D68FF");
        assert_eq!(style_for("Myspace"), PlatformStyle::FALLBACK);
        assert_eq!(style_for(""), PlatformStyle::FALLBACK);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Platform::Github.label(), "GitHub");
        assert_eq!(Platform::StackOverflow.label(), "Stack Overflow");
        assert_eq!(Platform::Twitter.label(), "Twitter");
    }

    #[test]
    fn test_text_color() {
        assert_eq!(Platform::FrontendMentor.text_color(), "#000000");
        assert_eq!(Platform::YouTube.text_color(), "#FFFFFF");
    }

    #[test]
    fn test_serde_uses_value() {
        assert_eq!(serde_json::to_string(&Platform::DevTo).unwrap(), "\"Dev.to\"");
        let parsed: Platform = serde_json::from_str("\"freeCodeCamp\"").unwrap();
        assert_eq!(parsed, Platform::FreeCodeCamp);
    }
}
