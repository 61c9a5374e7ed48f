use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Music service a user connects with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Spotify,
    Apple,
    Youtube,
}

impl Platform {
    /// All platforms, in the order the login screen offers them
    pub const ALL: [Platform; 3] = [Platform::Spotify, Platform::Apple, Platform::Youtube];

    /// Wire name (`spotify`, `apple`, `youtube`)
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::Apple => "apple",
            Platform::Youtube => "youtube",
        }
    }

    /// Human-facing service name
    pub fn label(self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Apple => "Apple Music",
            Platform::Youtube => "YouTube Music",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spotify" => Ok(Platform::Spotify),
            "apple" => Ok(Platform::Apple),
            "youtube" => Ok(Platform::Youtube),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

/// A node in the taste graph.
///
/// `connections` holds ids of related artists. Edges are not guaranteed to
/// be mutual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub play_count: u32,
    pub image_url: String,
    #[serde(default)]
    pub connections: Vec<String>,
}

/// Identity handed to the host application once a login or join resolves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub profile_image: String,
    pub top_artists: Vec<Artist>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("match percentage {0} is above 100")]
pub struct MatchPercentageOutOfRange(pub u8);

/// Affinity between a joining user and the host, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchPercentage(u8);

impl MatchPercentage {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Values above 100 saturate to 100
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MatchPercentage {
    type Error = MatchPercentageOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(MatchPercentageOutOfRange(value))
    }
}

impl From<MatchPercentage> for u8 {
    fn from(pct: MatchPercentage) -> u8 {
        pct.0
    }
}

impl fmt::Display for MatchPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
