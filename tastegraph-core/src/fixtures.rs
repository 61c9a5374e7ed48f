//! Fixture artist data
//!
//! Stands in for the listening history a real platform would return. The
//! built-in set is embedded at compile time and parsed once.

use serde::Deserialize;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use tastegraph_common::Artist;
use thiserror::Error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/artists.json");

#[derive(Debug, Deserialize)]
struct FixtureFile {
    artists: Vec<Artist>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("invalid fixture JSON: {0}")]
    Parse(String),
    #[error("artist {id:?} is invalid: {reason}")]
    Invalid { id: String, reason: &'static str },
    #[error("duplicate artist id: {0}")]
    DuplicateId(String),
}

static BUILTIN: OnceLock<Arc<FixtureSet>> = OnceLock::new();

/// Immutable, validated list of artists.
///
/// Every entry has a non-empty id, name, genre and image URL, and ids are
/// unique. Connections may point at ids outside the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    artists: Vec<Artist>,
}

impl FixtureSet {
    pub fn new(artists: Vec<Artist>) -> Result<Self, FixtureError> {
        let mut seen = HashSet::new();
        for artist in &artists {
            validate_artist(artist)?;
            if !seen.insert(artist.id.as_str()) {
                return Err(FixtureError::DuplicateId(artist.id.clone()));
            }
        }
        Ok(Self { artists })
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile =
            serde_json::from_str(json).map_err(|e| FixtureError::Parse(e.to_string()))?;
        Self::new(file.artists)
    }

    /// The ten demo artists shipped with the app
    pub fn builtin() -> Arc<FixtureSet> {
        BUILTIN
            .get_or_init(|| {
                Arc::new(Self::from_json(FIXTURE_JSON).expect("Failed to parse fixture JSON"))
            })
            .clone()
    }

    pub fn all(&self) -> &[Artist] {
        &self.artists
    }

    /// Up to the first `n` artists, in fixture order
    pub fn first(&self, n: usize) -> &[Artist] {
        &self.artists[..n.min(self.artists.len())]
    }

    pub fn get(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

fn validate_artist(artist: &Artist) -> Result<(), FixtureError> {
    let blank = |field: &str| field.trim().is_empty();
    let reason = if blank(&artist.id) {
        Some("missing id")
    } else if blank(&artist.name) {
        Some("missing name")
    } else if blank(&artist.genre) {
        Some("missing genre")
    } else if blank(&artist.image_url) {
        Some("missing image URL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FixtureError::Invalid {
            id: artist.id.clone(),
            reason,
        }),
        None => Ok(()),
    }
}
