use std::{fmt::Display, num::ParseIntError, str::FromStr};

use derive_deref::Deref;
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

/// Zero-based position of a track within a playlist.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Deref)]
#[serde(transparent)]
pub struct TrackIndex(i64);

impl From<i64> for TrackIndex {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct IndexError {
    input: String,
    source: ParseIntError,
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid track index '{}': {}", self.input, self.source)
    }
}

impl FromStr for TrackIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(TrackIndex)
            .map_err(|source| IndexError {
                input: s.to_string(),
                source,
            })
    }
}

/// Routes exposed by the player API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Endpoint {
    #[strum(serialize = "/play")]
    Play,
    #[strum(serialize = "/playlist")]
    Playlist,
    #[strum(serialize = "/playlist/remove")]
    PlaylistRemove,
    #[strum(serialize = "/playlist/rename")]
    PlaylistRename,
    #[strum(serialize = "/playlist/delete")]
    PlaylistDelete,
    #[strum(serialize = "/playlist/switch")]
    PlaylistSwitch,
}
