use serde::{Deserialize, Serialize};

use super::types::TrackIndex;

/// Body of `POST /play`. Exactly one of `path` or `index` is set by the client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<TrackIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoveParams {
    pub index: TrackIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RenameParams {
    pub old_name: String,
    pub new_name: String,
}

/// Used by both `/playlist/delete` and `/playlist/switch`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NameParams {
    pub name: String,
}

/// An empty playlist name means "no playlist", same as leaving it out.
pub fn playlist_param(playlist: Option<&str>) -> Option<String> {
    playlist.filter(|p| !p.is_empty()).map(str::to_string)
}
