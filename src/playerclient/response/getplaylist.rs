use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlaylistFile {
    #[serde(default)]
    pub path: Option<String>,
    pub name: String,
    /// Servers that do not check the filesystem leave this out, which counts as present.
    /// An explicit null is kept as None.
    #[serde(default = "present")]
    pub exists: Option<bool>,
}

fn present() -> Option<bool> {
    Some(true)
}

impl PlaylistFile {
    /// Anything but `true` (including null) marks the file as missing.
    pub fn is_missing(&self) -> bool {
        self.exists != Some(true)
    }
}

/// Body of `GET /playlist`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlaylistView {
    pub current: String,
    #[serde(default)]
    pub files: Vec<PlaylistFile>,
    #[serde(default)]
    pub all_playlists: Vec<String>,
}

impl PlaylistView {
    /// Returns the view only if the value looks like a playlist listing.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.get("current").is_none() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_exists_defaults_to_true() {
        let view = PlaylistView::from_value(&json!({
            "current": "rock",
            "files": [{"name": "a.mp3"}],
        }))
        .unwrap();
        assert!(!view.files[0].is_missing());
        assert_eq!(view.files[0].path, None);
        assert_eq!(view.all_playlists, Vec::<String>::new());
    }

    #[test]
    fn test_null_exists_is_missing() {
        let view = PlaylistView::from_value(&json!({
            "current": "rock",
            "files": [
                {"name": "a.mp3", "exists": null},
                {"name": "b.mp3", "exists": false},
            ],
        }))
        .unwrap();
        assert!(view.files[0].is_missing());
        assert!(view.files[1].is_missing());
    }

    #[test]
    fn test_not_a_playlist() {
        assert_eq!(PlaylistView::from_value(&json!({"error": "nope"})), None);
        assert_eq!(PlaylistView::from_value(&json!("Playlist renamed")), None);
    }
}
