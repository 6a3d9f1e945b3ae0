use std::io::{self, Write};

use serde_json::Value;

use crate::playerclient::{response::getplaylist::PlaylistView, response::Reply};

pub const MISSING_MARK: &str = " [MISSING]";

/// Prints the reply as compact JSON.
pub fn raw(reply: Reply, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", reply.into_value())
}

/// Prints a playlist listing, or falls back to the raw reply if it is not one.
pub fn playlist(reply: Reply, out: &mut impl Write) -> io::Result<()> {
    let Some(view) = reply.as_data().and_then(PlaylistView::from_value) else {
        return raw(reply, out);
    };
    writeln!(out, "Current Playlist: {}", view.current)?;
    writeln!(out, "Files:")?;
    for (i, file) in view.files.iter().enumerate() {
        let mark = if file.is_missing() { MISSING_MARK } else { "" };
        writeln!(out, "  [{}] {}{}", i, file.name, mark)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "All Playlists: {}",
        Value::from(view.all_playlists.clone())
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn render(reply: Reply) -> String {
        let mut out = Vec::new();
        playlist(reply, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_listing_marks_missing_files() {
        let out = render(Reply::Data(json!({
            "current": "rock",
            "files": [
                {"name": "a.mp3", "exists": true},
                {"name": "b.mp3", "exists": false},
            ],
            "all_playlists": ["rock", "pop"],
        })));
        assert_eq!(
            out,
            "Current Playlist: rock\n\
             Files:\n  \
             [0] a.mp3\n  \
             [1] b.mp3 [MISSING]\n\
             \n\
             All Playlists: [\"rock\",\"pop\"]\n"
        );
    }

    #[test]
    fn test_null_exists_is_missing() {
        let out = render(Reply::Data(json!({
            "current": "pop",
            "files": [{"name": "a.mp3", "exists": null}, {"name": "b.mp3"}],
        })));
        assert_eq!(
            out,
            "Current Playlist: pop\nFiles:\n  [0] a.mp3 [MISSING]\n  [1] b.mp3\n\nAll Playlists: []\n"
        );
    }

    #[test]
    fn test_server_key_order_is_kept() {
        let body: Value = serde_json::from_str(r#"{"zeta":1,"alpha":{"y":2,"b":3}}"#).unwrap();
        let mut out = Vec::new();
        raw(Reply::Data(body), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"zeta\":1,\"alpha\":{\"y\":2,\"b\":3}}\n"
        );
    }

    #[test]
    fn test_failure_is_printed_raw() {
        let out = render(Reply::Failed("connection refused".to_string()));
        assert_eq!(out, "{\"error\":\"connection refused\"}\n");
    }

    #[test]
    fn test_unexpected_shape_is_printed_raw() {
        let out = render(Reply::Data(json!({"files": []})));
        assert_eq!(out, "{\"files\":[]}\n");
        let out = render(Reply::Data(json!({"current": 5})));
        assert_eq!(out, "{\"current\":5}\n");
    }

    #[test]
    fn test_raw_string_reply() {
        let mut out = Vec::new();
        raw(Reply::Data(json!("Playlist deleted")), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\"Playlist deleted\"\n");
    }
}
