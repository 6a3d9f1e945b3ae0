use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::{from_str, Value};
use tracing::{debug, error, warn};

use crate::{
    config::appconfig::DEFAULT_SERVER_URL,
    playerclient::{
        error::FailReason,
        params::{playlist_param, NameParams, PlayParams, RemoveParams, RenameParams},
        response::Reply,
        types::{Endpoint, TrackIndex},
    },
};

pub mod error;
pub mod params;
pub mod response;
pub mod types;

/// Client for the music player HTTP API.
/// Every call issues exactly one request, and every failure comes back as [`Reply::Failed`].
pub struct PlayerClient {
    base_url: String,
    client: Client,
}

impl Default for PlayerClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl PlayerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            // The player usually runs on the same machine, so system proxies are not consulted
            client: Client::builder().no_proxy().build().unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plays the given file. The server adds it to the top of the playlist.
    pub async fn play_file(&self, path: &str, playlist: Option<&str>) -> Reply {
        let params = PlayParams {
            path: Some(path.to_string()),
            index: None,
            playlist: playlist_param(playlist),
        };
        self.post(Endpoint::Play, &params).await
    }

    /// Plays the track at the given position of the current (or named) playlist.
    pub async fn play_index(&self, index: TrackIndex, playlist: Option<&str>) -> Reply {
        let params = PlayParams {
            path: None,
            index: Some(index),
            playlist: playlist_param(playlist),
        };
        self.post(Endpoint::Play, &params).await
    }

    pub async fn get_playlist(&self) -> Reply {
        self.request::<()>(Method::GET, Endpoint::Playlist, None)
            .await
            .into()
    }

    pub async fn remove_from_playlist(&self, index: TrackIndex, playlist: Option<&str>) -> Reply {
        let params = RemoveParams {
            index,
            playlist: playlist_param(playlist),
        };
        self.post(Endpoint::PlaylistRemove, &params).await
    }

    pub async fn rename_playlist(&self, old_name: &str, new_name: &str) -> Reply {
        let params = RenameParams {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        };
        self.post(Endpoint::PlaylistRename, &params).await
    }

    pub async fn delete_playlist(&self, name: &str) -> Reply {
        let params = NameParams {
            name: name.to_string(),
        };
        self.post(Endpoint::PlaylistDelete, &params).await
    }

    /// Makes the named playlist the current one.
    pub async fn switch_playlist(&self, name: &str) -> Reply {
        let params = NameParams {
            name: name.to_string(),
        };
        self.post(Endpoint::PlaylistSwitch, &params).await
    }

    async fn post<T: Serialize>(&self, endpoint: Endpoint, params: &T) -> Reply {
        self.request(Method::POST, endpoint, Some(params))
            .await
            .into()
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url, FailReason> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        Url::parse(&raw).map_err(|e| FailReason::URLParsing {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn request<T: Serialize>(
        &self,
        method: Method,
        endpoint: Endpoint,
        body: Option<&T>,
    ) -> Result<Value, FailReason> {
        let url = self.url(endpoint)?;
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }
        let res = match req.send().await {
            Ok(res) => res,
            Err(err) => {
                error!("Request to {} failed: {}", endpoint, err);
                return Err(FailReason::Querying(err));
            }
        };
        let status = res.status();
        if !status.is_success() {
            warn!("{} responded with {}", endpoint, status);
        }
        let body = res.text().await.map_err(FailReason::Text)?;
        match from_str::<Value>(&body) {
            Ok(v) => Ok(v),
            Err(err) => {
                error!("Could not decode response from {}: {}", endpoint, err);
                Err(FailReason::Decoding { status, err })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_url_join() {
        let c = PlayerClient::new("http://127.0.0.1:3000/");
        assert_eq!(
            c.url(Endpoint::PlaylistRename).unwrap().as_str(),
            "http://127.0.0.1:3000/playlist/rename"
        );
        assert_eq!(PlayerClient::default().base_url(), "http://127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_bad_url_is_reply() {
        let c = PlayerClient::new("not a url");
        let reply = c.get_playlist().await;
        assert!(reply.is_failed());
        let value = reply.into_value();
        assert!(value["error"]
            .as_str()
            .is_some_and(|m| m.contains("not a url")));
    }
}
