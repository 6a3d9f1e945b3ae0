use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Base address of the player API, without a trailing path
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}
