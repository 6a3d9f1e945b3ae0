pub mod appconfig;
pub mod pathconfig;

use color_eyre::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{appconfig::AppConfig, pathconfig::PathConfig};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
}

impl Config {
    /// Loads the embedded defaults, then any config file found in the config directory on top.
    pub fn new(paths: PathConfig) -> Result<Self> {
        let default_config: Config = json5::from_str(CONFIG)?;
        let mut builder = config::Config::builder()
            .set_default("server_url", default_config.config.server_url)?;

        let Some(config_dir) = paths.config else {
            debug!("User configuration disabled, using built-in defaults");
            return Ok(builder.build()?.try_deserialize()?);
        };
        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }

        if !found_config {
            info!(
                "No configuration file found in {}, using built-in defaults",
                config_dir.display()
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
