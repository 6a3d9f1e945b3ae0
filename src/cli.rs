use clap::Parser;

use crate::config::pathconfig::PathConfig;

#[derive(Parser, Debug)]
#[command(author, version = version(), about, after_help = crate::command::USAGE)]
pub struct Cli {
    /// Base URL of the player API, e.g. "http://127.0.0.1:3000". Overrides the config file.
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Specifies the *directory* of the config to load. This directory is expected to contain
    /// files like "config.json5".
    #[arg(short, long)]
    pub config: Option<String>,

    /// Specifies the *directory* where the log file is written.
    #[arg(short, long)]
    pub data: Option<String>,

    /// Do not use any config other than the preset. Incompatible with --config.
    #[arg(long, default_value_t = false)]
    pub no_config: bool,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    pub fn is_valid(&self) -> Option<String> {
        if self.config.is_some() && self.no_config {
            return Some("Incompatible flags set: --config and --no-config".to_string());
        };
        None
    }
}

const VERSION_MESSAGE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_DESCRIBE"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

pub fn version() -> String {
    let author = clap::crate_authors!();

    let config_dir_path = PathConfig::get_config_dir().display().to_string();
    let data_dir_path = PathConfig::get_data_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
