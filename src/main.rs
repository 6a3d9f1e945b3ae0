use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use color_eyre::{eyre::eyre, Result};

use crate::{
    app::App,
    config::{pathconfig::PathConfig, Config},
};

mod app;
mod cli;
mod command;
mod config;
mod errors;
mod logging;
mod playerclient;
mod render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    crate::errors::init()?;

    let args = Cli::parse();
    if let Some(msg) = args.is_valid() {
        return Err(eyre!(msg));
    }

    let paths = PathConfig::new(args.data, args.config, args.no_config);
    crate::logging::init_or_warn(&paths.data, &mut std::io::stderr());
    let config = Config::new(paths)?;

    let app = App::new(&config, args.url);
    let mut stdout = std::io::stdout().lock();
    let outcome = app.run(&args.args, &mut stdout).await?;
    Ok(outcome.into())
}
