use std::{io::Write, process::ExitCode};

use color_eyre::Result;
use tracing::{info, warn};

use crate::{
    command::{Command, USAGE},
    config::Config,
    playerclient::{response::Reply, types::TrackIndex, PlayerClient},
    render,
    trace_dbg,
};

/// How a single invocation ended, as far as the exit status is concerned.
/// Server side failures still count as `Completed`; they are printed, not signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// No command was given at all
    Usage,
    /// Unknown command or missing arguments
    Invalid,
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::Usage => 1,
            Outcome::Invalid => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(value: Outcome) -> Self {
        ExitCode::from(value.code())
    }
}

pub struct App {
    client: PlayerClient,
}

impl App {
    pub fn new(config: &Config, url: Option<String>) -> Self {
        let base_url = url.unwrap_or_else(|| config.config.server_url.clone());
        let app = Self::with_client(PlayerClient::new(&base_url));
        info!("Using player API at {}", app.client.base_url());
        app
    }

    pub fn with_client(client: PlayerClient) -> Self {
        Self { client }
    }

    /// Runs the command described by `args` and writes the result to `out`.
    /// Only an index that is not a number, or a failing writer, produces an error.
    pub async fn run(&self, args: &[String], out: &mut impl Write) -> Result<Outcome> {
        if args.is_empty() {
            writeln!(out, "{}", USAGE)?;
            return Ok(Outcome::Usage);
        }
        let Some(command) = Command::parse(args) else {
            warn!("Invalid command line: {:?}", args);
            writeln!(out, "Invalid command")?;
            return Ok(Outcome::Invalid);
        };
        info!("Running {}", command);
        let listing = command == Command::List;
        let reply = self.execute(trace_dbg!(command)).await?;
        if reply.is_failed() {
            warn!("Request failed: {}", reply);
        }
        if listing {
            render::playlist(reply, out)?;
        } else {
            render::raw(reply, out)?;
        }
        Ok(Outcome::Completed)
    }

    async fn execute(&self, command: Command) -> Result<Reply> {
        let c = &self.client;
        let reply = match command {
            Command::List => c.get_playlist().await,
            Command::Play { path, playlist } => c.play_file(&path, playlist.as_deref()).await,
            Command::Index { index, playlist } => {
                let index: TrackIndex = index.parse()?;
                c.play_index(index, playlist.as_deref()).await
            }
            Command::Remove { index, playlist } => {
                let index: TrackIndex = index.parse()?;
                c.remove_from_playlist(index, playlist.as_deref()).await
            }
            Command::Rename { old, new } => c.rename_playlist(&old, &new).await,
            Command::Delete { name } => c.delete_playlist(&name).await,
            Command::Switch { name } => c.switch_playlist(&name).await,
        };
        Ok(reply)
    }
}
