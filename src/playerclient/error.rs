use std::{error::Error, fmt::Display};

use reqwest::StatusCode;

/// Reasons a request to the player API may fail before a usable JSON value is obtained.
/// None of these mean the server rejected the request; those replies are returned as data.
#[derive(Debug)]
pub enum FailReason {
    URLParsing { url: String, reason: String },
    Querying(reqwest::Error),
    Text(reqwest::Error),
    Decoding {
        status: StatusCode,
        err: serde_json::Error,
    },
}

impl Error for FailReason {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FailReason::URLParsing { .. } => None,
            FailReason::Querying(e) | FailReason::Text(e) => Some(e),
            FailReason::Decoding { err, .. } => Some(err),
        }
    }
}

impl Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailReason::URLParsing { url, reason } => {
                write!(f, "Invalid server URL '{}': {}", url, reason)
            }
            FailReason::Querying(e) => {
                write!(f, "Request failed: {}", e)?;
                // reqwest keeps the actual cause (refused connection, DNS) in the source chain
                let mut source = e.source();
                while let Some(cause) = source {
                    write!(f, ": {}", cause)?;
                    source = cause.source();
                }
                Ok(())
            }
            FailReason::Text(e) => write!(f, "Failed to read response body: {}", e),
            FailReason::Decoding { status, err } => {
                write!(f, "Response ({}) is not valid JSON: {}", status, err)
            }
        }
    }
}
