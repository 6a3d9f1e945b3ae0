pub mod getplaylist;

use std::fmt::Display;

use serde_json::{json, Value};

use super::error::FailReason;

/// Outcome of a single call to the player API.
/// Failures are carried as values so that callers never have to handle transport errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Whatever JSON the server sent back, untouched
    Data(Value),
    /// The request never produced JSON; holds a human readable reason
    Failed(String),
}

impl Reply {
    pub fn is_failed(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    /// Flattens the reply into JSON. Failures become `{"error": <message>}`, which cannot be told
    /// apart from a server payload that happens to have a top level "error" key.
    pub fn into_value(self) -> Value {
        match self {
            Reply::Data(v) => v,
            Reply::Failed(msg) => json!({ "error": msg }),
        }
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Reply::Data(v) => Some(v),
            Reply::Failed(_) => None,
        }
    }
}

impl From<Result<Value, FailReason>> for Reply {
    fn from(value: Result<Value, FailReason>) -> Self {
        match value {
            Ok(v) => Reply::Data(v),
            Err(e) => Reply::Failed(e.to_string()),
        }
    }
}

impl Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Data(v) => write!(f, "{}", v),
            Reply::Failed(msg) => write!(f, "{}", json!({ "error": msg })),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_failed_into_value() {
        let reply = Reply::Failed("connection refused".to_string());
        assert!(reply.is_failed());
        assert_eq!(reply.as_data(), None);
        assert_eq!(reply.into_value(), json!({"error": "connection refused"}));
    }

    #[test]
    fn test_data_unchanged() {
        let body = json!({"current": "rock", "files": []});
        let reply = Reply::Data(body.clone());
        assert_eq!(reply.to_string(), r#"{"current":"rock","files":[]}"#);
        assert_eq!(reply.into_value(), body);
    }

    #[test]
    fn test_error_shape_collides() {
        // A server payload with an "error" key renders the same as a local failure
        let server = Reply::Data(json!({"error": "boom"}));
        let local = Reply::Failed("boom".to_string());
        assert_ne!(server, local);
        assert_eq!(server.into_value(), local.into_value());
    }
}
