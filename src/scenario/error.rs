use std::path::PathBuf;

use thiserror::Error;

use crate::net::NetError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported schema_version {0}")]
    UnsupportedSchema(u32),
    #[error("invalid scenario: {0}")]
    Invalid(String),
    #[error(transparent)]
    Net(#[from] NetError),
}
