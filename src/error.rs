// src/error.rs
use std::{io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a run can stop. Each one is fatal; the CLI prints it and exits 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("malformed AXL response: {0}")]
    Xml(String),

    #[error("AXL version not found in getCCMVersion response")]
    VersionNotFound,

    #[error("process node not found: {0}")]
    NodeNotFound(String),

    /// The service selector is missing; the admin site served its login page instead.
    #[error("failed to find the service selector (possibly due to authentication problems)")]
    SelectorMissing,

    #[error("service {service:?}, parameter row {row}: {reason}")]
    ParamRow {
        service: String,
        row: usize,
        reason: &'static str,
    },

    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
