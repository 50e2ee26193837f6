use std::path::PathBuf;
use thiserror::Error;

/// Wrapped errors keep their cause as `source()` only, so `{:#}` on an
/// `anyhow::Error` prints each level of the chain exactly once.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("input file {} not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("request failed")]
    Http(#[from] reqwest::Error),

    /// The CDX index answered with a non-success status.
    #[error("index API returned HTTP {0}")]
    IndexStatus(u16),

    #[error("invalid index response")]
    Json(#[from] serde_json::Error),

    #[error("malformed index row: {0}")]
    MalformedIndexRow(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
