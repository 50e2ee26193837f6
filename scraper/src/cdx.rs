use crate::error::{Result, ScrapeError};
use crate::transport::Transport;

/// A capture in the archive index.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub timestamp: String,
    pub original: String,
}

impl Snapshot {
    pub fn archive_url(&self, archive_base: &str) -> String {
        format!("{}/web/{}/{}", archive_base, self.timestamp, self.original)
    }
}

/// Query for the newest status-200 capture of `url`.
pub fn cdx_query_url(archive_base: &str, url: &str) -> String {
    format!(
        "{}/cdx/search/cdx?url={}&output=json&fl=timestamp,original&limit=1&filter=statuscode:200&sort=reverse",
        archive_base,
        urlencoding::encode(url)
    )
}

/// Parse a CDX JSON response. Row 0 is the field header, row 1 the capture.
pub fn parse_cdx_response(body: &str) -> Result<Option<Snapshot>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let rows: Vec<Vec<serde_json::Value>> = serde_json::from_str(body)?;
    let row = match rows.get(1) {
        Some(row) => row,
        None => return Ok(None),
    };

    match (
        row.first().and_then(|v| v.as_str()),
        row.get(1).and_then(|v| v.as_str()),
    ) {
        (Some(timestamp), Some(original)) => Ok(Some(Snapshot {
            timestamp: timestamp.to_string(),
            original: original.to_string(),
        })),
        _ => Err(ScrapeError::MalformedIndexRow(
            serde_json::Value::Array(row.clone()).to_string(),
        )),
    }
}

pub fn locate_snapshot(
    transport: &dyn Transport,
    archive_base: &str,
    url: &str,
) -> Result<Option<Snapshot>> {
    let response = transport.get(&cdx_query_url(archive_base, url))?;
    if !response.is_success() {
        return Err(ScrapeError::IndexStatus(response.status));
    }
    parse_cdx_response(&String::from_utf8_lossy(&response.body))
}
