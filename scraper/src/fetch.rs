use crate::cdx::Snapshot;
use crate::error::Result;
use crate::transport::Transport;

/// Result of downloading a snapshot page.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// Raw body; decoding is left to the extractor.
    Page(Vec<u8>),
    /// The archive answered with a non-success status.
    Status(u16),
}

pub fn fetch_snapshot(
    transport: &dyn Transport,
    archive_base: &str,
    snapshot: &Snapshot,
) -> Result<Fetched> {
    let response = transport.get(&snapshot.archive_url(archive_base))?;
    if !response.is_success() {
        return Ok(Fetched::Status(response.status));
    }
    Ok(Fetched::Page(response.body))
}
