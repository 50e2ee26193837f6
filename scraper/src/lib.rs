pub mod batch;
pub mod cdx;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod transport;
pub mod urls;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::batch::{process_url, run_batch, RunSummary};
pub use crate::cdx::{cdx_query_url, locate_snapshot, parse_cdx_response, Snapshot};
pub use crate::config::RunConfig;
pub use crate::error::{Result, ScrapeError};
pub use crate::extract::{extract_fields, sanitize_field, PageFields};
pub use crate::fetch::{fetch_snapshot, Fetched};
pub use crate::report::{row_for, Outcome, ReportWriter, Row};
pub use crate::transport::{HttpResponse, ReqwestTransport, Transport};
pub use crate::urls::{load_urls, parse_urls};
