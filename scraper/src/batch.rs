use crate::cdx::locate_snapshot;
use crate::config::RunConfig;
use crate::error::Result;
use crate::extract::extract_fields;
use crate::fetch::{fetch_snapshot, Fetched};
use crate::report::{Outcome, ReportWriter, Row};
use crate::transport::Transport;
use crate::urls::load_urls;

/// Per-class counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub no_snapshot: usize,
    pub http_errors: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Success { .. } => self.succeeded += 1,
            Outcome::NoSnapshot => self.no_snapshot += 1,
            Outcome::HttpError(_) => self.http_errors += 1,
            Outcome::Failure(_) => self.failed += 1,
        }
    }
}

/// Locate, download and parse the latest snapshot of `url`.
///
/// Never fails: any error along the way is turned into [`Outcome::Failure`].
pub fn process_url(transport: &dyn Transport, archive_base: &str, url: &str) -> Outcome {
    match try_process_url(transport, archive_base, url) {
        Ok(outcome) => outcome,
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::from(e)).replace(['\r', '\n'], " ");
            log::warn!("  Error: {}", message);
            Outcome::Failure(message)
        }
    }
}

fn try_process_url(transport: &dyn Transport, archive_base: &str, url: &str) -> Result<Outcome> {
    log::info!("  Querying CDX API...");
    let snapshot = match locate_snapshot(transport, archive_base, url)? {
        Some(snapshot) => snapshot,
        None => {
            log::info!("  No snapshots in the archive for this URL.");
            return Ok(Outcome::NoSnapshot);
        }
    };
    log::info!("  Found snapshot: {}", snapshot.archive_url(archive_base));

    log::info!("  Downloading page...");
    let bytes = match fetch_snapshot(transport, archive_base, &snapshot)? {
        Fetched::Page(bytes) => bytes,
        Fetched::Status(status) => {
            log::warn!("  HTTP error: {}", status);
            return Ok(Outcome::HttpError(status));
        }
    };

    let fields = extract_fields(&bytes);
    if fields.fallback_used {
        log::warn!("  Title was not valid UTF-8, decoded as windows-1251");
    }
    log::info!("  Title: {}", fields.title);
    log::info!("  H1: {}", fields.h1);

    Ok(Outcome::Success {
        title: fields.title,
        h1: fields.h1,
    })
}

/// Process every URL in `config.input`, writing one row each to `config.output`.
///
/// The only fatal errors are a missing or unreadable input file and failures
/// writing the output; the output file is not created if the input is missing.
pub fn run_batch(transport: &dyn Transport, config: &RunConfig) -> Result<RunSummary> {
    log::info!("Reading URL list from {}...", config.input.display());
    let urls = load_urls(&config.input)?;
    log::info!("Found {} URLs to process.", urls.len());

    let mut writer = ReportWriter::create(&config.output)?;
    let mut summary = RunSummary::default();

    for (index, url) in urls.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", index + 1, urls.len(), url);
        let outcome = process_url(transport, &config.archive_base, url);
        writer.append(&Row::new(url, &outcome))?;
        summary.record(&outcome);
    }

    log::info!("Done! Results written to {}", config.output.display());
    Ok(summary)
}
