use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;
use wayback_title_scraper::config::DEFAULT_ARCHIVE_BASE;
use wayback_title_scraper::{
    extract_fields, fetch_snapshot, locate_snapshot, Fetched, ReqwestTransport,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Please provide a URL and a fixture name");
        eprintln!("Usage: cargo run --bin save_snapshot_fixture <URL> <fixture_name>");
        std::process::exit(1);
    }

    let url = &args[1];
    let fixture_name = &args[2];
    let transport = ReqwestTransport::new();

    let snapshot = locate_snapshot(&transport, DEFAULT_ARCHIVE_BASE, url)
        .context("Failed to query the CDX API")?
        .with_context(|| format!("No snapshot in the archive for {}", url))?;
    println!("Fetching {}...", snapshot.archive_url(DEFAULT_ARCHIVE_BASE));

    let bytes = match fetch_snapshot(&transport, DEFAULT_ARCHIVE_BASE, &snapshot)
        .context("Failed to download snapshot")?
    {
        Fetched::Page(bytes) => bytes,
        Fetched::Status(status) => anyhow::bail!("Snapshot returned HTTP {}", status),
    };

    let snapshots_dir = Path::new("src/tests/fixtures/snapshots");
    fs::create_dir_all(snapshots_dir).context("Failed to create snapshots directory")?;

    // Saved byte-for-byte so encoding problems survive into the fixture
    let file_path = snapshots_dir.join(format!("{}.html", fixture_name));
    fs::write(&file_path, &bytes).context("Failed to write snapshot file")?;

    println!("Saved {} bytes to {}", bytes.len(), file_path.display());

    let fields = extract_fields(&bytes);
    println!("Extraction results:");
    println!("  - Title: {}", fields.title);
    println!("  - H1: {}", fields.h1);
    println!("  - windows-1251 fallback: {}", fields.fallback_used);

    if fields.title.contains('\u{FFFD}') {
        println!("⚠️ Title still contains replacement characters after fallback");
    }

    Ok(())
}
