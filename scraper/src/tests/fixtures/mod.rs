use crate::error::{Result, ScrapeError};
use crate::transport::{HttpResponse, Transport};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

pub const ARCHIVE_BASE: &str = "http://archive.test";

/// Load a snapshot fixture as raw bytes
pub fn load_snapshot_fixture(fixture_name: &str) -> Vec<u8> {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name));
    fs::read(path).unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// CDX body with a header row and, if given, one capture.
pub fn cdx_body(capture: Option<(&str, &str)>) -> String {
    match capture {
        Some((timestamp, original)) => format!(
            r#"[["timestamp","original"],["{}","{}"]]"#,
            timestamp, original
        ),
        None => r#"[["timestamp","original"]]"#.to_string(),
    }
}

/// In-memory archive. Unknown URLs fail as if the connection was refused.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, HttpResponse>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> &mut Self {
        self.responses.insert(
            url.to_string(),
            HttpResponse {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Index answer for `url`, plus the page behind the capture when given.
    pub fn archive(
        &mut self,
        url: &str,
        timestamp: &str,
        page_status: u16,
        page: impl Into<Vec<u8>>,
    ) -> &mut Self {
        self.respond(
            &crate::cdx::cdx_query_url(ARCHIVE_BASE, url),
            200,
            cdx_body(Some((timestamp, url))),
        );
        self.respond(
            &format!("{}/web/{}/{}", ARCHIVE_BASE, timestamp, url),
            page_status,
            page,
        )
    }

    pub fn no_capture(&mut self, url: &str) -> &mut Self {
        self.respond(
            &crate::cdx::cdx_query_url(ARCHIVE_BASE, url),
            200,
            cdx_body(None),
        )
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses.get(url).cloned().ok_or_else(|| {
            ScrapeError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("connection refused: {}", url),
            ))
        })
    }
}
