use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const HEADER: &str = "URL;Title;H1";
pub const SEPARATOR: char = ';';
pub const NO_SNAPSHOT: &str = "NO SNAPSHOT";

/// How processing of a single URL ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { title: String, h1: String },
    NoSnapshot,
    HttpError(u16),
    Failure(String),
}

/// One line of the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub url: String,
    pub title: String,
    pub h1: String,
}

impl Row {
    pub fn new(url: &str, outcome: &Outcome) -> Self {
        let (title, h1) = row_for(outcome);
        Row {
            url: url.to_string(),
            title,
            h1,
        }
    }

    /// Fields are written as-is; a `;` inside a field is not escaped.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}\n",
            self.url,
            self.title,
            self.h1,
            sep = SEPARATOR
        )
    }
}

/// Map an outcome to its `(title, h1)` pair of fields.
pub fn row_for(outcome: &Outcome) -> (String, String) {
    match outcome {
        Outcome::Success { title, h1 } => (title.clone(), h1.clone()),
        Outcome::NoSnapshot => (NO_SNAPSHOT.to_string(), NO_SNAPSHOT.to_string()),
        Outcome::HttpError(status) => {
            let marker = format!("HTTP {}", status);
            (marker.clone(), marker)
        }
        Outcome::Failure(message) => (format!("ERROR: {}", message), "ERROR".to_string()),
    }
}

/// Output file opened once per run. Each row is a single write, so the file
/// is complete up to the last appended row at any point.
pub struct ReportWriter {
    file: File,
}

impl ReportWriter {
    /// Create or truncate `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let mut file = File::create(path)?;
        file.write_all(format!("{}\n", HEADER).as_bytes())?;
        Ok(ReportWriter { file })
    }

    pub fn append(&mut self, row: &Row) -> Result<()> {
        self.file.write_all(row.to_line().as_bytes())?;
        self.file.flush()?;
        Ok(())
    }
}
