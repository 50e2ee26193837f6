use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "urls.txt";
pub const DEFAULT_OUTPUT: &str = "output.csv";
pub const DEFAULT_ARCHIVE_BASE: &str = "https://web.archive.org";

/// Everything a batch run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Scheme and host of the archive, without a trailing slash.
    pub archive_base: String,
}

impl RunConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        archive_base: &str,
    ) -> Self {
        RunConfig {
            input: input.into(),
            output: output.into(),
            archive_base: archive_base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::new(DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_ARCHIVE_BASE)
    }
}
