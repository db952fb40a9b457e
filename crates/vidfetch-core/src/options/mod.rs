//! Options collected from the command line, and the checks that turn them
//! into the single URL list the rest of the tool consumes.
//!
//! Users see two URL sources (`--videoUrls` and `--videoUrlsFile`). Exactly one
//! must be given. After [`validate_and_normalize`] succeeds only `video_urls`
//! is populated; a file path is carried as its single element.

mod validate;

pub use validate::{normalize, validate_and_normalize, ValidationError, ValidationErrorKind};

/// Output directory used when `--outputDirectory` is not given.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "videos";

/// Options as parsed from the command line.
///
/// `video_urls` is `Some` whenever the flag was given, even with no values;
/// an empty list is "set" and is rejected later as a missing source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    pub video_urls: Option<Vec<String>>,
    pub video_urls_file: Option<String>,
    pub username: Option<String>,
    pub output_directory: String,
    pub no_thumbnails: bool,
    pub simulate: bool,
    pub verbose: bool,
}

impl Default for ParsedOptions {
    fn default() -> Self {
        Self {
            video_urls: None,
            video_urls_file: None,
            username: None,
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
            no_thumbnails: false,
            simulate: false,
            verbose: false,
        }
    }
}

impl ParsedOptions {
    /// URLs to process once normalized. Empty before validation succeeds
    /// or when no direct list was given.
    pub fn urls(&self) -> &[String] {
        self.video_urls.as_deref().unwrap_or_default()
    }
}

/// One process invocation: the parsed options plus how many raw arguments
/// the user typed (program name excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub arg_count: usize,
    pub options: ParsedOptions,
}

impl Invocation {
    pub fn new(arg_count: usize, options: ParsedOptions) -> Self {
        Self { arg_count, options }
    }
}
