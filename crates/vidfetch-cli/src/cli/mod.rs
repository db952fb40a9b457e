//! CLI for the vidfetch video downloader.

mod aliases;
mod report;

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use vidfetch_core::config::{self, VidfetchConfig};
use vidfetch_core::logging;
use vidfetch_core::options::{
    validate_and_normalize, Invocation, ParsedOptions, DEFAULT_OUTPUT_DIRECTORY,
};
use vidfetch_core::probe::FsProbe;

use aliases::expand_legacy_aliases;

pub use report::report_error;

/// Top-level CLI for vidfetch.
///
/// `-V` belongs to `--videoUrls`, so there is no short version flag.
#[derive(Debug, Parser)]
#[command(name = "vidfetch")]
#[command(about = "vidfetch: download videos from a list of URLs", long_about = None)]
pub struct Cli {
    /// List of video urls
    #[arg(
        short = 'V',
        long = "videoUrls",
        visible_alias = "video-urls",
        num_args = 0..,
        value_name = "URL"
    )]
    pub video_urls: Option<Vec<String>>,

    /// Path to txt file containing the urls
    #[arg(
        short = 'F',
        long = "videoUrlsFile",
        visible_alias = "video-urls-file",
        value_name = "FILE"
    )]
    pub video_urls_file: Option<String>,

    #[arg(short = 'u', long)]
    pub username: Option<String>,

    #[arg(
        short = 'o',
        long = "outputDirectory",
        visible_alias = "output-directory",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIRECTORY
    )]
    pub output_directory: String,

    /// Do not display video thumbnails
    #[arg(long = "noThumbnails", visible_aliases = ["no-thumbnails", "nthumb"])]
    pub no_thumbnails: bool,

    /// Disable video download and print metadata information to the console
    #[arg(short = 's', long)]
    pub simulate: bool,

    /// Print additional information to the console (use this before opening an issue on GitHub)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl From<Cli> for ParsedOptions {
    fn from(cli: Cli) -> Self {
        Self {
            video_urls: cli.video_urls,
            // `-F ""` names no file at all.
            video_urls_file: cli.video_urls_file.filter(|path| !path.is_empty()),
            username: cli.username,
            output_directory: cli.output_directory,
            no_thumbnails: cli.no_thumbnails,
            simulate: cli.simulate,
            verbose: cli.verbose,
        }
    }
}

/// Parses raw arguments (program name first). Returns the number of
/// user-supplied arguments alongside the parsed CLI.
fn parse_args<I, T>(raw_args: I) -> Result<(usize, Cli), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = expand_legacy_aliases(raw_args);
    let arg_count = args.len().saturating_sub(1);
    let cli = Cli::try_parse_from(args)?;
    Ok((arg_count, cli))
}

/// `--verbose` output belongs on the console, whatever the config says.
fn logs_to_file(cfg: &VidfetchConfig, verbose: bool) -> bool {
    cfg.log_to_file && !verbose
}

fn init_logging(cfg: &VidfetchConfig, verbose: bool) {
    let filter = cfg.log_filter.as_deref();
    if !logs_to_file(cfg, verbose) {
        logging::init_logging_stderr(filter, verbose);
        return;
    }
    if let Err(err) = logging::init_logging(filter, verbose) {
        logging::init_logging_stderr(filter, verbose);
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let (arg_count, cli) = parse_args(std::env::args_os())?;

        let loaded = config::load();
        let cfg = loaded.as_ref().cloned().unwrap_or_default();
        init_logging(&cfg, cli.verbose);
        match &loaded {
            Ok(cfg) => tracing::debug!("loaded config: {:?}", cfg),
            Err(err) => tracing::warn!("ignoring config: {:#}", err),
        }

        let options = validate_and_normalize(Invocation::new(arg_count, cli.into()), &FsProbe)?;
        tracing::info!(
            urls = options.urls().len(),
            output_directory = %options.output_directory,
            simulate = options.simulate,
            "arguments resolved"
        );

        print!("{}", report::summary(&options));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
