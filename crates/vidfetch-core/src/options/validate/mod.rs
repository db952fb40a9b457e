//! Ordered argument checks. Later steps assume every earlier one passed, so
//! the order of [`STEPS`] must not change.

mod error;

use std::path::Path;

use super::{Invocation, ParsedOptions};
use crate::probe::PathProbe;

pub use error::{ValidationError, ValidationErrorKind};

const URLS_FILE_EXTENSION: &str = ".txt";

/// What a step can see besides the options it transforms.
struct Context<'a> {
    arg_count: usize,
    probe: &'a dyn PathProbe,
}

type Step = fn(ParsedOptions, &Context<'_>) -> Result<ParsedOptions, ValidationError>;

const STEPS: [(&str, Step); 6] = [
    ("no_args_request", no_args_request),
    ("required_source_present", required_source_present),
    ("mutual_exclusion", mutual_exclusion),
    ("url_list_shape", url_list_shape),
    ("file_extension_recovery", file_extension_recovery),
    ("normalize", normalize_step),
];

/// Runs every check in order and returns the normalized options.
///
/// Stops at the first failing check. A [`ValidationErrorKind::GracefulStop`]
/// means the caller should print help and exit successfully.
pub fn validate_and_normalize(
    invocation: Invocation,
    probe: &dyn PathProbe,
) -> Result<ParsedOptions, ValidationError> {
    let Invocation { arg_count, options } = invocation;
    let ctx = Context { arg_count, probe };

    let options = STEPS.iter().try_fold(options, |options, (name, step)| {
        tracing::trace!(step = %name, "running argument check");
        step(options, &ctx).inspect_err(|err| {
            tracing::debug!(step = %name, kind = ?err.kind, "argument check failed");
        })
    })?;

    tracing::debug!(urls = options.urls().len(), "arguments validated");
    Ok(options)
}

/// Folds `video_urls_file` into `video_urls` as a single-element list.
///
/// Options without a file path are returned unchanged, so applying this
/// twice gives the same result as applying it once.
pub fn normalize(mut options: ParsedOptions) -> ParsedOptions {
    if let Some(path) = options.video_urls_file.take() {
        options.video_urls = Some(vec![path]);
    }
    options
}

fn no_args_request(
    options: ParsedOptions,
    ctx: &Context<'_>,
) -> Result<ParsedOptions, ValidationError> {
    if ctx.arg_count == 0 {
        return Err(ValidationErrorKind::GracefulStop.into());
    }
    Ok(options)
}

fn required_source_present(
    options: ParsedOptions,
    _ctx: &Context<'_>,
) -> Result<ParsedOptions, ValidationError> {
    if options.video_urls.is_none() && options.video_urls_file.is_none() {
        return Err(ValidationErrorKind::MissingRequiredArgument.into());
    }
    Ok(options)
}

fn mutual_exclusion(
    options: ParsedOptions,
    _ctx: &Context<'_>,
) -> Result<ParsedOptions, ValidationError> {
    // An empty list still counts as given.
    if options.video_urls.is_some() && options.video_urls_file.is_some() {
        return Err(ValidationErrorKind::ConflictingArguments.into());
    }
    Ok(options)
}

fn url_list_shape(
    options: ParsedOptions,
    _ctx: &Context<'_>,
) -> Result<ParsedOptions, ValidationError> {
    match options.video_urls.as_deref() {
        Some([]) => Err(ValidationErrorKind::MissingRequiredArgument.into()),
        Some([first, ..]) if first.ends_with(URLS_FILE_EXTENSION) => {
            Err(ValidationErrorKind::WrongInputForUrlsFlag.into())
        }
        _ => Ok(options),
    }
}

/// Windows shells hide known extensions, so users often type `list` for
/// `list.txt`. Accept the path as given, else with `.txt` appended.
fn file_extension_recovery(
    mut options: ParsedOptions,
    ctx: &Context<'_>,
) -> Result<ParsedOptions, ValidationError> {
    let Some(path) = options.video_urls_file.as_deref() else {
        return Ok(options);
    };

    if ctx.probe.exists(Path::new(path)) {
        return Ok(options);
    }

    let with_extension = format!("{path}{URLS_FILE_EXTENSION}");
    if !ctx.probe.exists(Path::new(&with_extension)) {
        return Err(ValidationErrorKind::InputFileNotFound {
            path: path.to_string(),
        }
        .into());
    }

    tracing::debug!(from = %path, to = %with_extension, "appended missing extension to URL list file");
    options.video_urls_file = Some(with_extension);
    Ok(options)
}

fn normalize_step(
    options: ParsedOptions,
    _ctx: &Context<'_>,
) -> Result<ParsedOptions, ValidationError> {
    Ok(normalize(options))
}
