//! Error types for argument validation.

/// Why the argument checks stopped.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    /// No arguments at all: show help and exit cleanly. Not a user error.
    #[error("")]
    GracefulStop,

    /// No URL source given, or `--videoUrls` given without values.
    #[error("You must specify a URLs source.\nValid options are --videoUrls or --videoUrlsFile.")]
    MissingRequiredArgument,

    /// Both URL sources given at once.
    #[error(
        "Too many URLs sources specified!\n\
         Please specify a single URLs source with either --videoUrls or --videoUrlsFile."
    )]
    ConflictingArguments,

    /// A `.txt` path passed where direct URLs are expected.
    #[error("Wrong input for option --videoUrls.\nTo read URLs from file, use --videoUrlsFile option.")]
    WrongInputForUrlsFlag,

    /// Neither the given path nor the path with `.txt` appended exists.
    #[error("Input URL list file not found.\nTried: {path} and {path}.txt")]
    InputFileNotFound { path: String },
}

impl ValidationError {
    pub fn is_graceful_stop(&self) -> bool {
        self.kind == ValidationErrorKind::GracefulStop
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }
}
