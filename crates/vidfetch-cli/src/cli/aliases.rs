//! Single-dash multi-letter aliases clap cannot declare as short flags.

use std::ffi::OsString;

const LEGACY_ALIASES: &[(&str, &str)] = &[("-nthumb", "--noThumbnails")];

/// Rewrites legacy aliases to their long form. Only whole tokens match.
pub(super) fn expand_legacy_aliases<I, T>(raw_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    raw_args
        .into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| match LEGACY_ALIASES.iter().find(|(alias, _)| arg == *alias) {
            Some((_, long)) => OsString::from(*long),
            None => arg,
        })
        .collect()
}
