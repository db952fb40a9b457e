//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,vidfetch=info,vidfetch_core=info";
const VERBOSE_DIRECTIVES: &str = "vidfetch=debug,vidfetch_core=debug";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Filter directives in priority order: `RUST_LOG`, then the config file,
/// then the built-in default. `--verbose` appends debug for our crates.
pub fn filter_directives(env: Option<&str>, configured: Option<&str>, verbose: bool) -> String {
    let base = env
        .or(configured)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER);
    if verbose {
        format!("{base},{VERBOSE_DIRECTIVES}")
    } else {
        base.to_string()
    }
}

fn env_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(env.as_deref(), configured, verbose);
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `~/.local/state/vidfetch/vidfetch.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(configured: Option<&str>, verbose: bool) -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidfetch")?;
    let log_dir = xdg_dirs.get_state_home().join("vidfetch");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("vidfetch.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured, verbose))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;

    tracing::debug!("vidfetch logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Used when the config turns
/// file logging off or init_logging() fails.
pub fn init_logging_stderr(configured: Option<&str>, verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured, verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(
            filter_directives(None, None, false),
            "warn,vidfetch=info,vidfetch_core=info"
        );
    }

    #[test]
    fn env_beats_config() {
        assert_eq!(
            filter_directives(Some("trace"), Some("error"), false),
            "trace"
        );
        assert_eq!(filter_directives(None, Some("error"), false), "error");
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        assert_eq!(filter_directives(None, Some("  "), false), DEFAULT_FILTER);
    }

    #[test]
    fn verbose_appends_debug_for_our_crates() {
        let directives = filter_directives(None, Some("error"), true);
        assert_eq!(directives, "error,vidfetch=debug,vidfetch_core=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
