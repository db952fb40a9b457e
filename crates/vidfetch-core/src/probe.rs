//! Filesystem existence checks used while resolving the URL list file.

use std::path::Path;

/// Answers whether a path exists. Read-only; never opens the file.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem. Directories count as existing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
