//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use vhostgen_core::{application::ports::Filesystem, error::VhostgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> VhostgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> VhostgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn conf_files(&self, dir: &Path) -> VhostgenResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "conf") {
                files.push(path);
            }
        }
        // Directory iteration order is platform-dependent; sort so the clean
        // pass logs deterministically.
        files.sort();
        Ok(files)
    }

    fn remove_file(&self, path: &Path) -> VhostgenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> vhostgen_core::error::VhostgenError {
    use vhostgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
