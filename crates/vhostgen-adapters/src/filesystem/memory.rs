//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vhostgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::VhostgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Seed a file without going through the port (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }
}

fn lock_error(path: &Path) -> vhostgen_core::error::VhostgenError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> VhostgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> VhostgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn conf_files(&self, dir: &Path) -> VhostgenResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| lock_error(dir))?;

        let mut files: Vec<_> = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|ext| ext == "conf"))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }

    fn remove_file(&self, path: &Path) -> VhostgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if inner.files.remove(path).is_none() {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/site.conf"), "x").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        assert!(fs.write_file(Path::new("/out/site.conf"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("/out/site.conf")).unwrap(), "x");
    }

    #[test]
    fn conf_files_only_sees_direct_children() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/out/a.conf", "");
        fs.seed_file("/out/b.txt", "");
        fs.seed_file("/out/deep/c.conf", "");

        let files = fs.conf_files(Path::new("/out")).unwrap();
        assert_eq!(files, vec![PathBuf::from("/out/a.conf")]);
    }
}
