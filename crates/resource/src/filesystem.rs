//! Filesystem-based resource provider.
//!
//! Layout markup and tables are read from a single resource directory.
//! Names that would escape that directory are refused.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use trellis_traits::{ResourceError, ResourceProvider, SharedResourceData};

/// Loads resources relative to a base directory.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the directory does not exist yet.
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns `None` if the name is absolute or leaves the base directory.
    fn resolve_path_safe(&self, name: &str) -> Option<PathBuf> {
        if Path::new(name).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(name);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        if Path::new(name)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve_path_safe(path).ok_or_else(|| {
            ResourceError::NotFound(format!("{} (outside resource directory)", path))
        })?;

        log::trace!("Reading resource {}", full_path.display());
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_layout_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main.xml"), "<xml><View/></xml>").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("main.xml"));
        assert_eq!(provider.load_string("main.xml").unwrap(), "<xml><View/></xml>");
    }

    #[test]
    fn test_missing_layout_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(matches!(
            provider.load("missing.xml"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(!provider.exists("missing.xml"));
    }

    #[test]
    fn test_directories_are_not_resources() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("layouts")).unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("layouts"));
    }

    #[test]
    fn test_refuses_names_outside_base() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists("foo/../../bar"));
    }

    #[test]
    fn test_nested_names_resolve() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("layouts")).unwrap();
        fs::write(dir.path().join("layouts/card.xml"), "<View/>").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("layouts/card.xml").unwrap(), b"<View/>");
    }
}
