//! Filesystem adapter for the template store port.
//!
//! Templates are JSON files under a single base directory. Filenames are
//! normalized logically and must stay inside that directory.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Template store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    base_dir: PathBuf,
}

impl FilesystemTemplateStore {
    /// Create a store rooted at `base_dir`. An empty path means the working directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of `filename` inside the base directory, or an error if it escapes it.
    pub(crate) fn resolve(&self, filename: &str) -> Result<PathBuf, AppError> {
        let relative = normalize_within_root(Path::new(filename))
            .ok_or_else(|| AppError::TemplatePathOutsideBase(filename.to_string()))?;
        Ok(self.base_dir.join(relative))
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn load_template(&self, filename: &str) -> Result<Value, AppError> {
        let path = self.resolve(filename)?;
        debug!(path = %path.display(), "loading template");

        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::TemplateNotFound { filename: filename.to_string() },
            ErrorKind::PermissionDenied => {
                AppError::TemplatePermission { filename: filename.to_string() }
            }
            _ => e.into(),
        })?;

        serde_json::from_str(&content).map_err(|e| AppError::MalformedTemplate {
            filename: filename.to_string(),
            details: e.to_string(),
        })
    }
}

/// Normalize a relative path by resolving `.` and `..` logically.
///
/// Returns `None` for absolute paths, for `..` that would climb above the
/// root, and for paths that normalize to nothing. Does not access the filesystem.
pub(crate) fn normalize_within_root(path: &Path) -> Option<PathBuf> {
    let mut ret = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => return None,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                ret.pop();
                depth -= 1;
            }
            Component::Normal(c) => {
                ret.push(c);
                depth += 1;
            }
        }
    }

    if depth == 0 { None } else { Some(ret) }
}
