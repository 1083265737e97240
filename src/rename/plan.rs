use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_EXTENSION, DEFAULT_MARKER};
use crate::error::RenameError;

/// How the new file name is derived from the old one
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamePolicy {
    /// Substitute the marker when present instead of rebuilding the name
    pub(crate) replace_only: bool,
    pub(crate) marker: String,
    /// With leading dot, e.g. ".mp4"
    pub(crate) default_extension: String,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            replace_only: true,
            marker: DEFAULT_MARKER.to_string(),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl NamePolicy {
    /// Replace-only wins when the marker is in the name; every other case
    /// rebuilds "{project} - {date}{ext}"
    pub(crate) fn new_file_name(
        &self,
        file_name: &str,
        extension: &str,
        project: &str,
        date: &str,
    ) -> String {
        if self.replace_only && !self.marker.is_empty() && file_name.contains(&self.marker) {
            file_name.replacen(&self.marker, project, 1)
        } else {
            format!("{project} - {date}{extension}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenamePlan {
    pub(crate) original: PathBuf,
    pub(crate) folder: PathBuf,
    pub(crate) extension: String,
    pub(crate) new_name: String,
    pub(crate) new_path: PathBuf,
}

impl RenamePlan {
    pub(crate) fn build(
        original: &str,
        project: &str,
        date: &str,
        policy: &NamePolicy,
    ) -> Result<Self, RenameError> {
        let original = PathBuf::from(original);
        let Some(file_name) = original.file_name() else {
            return Err(RenameError::NoFileName { path: original });
        };
        let file_name = file_name.to_string_lossy().into_owned();
        let folder = original.parent().map(Path::to_path_buf).unwrap_or_default();

        let extension = match original.extension() {
            Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
            _ => policy.default_extension.clone(),
        };

        let new_name = policy.new_file_name(&file_name, &extension, project, date);
        // Must be a single path component so the file stays in its folder
        if Path::new(&new_name).file_name() != Some(OsStr::new(&new_name)) {
            return Err(RenameError::InvalidName { name: new_name });
        }
        let new_path = folder.join(&new_name);

        Ok(Self {
            original,
            folder,
            extension,
            new_name,
            new_path,
        })
    }
}
