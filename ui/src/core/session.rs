//! Per-user session: which screen is active and what was uploaded.
//!
//! A session starts in [`Mode::Upload`] and moves to [`Mode::Dashboard`]
//! exactly once, inside [`Session::submit_upload`]. Nothing moves it back.

use std::path::{Path, PathBuf};

use super::error::{ExtractionError, UploadError};
use super::extract::{OkrExtractor, OkrRecord};
use super::storage::{self, UploadedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Upload,
    Dashboard,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    mode: Mode,
    uploaded_file_path: Option<PathBuf>,
    file_title: Option<String>,
    extraction_cache: Option<Vec<OkrRecord>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn uploaded_file_path(&self) -> Option<&Path> {
        self.uploaded_file_path.as_deref()
    }

    pub fn file_title(&self) -> Option<&str> {
        self.file_title.as_deref()
    }

    /// Persist the upload and switch to the dashboard.
    ///
    /// Leaves the session untouched on every error. Once in dashboard mode
    /// every further call is [`UploadError::AlreadyUploaded`] and nothing is written.
    pub fn submit_upload(
        &mut self,
        title: &str,
        file: Option<UploadedFile>,
        uploads_dir: &Path,
    ) -> Result<(), UploadError> {
        if self.mode == Mode::Dashboard {
            tracing::warn!("upload rejected: session already shows a dashboard");
            return Err(UploadError::AlreadyUploaded);
        }
        let file = match file {
            Some(file) if !title.is_empty() => file,
            _ => {
                tracing::warn!("upload rejected: title or file missing");
                return Err(UploadError::MissingInput);
            }
        };
        if !file.has_allowed_extension() {
            tracing::warn!(name = %file.name, "upload rejected: unsupported extension");
            return Err(UploadError::UnsupportedExtension { name: file.name });
        }

        let path = storage::persist_upload(uploads_dir, &file)?;
        tracing::info!(path = %path.display(), title, "upload accepted; switching to dashboard");

        self.uploaded_file_path = Some(path);
        self.file_title = Some(title.to_string());
        self.mode = Mode::Dashboard;
        Ok(())
    }

    /// Records cached for the current upload, when memoisation stored any.
    pub fn cached_extraction(&self) -> Option<&[OkrRecord]> {
        self.extraction_cache.as_deref()
    }

    /// Run the extractor for the current upload once and keep its records,
    /// so later renders skip the collaborator. A no-op before an upload.
    pub fn prime_extraction(&mut self, extractor: &dyn OkrExtractor) -> Result<(), ExtractionError> {
        let Some(path) = self.uploaded_file_path.as_deref() else {
            return Ok(());
        };
        let records = extractor.extract(path)?;
        tracing::debug!(count = records.len(), "cached extraction for session");
        self.extraction_cache = Some(records);
        Ok(())
    }
}
