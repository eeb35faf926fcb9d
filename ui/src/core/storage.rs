//! Upload persistence: one blocking write into the uploads directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::UploadError;

/// Extensions accepted by the upload form (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "hwp"];

/// A file picked in the upload form, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Name as reported by the file picker; may include directories.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Final path component of [`name`](Self::name), if there is one.
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.name).file_name().and_then(|n| n.to_str())
    }

    pub fn has_allowed_extension(&self) -> bool {
        self.file_name()
            .and_then(|n| Path::new(n).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                ALLOWED_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false)
    }
}

/// Write `file` unchanged to `uploads_dir/<file name>`.
///
/// A same-named file is overwritten. The directory is not created; a missing
/// directory surfaces as [`UploadError::Io`].
pub fn persist_upload(uploads_dir: &Path, file: &UploadedFile) -> Result<PathBuf, UploadError> {
    let name = file.file_name().ok_or(UploadError::MissingInput)?;
    let path = uploads_dir.join(name);
    fs::write(&path, &file.bytes).map_err(|source| UploadError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = file.bytes.len(), "upload written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(UploadedFile::new("plan.PDF", b"x".to_vec()).has_allowed_extension());
        assert!(UploadedFile::new("/home/me/plan.hwp", b"x".to_vec()).has_allowed_extension());
        assert!(!UploadedFile::new("plan.txt", b"x".to_vec()).has_allowed_extension());
        assert!(!UploadedFile::new("pdf", b"x".to_vec()).has_allowed_extension());
    }

    #[test]
    fn persist_strips_directories_from_picker_names() {
        let dir = tempfile::tempdir().unwrap();
        let file = UploadedFile::new("../../elsewhere/plan.docx", b"doc".to_vec());
        let path = persist_upload(dir.path(), &file).unwrap();
        assert_eq!(path, dir.path().join("plan.docx"));
        assert_eq!(fs::read(&path).unwrap(), b"doc");
    }

    #[test]
    fn persist_overwrites_same_named_file() {
        let dir = tempfile::tempdir().unwrap();
        persist_upload(dir.path(), &UploadedFile::new("plan.pdf", b"first".to_vec())).unwrap();
        let path =
            persist_upload(dir.path(), &UploadedFile::new("plan.pdf", b"second".to_vec())).unwrap();
        assert_eq!(fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there");
        let err = persist_upload(&missing, &UploadedFile::new("plan.pdf", b"x".to_vec()))
            .unwrap_err();
        assert!(matches!(err, UploadError::Io { .. }));
        assert!(!missing.exists());
    }
}
