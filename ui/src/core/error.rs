//! Error types shared by the upload flow and the report renderer.

use std::path::PathBuf;

/// Failures of [`Session::submit_upload`](crate::core::session::Session::submit_upload).
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The session already switched to the dashboard; it accepts one upload.
    #[error("a document has already been uploaded for this session")]
    AlreadyUploaded,
    /// Title empty or no file chosen. Recoverable: the user fills the form and retries.
    #[error("both a title and a file are required")]
    MissingInput,
    /// Extension outside the upload allow-list.
    #[error("unsupported file type: {name}")]
    UnsupportedExtension { name: String },
    /// Writing the upload to disk failed (e.g. the uploads directory is missing).
    #[error("failed to write upload to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures loading a pre-rendered chart image.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("static asset not found: {path}")]
    NotFound { path: PathBuf },
    #[error("failed to read static asset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures of the external OKR extraction collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no extraction command configured")]
    NotConfigured,
    #[error("failed to launch extractor `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("extractor exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("extractor output is not a list of OKR tuples: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures producing the donut chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid chart markup: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// Anything that aborts a dashboard render pass.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Rendering was requested before a successful upload.
    #[error("no document has been uploaded yet")]
    NotReady,
    #[error("OKR extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
    /// The collaborator returned no tuples.
    #[error("OKR extraction returned no results for {path}")]
    ExtractionFailure { path: PathBuf },
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("chart rendering failed: {0}")]
    Chart(#[from] ChartError),
}

/// Failures reading the dashboard configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
