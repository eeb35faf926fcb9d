//! Pre-rendered chart images and inline embedding.

use std::fs;
use std::io;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::core::error::AssetError;

/// Read a static chart image. A missing file is [`AssetError::NotFound`]; there is no fallback image.
pub fn load_static_image(path: &Path) -> Result<Vec<u8>, AssetError> {
    match fs::read(path) {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded static chart");
            Ok(bytes)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(AssetError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(AssetError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// `data:` URI suitable for an `img` `src` attribute.
pub fn png_data_uri(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}
