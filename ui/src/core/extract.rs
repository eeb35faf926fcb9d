//! The OKR extraction collaborator.
//!
//! Extraction itself happens outside this crate. [`OkrExtractor`] is the seam;
//! [`CommandExtractor`] talks to an external program and [`StaticExtractor`]
//! serves canned records.

use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

use super::config::ExtractionConfig;
use super::error::ExtractionError;

/// One extracted row: the document content plus its objective and three key results.
///
/// Serialised as a 5-element array, matching the collaborator's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String, String, String)")]
#[serde(into = "(String, String, String, String, String)")]
pub struct OkrRecord {
    pub content: String,
    pub objective: String,
    pub key_result_1: String,
    pub key_result_2: String,
    pub key_result_3: String,
}

impl OkrRecord {
    pub fn key_results(&self) -> [&str; 3] {
        [
            self.key_result_1.as_str(),
            self.key_result_2.as_str(),
            self.key_result_3.as_str(),
        ]
    }
}

impl From<(String, String, String, String, String)> for OkrRecord {
    fn from(
        (content, objective, key_result_1, key_result_2, key_result_3): (
            String,
            String,
            String,
            String,
            String,
        ),
    ) -> Self {
        Self {
            content,
            objective,
            key_result_1,
            key_result_2,
            key_result_3,
        }
    }
}

impl From<OkrRecord> for (String, String, String, String, String) {
    fn from(record: OkrRecord) -> Self {
        (
            record.content,
            record.objective,
            record.key_result_1,
            record.key_result_2,
            record.key_result_3,
        )
    }
}

/// Turns an uploaded document into OKR records. Only the first record is displayed.
pub trait OkrExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<OkrRecord>, ExtractionError>;
}

/// Runs an external program and parses its stdout as `[[c, o, k1, k2, k3], ...]`.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: Option<String>,
    args: Vec<String>,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: Some(program.into()),
            args,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
        }
    }
}

impl OkrExtractor for CommandExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<OkrRecord>, ExtractionError> {
        let program = self.program.as_deref().ok_or(ExtractionError::NotConfigured)?;
        tracing::info!(program, path = %path.display(), "running OKR extractor");

        let output = Command::new(program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|source| ExtractionError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExtractionError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let records: Vec<OkrRecord> = serde_json::from_slice(&output.stdout)?;
        tracing::debug!(count = records.len(), "extractor returned records");
        Ok(records)
    }
}

/// Returns the same records for every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticExtractor {
    pub records: Vec<OkrRecord>,
}

impl StaticExtractor {
    pub fn new(records: Vec<OkrRecord>) -> Self {
        Self { records }
    }
}

impl OkrExtractor for StaticExtractor {
    fn extract(&self, _path: &Path) -> Result<Vec<OkrRecord>, ExtractionError> {
        Ok(self.records.clone())
    }
}
