//! Generated artifacts and their on-disk storage

use crate::error::Result;
use crate::extractor::wrap_as_markdown;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Timestamp format inserted into artifact file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Extension used when the requested file name has none
const FALLBACK_EXT: &str = "txt";

/// Attempts before giving up on finding a free name within one second
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Subdirectory of the OS temp dir used when no output directory is configured
pub const DEFAULT_SUBDIR: &str = "codeforge";

/// Which tab an artifact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Code,
    Tests,
    Docs,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Code => "code",
            ArtifactKind::Tests => "tests",
            ArtifactKind::Docs => "docs",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated output: the payload plus where it was stored.
///
/// The fenced markdown shown to users is derived from the payload, never
/// stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    kind: ArtifactKind,
    payload: String,
    fence_tag: String,
    path: Option<PathBuf>,
}

impl Artifact {
    /// Create an artifact that has not been persisted yet
    pub fn new(kind: ArtifactKind, payload: impl Into<String>, fence_tag: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
            fence_tag: fence_tag.into(),
            path: None,
        }
    }

    /// Attach the path the payload was written to
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn fence_tag(&self) -> &str {
        &self.fence_tag
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name of the persisted payload, if any
    pub fn file_name(&self) -> Option<&str> {
        self.path.as_deref()?.file_name()?.to_str()
    }

    /// Fenced markdown view of the payload
    pub fn rendered(&self) -> String {
        wrap_as_markdown(&self.payload, &self.fence_tag)
    }
}

/// Build `<stem>-<timestamp><.ext>`, or `<name>-<timestamp>.txt` without an extension.
///
/// Only the final component of `filename` is used. A non-zero `attempt`
/// adds `-<attempt>` after the timestamp.
pub fn artifact_file_name(filename: &str, timestamp: &NaiveDateTime, attempt: u32) -> String {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("artifact");
    let path = Path::new(name);

    let mut stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
    if attempt > 0 {
        stamp.push_str(&format!("-{}", attempt));
    }

    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), Some(ext)) => format!("{}-{}.{}", stem, stamp, ext),
        _ => format!("{}-{}.{}", name, stamp, FALLBACK_EXT),
    }
}

/// Whether `name` is a bare file name: one normal path component
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part.to_str() == Some(name)
    )
}

/// Writes artifacts as uniquely named text files in one directory.
///
/// Files are never overwritten and never cleaned up. The writer remembers
/// every name it issued; clones share that record.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    issued: Arc<Mutex<HashSet<String>>>,
}

impl ArtifactWriter {
    /// Writer targeting `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            issued: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Writer targeting `codeforge/` under the OS temporary directory
    pub fn temp() -> Self {
        Self::new(std::env::temp_dir().join(DEFAULT_SUBDIR))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `payload` under a timestamped variant of `filename` and return its path
    pub async fn persist(&self, payload: &str, filename: &str) -> Result<PathBuf> {
        self.persist_at(payload, filename, &Local::now().naive_local())
            .await
    }

    /// Same as [`persist`](Self::persist) with an explicit timestamp
    pub async fn persist_at(
        &self,
        payload: &str,
        filename: &str,
        timestamp: &NaiveDateTime,
    ) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut attempt = 0;
        loop {
            let path = self
                .output_dir
                .join(artifact_file_name(filename, timestamp, attempt));

            let opened = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;

            match opened {
                Ok(mut file) => {
                    file.write_all(payload.as_bytes()).await?;
                    file.flush().await?;
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        self.issued().insert(name.to_string());
                    }
                    info!("Persisted artifact to {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists && attempt < MAX_NAME_ATTEMPTS => {
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Whether this writer persisted a file named `name`
    pub fn has_issued(&self, name: &str) -> bool {
        self.issued().contains(name)
    }

    /// Resolve a name this writer issued to its path.
    ///
    /// Returns `None` for any other name, including files that exist in the
    /// output directory but were written by someone else.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if is_plain_file_name(name) && self.has_issued(name) {
            Some(self.output_dir.join(name))
        } else {
            None
        }
    }

    fn issued(&self) -> MutexGuard<'_, HashSet<String>> {
        self.issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ArtifactWriter {
    fn default() -> Self {
        Self::temp()
    }
}
