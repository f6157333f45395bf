//! Text artifacts and their content hashes
//!
//! An artifact is one uploaded description (source or QA) held in memory.
//! Its Blake3 hash keys the scenario cache, so identical text is analysed
//! once.

use crate::error::{IngestError, IngestResult};
use scov_core::ScenarioSide;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// A 32-byte Blake3 content hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Compute Blake3 hash of arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// One source or QA description
#[derive(Debug, Clone, Serialize)]
pub struct TextArtifact {
    name: String,
    side: ScenarioSide,
    text: String,
    hash: ContentHash,
}

impl TextArtifact {
    /// Create artifact, hashing its text
    #[must_use]
    pub fn new(name: impl Into<String>, side: ScenarioSide, text: impl Into<String>) -> Self {
        let text = text.into();
        let hash = ContentHash::compute(text.as_bytes());
        Self {
            name: name.into(),
            side,
            text,
            hash,
        }
    }

    /// Read a UTF-8 file into an artifact named after its path
    ///
    /// # Errors
    /// Returns [`IngestError::Io`] carrying the path if the read fails.
    pub async fn load(path: impl AsRef<Path>, side: ScenarioSide) -> IngestResult<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| IngestError::io_error(path, e))?;
        tracing::debug!(path = %path.display(), %side, bytes = text.len(), "loaded artifact");
        Ok(Self::new(path.display().to_string(), side, text))
    }

    /// File name (or label) the artifact was loaded from
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which side of the comparison this artifact feeds
    #[inline]
    #[must_use]
    pub fn side(&self) -> ScenarioSide {
        self.side
    }

    /// Raw text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Content hash of the text
    #[inline]
    #[must_use]
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Lowercased file extension of the name, if any
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
    }
}
