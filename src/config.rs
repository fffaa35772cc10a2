//! Clustering configuration.
//!
//! ```
//! use coref::CorefConfig;
//!
//! let config = CorefConfig::default().with_threshold(0.8).with_shingle_len(3);
//! assert!(config.validate().is_ok());
//! assert!(CorefConfig::default().with_threshold(1.2).validate().is_err());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use coref_core::{Error, Result};

use crate::shingle::{DEFAULT_SHINGLE_LEN, DEFAULT_SHINGLE_STRIDE};
use crate::similarity::validate_threshold;

/// Default Jaccard threshold for linking two mentions.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Parameters of one clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorefConfig {
    /// Minimum Jaccard similarity of shingle sets, in `[0, 1]`.
    pub similarity_threshold: f64,
    /// Shingle length in characters.
    pub shingle_len: usize,
    /// Step between shingle starts.
    pub shingle_stride: usize,
    /// Emit input mentions without any link as one-member clusters.
    pub include_singletons: bool,
    /// Verify similarity candidates on the rayon pool (`parallel` feature).
    pub parallel: bool,
}

impl Default for CorefConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            shingle_len: DEFAULT_SHINGLE_LEN,
            shingle_stride: DEFAULT_SHINGLE_STRIDE,
            include_singletons: true,
            parallel: false,
        }
    }
}

impl CorefConfig {
    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the shingle length.
    pub fn with_shingle_len(mut self, len: usize) -> Self {
        self.shingle_len = len;
        self
    }

    /// Set the shingle stride.
    pub fn with_shingle_stride(mut self, stride: usize) -> Self {
        self.shingle_stride = stride;
        self
    }

    /// Set whether unlinked input mentions become singleton clusters.
    pub fn with_singletons(mut self, include: bool) -> Self {
        self.include_singletons = include;
        self
    }

    /// Set whether candidate verification runs in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check preconditions.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` for a threshold outside `[0, 1]` or a zero
    /// shingle length or stride.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.similarity_threshold)?;
        if self.shingle_len == 0 {
            return Err(Error::invalid_config("shingle_len must be at least 1"));
        }
        if self.shingle_stride == 0 {
            return Err(Error::invalid_config("shingle_stride must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::parse(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json_str(&json)
    }
}
