use crate::constants::{DEFAULT_QUALITY, IMAGE_EXTENSIONS, MAX_QUALITY, MIN_QUALITY_EXCLUSIVE};
use crate::error::{ConversionError, Result};
use std::path::PathBuf;

/// Validated configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub quality: f64,
    pub source: PathBuf,
    pub remove_original: bool,
    pub extensions: Vec<String>,
}

impl ConversionOptions {
    /// Builds options for a run over `source`.
    ///
    /// # Returns
    /// * `Err(ConversionError::InvalidQuality)` unless `0 < quality <= 100`
    /// * `Err(ConversionError::NotADirectory)` if `source` is not an existing directory
    pub fn new(quality: Option<f64>, source: PathBuf, remove_original: bool) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        validate_quality(quality)?;

        if !source.is_dir() {
            return Err(ConversionError::NotADirectory(source));
        }

        Ok(Self {
            quality,
            source,
            remove_original,
            extensions: IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        })
    }

    /// Replaces the default extension set. An empty list keeps the defaults.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }
}

pub fn validate_quality(quality: f64) -> Result<()> {
    if !quality.is_finite() || quality <= MIN_QUALITY_EXCLUSIVE || quality > MAX_QUALITY {
        return Err(ConversionError::InvalidQuality(quality));
    }
    Ok(())
}
