//! External image converters.
//!
//! The orchestrator only talks to the [`Converter`] trait, so the `cwebp`
//! subprocess can be swapped for another tool or a test double.

use crate::constants::{CWEBP_BINARY, CWEBP_VERSION_ARG};
use crate::error::{ConversionError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A tool that turns one image file into another.
pub trait Converter {
    /// Returns the name used in log lines and error messages.
    fn name(&self) -> &str;

    /// Verifies the tool can be invoked at all.
    fn check_available(&self) -> Result<()>;

    /// Converts `source` into `dest` at the given quality, blocking until done.
    ///
    /// `dest` is created by the tool; callers make sure it does not exist yet.
    fn convert(&self, source: &Path, dest: &Path, quality: f64) -> Result<()>;
}

/// Google's `cwebp` command line encoder.
#[derive(Debug, Clone)]
pub struct Cwebp {
    binary: PathBuf,
    name: String,
}

impl Cwebp {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        let binary = binary.into();
        let name = binary.to_string_lossy().into_owned();
        Self { binary, name }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for Cwebp {
    fn default() -> Self {
        Self::new(CWEBP_BINARY)
    }
}

impl Converter for Cwebp {
    fn name(&self) -> &str {
        &self.name
    }

    fn check_available(&self) -> Result<()> {
        let status = Command::new(&self.binary)
            .arg(CWEBP_VERSION_ARG)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                log::debug!("{} {} exited with {}", self.name, CWEBP_VERSION_ARG, status);
                Err(ConversionError::ToolUnavailable {
                    tool: self.name.clone(),
                })
            }
            Err(e) => {
                log::debug!("failed to spawn {}: {}", self.name, e);
                Err(ConversionError::ToolUnavailable {
                    tool: self.name.clone(),
                })
            }
        }
    }

    fn convert(&self, source: &Path, dest: &Path, quality: f64) -> Result<()> {
        log::debug!(
            "running {} -q {} {:?} -o {:?}",
            self.name,
            quality,
            source,
            dest
        );

        let output = Command::new(&self.binary)
            .arg("-q")
            .arg(quality.to_string())
            .arg(source)
            .arg("-o")
            .arg(dest)
            .stdin(Stdio::null())
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !stderr.trim().is_empty() {
            log::debug!("{} stderr: {}", self.name, stderr.trim());
        }

        if !output.status.success() {
            return Err(ConversionError::ConversionTool {
                tool: self.name.clone(),
                input: source.to_path_buf(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(())
    }
}
