use crate::constants::CWEBP_DOWNLOAD_URL;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{tool} unavailable, add it to PATH or get it here: {}", CWEBP_DOWNLOAD_URL)]
    ToolUnavailable { tool: String },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Invalid quality value: {0}. Must be greater than 0 and at most 100")]
    InvalidQuality(f64),

    #[error("Removal not confirmed, nothing was altered")]
    UserDeclined,

    #[error("WebP image for {input:?} already exists: {target:?}")]
    DestinationExists { input: PathBuf, target: PathBuf },

    #[error("{tool} failed on {input:?} ({}){}", exit_description(.code), stderr_suffix(.stderr))]
    ConversionTool {
        tool: String,
        input: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
