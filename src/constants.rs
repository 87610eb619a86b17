pub const DEFAULT_QUALITY: f64 = 80.0;
pub const MIN_QUALITY_EXCLUSIVE: f64 = 0.0;
pub const MAX_QUALITY: f64 = 100.0;

/// Suffixes picked up by the locator. Matching is case sensitive, so
/// `photo.JPG` is not included unless `.JPG` is configured explicitly.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

pub const TARGET_EXTENSION: &str = "webp";

pub const CWEBP_BINARY: &str = "cwebp";
pub const CWEBP_VERSION_ARG: &str = "-version";
pub const CWEBP_DOWNLOAD_URL: &str = "https://developers.google.com/speed/webp/";

pub const REMOVE_PROMPT: &str = "Remove files upon conversion? (y/n) ";

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";

pub const ERROR_PREFIX: &str = "❌";
