use crate::constants::TARGET_EXTENSION;
use crate::converter::Converter;
use crate::error::{ConversionError, Result};
use crate::locate::{find_image_files, replace_extension};
use crate::options::ConversionOptions;
use crate::utils::calculate_compression_ratio;
use indicatif::ProgressBar;
use std::fmt;
use std::fs;
use std::path::Path;

/// Running size totals for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionTotals {
    pub count: usize,
    pub original_bytes: u64,
    pub converted_bytes: u64,
}

impl ConversionTotals {
    pub fn add(&mut self, original_bytes: u64, converted_bytes: u64) {
        self.count += 1;
        self.original_bytes += original_bytes;
        self.converted_bytes += converted_bytes;
    }

    /// Percentage of bytes saved; `0.0` when nothing was measured.
    pub fn saved_percent(&self) -> f64 {
        calculate_compression_ratio(self.original_bytes, self.converted_bytes)
    }
}

impl fmt::Display for ConversionTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "no files converted");
        }
        writeln!(f, "converted {} items", self.count)?;
        write!(
            f,
            "old size={} bytes, new size={} bytes, saved {:.2}%",
            self.original_bytes,
            self.converted_bytes,
            self.saved_percent()
        )
    }
}

/// Converts a single image next to itself as `.webp`.
///
/// The destination must not exist yet; an existing file stops the
/// conversion before the converter runs. The original is only removed
/// after the converter succeeded and both sizes were read.
///
/// # Returns
/// * `Ok((original_size, converted_size))` - Sizes in bytes
/// * `Err(ConversionError)` - The first failing step
pub fn convert_to_webp(
    path: &Path,
    options: &ConversionOptions,
    converter: &dyn Converter,
) -> Result<(u64, u64)> {
    let target = replace_extension(path, TARGET_EXTENSION);

    if target.is_file() {
        return Err(ConversionError::DestinationExists {
            input: path.to_path_buf(),
            target,
        });
    }

    converter.convert(path, &target, options.quality)?;

    let original_size = fs::metadata(path)?.len();
    let converted_size = fs::metadata(&target)?.len();

    if options.remove_original {
        fs::remove_file(path)?;
        log::debug!("removed {:?}", path);
    }

    Ok((original_size, converted_size))
}

/// Converts every matching image under `options.source`.
///
/// Files are processed one at a time in walk order and the batch stops at
/// the first error. Files converted before the failure stay converted.
pub fn convert_all(
    options: &ConversionOptions,
    converter: &dyn Converter,
    progress: &ProgressBar,
) -> Result<ConversionTotals> {
    let image_files = find_image_files(&options.source, &options.extensions)?;
    log::info!(
        "found {} image files under {:?}",
        image_files.len(),
        options.source
    );

    progress.set_length(image_files.len() as u64);

    let mut totals = ConversionTotals::default();
    for path in &image_files {
        progress.set_message(path.display().to_string());
        log::debug!("converting {:?} with {}", path, converter.name());

        let (original_size, converted_size) =
            convert_to_webp(path, options, converter).map_err(|e| {
                progress.abandon();
                e
            })?;

        log::info!(
            "{:?}: {} -> {} bytes, saved {:.2}%",
            path,
            original_size,
            converted_size,
            calculate_compression_ratio(original_size, converted_size)
        );
        totals.add(original_size, converted_size);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(totals)
}
