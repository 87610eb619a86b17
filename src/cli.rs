use crate::constants::{CWEBP_BINARY, DEFAULT_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webp-conv",
    about = "Convert PNG and JPEG images to WebP using Google's cwebp",
    long_about = "webp-conv walks a directory tree and converts every PNG, JPG and JPEG image it \
                  finds to WebP by calling the cwebp encoder. Existing .webp files are never \
                  overwritten, and originals can optionally be removed after a successful conversion.",
    version,
    after_help = "EXAMPLES:\n  \
    webp-conv -s /path/to/pics -q 80\n  \
    webp-conv -s ./assets --remove\n  \
    webp-conv -e .png -e .PNG --cwebp /opt/libwebp/bin/cwebp"
)]
pub struct Args {
    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        allow_negative_numbers = true,
        help = "Compression factor for RGB channels (0-100]",
        long_help = "Quality passed to cwebp's -q option. Fractional values are allowed; \
                     the value must be greater than 0 and at most 100."
    )]
    pub quality: f64,

    #[arg(
        short = 's',
        long,
        help = "Source directory (default: current directory)",
        long_help = "Directory to scan recursively for images. Defaults to the current working directory."
    )]
    pub source: Option<PathBuf>,

    #[arg(
        long,
        help = "Remove source file upon conversion",
        long_help = "Delete each original after it was converted successfully. \
                     Asks for confirmation before anything is processed."
    )]
    pub remove: bool,

    #[arg(
        long,
        value_name = "PATH",
        default_value = CWEBP_BINARY,
        help = "cwebp executable to invoke"
    )]
    pub cwebp: PathBuf,

    #[arg(
        short = 'e',
        long = "extension",
        value_name = "SUFFIX",
        help = "File name suffix to convert, repeatable (default: .png .jpg .jpeg)",
        long_help = "Replace the set of file name suffixes that are picked up. Matching is case \
                     sensitive, so pass both .jpg and .JPG to convert either."
    )]
    pub extensions: Vec<String>,

    #[arg(long, conflicts_with = "verbose", help = "Only print errors, warnings and the summary")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Log every conversion")]
    pub verbose: bool,
}
