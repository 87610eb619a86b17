pub mod batch;
pub mod cli;
pub mod confirm;
pub mod constants;
pub mod converter;
pub mod error;
pub mod locate;
pub mod logger;
pub mod options;
pub mod utils;

pub use batch::{convert_all, convert_to_webp, ConversionTotals};
pub use confirm::confirm_removal;
pub use converter::{Converter, Cwebp};
pub use error::{ConversionError, Result};
pub use locate::{find_image_files, has_extension, replace_extension};
pub use options::ConversionOptions;
