//! JPEG to WEBP converter.
//!
//! Provides:
//! - Image decoding and lossy WEBP encoding
//! - The batch job that converts a directory and archives the originals

pub mod encoder;
pub mod job;

pub use encoder::{convert_file, decode_image, encode_webp};
pub use job::run_convert;
