//! Filesystem module.
//!
//! Provides:
//! - Directory listing with extension filtering
//! - Directory creation and file moves
//! - Filename generation and validation

pub mod naming;
pub mod paths;
pub mod scan;

pub use naming::{dated_file_name, validate_path_component, webp_file_name, WEBP_EXTENSION};
pub use paths::{ensure_dir, move_file, rename_no_clobber};
pub use scan::{list_matching, ExtensionFilter, SourceFile};
