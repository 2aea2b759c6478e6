//! Command-line interface.

pub mod args;

pub use args::{Args, BatchArgs, Command, ConvertArgs, RenameArgs, TimestampArg};
