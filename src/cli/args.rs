//! Command-line argument definitions using clap.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, FailurePolicy, TimestampSource};

/// Batch photo utilities.
#[derive(Parser, Debug)]
#[command(
    name = "photo-batch",
    version,
    about = "Convert JPEGs to WEBP and rename photos by date",
    long_about = "Two one-shot batch jobs over a single directory.\n\n\
                  convert: encode every JPEG as lossy WEBP and archive the original.\n\
                  rename:  rename every JPEG to <YYYY-MM-DD>_<uuid>.jpeg by its creation date."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, global = true, env = "PHOTO_BATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Hide per-file progress lines.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert JPEG files to WEBP and move the originals aside.
    Convert(ConvertArgs),
    /// Rename JPEG files to their creation date plus a unique token.
    Rename(RenameArgs),
    /// Print the effective configuration as TOML.
    ShowConfig,
}

/// Flags shared by both batch jobs.
#[derive(ClapArgs, Debug)]
pub struct BatchArgs {
    /// Keep going after a file fails and report all failures at the end.
    #[arg(long)]
    pub keep_going: bool,

    /// Show what would be done without changing any file.
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Draw a progress bar.
    #[arg(long)]
    pub progress: bool,
}

/// Arguments of the `convert` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ConvertArgs {
    /// Directory holding the JPEG files.
    #[arg(short = 'd', long = "dir")]
    pub input_directory: Option<PathBuf>,

    /// Name of the subdirectory originals are moved into.
    #[arg(long)]
    pub archive_dir: Option<String>,

    /// WEBP quality (0-100).
    #[arg(long)]
    pub quality: Option<f32>,

    /// Extensions to convert. Can be given multiple times.
    #[arg(long = "ext", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    #[command(flatten)]
    pub batch: BatchArgs,
}

/// Arguments of the `rename` subcommand.
#[derive(ClapArgs, Debug)]
pub struct RenameArgs {
    /// Directory holding the files to rename.
    #[arg(short = 'd', long = "dir")]
    pub directory: Option<PathBuf>,

    /// Extensions to rename. Can be given multiple times.
    #[arg(long = "ext", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Timestamp the new name is dated by.
    #[arg(long, value_enum)]
    pub timestamp: Option<TimestampArg>,

    #[command(flatten)]
    pub batch: BatchArgs,
}

/// CLI timestamp source argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimestampArg {
    /// File creation (birth) time.
    Created,
    /// Last modification time.
    Modified,
}

impl From<TimestampArg> for TimestampSource {
    fn from(arg: TimestampArg) -> Self {
        match arg {
            TimestampArg::Created => TimestampSource::Created,
            TimestampArg::Modified => TimestampSource::Modified,
        }
    }
}

impl BatchArgs {
    fn merge_into_config(&self, config: &mut Config) {
        if self.keep_going {
            config.options.failure_policy = FailurePolicy::Continue;
        }

        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.progress {
            config.options.progress_bar = true;
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if self.quiet {
            config.options.quiet = true;
        }

        match &self.command {
            Command::Convert(args) => {
                if let Some(dir) = &args.input_directory {
                    config.convert.input_directory = dir.clone();
                }

                if let Some(name) = &args.archive_dir {
                    config.convert.archive_dir_name = name.clone();
                }

                if let Some(quality) = args.quality {
                    config.convert.quality = quality;
                }

                if let Some(extensions) = &args.extensions {
                    config.convert.extensions = extensions.clone();
                }

                args.batch.merge_into_config(config);
            }
            Command::Rename(args) => {
                if let Some(dir) = &args.directory {
                    config.rename.directory = dir.clone();
                }

                if let Some(extensions) = &args.extensions {
                    config.rename.extensions = extensions.clone();
                }

                if let Some(timestamp) = args.timestamp {
                    config.rename.timestamp = timestamp.into();
                }

                args.batch.merge_into_config(config);
            }
            Command::ShowConfig => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_overrides() {
        let args = Args::try_parse_from([
            "photo-batch",
            "convert",
            "--dir",
            "pics",
            "--quality",
            "80",
            "--ext",
            "jpg",
            "png",
            "--keep-going",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.convert.input_directory, PathBuf::from("pics"));
        assert_eq!(config.convert.quality, 80.0);
        assert_eq!(config.convert.extensions, vec!["jpg", "png"]);
        assert_eq!(config.convert.archive_dir_name, "original");
        assert_eq!(config.options.failure_policy, FailurePolicy::Continue);
        assert!(!config.options.dry_run);
    }

    #[test]
    fn test_rename_overrides_and_global_flags() {
        let args = Args::try_parse_from([
            "photo-batch",
            "rename",
            "-d",
            "new",
            "--timestamp",
            "modified",
            "--dry-run",
            "--quiet",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.rename.directory, PathBuf::from("new"));
        assert_eq!(config.rename.timestamp, TimestampSource::Modified);
        assert!(config.options.dry_run);
        assert!(config.options.quiet);
        assert_eq!(config.options.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.convert, crate::config::ConvertConfig::default());
    }

    #[test]
    fn test_no_flags_keep_config_values() {
        let args = Args::try_parse_from(["photo-batch", "rename"]).unwrap();
        let mut config = Config::default();
        config.rename.output_extension = "jpg".to_string();
        config.options.dry_run = true;

        args.merge_into_config(&mut config);

        assert_eq!(config.rename.output_extension, "jpg");
        assert!(config.options.dry_run);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["photo-batch"]).is_err());
        assert!(Args::try_parse_from(["photo-batch", "rename", "--timestamp", "accessed"]).is_err());
    }
}
