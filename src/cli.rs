//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pixflip",
    version = crate::version(),
    about = "View, rotate and mirror images as ANSI color grids in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open an image in the interactive viewer
    View {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        #[arg(value_hint = ValueHint::FilePath)]
        image: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Render an image once to stdout (pipeable, no terminal required)
    Render {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        #[arg(value_hint = ValueHint::FilePath)]
        image: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Show image and grid information without rendering
    Info {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        #[arg(value_hint = ValueHint::FilePath)]
        image: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Loader flags shared by the image subcommands.
///
/// Flags override the config file, which overrides the built-in defaults.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Downscale the image to at most this many grid columns
    #[arg(long, value_name = "COLS")]
    pub max_width: Option<u32>,

    /// Alpha values below this threshold render as white (0 disables)
    #[arg(long, value_name = "ALPHA")]
    pub alpha_threshold: Option<u8>,

    /// Never downscale, even when the image is wider than the terminal
    #[arg(long)]
    pub no_fit: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}
