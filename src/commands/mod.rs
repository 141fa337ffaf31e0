//! Command handlers for the CLI subcommands.
//!
//! Each handler is a thin layer over the library modules: it resolves
//! options (flags over config file over defaults), loads the grid and
//! delegates to the viewer or renderer. Errors bubble up as `anyhow`
//! results and are reported by `main`.

pub mod config;
pub mod info;
pub mod render;
pub mod view;

use crate::cli::LoadArgs;
use crate::config::Config;
use crate::loader::LoadOptions;

/// Merges CLI flags over the config file into loader options.
///
/// `fit_width` is the terminal-derived fallback used by the interactive
/// viewer; `--no-fit` disables downscaling entirely.
pub(crate) fn resolve_load_options(
    args: &LoadArgs,
    config: &Config,
    fit_width: Option<u32>,
) -> LoadOptions {
    let max_width = if args.no_fit {
        None
    } else {
        args.max_width.or(config.load.max_width).or(fit_width)
    };

    LoadOptions {
        max_width,
        alpha_threshold: args
            .alpha_threshold
            .unwrap_or(config.load.alpha_threshold),
    }
}
