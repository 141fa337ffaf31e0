//! pixflip binary entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pixflip::cli::{Cli, Commands};
use pixflip::commands;
use pixflip::Config;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the rendered grid on stdout.
    // Silent unless PIXFLIP_LOG is set (e.g. PIXFLIP_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("PIXFLIP_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match &cli.command {
        Commands::View { image, load } => commands::view::handle_view(image, load, &config),
        Commands::Render { image, load } => commands::render::handle_render(image, load, &config),
        Commands::Info { image, load } => commands::info::handle_info(image, load, &config),
        Commands::Config { action } => commands::config::handle_config(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "pixflip", &mut std::io::stdout());
            Ok(())
        }
    }
}
