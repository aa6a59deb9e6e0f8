//! Command dispatch for mailmark

mod check_config;
mod html;
mod io;
mod transform;

use mailmark_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Transform {
            config,
            input,
            output,
            pretty,
        } => transform::execute(
            config.as_deref(),
            input.as_deref(),
            output.as_deref(),
            *pretty,
        ),
        Commands::CheckConfig { config } => check_config::execute(cli, config),
        Commands::Html { input } => html::execute(input.as_deref()),
    }
}
