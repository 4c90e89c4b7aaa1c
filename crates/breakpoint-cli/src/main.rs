//! Breakpoint CLI - MIC classification form and tools.

mod cli;
mod commands;
mod logging;
mod server;
mod web;

use breakpoint::ClassificationRequest;
use clap::Parser;
use cli::{Cli, Commands};
use server::state::ServerConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_format) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Serve {
            rules,
            host,
            port,
            open,
        } => commands::serve::run(
            ServerConfig {
                rules_path: rules.path,
                host,
                port,
                open_browser: open,
            },
            cli.verbose,
        ),

        Commands::Classify {
            rules,
            organism,
            antibiotic,
            mic,
            json,
        } => commands::classify::run(
            rules.path,
            ClassificationRequest::new(organism, antibiotic, mic),
            json,
            cli.verbose,
        ),

        Commands::Rules {
            rules,
            organism,
            json,
        } => commands::rules::run(rules.path, organism, json, cli.verbose),

        Commands::Check {
            rules,
            json,
            strict,
        } => commands::check::run(rules.path, json, strict, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
