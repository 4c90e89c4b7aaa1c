//! Serve command - run the classification web form.

use breakpoint::{RuleTable, Severity, lint};
use colored::Colorize;
use tracing::{info, warn};

use crate::server::{
    app,
    state::{AppState, ServerConfig},
};

pub fn run(config: ServerConfig, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    // A table that fails to load stops startup before anything binds.
    let table = RuleTable::load(&config.rules_path)?;
    info!(
        path = %config.rules_path.display(),
        organisms = table.organism_count(),
        rules = table.rule_count(),
        "rule table loaded"
    );

    for issue in lint(&table) {
        if issue.severity == Severity::Warning {
            warn!("{}", issue);
        }
    }

    let state = AppState::new(table)?;

    // Print server info
    let url = config.local_url();
    println!();
    println!(
        "{} {}",
        "Serving MIC classifier at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Rules: {}", config.rules_path.display());
    println!("  Bind:  {}:{}", config.host, config.port);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let open_browser = config.open_browser;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &config, |_| {
        if open_browser {
            if let Err(e) = open::that(&url) {
                eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
            }
        }
    }))
}
