//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use breakpoint::RuleTable;

/// Server settings gathered from flags and environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Rule table file.
    pub rules_path: PathBuf,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Open a browser tab after binding.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from("final_mic_rule_dict.json"),
            host: "0.0.0.0".to_string(),
            port: 5000,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    /// Address to bind, as a host/port pair (host names are resolved).
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// URL a local browser should open.
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Shared application state.
///
/// The table is read-only after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// The loaded breakpoint table.
    pub table: Arc<RuleTable>,
    /// Organism → antibiotic names, pre-serialized for the form page.
    pub antibiotic_index: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(table: RuleTable) -> Result<Self, serde_json::Error> {
        let antibiotic_index = serde_json::to_string(&table.antibiotic_index())?;
        Ok(Self {
            table: Arc::new(table),
            antibiotic_index: Arc::from(antibiotic_index),
        })
    }
}
