//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Breakpoint: MIC interpretation from a breakpoint rule table
#[derive(Parser)]
#[command(name = "breakpoint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "pretty", env = "BREAKPOINT_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Location of the rule table, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct RulesArg {
    /// Path to the rule table JSON (organism -> antibiotic -> ranges)
    #[arg(
        short = 'r',
        long = "rules",
        value_name = "FILE",
        env = "BREAKPOINT_RULES",
        default_value = "final_mic_rule_dict.json"
    )]
    pub path: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the MIC classification web form
    Serve {
        #[command(flatten)]
        rules: RulesArg,

        /// Address to bind
        #[arg(long, env = "BREAKPOINT_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port for web server
        #[arg(short, long, env = "PORT", default_value = "5000")]
        port: u16,

        /// Open the form in a browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Classify a single MIC value
    Classify {
        #[command(flatten)]
        rules: RulesArg,

        /// Organism name, exactly as in the table
        #[arg(value_name = "ORGANISM")]
        organism: String,

        /// Antibiotic name, exactly as in the table
        #[arg(value_name = "ANTIBIOTIC")]
        antibiotic: String,

        /// MIC value
        #[arg(value_name = "MIC", allow_negative_numbers = true)]
        mic: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List organisms, or antibiotics and ranges for one organism
    Rules {
        #[command(flatten)]
        rules: RulesArg,

        /// Organism to show in detail
        #[arg(value_name = "ORGANISM")]
        organism: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a rule table and report suspicious ranges
    Check {
        #[command(flatten)]
        rules: RulesArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error if any warning is found
        #[arg(long)]
        strict: bool,
    },
}

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Unknown log format: {}. Use pretty, compact, or json.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}
