pub mod cli;

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "lcrail-format")]
#[command(about = "Format rail schedule times, delays and train identifiers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a duration in seconds as <hours>H<minutes>
    Time {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Render a delay in seconds as +<hours>H<minutes>
    Delay {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Shift an RFC 3339 timestamp by a signed delay in seconds
    Merge {
        timestamp: String,
        #[arg(allow_negative_numbers = true)]
        delay_seconds: f64,
    },
    /// Extract the train service code from a raw identifier
    Id { raw: String },
}
