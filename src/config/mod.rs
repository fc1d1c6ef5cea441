pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Single-page portfolio: content, navigation and contact form")]
pub struct CliConfig {
    /// Path to a TOML content file (built-in content when omitted)
    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the page, or a single section
    Show {
        #[arg(long)]
        section: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate the content
    Validate,

    /// Scroll to a section anchor and report the resulting scroll commands
    Navigate { section_id: String },

    /// Fill in and submit the contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Wait until the confirmation resets
        #[arg(long)]
        wait: bool,
    },
}
