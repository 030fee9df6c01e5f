use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio: experience summary, page rendering and friends")]
pub struct CliConfig {
    /// Path to a profile TOML file; the bundled profile is used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Measure ongoing engagements up to this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub as_of: Option<NaiveDate>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the overall experience, e.g. "4 years and 9 months"
    Experience,

    /// List engagements and the merged intervals they cover
    Timeline,

    /// Render the whole portfolio page as text
    Page,

    /// List the navigation items
    Sections,

    /// Show which navigation item is active at a scroll position
    Spy {
        /// Scroll position in pixels
        #[arg(long, allow_negative_numbers = true)]
        scroll: f64,

        /// Top offsets of the sections, in navigation order
        #[arg(long, value_delimiter = ',')]
        tops: Vec<f64>,
    },

    /// Fetch a joke (best-effort)
    Joke,

    /// Validate and "send" a contact message. Nothing leaves this machine.
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}
