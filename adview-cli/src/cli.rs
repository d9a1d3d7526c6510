//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use adview_core::resize::Divider;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Binary name used in completions and man pages
pub const BIN_NAME: &str = "adview-cli";

/// Default screen width in dp used for rendering
pub const DEFAULT_WIDTH: f64 = 360.0;

/// Default screen height in dp used for rendering
pub const DEFAULT_HEIGHT: f64 = 800.0;

/// `AdView` command-line host for the three-region ad screen
#[derive(Parser)]
#[command(name = "adview-cli")]
#[command(author, version, about = "AdView command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to an ad configuration JSON file (bundled configuration if unset)
    #[arg(short, long, global = true, env = "ADVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Screen size used when laying out regions
#[derive(Clone, Copy, Debug, clap::Args)]
pub struct ScreenArgs {
    /// Screen width in dp
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Screen height in dp
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the screen as configured
    #[command(about = "Render the three regions with their current weights")]
    Show {
        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,

        #[command(flatten)]
        screen: ScreenArgs,
    },

    /// Simulate a divider drag
    #[command(about = "Drag a divider and print the resulting weights")]
    Drag {
        /// Divider to drag
        #[arg(short, long, value_enum)]
        divider: DividerArg,

        /// Move events in dp (pixels when --density is given)
        #[arg(
            required = true,
            allow_negative_numbers = true,
            num_args = 1..,
            value_parser = crate::util::parse_finite
        )]
        deltas: Vec<f64>,

        /// Treat deltas as physical pixels at this display density
        #[arg(long, value_parser = crate::util::parse_finite)]
        density: Option<f64>,

        /// End the gesture as interrupted instead of released
        #[arg(long)]
        cancel: bool,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,

        #[command(flatten)]
        screen: ScreenArgs,
    },

    /// Print region heights for a screen size
    #[command(about = "Compute region heights for given weights and screen size")]
    Layout {
        /// Weights as TOP,MIDDLE,BOTTOM (configured weights if unset)
        #[arg(short, long, value_parser = crate::util::parse_weights)]
        weights: Option<adview_core::models::WeightTriple>,

        #[command(flatten)]
        screen: ScreenArgs,
    },

    /// List weight and content presets
    #[command(about = "List the available weight and content presets")]
    Presets {
        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Apply a named preset
    #[command(about = "Apply a weight or content preset and render the result")]
    Apply {
        /// Preset name (see `presets`)
        name: String,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,

        #[command(flatten)]
        screen: ScreenArgs,
    },

    /// Validate a configuration file
    #[command(about = "Check a configuration file without falling back")]
    Validate {
        /// Configuration file to check
        file: PathBuf,
    },

    /// Fetch campaign content from the simulated remote source
    #[command(about = "Fetch campaign content from the simulated remote source")]
    Fetch {
        /// Campaign identifier
        campaign: String,

        /// Simulated latency in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Write the script into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Generate man pages
    #[command(about = "Generate man pages")]
    Manpage {
        /// Write one page per command into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON document
    Json,
}

/// Divider selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DividerArg {
    /// Between the top and middle regions
    TopMiddle,
    /// Between the middle and bottom regions
    MiddleBottom,
}

impl From<DividerArg> for Divider {
    fn from(arg: DividerArg) -> Self {
        match arg {
            DividerArg::TopMiddle => Self::TopMiddle,
            DividerArg::MiddleBottom => Self::MiddleBottom,
        }
    }
}
