//! TaskLens command line: periodic screen capture for end-of-task review.
//!
//! Usage:
//!   tasklens start [TASK_NAME]     Start a capture session (Ctrl+C stops)
//!   tasklens analyze <SESSION_ID>  Regenerate review and summary
//!   tasklens info <SESSION_ID>     Show session information
//!   tasklens monitors <COMMAND>    Detect and test displays
//!   tasklens preset <COMMAND>      Manage named monitor presets

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "tasklens",
    about = "Periodic screen capture with reviewable session summaries",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a capture session; Ctrl+C stops it and generates the review
    Start {
        /// Task name recorded in the session metadata
        #[arg(default_value = "")]
        task_name: String,

        /// Seconds between captures
        #[arg(short, long)]
        interval: Option<u64>,

        /// Displays to capture: "all", "primary", or a 1-based list like "1,3"
        #[arg(short, long)]
        monitors: Option<String>,

        /// Directory that holds session folders
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of captures sampled into the review
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Regenerate the review (and summary) for a saved session
    Analyze {
        /// Session ID, i.e. the session folder name
        session_id: String,

        /// Directory that holds session folders
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of captures sampled into the review
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Show information about a saved session
    Info {
        /// Session ID, i.e. the session folder name
        session_id: String,

        /// Directory that holds session folders
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect and test displays
    #[command(subcommand)]
    Monitors(MonitorsCommand),

    /// Manage named monitor presets
    #[command(subcommand)]
    Preset(PresetCommand),
}

#[derive(Subcommand)]
enum MonitorsCommand {
    /// List connected displays
    Detect,

    /// Capture a test shot of one display
    Test {
        /// Display number (1-based)
        display: usize,
    },

    /// Capture a test shot of every display
    TestAll,
}

#[derive(Subcommand)]
enum PresetCommand {
    /// Save a named monitor spec
    Save {
        /// Preset name
        name: String,

        /// Monitor spec, e.g. "1,3" or "primary"
        spec: String,

        /// Optional note shown by `preset list`
        description: Option<String>,
    },

    /// List saved presets
    List,

    /// Print the spec for a preset (unknown names fall back to "all")
    Get {
        /// Preset name
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tasklens_common::logging::init_logging(&tasklens_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Start {
            task_name,
            interval,
            monitors,
            output,
            samples,
        } => commands::start::run(task_name, interval, monitors, output, samples).await,
        Commands::Analyze {
            session_id,
            output,
            samples,
        } => commands::analyze::run(session_id, output, samples).await,
        Commands::Info { session_id, output } => commands::info::run(session_id, output),
        Commands::Monitors(command) => match command {
            MonitorsCommand::Detect => commands::monitors::detect(),
            MonitorsCommand::Test { display } => commands::monitors::test(display),
            MonitorsCommand::TestAll => commands::monitors::test_all().await,
        },
        Commands::Preset(command) => match command {
            PresetCommand::Save {
                name,
                spec,
                description,
            } => commands::preset::save(name, spec, description),
            PresetCommand::List => commands::preset::list(),
            PresetCommand::Get { name } => commands::preset::get(name),
        },
    }
}
