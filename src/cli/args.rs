//! Command line argument parsing
//!
//! Subcommands:
//! - `demo`: Build the sample data and run every display operation once
//!   (also what runs when no subcommand is given)
//! - `show-config`: Print the discovered configuration as TOML

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "taskbook")]
#[command(author = "Taskbook Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Task and reminder bookkeeping demo")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// The requested subcommand, defaulting to a plain demo run
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Demo(DemoArgs::default()))
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build sample tasks, users, lists and projects and print them
    Demo(DemoArgs),
    /// Show which configuration file is used and its effective values
    ShowConfig {
        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct DemoArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Treat this date (YYYY-MM-DD) as today instead of reading the system clock
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<String>,
    /// Assignee used by the demo executor
    #[arg(long = "assignee", value_name = "NAME")]
    pub assignee: Option<String>,
    /// Write every task as JSON to this file after the run
    #[arg(long = "dump-tasks", value_name = "FILE")]
    pub dump_tasks: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Commands {
    /// Explicit configuration file, if one was passed
    pub fn config_override(&self) -> Option<&PathBuf> {
        match self {
            Self::Demo(args) => args.config.as_ref(),
            Self::ShowConfig { config } => config.as_ref(),
        }
    }

    pub fn verbose(&self) -> bool {
        matches!(self, Self::Demo(DemoArgs { verbose: true, .. }))
    }
}
