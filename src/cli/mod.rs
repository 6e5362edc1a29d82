//! CLI-specific functionality for taskbook
//!
//! This module contains argument parsing, configuration discovery and the
//! demonstration driver.

pub mod args;
pub mod config;
pub mod demo;

pub use args::{Args, Commands, DemoArgs};
pub use config::{ConfigDiscovery, TaskbookConfig};
pub use demo::{DemoOutcome, DemoSettings, run_demo};
