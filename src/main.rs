use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use taskbook::cli::{
    Args, Commands, ConfigDiscovery, DemoArgs, DemoSettings, TaskbookConfig, run_demo,
};
use taskbook::task::parse_due_date;
use taskbook::{Clock, FixedClock, TaskRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let command = Args::parse().command_or_default();

    let (config, config_source) =
        ConfigDiscovery::load_with_source(command.config_override().map(|p| p.as_path()))?;

    // RUST_LOG wins over the configured filter; --verbose wins over both
    let filter = if command.verbose() {
        EnvFilter::new("taskbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting taskbook");
    match &config_source {
        Some(path) => info!("Loaded configuration from: {:?}", path),
        None => info!("No configuration file found, using defaults"),
    }

    match command {
        Commands::Demo(demo_args) => run_demo_mode(demo_args, config),
        Commands::ShowConfig { config } => {
            let report = ConfigDiscovery::discovery_report(config.as_deref())?;
            print!("{}", report);
            Ok(())
        }
    }
}

fn run_demo_mode(args: DemoArgs, config: TaskbookConfig) -> Result<()> {
    let clock: Arc<dyn Clock> = match &args.today {
        Some(today) => {
            let date = parse_due_date(today).context("Invalid --today value")?;
            Arc::new(FixedClock(date))
        }
        None => config.clock()?,
    };

    let settings = DemoSettings {
        clock,
        assignee: args.assignee.unwrap_or(config.assignee),
        reminder_message: config.reminder_message,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run_demo(&settings, &mut out)?;
    out.flush()?;

    if let Some(path) = args.dump_tasks {
        dump_tasks(&outcome.registry, &path)?;
    }

    Ok(())
}

fn dump_tasks(registry: &TaskRegistry, path: &Path) -> Result<()> {
    let json = registry
        .to_json_string()
        .context("Failed to serialize tasks")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write tasks to {}", path.display()))?;
    info!("Wrote {} tasks to {:?}", registry.len(), path);
    Ok(())
}
