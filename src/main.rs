//! clcnt CLI - serve the calorie API or work with the database directly

use clap::{Parser, Subcommand, ValueEnum};
use clcnt::config::{self, ClcntConfig, Settings};
use clcnt::ui::{self, Icons};
use clcnt::{DayCount, Entry, Registry, window};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "clcnt")]
#[command(version)]
#[command(about = "Calorie counter - track food entries and daily calorie averages")]
#[command(long_about = r#"
clcnt records food entries (food, calories, timestamp) in a local SQLite file
and reports average daily calories over recent days.

Example usage:
  clcnt serve --port 8080
  clcnt add Breakfast 500
  clcnt calories --days 7
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress informational output (also via CLCNT_QUIET=1)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file (defaults to ./clcnt.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Add a food entry
    Add {
        /// Single word describing the food
        food: String,

        /// Amount of calories
        #[arg(allow_hyphen_values = true)]
        calories: i64,

        /// Unix timestamp of the meal (defaults to now)
        #[arg(short, long, allow_hyphen_values = true)]
        timestamp: Option<i64>,
    },

    /// List all entries
    Entries {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Show average daily calories over recent days
    Calories {
        /// Recent day(s) to average over, today included
        #[arg(long, default_value = "1")]
        days: DayCount,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    clcnt::output::set_quiet(cli.quiet);

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Serve { host, port } => {
            let settings = file_config.resolve(cli.database, host, port);
            serve(settings)
        }

        Commands::Add { food, calories, timestamp } => {
            let registry = open_registry(&file_config, cli.database)?;
            let timestamp = timestamp.unwrap_or_else(|| window::default_timestamp(None));
            let entry = Entry::new(timestamp, food, calories);

            registry.add_entry(&entry)?;
            ui::success(&format!(
                "Added {} ({} at {})",
                entry.food,
                ui::kcal(entry.calories),
                ui::format_timestamp(entry.timestamp)
            ));
            Ok(())
        }

        Commands::Entries { format } => {
            let registry = open_registry(&file_config, cli.database)?;
            let entries = registry.get_entries()?;

            match format {
                Format::Json => {
                    let body = serde_json::json!({ "entries": entries });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Format::Text if entries.is_empty() => {
                    println!("∅ No entries found.");
                }
                Format::Text => {
                    println!("{} {} entries", Icons::FOOD, entries.len());
                    println!("{}", ui::entries_table(&entries));
                }
            }
            Ok(())
        }

        Commands::Calories { days, format } => {
            let registry = open_registry(&file_config, cli.database)?;
            let avg_calories = registry.average_calories(days)?;

            match format {
                Format::Json => {
                    let body = serde_json::json!({
                        "days": days.to_string(),
                        "avg_calories": avg_calories,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Format::Text => {
                    println!("{} Average calories", Icons::STATS);
                    ui::summary_row("Days:", &days.to_string());
                    ui::summary_row("Since:", &ui::format_timestamp(window::days_ago(days)));
                    ui::summary_row("Average:", &format!("{}/day", ui::kcal(avg_calories)));
                }
            }
            Ok(())
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &ClcntConfig::starter(), force)?;
            ui::success(&format!("Wrote config to {}", path.display()));
            Ok(())
        }
    }
}

fn open_registry(file_config: &ClcntConfig, database: Option<PathBuf>) -> anyhow::Result<Registry> {
    let settings = file_config.resolve(database, None, None);
    Ok(Registry::open(&settings.database)?)
}

fn serve(settings: Settings) -> anyhow::Result<()> {
    // Storage failures here are fatal: there is no degraded mode.
    let registry = Arc::new(Registry::open(&settings.database)?);

    ui::header("clcnt calorie counter");
    ui::info("Database", &settings.database.display().to_string());
    ui::info("Listening", &format!("http://{}", settings.addr));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(clcnt::server::start_server(settings.addr, registry))
}
