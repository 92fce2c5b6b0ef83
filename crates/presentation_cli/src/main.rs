//! FreshTrack CLI
//!
//! Read expiry dates from product labels and manage the food inventory.

#![allow(clippy::print_stdout)]

mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    AlertService, ApplicationError, InventoryService, normalize,
    ports::DateProvider, read_expiry,
};
use clap::{ArgGroup, Parser, Subcommand};
use domain::{CalendarDate, Category, ItemId};
use infrastructure::{
    AppConfig, FixedDateProvider, SqliteInventoryStore, SystemDateProvider, TesseractCliAdapter,
    UuidV7IdGenerator, create_pool, init_logging,
};
use tracing::debug;

/// FreshTrack CLI
#[derive(Parser)]
#[command(name = "freshtrack-cli")]
#[command(author, version, about = "FreshTrack food inventory CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "FRESHTRACK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, env = "FRESHTRACK_TODAY", global = true)]
    today: Option<CalendarDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read an expiry date from recognized label text
    ///
    /// Example: freshtrack-cli extract "BATCH 7781 EXP: 03/04/2025"
    Extract {
        /// Raw label text
        text: String,
    },

    /// Recognize a label photo and read its expiry date
    ///
    /// With --name the item is also added to the inventory.
    Scan {
        /// Image file (PNG, JPEG, TIFF, ...)
        image: PathBuf,

        /// Add the item under this name
        #[arg(short, long)]
        name: Option<String>,

        /// Food category
        #[arg(short = 'C', long, default_value = "other")]
        category: Category,

        /// Number of units (default from config)
        #[arg(short, long, requires = "name")]
        quantity: Option<u32>,
    },

    /// Add an item with a typed date or label text
    #[command(group(ArgGroup::new("date").required(true).args(["expiry", "label"])))]
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Food category
        #[arg(short = 'C', long, default_value = "other")]
        category: Category,

        /// Expiry date, YYYY-MM-DD or D/M/Y
        #[arg(short, long)]
        expiry: Option<String>,

        /// Label text to read the expiry date from
        #[arg(short, long)]
        label: Option<String>,

        /// Number of units (default from config)
        #[arg(short, long, conflicts_with = "label")]
        quantity: Option<u32>,
    },

    /// List inventory items with days left as of today
    List {
        /// Only items whose name or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show items expiring soon
    Alerts,

    /// Remove an item
    Remove {
        /// Item id
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },

    /// Plan a reminder before an item expires
    Remind {
        /// Item id
        #[arg(value_parser = parse_item_id)]
        id: ItemId,

        /// Days before expiry (default from config)
        #[arg(short, long)]
        days: Option<u64>,
    },

    /// Print the resolved configuration as TOML
    Config,
}

/// Determine log filter from verbosity count; zero keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn parse_item_id(s: &str) -> Result<ItemId, String> {
    ItemId::parse(s).map_err(|e| e.to_string())
}

/// Parse a typed expiry date: ISO first, then the label-date rule
fn parse_expiry(s: &str) -> anyhow::Result<CalendarDate> {
    if let Ok(date) = s.trim().parse::<CalendarDate>() {
        return Ok(date);
    }
    normalize(s).with_context(|| format!("Invalid expiry date '{s}'"))
}

/// Attach a manual-entry hint to unreadable dates
fn explain(e: ApplicationError) -> anyhow::Error {
    if e.needs_manual_entry() {
        anyhow::anyhow!("{e}. Enter the date by hand with `freshtrack-cli add --expiry`")
    } else {
        e.into()
    }
}

/// Services wired to the configured SQLite database
struct App {
    inventory: InventoryService<SqliteInventoryStore>,
    alerts: AlertService<SqliteInventoryStore>,
}

impl App {
    fn open(config: &AppConfig, clock: Arc<dyn DateProvider>) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database)
            .with_context(|| format!("Failed to open database '{}'", config.database.path))?;
        let store = Arc::new(SqliteInventoryStore::new(Arc::new(pool)));

        Ok(Self {
            inventory: InventoryService::new(
                Arc::clone(&store),
                Arc::clone(&clock),
                Arc::new(UuidV7IdGenerator),
                config.inventory.service_config(),
            ),
            alerts: AlertService::new(store, clock, config.inventory.alert_config()),
        })
    }
}

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;
    debug!(database = %config.database.path, "Configuration loaded");

    let clock: Arc<dyn DateProvider> = match cli.today {
        Some(today) => Arc::new(FixedDateProvider::new(today)),
        None => Arc::new(SystemDateProvider),
    };

    match cli.command {
        Commands::Extract { text } => {
            let reading = read_expiry(&text, clock.today())
                .map_err(|e| explain(ApplicationError::from(e)))?;
            if cli.json {
                println!("{}", render::json(&reading)?);
            } else {
                println!("{}", render::reading(&reading));
            }
        },

        Commands::Scan {
            image,
            name,
            category,
            quantity,
        } => {
            let bytes = tokio::fs::read(&image)
                .await
                .with_context(|| format!("Failed to read image '{}'", image.display()))?;
            let recognizer = TesseractCliAdapter::new(config.recognizer.clone())?;
            let inventory = App::open(&config, clock)?
                .inventory
                .with_recognizer(Arc::new(recognizer));

            let reading = inventory.scan_image(&bytes).await.map_err(explain)?;
            match name {
                Some(name) => {
                    let record = inventory
                        .add_manual(&name, category, reading.expiry, quantity)
                        .await?;
                    if cli.json {
                        println!("{}", render::json(&record)?);
                    } else {
                        println!("{}", render::reading(&reading));
                        println!("Added {} ({})", record.name, record.id);
                    }
                },
                None if cli.json => println!("{}", render::json(&reading)?),
                None => println!("{}", render::reading(&reading)),
            }
        },

        Commands::Add {
            name,
            category,
            expiry,
            label,
            quantity,
        } => {
            let app = App::open(&config, clock)?;
            let record = match (expiry, label) {
                (Some(expiry), _) => {
                    let expiry = parse_expiry(&expiry)?;
                    app.inventory
                        .add_manual(&name, category, expiry, quantity)
                        .await?
                },
                (None, Some(label)) => app
                    .inventory
                    .add_scanned(&name, category, &label)
                    .await
                    .map_err(explain)?,
                (None, None) => anyhow::bail!("Either --expiry or --label is required"),
            };

            if cli.json {
                println!("{}", render::json(&record)?);
            } else {
                println!("Added {} ({})", record.name, record.id);
                println!(
                    "{}",
                    render::record_line(&record, app.alerts.urgency_of(record.days_left))
                );
            }
        },

        Commands::List { search } => {
            let app = App::open(&config, clock)?;
            let records = match search.as_deref() {
                Some(query) => app.inventory.search(query).await?,
                None => app.inventory.list().await?,
            };

            if cli.json {
                println!("{}", render::json(&records)?);
            } else if records.is_empty() {
                println!("No items found");
            } else {
                for record in &records {
                    println!(
                        "{}",
                        render::record_line(record, app.alerts.urgency_of(record.days_left))
                    );
                }
                if let Some(summary) = app.alerts.summary().await? {
                    println!();
                    println!("{summary}");
                }
            }
        },

        Commands::Alerts => {
            let app = App::open(&config, clock)?;
            let alerts = app.alerts.expiring_soon().await?;

            if cli.json {
                println!("{}", render::json(&alerts)?);
            } else if alerts.is_empty() {
                println!("Nothing is expiring soon");
            } else {
                for alert in &alerts {
                    println!("{}", render::alert_line(alert));
                }
            }
        },

        Commands::Remove { id } => {
            let app = App::open(&config, clock)?;
            app.inventory.remove(&id).await?;
            if !cli.json {
                println!("Removed {id}");
            }
        },

        Commands::Remind { id, days } => {
            let app = App::open(&config, clock)?;
            let plan = app.inventory.plan_reminder(&id, days).await?;
            if cli.json {
                println!("{}", render::json(&plan)?);
            } else {
                println!("{}", render::reminder(&plan));
            }
        },

        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
