#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use cogframe_core::{render_card, Catalog, Collection};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global app configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Runtime configuration derived from [`Args`]
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: Catalog,
    pub window_width: f64,
    pub window_height: f64,
}

/// Get the app configuration (None until `main` has parsed the command line)
pub fn get_app_config() -> Option<&'static AppConfig> {
    APP_CONFIG.get()
}

const DEFAULT_WIDTH: f64 = 700.0;
const DEFAULT_HEIGHT: f64 = 900.0;

/// Cognitive Frameworks - expandable cards of mental models
#[derive(Parser, Debug)]
#[command(name = "cogframe-desktop")]
#[command(about = "Cognitive Frameworks - expandable cards of mental models and principles")]
struct Args {
    /// Which built-in collection to show (frameworks, principles)
    #[arg(short, long, default_value_t = Collection::Frameworks)]
    collection: Collection,

    /// Window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "cogframe_core=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Print the fully expanded card tree as JSON and exit
    #[arg(long)]
    dump_json: bool,
}

fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).with_context(|| format!("invalid log filter: {level}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    // stderr keeps --dump-json output clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Every card of the catalog rendered as expanded
fn dump_json(catalog: &Catalog) -> anyhow::Result<String> {
    let cards: Vec<_> = catalog
        .registry
        .iter()
        .enumerate()
        .map(|(position, record)| render_card(record, position, true, &catalog.info))
        .collect();
    let tree = serde_json::json!({
        "collection": catalog.collection,
        "info": catalog.info,
        "cards": cards,
    });
    serde_json::to_string_pretty(&tree).context("failed to serialize card tree")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref())?;

    // Reject a malformed collection before any window exists
    let catalog = args
        .collection
        .catalog()
        .with_context(|| format!("collection '{}' failed validation", args.collection))?;

    if args.dump_json {
        println!("{}", dump_json(&catalog)?);
        return Ok(());
    }

    let title = catalog.info.title;
    tracing::info!(
        "Starting '{}' ({} cards) at {}x{}",
        title,
        catalog.registry.len(),
        args.width,
        args.height
    );

    let config = APP_CONFIG.get_or_init(|| AppConfig {
        catalog,
        window_width: args.width,
        window_height: args.height,
    });

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
