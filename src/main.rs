#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portal_core::logging::LoggingBuilder;
use portal_core::{HomeLayout, PortalConfig};

use crate::context::{set_launch_settings, LaunchSettings};

/// Cosplayer Portal - animated door gallery of cosplay showcases
#[derive(Parser, Debug)]
#[command(name = "cosplayer-portal")]
#[command(about = "Cosplayer Portal - pick a door, enter a cosplay world")]
struct Args {
    /// Data directory for preferences, config and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Home screen door set (overrides portal.json)
    #[arg(short, long)]
    layout: Option<HomeLayout>,

    /// Also write JSONL session logs to <data-dir>/logs
    #[arg(long)]
    log_json: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "portal_core=debug")
    #[arg(long)]
    log_filter: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cosplayer-portal")
}

fn main() {
    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let mut logging = LoggingBuilder::new(data_dir.join("logs")).jsonl(args.log_json);
    if let Some(filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }

    let log_path = match logging.init() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Session logging unavailable ({}), using console only", e);
            let _ = tracing_subscriber::fmt::try_init();
            None
        }
    };

    let mut config = match PortalConfig::load_from_dir(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring unreadable config: {}", e);
            PortalConfig::default()
        }
    };
    if let Some(layout) = args.layout {
        config.home_layout = layout;
    }

    tracing::info!(
        layout = ?config.home_layout,
        log = ?log_path,
        "Starting Cosplayer Portal with data dir: {:?}",
        data_dir
    );

    let window = WindowBuilder::new()
        .with_title("Cosplayer Portal")
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(true);

    set_launch_settings(LaunchSettings { data_dir, config });

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
