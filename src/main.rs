#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory the card images are read from
static ASSETS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("arcana")
    })
}

pub fn get_assets_dir() -> PathBuf {
    ASSETS_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Arcana - tarot readings with animated scenes
#[derive(Parser, Debug)]
#[command(name = "arcana-desktop")]
#[command(about = "Arcana - local-first tarot companion")]
struct Args {
    /// Data directory for storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Profile name (creates data dir: arcana-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Directory containing `images/cards/*.jpg`; also the webview's
    /// resource root, so `<image href="/images/...">` and the texture
    /// loader read the same files
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, name)
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("arcana-{}", name));
        (base, name.clone())
    } else {
        (get_data_dir(), String::new())
    };

    let _ = DATA_DIR.set(data_dir.clone());
    let assets_dir = assets_root(&args.assets_dir);
    let _ = ASSETS_DIR.set(assets_dir.clone());

    let title = if !display_name.is_empty() {
        format!("Arcana - {}", display_name)
    } else {
        "Arcana".to_string()
    };

    tracing::info!(?data_dir, assets = ?assets_dir, "Starting '{}'", title);

    let config = Config::new()
        .with_resource_directory(assets_dir)
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

/// Absolute form of the assets directory, shared by the webview and the
/// texture loader.
fn assets_root(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}
