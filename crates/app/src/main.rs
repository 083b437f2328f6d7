use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use roadmap_core::model::Roadmap;
use services::{RoadmapService, SourceConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use ui::vm::render_roadmap_text;
use ui::{App, UiApp, build_app_context};

#[derive(Parser)]
#[command(version, about = "Track progress through generated learning roadmaps")]
struct Cli {
    /// Retrieval endpoint URL, or a directory of exported `<id>.json` roadmaps.
    #[arg(long, global = true, env = "ROADMAP_SOURCE")]
    source: Option<String>,

    /// HTTP request timeout in seconds (default 10).
    #[arg(long, global = true, env = "ROADMAP_HTTP_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the desktop viewer (default).
    Ui {
        /// Roadmap to open on launch.
        #[arg(long, env = "ROADMAP_ID")]
        roadmap_id: Option<String>,
    },
    /// Print a roadmap as text.
    Show {
        /// Id of a stored roadmap.
        #[arg(required_unless_present = "file")]
        id: Option<String>,

        /// Read an exported roadmap document instead of fetching one.
        #[arg(long, conflicts_with = "id")]
        file: Option<PathBuf>,
    },
}

struct DesktopApp {
    roadmaps: Arc<RoadmapService>,
    initial_roadmap_id: Option<String>,
}

impl UiApp for DesktopApp {
    fn roadmaps(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmaps)
    }

    fn initial_roadmap_id(&self) -> Option<String> {
        self.initial_roadmap_id.clone()
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_env("ROADMAP_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn roadmap_service(cli: &Cli) -> Result<RoadmapService> {
    let config = SourceConfig::from_values(cli.source.as_deref(), cli.timeout_secs.as_deref());
    tracing::debug!(?config, "resolved roadmap source");
    config
        .build_service()
        .with_context(|| format!("cannot use roadmap source {config:?}"))
}

fn launch_ui(roadmaps: RoadmapService, initial_roadmap_id: Option<String>) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        roadmaps: Arc::new(roadmaps),
        initial_roadmap_id,
    });
    let context = build_app_context(&app);

    let window = WindowBuilder::new()
        .with_title("Learning Roadmaps")
        .with_always_on_top(false);

    LaunchBuilder::desktop()
        .with_cfg(DesktopConfig::new().with_window(window))
        .with_context(context)
        .launch(App);
}

async fn load_for_show(
    roadmaps: &RoadmapService,
    id: Option<String>,
    file: Option<PathBuf>,
) -> Result<Roadmap> {
    if let Some(path) = file {
        return RoadmapService::load_file(&path)
            .await
            .with_context(|| format!("cannot load roadmap file {}", path.display()));
    }
    let id = id.context("a roadmap id or --file is required")?;
    roadmaps
        .load(&id)
        .await
        .with_context(|| format!("cannot load roadmap {id}"))
}

fn run() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let roadmaps = roadmap_service(&cli)?;

    match cli.command {
        None => launch_ui(roadmaps, std::env::var("ROADMAP_ID").ok()),
        Some(Command::Ui { roadmap_id }) => launch_ui(roadmaps, roadmap_id),
        Some(Command::Show { id, file }) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let roadmap = runtime.block_on(load_for_show(&roadmaps, id, file))?;
            print!("{}", render_roadmap_text(&roadmap));
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
