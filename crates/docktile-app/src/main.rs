mod app;
mod app_log;
mod command;
mod demo;
mod event;
mod keybindings;
mod views;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use docktile_config::AppConfig;
use docktile_core::{DockerClient, ResourceKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::views::Sources;

/// Terminal browser for containers, images, networks and volumes.
#[derive(Debug, Parser)]
#[command(name = "docktile", version)]
struct Cli {
    /// Config file to load instead of the user config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Docker endpoint, e.g. unix:///var/run/docker.sock or tcp://host:2375.
    #[arg(long)]
    host: Option<String>,

    /// Include stopped containers.
    #[arg(short, long)]
    all: bool,

    /// View to open first: containers, images, networks or volumes.
    #[arg(long)]
    view: Option<String>,

    /// Browse built-in sample data instead of a live daemon.
    #[arg(long)]
    demo: bool,

    /// Write the default config to the user config path and exit.
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = AppConfig::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path).with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::load(),
    };
    for (group, action, reason) in docktile_config::validate_keybindings(&config.keybindings) {
        eprintln!("Warning: keybinding {group}.{action}: {reason}");
    }
    for (key, first, second) in docktile_config::check_collisions(&config.keybindings) {
        eprintln!("Warning: key \"{key}\" is bound in both {first} and {second}");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(app_log::AppLogMakeWriter)
        .with_ansi(false)
        .init();

    let initial = initial_view(&cli, &config)?;
    let sources = if cli.demo {
        info!("running with demo data");
        demo::sources()
    } else {
        let client = DockerClient::connect(cli.host.as_deref().or(config.docker.host()))?
            .show_all(cli.all || config.general.show_all_containers);
        Sources::docker(client)
    };

    install_panic_hook();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, sources, initial);
    let result = app.run(&mut terminal).await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn initial_view(cli: &Cli, config: &AppConfig) -> anyhow::Result<ResourceKind> {
    if let Some(name) = &cli.view {
        return ResourceKind::from_name(name).with_context(|| format!("unknown view \"{name}\""));
    }
    Ok(ResourceKind::from_name(&config.general.default_view).unwrap_or_else(|| {
        warn!(view = %config.general.default_view, "unknown default view, using containers");
        ResourceKind::Containers
    }))
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
