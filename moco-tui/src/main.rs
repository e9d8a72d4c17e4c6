mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod duration;
mod last_task;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::Result;
use api::{Backend, DevBackend};
use clap::Parser;
use cli::{Cli, Commands};
use config::MocoConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use last_task::LastTaskStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command() {
        Commands::ConfigPath => {
            let path = MocoConfig::ensure_default_file()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Dev => {
            init_logging();
            info!("Starting in dev mode");
            run(DevBackend::new()).await
        }
        Commands::Run => {
            init_logging();
            let client = MocoConfig::load()?.client()?;
            info!(base_url = AsRef::<str>::as_ref(client.base_url()), "Starting");
            run(client).await
        }
    }
}

fn init_logging() {
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}

async fn run<B: Backend>(backend: B) -> Result<()> {
    let store = LastTaskStore::default_location()?;
    let mut app = bootstrap::initialize_app_state(&backend, &store).await?;
    let theme = ui::Theme::default();

    logging::install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = runtime::run_app(&mut terminal, &mut app, &backend, &store, &theme).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}
