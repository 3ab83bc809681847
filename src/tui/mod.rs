//! Terminal front end.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::GameConfig;

pub use controller::Controller;
pub use input::{digit_cell, move_cursor};
pub use screen::Screen;
pub use screens::{BoardScreen, DifficultyScreen, HomeScreen};
pub use ui::{BoardLayout, MenuLayout, center_rect};

/// Routes logs to `config.log_file` so they do not tear the drawn screen.
pub fn init_file_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized
    Ok(())
}

/// Takes over the terminal and plays until the user quits.
#[instrument(skip(config))]
pub async fn run(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::from_config(config);
    let result = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Terminal UI failed");
    }
    let stats = controller.session().stats();
    info!(
        wins = *stats.wins(),
        losses = *stats.losses(),
        draws = *stats.draws(),
        "Session finished"
    );
    result
}
