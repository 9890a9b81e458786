// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Calculator TUI.
//!
//! A terminal calculator with a display, a clickable button pad and a `:`
//! command line.
//!
//! The arithmetic lives in [`engine`]: a single-step evaluator that holds one
//! pending operator and one pending operand and reacts to one button press at
//! a time. Everything else is the terminal front end built with `ratatui`.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the application state, including the engine,
//!   and manages the terminal lifecycle and UI rendering.
//! * An **Input Thread** forwards keyboard and mouse events.
//! * A **Tick Thread** triggers periodic redraws.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even if the event loop fails. Communication
//! between the threads is handled via `std::sync::mpsc` channels.

mod commander;
mod components;
mod config;
mod engine;
mod events;
mod logging;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    components::{DisplayView, Keypad, Status},
    config::AppConfig,
    engine::CalculatorEngine,
    events::{AppEvent, process_events},
    theme::Theme,
};

const HELP: &str = "Arrows move, Space presses, : for commands, q quits";

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub engine: CalculatorEngine,

    pub display: DisplayView,
    pub keypad: Keypad,
    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let engine = CalculatorEngine::new().with_strict_decimal(config.strict_decimal);

        let mut display = DisplayView::new();
        display.set_status(Status::Info(HELP.to_string()));

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            engine,
            display,
            keypad: Keypad::new(),
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, installs logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Logging is optional, the calculator works without a writable log file
    let log_path = logging::init(&config).ok();

    let mut app = App::new(config);
    tracing::info!(log = ?log_path, strict_decimal = app.config.strict_decimal, "starting");

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(err) = &res {
        tracing::error!("{:#}", err);
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and enables mouse
///   capture so the keypad can be clicked.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!("terminal input failed: {}", err);
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms.max(10));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
