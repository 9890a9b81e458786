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

//! Application events and the main event loop.
//!
//! Every input, whether a key press, a mouse click on the keypad or a
//! command typed at the `:` prompt, arrives on the application channel as an
//! [`AppEvent`]. The loop in [`process_events`] takes them one at a time on
//! the main thread, so the calculator engine only ever sees one token at a
//! time and needs no locking.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, components::KeypadAction, engine::InputToken, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Input(InputToken),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !dispatch_event(app, event)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => {
            tracing::info!("exit requested");
            return Ok(false);
        }
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
        AppEvent::Input(token) => handle_input(app, token),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),
    }

    Ok(true)
}

/// Maps keyboard input to calculator buttons and application actions.
///
/// The command line gets the first look at every key, then the keypad (focus
/// movement and `Space`), and whatever is left is matched against the global
/// key bindings:
///
/// * **Buttons**: digits, `.`, `+ - * /`, `=` and `Enter`, `n` for the sign
///   toggle, `Backspace` to delete and `Esc` or `c` to clear.
/// * **Application Control**: `q` or `Ctrl-C` to exit.
///
/// # Errors
///
/// Returns an error if an event cannot be sent on the application channel.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some platforms report releases and repeats as well
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if let Some(KeypadAction::Press(token)) = app.keypad.process_event(&event) {
        app.event_tx.send(AppEvent::Input(token))?;
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let token = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Enter, _) => Some(InputToken::Equals),
        (KeyCode::Char('n'), _) | (KeyCode::Char('_'), _) => Some(InputToken::Negate),
        (KeyCode::Backspace, _) | (KeyCode::Delete, _) => Some(InputToken::Delete),
        (KeyCode::Esc, _) | (KeyCode::Char('c'), _) => Some(InputToken::Clear),
        (KeyCode::Char(c), _) => InputToken::from_char(c),

        _ => None,
    };

    if let Some(token) = token {
        app.event_tx.send(AppEvent::Input(token))?;
    }

    Ok(())
}

fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if let Some(KeypadAction::Press(token)) = app.keypad.process_event(&Event::Mouse(mouse)) {
        app.event_tx.send(AppEvent::Input(token))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, engine::Operator};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    // Feeds events through the dispatcher, including every event they cause,
    // until the channel is drained.
    fn run(app: &mut App, events: Vec<AppEvent>) -> bool {
        for event in events {
            if !dispatch_event(app, event).unwrap() {
                return false;
            }
            while let Ok(follow_up) = app.event_rx.try_recv() {
                if !dispatch_event(app, follow_up).unwrap() {
                    return false;
                }
            }
        }
        true
    }

    fn typed(text: &str) -> Vec<AppEvent> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }

    #[test]
    fn typing_a_calculation() {
        let mut app = App::new(AppConfig::default());
        let mut events = typed("12+3");
        events.push(key(KeyCode::Enter));
        assert!(run(&mut app, events));
        assert_eq!(app.engine.display_text(), "15");
    }

    #[test]
    fn backspace_escape_and_negate_keys() {
        let mut app = App::new(AppConfig::default());
        run(&mut app, typed("123"));
        run(&mut app, vec![key(KeyCode::Backspace)]);
        assert_eq!(app.engine.display_text(), "12");

        run(&mut app, typed("n"));
        assert_eq!(app.engine.display_text(), "-12");

        run(&mut app, vec![key(KeyCode::Esc)]);
        assert_eq!(app.engine.display_text(), "");
    }

    #[test]
    fn q_exits() {
        let mut app = App::new(AppConfig::default());
        assert!(!run(&mut app, typed("q")));
    }

    #[test]
    fn keypad_space_presses_focused_button() {
        let mut app = App::new(AppConfig::default());
        // Typing 9 moves focus onto the 9 button, one step right is `*`
        run(&mut app, typed("9"));
        run(&mut app, typed("l "));
        assert_eq!(app.engine.state().pending_operator, Some(Operator::Multiply));
        assert_eq!(app.engine.state().pending_operand, 9.0);
    }

    #[test]
    fn command_line_replays_buttons() {
        let mut app = App::new(AppConfig::default());
        let mut events = typed(":6*7=");
        events.push(key(KeyCode::Enter));
        run(&mut app, events);
        assert_eq!(app.engine.display_text(), "42");
        assert!(!app.commander.active());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(AppConfig::default());
        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        run(&mut app, vec![AppEvent::Key(release)]);
        assert_eq!(app.engine.display_text(), "");
    }
}
