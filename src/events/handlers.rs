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

//! Event handlers.
//!
//! This is the boundary between the calculator engine and the UI: engine
//! errors are caught here, logged, and turned into a status message. They are
//! never fatal.

use crate::{App, components::Status, engine::InputToken};

pub(super) fn handle_input(app: &mut App, token: InputToken) {
    match app.engine.handle(token) {
        Ok(text) => {
            tracing::debug!(?token, display = text, "input handled");
            app.display.clear_status();
        }
        Err(err) => {
            tracing::warn!(?token, display = %err.text, "{}", err);
            app.display.set_status(Status::Error(err.to_string()));
        }
    }

    app.display.sync(app.engine.state());
    app.keypad.focus_token(token);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::warn!("{}", message);
    app.display.set_status(Status::Error(message));
}

pub(super) fn handle_tick(_app: &mut App) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, engine::Operator};

    #[test]
    fn engine_error_becomes_status() {
        let mut app = App::new(AppConfig::default());
        handle_input(&mut app, InputToken::Operator(Operator::Add));

        assert_eq!(
            app.display.status(),
            Some(&Status::Error("No number found, input number first".to_string()))
        );
        assert_eq!(app.engine.display_text(), "");
        assert_eq!(app.engine.state().pending_operator, None);
    }

    #[test]
    fn successful_input_clears_status() {
        let mut app = App::new(AppConfig::default());
        handle_error(&mut app, "Unknown command: x".to_string());
        handle_input(&mut app, InputToken::Digit(8));

        assert_eq!(app.display.status(), None);
        assert_eq!(app.keypad.focused(), InputToken::Digit(8));
    }

    #[test]
    fn strict_decimal_comes_from_config() {
        let config = AppConfig {
            strict_decimal: true,
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        for token in [InputToken::Digit(1), InputToken::Decimal, InputToken::Decimal] {
            handle_input(&mut app, token);
        }
        assert_eq!(app.engine.display_text(), "1.");
    }
}
