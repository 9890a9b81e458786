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

//! Command-line input logic and state management.
//!
//! Pressing `:` opens a one-line prompt. Submitting it with `Enter` runs the
//! command and closes the prompt again, `Esc` closes it without running
//! anything.
//!
//! Besides a handful of named commands, any string made up of keypad
//! characters (`0-9 . + - * / =`) is replayed as the matching button presses,
//! so `:12.5*4=` behaves exactly like pressing those seven buttons.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{engine::InputToken, events::AppEvent};

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    Quit,
    Press(Vec<InputToken>),
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, either because the prompt is
    /// open or because the event opened it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.is_empty() {
                    self.run_command(&buffer, event_tx)?;
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        tracing::debug!(command = buffer, "running command");

        match parse_command(buffer) {
            Ok(Command::Quit) => event_tx.send(AppEvent::ExitApplication)?,
            Ok(Command::Press(tokens)) => {
                for token in tokens {
                    event_tx.send(AppEvent::Input(token))?;
                }
            }
            Err(err) => event_tx.send(AppEvent::Error(err.to_string()))?,
        }

        Ok(())
    }
}

pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => Command::Quit,
        ["c"] | ["clear"] => Command::Press(vec![InputToken::Clear]),
        ["d"] | ["del"] => Command::Press(vec![InputToken::Delete]),
        ["n"] | ["neg"] => Command::Press(vec![InputToken::Negate]),

        _ => {
            let keys: String = parts.concat();
            let tokens: Option<Vec<InputToken>> = keys.chars().map(InputToken::from_char).collect();
            match tokens {
                Some(tokens) if !tokens.is_empty() => Command::Press(tokens),
                _ => return Err(CommandError::Unknown(buffer.to_string())),
            }
        }
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::engine::Operator;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn named_commands() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("clear"), Ok(Command::Press(vec![InputToken::Clear])));
        assert_eq!(parse_command("d"), Ok(Command::Press(vec![InputToken::Delete])));
        assert_eq!(parse_command("neg"), Ok(Command::Press(vec![InputToken::Negate])));
    }

    #[test]
    fn keypad_characters_replay_as_presses() {
        assert_eq!(
            parse_command("1.5 * 2 ="),
            Ok(Command::Press(vec![
                InputToken::Digit(1),
                InputToken::Decimal,
                InputToken::Digit(5),
                InputToken::Operator(Operator::Multiply),
                InputToken::Digit(2),
                InputToken::Equals,
            ]))
        );
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert_eq!(
            parse_command("sqrt 2"),
            Err(CommandError::Unknown("sqrt 2".to_string()))
        );
    }

    #[test]
    fn colon_opens_and_enter_submits() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('7')), &tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());

        for c in "4+".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &tx).unwrap());
        }
        assert_eq!(commander.input.value(), "4+");

        assert!(commander.handle_event(&key(KeyCode::Enter), &tx).unwrap());
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");

        let sent: Vec<AppEvent> = rx.try_iter().collect();
        assert!(matches!(
            sent.as_slice(),
            [
                AppEvent::Input(InputToken::Digit(4)),
                AppEvent::Input(InputToken::Operator(Operator::Add)),
            ]
        ));
    }

    #[test]
    fn escape_discards_input() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &tx).unwrap();

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }
}
