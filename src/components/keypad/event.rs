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

//! Input handling for the keypad.
//!
//! Arrow keys and `h j k l` move the focus, `Space` presses the focused
//! button and a left mouse click presses the button under the pointer.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::components::keypad::{Keypad, KeypadAction};

impl Keypad {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<KeypadAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('l') | KeyCode::Right => self.goto_right(),
                KeyCode::Char('h') | KeyCode::Left => self.goto_left(),
                KeyCode::Char('j') | KeyCode::Down => self.goto_down(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_up(),

                KeyCode::Char(' ') => return Some(KeypadAction::Press(self.focused())),

                _ => {}
            },

            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    if let Some(token) = self.button_at(mouse_event.column, mouse_event.row) {
                        self.focus_token(token);
                        return Some(KeypadAction::Press(token));
                    }
                }
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    use super::*;
    use crate::engine::InputToken;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn space_presses_focused_button() {
        let mut keypad = Keypad::new();
        keypad.process_event(&key(KeyCode::Right));
        keypad.process_event(&key(KeyCode::Char('j')));
        let action = keypad.process_event(&key(KeyCode::Char(' ')));
        assert!(matches!(action, Some(KeypadAction::Press(InputToken::Digit(5)))));
    }

    #[test]
    fn navigation_produces_no_action() {
        let mut keypad = Keypad::new();
        assert!(keypad.process_event(&key(KeyCode::Up)).is_none());
        assert_eq!(keypad.focused(), InputToken::Negate);
    }

    #[test]
    fn left_click_presses_button_under_pointer() {
        let mut keypad = Keypad::new();
        keypad.hit_areas = vec![(Rect::new(10, 4, 6, 3), InputToken::Digit(9))];

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        let action = keypad.process_event(&click);
        assert!(matches!(action, Some(KeypadAction::Press(InputToken::Digit(9)))));
        assert_eq!(keypad.focused(), InputToken::Digit(9));
    }
}
