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

//! On-screen button pad.
//!
//! The pad reproduces the classic calculator face: a four by four grid of
//! digits and operators with a row of `(-)`, `Delete` and `Clear` below it.
//! One button always has focus and can be pressed from the keyboard, any
//! button can be clicked with the mouse. Pressing a button yields the
//! [`InputToken`] it stands for; the pad never talks to the engine itself.

mod event;
mod render;

use ratatui::layout::Rect;

use crate::engine::{InputToken, Operator};

pub(crate) enum KeypadAction {
    Press(InputToken),
}

static LAYOUT: [&[InputToken]; 5] = [
    &[
        InputToken::Digit(1),
        InputToken::Digit(2),
        InputToken::Digit(3),
        InputToken::Operator(Operator::Add),
    ],
    &[
        InputToken::Digit(4),
        InputToken::Digit(5),
        InputToken::Digit(6),
        InputToken::Operator(Operator::Subtract),
    ],
    &[
        InputToken::Digit(7),
        InputToken::Digit(8),
        InputToken::Digit(9),
        InputToken::Operator(Operator::Multiply),
    ],
    &[
        InputToken::Decimal,
        InputToken::Digit(0),
        InputToken::Equals,
        InputToken::Operator(Operator::Divide),
    ],
    &[InputToken::Negate, InputToken::Delete, InputToken::Clear],
];

pub(crate) struct Keypad {
    rows: &'static [&'static [InputToken]],
    row: usize,
    col: usize,
    // Screen areas of the buttons from the last draw, used for mouse hits.
    hit_areas: Vec<(Rect, InputToken)>,
}

impl Keypad {
    pub(crate) fn new() -> Self {
        Self {
            rows: &LAYOUT,
            row: 0,
            col: 0,
            hit_areas: vec![],
        }
    }

    pub(crate) fn focused(&self) -> InputToken {
        self.rows[self.row][self.col]
    }

    /// Moves focus onto the button for `token`, so presses made from the
    /// keyboard are mirrored on the pad.
    pub(crate) fn focus_token(&mut self, token: InputToken) {
        for (r, row) in self.rows.iter().enumerate() {
            if let Some(c) = row.iter().position(|t| *t == token) {
                self.row = r;
                self.col = c;
                return;
            }
        }
    }

    fn goto_right(&mut self) {
        let len = self.rows[self.row].len();
        self.col = if self.col + 1 >= len { 0 } else { self.col + 1 };
    }

    fn goto_left(&mut self) {
        let len = self.rows[self.row].len();
        self.col = if self.col == 0 { len - 1 } else { self.col - 1 };
    }

    fn goto_down(&mut self) {
        self.row = if self.row + 1 >= self.rows.len() { 0 } else { self.row + 1 };
        self.clamp_col();
    }

    fn goto_up(&mut self) {
        self.row = if self.row == 0 { self.rows.len() - 1 } else { self.row - 1 };
        self.clamp_col();
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(self.rows[self.row].len() - 1);
    }

    fn button_at(&self, column: u16, row: u16) -> Option<InputToken> {
        self.hit_areas
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, token)| *token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_starts_on_one() {
        assert_eq!(Keypad::new().focused(), InputToken::Digit(1));
    }

    #[test]
    fn horizontal_movement_wraps_within_row() {
        let mut keypad = Keypad::new();
        keypad.goto_left();
        assert_eq!(keypad.focused(), InputToken::Operator(Operator::Add));
        keypad.goto_right();
        assert_eq!(keypad.focused(), InputToken::Digit(1));
    }

    #[test]
    fn vertical_movement_wraps_and_clamps() {
        let mut keypad = Keypad::new();
        keypad.focus_token(InputToken::Operator(Operator::Divide));
        keypad.goto_down();
        assert_eq!(keypad.focused(), InputToken::Clear);
        keypad.goto_down();
        assert_eq!(keypad.focused(), InputToken::Digit(3));
        keypad.goto_up();
        assert_eq!(keypad.focused(), InputToken::Clear);
        keypad.goto_up();
        assert_eq!(keypad.focused(), InputToken::Equals);
    }

    #[test]
    fn every_token_has_a_button() {
        let mut keypad = Keypad::new();
        let mut tokens: Vec<InputToken> = (0..10).map(InputToken::Digit).collect();
        tokens.extend([
            InputToken::Decimal,
            InputToken::Operator(Operator::Add),
            InputToken::Operator(Operator::Subtract),
            InputToken::Operator(Operator::Multiply),
            InputToken::Operator(Operator::Divide),
            InputToken::Equals,
            InputToken::Negate,
            InputToken::Clear,
            InputToken::Delete,
        ]);
        for token in tokens {
            keypad.focus_token(token);
            assert_eq!(keypad.focused(), token);
        }
    }

    #[test]
    fn mouse_hits_resolve_to_buttons() {
        let mut keypad = Keypad::new();
        keypad.hit_areas = vec![
            (Rect::new(0, 0, 5, 3), InputToken::Digit(7)),
            (Rect::new(5, 0, 5, 3), InputToken::Equals),
        ];
        assert_eq!(keypad.button_at(2, 1), Some(InputToken::Digit(7)));
        assert_eq!(keypad.button_at(5, 2), Some(InputToken::Equals));
        assert_eq!(keypad.button_at(10, 0), None);
    }
}
