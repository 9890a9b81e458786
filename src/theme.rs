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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the calculator's color palette and converts colors
//! from Ratatui's representation into the hex strings used to style the
//! terminal emulator itself.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) display_fg: Color,
    pub(crate) display_bg: Color,

    pub(crate) digit_fg: Color,
    pub(crate) operator_fg: Color,
    pub(crate) function_fg: Color,
    pub(crate) focus_bg: Color,

    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(251, 73, 52),

            display_fg: Color::Rgb(255, 255, 255),
            display_bg: Color::Rgb(50, 30, 60),

            digit_fg: Color::Rgb(255, 255, 255),
            operator_fg: Color::Rgb(250, 189, 47),
            function_fg: Color::Rgb(179, 157, 219),
            focus_bg: Color::Rgb(85, 60, 100),

            commander_colour: Color::Rgb(162, 161, 166),
            commander_bg: Color::Rgb(50, 30, 60),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Non-RGB colours have no fixed value, `None` is returned for those.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 50)).as_deref(), Some("#281432"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
