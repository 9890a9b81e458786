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

//! Keypad rendering.
//!
//! Each row is split evenly between its buttons, so the bottom row of three
//! function buttons spans the same width as the four-button rows above it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{components::keypad::Keypad, engine::InputToken, render::Render, theme::Theme};

impl Render for Keypad {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.hit_areas.clear();
        let rows = self.rows;

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(rows.iter().map(|_| Constraint::Ratio(1, rows.len() as u32)))
            .split(area);

        let focused = self.focused();

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            let button_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(row.iter().map(|_| Constraint::Ratio(1, row.len() as u32)))
                .flex(Flex::Center)
                .split(*row_area);

            for (token, button_area) in row.iter().zip(button_areas.iter()) {
                draw_button(f, *button_area, *token, *token == focused, theme);
                self.hit_areas.push((*button_area, *token));
            }
        }
    }
}

fn draw_button(f: &mut Frame, area: Rect, token: InputToken, focused: bool, theme: &Theme) {
    let fg = match token {
        InputToken::Digit(_) | InputToken::Decimal => theme.digit_fg,
        InputToken::Operator(_) | InputToken::Equals => theme.operator_fg,
        InputToken::Negate | InputToken::Delete | InputToken::Clear => theme.function_fg,
    };

    let (border_type, border_colour, style) = if focused {
        (
            BorderType::Thick,
            theme.accent_colour,
            Style::default().fg(fg).bg(theme.focus_bg).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, theme.border_colour, Style::default().fg(fg))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_colour))
        .style(style);

    // Centre the label vertically inside the border
    let inner = block.inner(area);
    let top_pad = inner.height.saturating_sub(1) / 2;
    let label_area = Rect {
        y: inner.y + top_pad,
        height: inner.height.min(1),
        ..inner
    };

    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(token.label()).alignment(Alignment::Center).style(style),
        label_area,
    );
}
