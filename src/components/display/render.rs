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

//! Display rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::display::{DisplayView, Status},
    render::Render,
    theme::Theme,
};

impl Render for DisplayView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .style(Style::default().bg(theme.display_bg))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.pending_line())
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme.operator_fg)),
            chunks[0],
        );

        // Keep the end of long numbers in view, like a text field would
        let width = chunks[1].width as usize;
        let count = self.text.chars().count();
        let visible: String = self.text.chars().skip(count.saturating_sub(width)).collect();

        f.render_widget(
            Paragraph::new(Line::from(visible))
                .alignment(Alignment::Right)
                .style(
                    Style::default()
                        .fg(theme.display_fg)
                        .add_modifier(Modifier::BOLD),
                ),
            chunks[1],
        );
    }
}

/// Renders the status line below the keypad.
pub(crate) fn draw_status(f: &mut Frame, area: Rect, view: &DisplayView, theme: &Theme) {
    let (text, colour) = match view.status() {
        Some(Status::Error(message)) => (format!("Error: {}", message), theme.error_colour),
        Some(Status::Info(message)) => (message.clone(), theme.commander_colour),
        None => (String::new(), theme.commander_colour),
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour)),
        area,
    );
}
