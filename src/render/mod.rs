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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event to provide a reactive user interface.

mod commander;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
};

use crate::{App, components::display::draw_status, render::commander::draw_commander, theme::Theme};

// The calculator face is kept to a fixed size and centred on the screen.
const FACE_WIDTH: u16 = 42;
const FACE_HEIGHT: u16 = 26;

const DISPLAY_HEIGHT: u16 = 4;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Lays out the calculator face (display above keypad) centred in the
/// terminal, with the status line and the command line along the bottom.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state; the keypad
///   records where its buttons were drawn for mouse hit testing.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    // Outer layout: face, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let face = centred(outer[0], FACE_WIDTH, FACE_HEIGHT);

    let frame = Block::default()
        .title(" Calculator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour));
    let inner = frame.inner(face);
    f.render_widget(frame, face);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
        .margin(1)
        .split(inner);

    app.display.draw(f, chunks[0], &app.theme);
    app.keypad.draw(f, chunks[1], &app.theme);

    draw_status(f, outer[1], &app.display, &app.theme);

    draw_commander(f, outer[2], app);
}

fn centred(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{config::AppConfig, engine::InputToken};

    #[test]
    fn centred_face_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let face = centred(area, FACE_WIDTH, FACE_HEIGHT);
        assert_eq!(face.width, FACE_WIDTH);
        assert_eq!(face.height, FACE_HEIGHT);
        assert_eq!(face.x, (100 - FACE_WIDTH) / 2);

        let small = centred(Rect::new(0, 0, 20, 10), FACE_WIDTH, FACE_HEIGHT);
        assert_eq!((small.width, small.height), (20, 10));
    }

    #[test]
    fn draws_display_and_buttons() {
        let mut app = App::new(AppConfig::default());
        for d in [4, 2] {
            app.engine.handle(InputToken::Digit(d)).unwrap();
        }
        app.display.sync(app.engine.state());

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Calculator"));
        assert!(screen.contains("42"));
        assert!(screen.contains("Delete"));
        assert!(screen.contains("Clear"));
        assert!(screen.contains("(-)"));
    }
}
