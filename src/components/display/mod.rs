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

//! Calculator display.
//!
//! The view keeps a snapshot of what has to be shown: the display text, the
//! pending operation above it and a status message for errors. It is
//! refreshed from the engine after every handled token and never mutates the
//! engine.

mod render;

pub(crate) use render::draw_status;

use crate::{
    engine::{CalculatorState, Operator},
    util::format::format_number,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

pub(crate) struct DisplayView {
    text: String,
    pending: Option<(f64, Operator)>,
    status: Option<Status>,
}

impl DisplayView {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            pending: None,
            status: None,
        }
    }

    pub(crate) fn sync(&mut self, state: &CalculatorState) {
        self.text.clone_from(&state.display_text);
        self.pending = state
            .pending_operator
            .map(|op| (state.pending_operand, op));
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub(crate) fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// The `12 +` style line describing the pending operation.
    pub(crate) fn pending_line(&self) -> String {
        match self.pending {
            Some((operand, op)) => format!("{} {}", format_number(operand), op.symbol()),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_copies_engine_state() {
        let state = CalculatorState {
            display_text: "3".to_string(),
            pending_operand: 12.0,
            pending_operator: Some(Operator::Add),
        };

        let mut view = DisplayView::new();
        view.sync(&state);
        assert_eq!(view.text, "3");
        assert_eq!(view.pending_line(), "12 +");
    }

    #[test]
    fn no_pending_operation_renders_empty() {
        let mut view = DisplayView::new();
        view.sync(&CalculatorState::default());
        assert_eq!(view.pending_line(), "");
    }

    #[test]
    fn status_is_kept_until_cleared() {
        let mut view = DisplayView::new();
        view.set_status(Status::Error("bad".to_string()));
        view.sync(&CalculatorState::default());
        assert_eq!(view.status(), Some(&Status::Error("bad".to_string())));
        view.clear_status();
        assert_eq!(view.status(), None);
    }
}
