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

//! Calculator engine errors.

use thiserror::Error;

/// Raised when the display text cannot be read as a number.
///
/// The engine leaves its state untouched when this is returned, the offending
/// text is carried along for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No number found, input number first")]
pub(crate) struct InvalidOperandError {
    pub(crate) text: String,
}

impl InvalidOperandError {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
