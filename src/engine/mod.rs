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

//! Single-step calculator engine.
//!
//! The engine holds the text currently shown on the display, at most one
//! pending operator and the left-hand operand captured when that operator was
//! pressed. Every button press arrives as an [`InputToken`] through
//! [`CalculatorEngine::handle`], which either returns the new display text or
//! an [`InvalidOperandError`] when the display cannot be read as a number.
//!
//! There is no expression parsing and no precedence: pressing `=` applies the
//! pending operator to the pending operand and the displayed number, and the
//! result becomes the new pending operand so operations can be chained.

mod error;

pub(crate) use error::InvalidOperandError;

use crate::util::format::format_number;

/// The four binary operators available on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies the operator using plain IEEE-754 arithmetic.
    ///
    /// Division by zero is not special-cased and yields an infinity or NaN.
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// One discrete button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputToken {
    /// A digit in the range `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Negate,
    Clear,
    Delete,
}

impl InputToken {
    /// Maps a typed character onto the token it stands for, if any.
    ///
    /// Only the characters that have an unambiguous keypad button are mapped,
    /// `-` is always subtraction and never the sign toggle.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| InputToken::Digit(d as u8)),
            '.' => Some(InputToken::Decimal),
            '=' => Some(InputToken::Equals),
            _ => Operator::from_symbol(c).map(InputToken::Operator),
        }
    }

    /// The label printed on the keypad button for this token.
    pub(crate) fn label(&self) -> String {
        match self {
            InputToken::Digit(d) => d.to_string(),
            InputToken::Decimal => ".".to_string(),
            InputToken::Operator(op) => op.symbol().to_string(),
            InputToken::Equals => "=".to_string(),
            InputToken::Negate => "(-)".to_string(),
            InputToken::Clear => "Clear".to_string(),
            InputToken::Delete => "Delete".to_string(),
        }
    }
}

/// Everything the calculator remembers between button presses.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CalculatorState {
    pub(crate) display_text: String,
    pub(crate) pending_operand: f64,
    pub(crate) pending_operator: Option<Operator>,
}

/// Interprets input tokens against an exclusively owned [`CalculatorState`].
#[derive(Debug, Default)]
pub(crate) struct CalculatorEngine {
    state: CalculatorState,
    strict_decimal: bool,
}

impl CalculatorEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// When enabled, a decimal point is ignored if the display already holds
    /// one, otherwise it is appended unconditionally.
    pub(crate) fn with_strict_decimal(mut self, strict_decimal: bool) -> Self {
        self.strict_decimal = strict_decimal;
        self
    }

    pub(crate) fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub(crate) fn display_text(&self) -> &str {
        &self.state.display_text
    }

    /// Applies a single token and returns the resulting display text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperandError`] when an operator, equals or negate
    /// token finds text on the display that is not a number. The state is
    /// left exactly as it was before the call.
    pub(crate) fn handle(&mut self, token: InputToken) -> Result<&str, InvalidOperandError> {
        match token {
            InputToken::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.state.display_text.push(c);
                }
            }

            InputToken::Decimal => {
                if !(self.strict_decimal && self.state.display_text.contains('.')) {
                    self.state.display_text.push('.');
                }
            }

            InputToken::Operator(op) => {
                let operand = self.parse_display()?;
                self.state.pending_operand = operand;
                self.state.pending_operator = Some(op);
                self.state.display_text.clear();
            }

            InputToken::Equals => {
                // Nothing to evaluate until an operator has been chosen
                if let Some(op) = self.state.pending_operator {
                    let rhs = self.parse_display()?;
                    let result = op.apply(self.state.pending_operand, rhs);
                    self.state.display_text = format_number(result);
                    self.state.pending_operand = result;
                }
            }

            InputToken::Negate => {
                let value = self.parse_display()?;
                self.state.display_text = format_number(-value);
            }

            InputToken::Clear => self.state.display_text.clear(),

            InputToken::Delete => {
                self.state.display_text.pop();
            }
        }

        Ok(&self.state.display_text)
    }

    fn parse_display(&self) -> Result<f64, InvalidOperandError> {
        self.state
            .display_text
            .parse::<f64>()
            .map_err(|_| InvalidOperandError::new(self.state.display_text.as_str()))
    }
}
