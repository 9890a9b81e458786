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

// Magnitudes outside this window switch to scientific notation so a single
// result cannot push hundreds of digits into the display.
const MAX_PLAIN: f64 = 1e16;
const MIN_PLAIN: f64 = 1e-7;

/// Formats a calculation result into the text written back to the display.
///
/// The output always parses back to exactly the same `f64`, so a result can
/// be used as the operand of the next operation. Whole numbers carry no
/// trailing `.0`, infinities and NaN use Rust's own spelling (`inf`, `-inf`,
/// `NaN`), which is also what the engine accepts when reading the display.
///
/// # Examples
///
/// ```
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(1e21), "1e21");
/// ```
pub(crate) fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(MIN_PLAIN..MAX_PLAIN).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
    }

    #[test]
    fn fractions() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(1.5e-9), "1.5e-9");
        assert_eq!(format_number(-2e300), "-2e300");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn output_parses_back() {
        for value in [0.1 + 0.2, 1.0 / 3.0, 123456789.125, 9.99e15, 4.2e-8] {
            let text = format_number(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{}", text);
        }
    }
}
