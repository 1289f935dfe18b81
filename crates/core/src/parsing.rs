// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Core decimal-string parsing functions.
//!
//! These functions operate purely on text. A "plain" decimal string is an optional `-`
//! sign, an integer part, and an optional `.` followed by a fractional part, with no
//! exponent and no grouping separators.

use thousands::Separable;

/// The largest absolute exponent accepted in scientific notation.
///
/// Larger exponents would expand into strings of unbounded length, so they are
/// treated as non-numeric input.
pub const MAX_EXPONENT: i64 = 1_000;

/// Returns `true` if `s` is a numeric decimal string.
///
/// Accepts surrounding whitespace, an optional `+`/`-` sign, digits with at most one
/// decimal point (at least one digit overall), and an optional exponent `e[+-]N`.
#[must_use]
pub fn is_decimal_str(s: &str) -> bool {
    split_numeric(s.trim()).is_some()
}

/// Returns the decimal precision inferred from the given string.
///
/// For plain strings this is the number of characters after the decimal point. For
/// scientific notation the exponent is applied first, so `"1.5e-7"` has precision 8.
/// Non-numeric strings have precision 0.
#[must_use]
pub fn precision_from_str(s: &str) -> u32 {
    let s = s.trim();
    let lowered = s.to_ascii_lowercase();

    if lowered.contains('e') {
        return match expand_exponent(&lowered) {
            Some(plain) => fraction_len(&plain),
            None => 0,
        };
    }

    fraction_len(s)
}

fn fraction_len(s: &str) -> u32 {
    match s.split_once('.') {
        Some((_, decimal_part)) => u32::try_from(decimal_part.len()).unwrap_or(u32::MAX),
        None => 0,
    }
}

/// Rewrites a numeric string into plain decimal form.
///
/// Scientific notation is expanded (`"2.5e3"` -> `"2500"`, `"1e-3"` -> `"0.001"`),
/// a leading `+` is dropped, redundant leading integer zeros are removed, and a
/// missing integer part is filled in (`".5"` -> `"0.5"`). Returns `None` when `s` is
/// not numeric or its exponent magnitude exceeds [`MAX_EXPONENT`].
#[must_use]
pub fn expand_exponent(s: &str) -> Option<String> {
    let (negative, int_part, frac_part, exponent) = split_numeric(s.trim())?;

    let digits: String = format!("{int_part}{frac_part}");
    let point = int_part.len() as i64 + exponent;

    let (int_digits, frac_digits) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        (String::new(), format!("{zeros}{digits}"))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{digits}{zeros}"), String::new())
    } else {
        let (int_digits, frac_digits) = digits.split_at(point as usize);
        (int_digits.to_string(), frac_digits.to_string())
    };

    let int_digits = int_digits.trim_start_matches('0');
    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let sign = if negative { "-" } else { "" };

    if frac_digits.is_empty() {
        Some(format!("{sign}{int_digits}"))
    } else {
        Some(format!("{sign}{int_digits}.{frac_digits}"))
    }
}

/// Splits a trimmed numeric string into `(negative, integer, fraction, exponent)`.
fn split_numeric(s: &str) -> Option<(bool, &str, &str, i64)> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => {
            let exponent_str = &unsigned[pos + 1..];
            let digits = exponent_str
                .strip_prefix(['+', '-'])
                .unwrap_or(exponent_str);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let exponent = exponent_str.parse::<i64>().ok()?;
            if exponent.abs() > MAX_EXPONENT {
                return None;
            }
            (&unsigned[..pos], exponent)
        }
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    Some((negative, int_part, frac_part, exponent))
}

/// Normalizes a plain decimal string to exactly `scale` fractional digits.
///
/// Excess fractional digits are truncated (never rounded) and a short fractional part
/// is right-padded with `'0'`. With a `scale` of zero only the integer part is
/// returned. An empty integer part is rendered as `0`.
#[must_use]
pub fn normalize_decimal_str(s: &str, scale: u32) -> String {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));

    let int_part = match int_part {
        "" => "0",
        "-" => "-0",
        "+" => "0",
        other => other.strip_prefix('+').unwrap_or(other),
    };

    if scale == 0 {
        return int_part.to_string();
    }

    let scale = scale as usize;
    let mut fraction: String = frac_part.chars().take(scale).collect();
    if fraction.len() < scale {
        fraction.push_str(&"0".repeat(scale - fraction.len()));
    }

    format!("{int_part}.{fraction}")
}

/// Strips trailing fractional zeros and a bare trailing decimal point.
///
/// Strings without a decimal point are returned unchanged apart from a negative zero
/// collapsing to `"0"`. The function is idempotent.
#[must_use]
pub fn trim_decimal_str(s: &str) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };

    match trimmed {
        "-0" | "" | "-" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Inserts `,` thousands separators into the integer part of a plain decimal string.
#[must_use]
pub fn separate_thousands(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };

    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{sign}{}.{frac_part}", int_part.separate_with_commas())
        }
        None => format!("{sign}{}", unsigned.separate_with_commas()),
    }
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn plain_decimal_strategy() -> impl Strategy<Value = String> {
        ("-?[0-9]{1,20}", "[0-9]{0,20}").prop_map(|(int_part, frac_part)| {
            if frac_part.is_empty() {
                int_part
            } else {
                format!("{int_part}.{frac_part}")
            }
        })
    }

    proptest! {
        #[rstest]
        fn prop_normalize_sets_precision(s in plain_decimal_strategy(), scale in 0u32..=30) {
            let normalized = normalize_decimal_str(&s, scale);
            prop_assert_eq!(precision_from_str(&normalized), scale);
            prop_assert!(is_decimal_str(&normalized));
        }

        #[rstest]
        fn prop_trim_is_idempotent(s in plain_decimal_strategy()) {
            let once = trim_decimal_str(&s);
            prop_assert_eq!(trim_decimal_str(&once), once);
        }

        #[rstest]
        fn prop_expand_exponent_keeps_digits(mantissa in "[1-9][0-9]{0,10}", exponent in -30i64..=30) {
            let expanded = expand_exponent(&format!("{mantissa}e{exponent}")).unwrap();
            prop_assert!(!expanded.contains('e'));
            prop_assert!(is_decimal_str(&expanded));

            let digits: String = expanded.chars().filter(char::is_ascii_digit).collect();
            prop_assert_eq!(digits.trim_matches('0'), mantissa.trim_end_matches('0'));
        }
    }
}
