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

//! Functions for handling fixed-point scaling of arbitrary-precision integers.
//!
//! A fixed-point value is a pair of a scaled integer and a non-negative scale, the value
//! being `raw / 10^scale`. The functions here convert between that pair and plain decimal
//! strings, and re-express a scaled integer at a different scale. Reducing a scale always
//! truncates toward zero, which is exactly equivalent to slicing fractional digits off the
//! decimal string.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tally_core::parsing::normalize_decimal_str;

/// Magnitude below which non-zero `f64` inputs are rendered at fixed decimals.
const F64_EXPONENT_LOWER: f64 = 1e-6;

/// Magnitude from which `f64` inputs are rendered at fixed decimals.
const F64_EXPONENT_UPPER: f64 = 1e21;

/// Returns `10^exp` as a [`BigInt`].
#[must_use]
pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// Clamps a requested (possibly negative) scale into the valid scale range.
///
/// Negative requests clamp to zero; a scale can never be negative.
#[must_use]
pub fn ensure_scale(requested: i64) -> u32 {
    u32::try_from(requested.max(0)).unwrap_or(u32::MAX)
}

/// Re-expresses the scaled integer `raw` held at `from` decimal places at `to` decimal places.
///
/// Increasing the scale is exact. Decreasing the scale truncates toward zero.
#[must_use]
pub fn rescale_raw(raw: &BigInt, from: u32, to: u32) -> BigInt {
    match to.cmp(&from) {
        std::cmp::Ordering::Equal => raw.clone(),
        std::cmp::Ordering::Greater => raw * pow10(to - from),
        std::cmp::Ordering::Less => raw / pow10(from - to),
    }
}

/// Formats the scaled integer `raw` at `scale` decimal places as a plain decimal string.
///
/// The result always carries exactly `scale` fractional digits (none when `scale` is zero),
/// e.g. `format_units(-1250, 3)` is `"-1.250"`.
#[must_use]
pub fn format_units(raw: &BigInt, scale: u32) -> String {
    let sign = if raw.is_negative() { "-" } else { "" };
    let digits = raw.abs().to_string();

    if scale == 0 {
        return format!("{sign}{digits}");
    }

    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);

    format!("{sign}{int_part}.{frac_part}")
}

/// Parses a plain decimal string into a scaled integer at `scale` decimal places.
///
/// The string is first normalized to exactly `scale` fractional digits (truncating excess
/// digits). Returns zero for strings which still fail to parse.
#[must_use]
pub fn parse_units(plain: &str, scale: u32) -> BigInt {
    let normalized = normalize_decimal_str(plain, scale);
    let digits: String = normalized.chars().filter(|c| *c != '.').collect();
    BigInt::from_str(&digits).unwrap_or_else(|_| BigInt::zero())
}

/// Stringifies an `f64` for decimal parsing.
///
/// Values inside `[1e-6, 1e21)` use the shortest round-trip rendering. Values outside
/// that range are formatted as fixed-point strings at `decimals` places. Non-finite
/// values render as `"0"`.
#[must_use]
pub fn f64_to_plain_str(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(F64_EXPONENT_LOWER..F64_EXPONENT_UPPER).contains(&magnitude) {
        return format!("{:.*}", decimals as usize, value);
    }

    value.to_string()
}
