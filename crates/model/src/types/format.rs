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

//! Human-readable abbreviated formatting of token amounts.
//!
//! The formatter walks a fixed magnitude ladder, largest first:
//!
//! | Magnitude | Divisor | Decimals | Suffix |
//! |-----------|---------|----------|--------|
//! | `>= 1e15` | `1e15`  | 4        | `Q`    |
//! | `>= 1e12` | `1e12`  | 4        | `T`    |
//! | `>= 1e9`  | `1e9`   | 3        | `B`    |
//! | `>= 1e6`  | `1e6`   | 2        | `M`    |
//! | `>= 1e3`  | `1e3`   | 1        | `K` (ultra-short only) |
//!
//! All decimal reductions are string truncations, never rounding, except for the
//! thousands-grouped integer rendering of values between `1e3` and `1e6`.

use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tally_core::parsing::separate_thousands;

use super::{
    FixedPointDecimal, TokenAmount,
    decimal::ToStringOptions,
    error::{DecimalError, DecimalResult},
    fixed::pow10,
};

/// The literal rendered for non-zero dust amounts when negatives are not allowed.
pub const DUST_DISPLAY: &str = "<.00000001";

/// The scale of the dust threshold `0.00000001`.
const DUST_SCALE: u32 = 8;

/// The scale of the small-value threshold `0.001`.
const SMALL_SCALE: u32 = 3;

/// Magnitude ladder steps as `(power of ten, decimals, suffix)`.
const LADDER: [(u32, u32, &str); 4] = [(15, 4, "Q"), (12, 4, "T"), (9, 3, "B"), (6, 2, "M")];

/// An abbreviated human format.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum HumanFormat {
    /// Abbreviates from one million upwards.
    #[default]
    Short,
    /// Abbreviates from one thousand upwards with fewer decimals.
    UltraShort,
}

impl HumanFormat {
    /// Parses a format option (`"short"` or `"ultraShort"`).
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] for any other string.
    pub fn parse(value: &str) -> DecimalResult<Self> {
        Self::from_str(value).map_err(|_| {
            DecimalError::invalid_argument(format!("unsupported format option '{value}'"))
        })
    }
}

/// Renders `value` truncated (never rounded) to at most `decimals` places, with trailing
/// zeros trimmed.
fn truncate_str(value: &FixedPointDecimal, decimals: u32) -> String {
    value.to_string_with(&ToStringOptions {
        decimals: Some(decimals),
        ..Default::default()
    })
}

/// Renders the amount truncated (never rounded) to at most `decimals` places, with trailing
/// zeros trimmed.
#[must_use]
pub fn trim_decimals(amount: &TokenAmount, decimals: u32) -> String {
    truncate_str(amount.value(), decimals)
}

/// Rounds a non-negative value half away from zero to an integer.
fn round_half_away(value: &FixedPointDecimal) -> BigInt {
    if value.scale() == 0 {
        return value.raw().clone();
    }
    let unit = pow10(value.scale());
    let half = &unit / BigInt::from(2);
    (value.raw() + half) / unit
}

/// Prefixes `sign` unless the rendered body truncated to zero.
fn with_sign(sign: &str, body: String) -> String {
    if body == "0" {
        body
    } else {
        format!("{sign}{body}")
    }
}

/// Formats an amount with magnitude abbreviations (`K`, `M`, `B`, `T`, `Q`).
///
/// With `allow_negative` false the amount is treated as a display quantity that should
/// never be negative: non-zero dust below `0.00000001` is clamped to [`DUST_DISPLAY`].
/// With `allow_negative` true a non-negative amount is prefixed with `+`. Negative amounts
/// are always prefixed with `-`. Amounts whose rendering truncates to `0` are never signed.
#[must_use]
pub fn friendly_format(amount: &TokenAmount, format: HumanFormat, allow_negative: bool) -> String {
    let ultra_short = format == HumanFormat::UltraShort;
    let value = amount.value().abs();

    if value.is_zero() {
        return "0".to_string();
    }

    let sign = if amount.is_negative() {
        "-"
    } else if allow_negative {
        "+"
    } else {
        ""
    };

    if !allow_negative && value <= FixedPointDecimal::new(1, DUST_SCALE) {
        return DUST_DISPLAY.to_string();
    }

    if value <= FixedPointDecimal::new(1, SMALL_SCALE) {
        return with_sign(sign, truncate_str(&value, DUST_SCALE));
    }

    for (power, decimals, suffix) in LADDER {
        if value >= FixedPointDecimal::new(pow10(power), 0) {
            let scaled = FixedPointDecimal::new(value.raw().clone(), value.scale() + power);
            return with_sign(sign, format!("{}{suffix}", truncate_str(&scaled, decimals)));
        }
    }

    let thousand = FixedPointDecimal::new(1_000, 0);
    if value >= thousand {
        if ultra_short {
            let scaled = FixedPointDecimal::new(value.raw().clone(), value.scale() + 3);
            return with_sign(sign, format!("{}K", truncate_str(&scaled, 1)));
        }
        let rounded = round_half_away(&value);
        return with_sign(sign, separate_thousands(&rounded.to_string()));
    }

    let decimals = if value > FixedPointDecimal::new(10, 0) {
        if ultra_short { 0 } else { 2 }
    } else if value > FixedPointDecimal::new(1, 0) {
        if ultra_short { 0 } else { 3 }
    } else if ultra_short {
        2
    } else {
        4
    };

    with_sign(sign, truncate_str(&value, decimals))
}
