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

//! Rounding policies for reducing the precision of fixed-point values.
//!
//! Every policy is built from two primitives: truncation toward zero, and rounding away
//! from zero when a nonzero remainder is discarded.
//!
//! | Policy  | Positive values | Negative values |
//! |---------|-----------------|-----------------|
//! | `Down`  | truncate        | truncate        |
//! | `Up`    | away from zero  | away from zero  |
//! | `Ceil`  | away from zero  | truncate        |
//! | `Floor` | truncate        | away from zero  |

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{
    error::{DecimalError, DecimalResult},
    fixed::pow10,
};

/// A policy for discarding fractional digits when reducing precision.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Truncate toward zero.
    #[default]
    Down,
    /// Round away from zero if any nonzero digit is discarded.
    Up,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward negative infinity.
    Floor,
}

impl RoundingMode {
    /// Parses a rounding mode name (`"down"`, `"up"`, `"ceil"`, `"floor"`).
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] for any other string.
    pub fn parse(value: &str) -> DecimalResult<Self> {
        Self::from_str(value).map_err(|_| {
            DecimalError::invalid_argument(format!("unsupported rounding mode '{value}'"))
        })
    }

    /// Returns `true` if this policy rounds away from zero for a value with the given sign.
    #[must_use]
    pub fn rounds_away(self, negative: bool) -> bool {
        match self {
            Self::Down => false,
            Self::Up => true,
            Self::Ceil => !negative,
            Self::Floor => negative,
        }
    }
}

/// The rounding applied to the quotient of a `mul_div` operation.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MulDivRounding {
    /// Truncate the quotient toward zero.
    #[default]
    Down,
    /// Add one to the truncated quotient when the division leaves a remainder.
    Up,
}

impl MulDivRounding {
    /// Parses a `mul_div` rounding name (`"down"` or `"up"`).
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] for any other string.
    pub fn parse(value: &str) -> DecimalResult<Self> {
        Self::from_str(value).map_err(|_| {
            DecimalError::invalid_argument(format!("unsupported mulDiv rounding '{value}'"))
        })
    }
}

/// Reduces the scaled integer `raw` from `from` to `to` decimal places under `mode`.
///
/// The caller guarantees `to <= from`.
#[must_use]
pub fn round_raw(raw: &BigInt, from: u32, to: u32, mode: RoundingMode) -> BigInt {
    debug_assert!(to <= from, "cannot round {from} decimals up to {to}");

    if to == from {
        return raw.clone();
    }

    let divisor = pow10(from - to);
    let truncated = raw / &divisor;
    let remainder = raw % &divisor;

    if remainder.is_zero() || !mode.rounds_away(raw.is_negative()) {
        truncated
    } else {
        truncated + raw.signum()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(125, RoundingMode::Down, 12)]
    #[case(125, RoundingMode::Up, 13)]
    #[case(125, RoundingMode::Ceil, 13)]
    #[case(125, RoundingMode::Floor, 12)]
    #[case(-125, RoundingMode::Down, -12)]
    #[case(-125, RoundingMode::Up, -13)]
    #[case(-125, RoundingMode::Ceil, -12)]
    #[case(-125, RoundingMode::Floor, -13)]
    #[case(120, RoundingMode::Up, 12)]
    #[case(-120, RoundingMode::Floor, -12)]
    fn test_round_raw_table(#[case] raw: i64, #[case] mode: RoundingMode, #[case] expected: i64) {
        let result = round_raw(&BigInt::from(raw), 2, 1, mode);
        assert_eq!(result, BigInt::from(expected));
    }

    #[rstest]
    fn test_round_raw_same_scale_is_identity() {
        for mode in RoundingMode::iter() {
            assert_eq!(round_raw(&BigInt::from(-7), 3, 3, mode), BigInt::from(-7));
        }
    }

    #[rstest]
    fn test_round_raw_to_zero_decimals() {
        let raw = BigInt::from(1_000_001);
        assert_eq!(round_raw(&raw, 6, 0, RoundingMode::Up), BigInt::from(2));
        assert_eq!(round_raw(&raw, 6, 0, RoundingMode::Down), BigInt::from(1));
    }

    #[rstest]
    #[case("down", RoundingMode::Down)]
    #[case("up", RoundingMode::Up)]
    #[case("ceil", RoundingMode::Ceil)]
    #[case("floor", RoundingMode::Floor)]
    fn test_rounding_mode_parse(#[case] input: &str, #[case] expected: RoundingMode) {
        assert_eq!(RoundingMode::parse(input).unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    fn test_rounding_mode_parse_unsupported() {
        let err = RoundingMode::parse("halfEven").unwrap_err();
        assert!(matches!(err, DecimalError::InvalidArgument(_)));
    }

    #[rstest]
    fn test_mul_div_rounding_parse() {
        assert_eq!(MulDivRounding::parse("up").unwrap(), MulDivRounding::Up);
        assert_eq!(MulDivRounding::parse("down").unwrap(), MulDivRounding::Down);
        assert_eq!(MulDivRounding::default(), MulDivRounding::Down);
        assert!(MulDivRounding::parse("nearest").is_err());
    }
}
