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

//! Represents an arbitrary-precision fixed-point decimal value.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use derive_builder::Builder;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tally_core::{
    correctness::check_predicate_true,
    parsing::{
        expand_exponent, is_decimal_str, normalize_decimal_str, precision_from_str,
        separate_thousands, trim_decimal_str,
    },
};

use super::{
    error::{DecimalError, DecimalResult},
    fixed::{ensure_scale, format_units, parse_units, pow10, rescale_raw},
    rounding::{MulDivRounding, RoundingMode, round_raw},
};

/// The maximum scale representable by a [`rust_decimal::Decimal`].
const RUST_DECIMAL_MAX_SCALE: u32 = 28;

/// Options controlling [`FixedPointDecimal::to_string_with`].
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default, derive(Debug))]
pub struct ToStringOptions {
    /// Renders at this many decimal places (truncating) instead of the value's own scale.
    #[builder(setter(strip_option))]
    pub decimals: Option<u32>,
    /// Strips trailing fractional zeros and a bare trailing decimal point.
    pub trim: bool,
    /// Inserts `,` thousands separators into the integer part.
    pub format: bool,
}

impl Default for ToStringOptions {
    fn default() -> Self {
        Self {
            decimals: None,
            trim: true,
            format: false,
        }
    }
}

/// An immutable fixed-point decimal: an arbitrary-precision scaled integer together with
/// the number of decimal places it represents.
///
/// The value is `raw / 10^scale`. All arithmetic happens on the scaled integers with
/// explicit scale bookkeeping and never on floating-point. Every operation returns a new
/// instance.
///
/// Equality, ordering and hashing are numeric, so `1.5` at scale 1 equals `1.50` at scale 2.
#[derive(Clone)]
pub struct FixedPointDecimal {
    raw: BigInt,
    scale: u32,
}

impl FixedPointDecimal {
    /// Creates a new [`FixedPointDecimal`] from a scaled integer and its scale.
    #[must_use]
    pub fn new(raw: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            raw: raw.into(),
            scale,
        }
    }

    /// Creates a zero value at the given `scale`.
    #[must_use]
    pub fn zero(scale: u32) -> Self {
        Self::new(BigInt::zero(), scale)
    }

    /// Parses a decimal string, inferring the scale from its fractional digits.
    ///
    /// Empty or non-numeric input is treated as `"0"`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::parse_with_scale(value, precision_from_str(value))
    }

    /// Parses a decimal string at an explicit `scale`.
    ///
    /// The string is normalized to exactly `scale` fractional digits before parsing, so
    /// excess digits are truncated (never rounded). Empty or non-numeric input is treated
    /// as `"0"`.
    #[must_use]
    pub fn parse_with_scale(value: &str, scale: u32) -> Self {
        let plain = expand_exponent(value).unwrap_or_else(|| "0".to_string());
        Self::new(parse_units(&plain, scale), scale)
    }

    /// Creates a value from an `f64`, inferring the scale from its shortest decimal
    /// representation. Non-finite values are treated as zero.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::parse(&value.to_string())
        } else {
            Self::zero(0)
        }
    }

    /// Returns the raw scaled integer.
    #[must_use]
    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// Returns the number of decimal places represented.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Returns `true` if the value is strictly less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    /// Returns `true` if the value is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.raw.is_positive()
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.raw.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Re-expresses this value at `scale` decimal places.
    ///
    /// Increasing the scale is exact; decreasing it truncates toward zero.
    #[must_use]
    pub fn rescale(&self, scale: u32) -> Self {
        Self::new(rescale_raw(&self.raw, self.scale, scale), scale)
    }

    fn aligned_raws(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        (
            rescale_raw(&self.raw, self.scale, scale),
            rescale_raw(&other.raw, other.scale, scale),
            scale,
        )
    }

    /// Returns `self + other` at the larger of the two scales.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned_raws(other);
        Self::new(lhs + rhs, scale)
    }

    /// Returns `self - other` at the larger of the two scales.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned_raws(other);
        Self::new(lhs - rhs, scale)
    }

    /// Returns `self * other` at the sum of the two scales (exact).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(&self.raw * &other.raw, self.scale + other.scale)
    }

    /// Returns `self / other` at `decimals` places, defaulting to the sum of both scales.
    ///
    /// The dividend is first re-expressed at `decimals + other.scale` places so that the
    /// truncating integer division yields exactly `decimals` places of precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: &Self, decimals: Option<u32>) -> DecimalResult<Self> {
        if other.is_zero() {
            return Err(DecimalError::DivisionByZero("div"));
        }

        let result_scale = decimals.unwrap_or(self.scale + other.scale);
        let dividend = rescale_raw(&self.raw, self.scale, result_scale + other.scale);

        Ok(Self::new(dividend / &other.raw, result_scale))
    }

    /// Returns the remainder of the two scaled integers, at this value's scale.
    ///
    /// The caller is responsible for passing operands of matching scale.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `other` is zero.
    pub fn modulo(&self, other: &Self) -> DecimalResult<Self> {
        if other.is_zero() {
            return Err(DecimalError::DivisionByZero("modulo"));
        }
        Ok(Self::new(&self.raw % &other.raw, self.scale))
    }

    /// Returns `(self * other) % denominator` in scaled-integer space, at this value's scale.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `denominator` is zero.
    pub fn mul_mod(&self, other: &Self, denominator: &Self) -> DecimalResult<Self> {
        if denominator.is_zero() {
            return Err(DecimalError::DivisionByZero("mul_mod"));
        }
        let product = &self.raw * &other.raw;
        Ok(Self::new(product % &denominator.raw, self.scale))
    }

    /// Returns `(self * other) / denominator` computed on the scaled integers.
    ///
    /// The quotient carries `self.scale + other.scale - denominator.scale` decimal places.
    /// When the denominator carries more places than the product, the product is padded
    /// first and the quotient has scale zero. With [`MulDivRounding::Up`] one unit is added
    /// to the truncated quotient whenever the division leaves a remainder.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `denominator` is zero.
    pub fn mul_div(
        &self,
        other: &Self,
        denominator: &Self,
        rounding: MulDivRounding,
    ) -> DecimalResult<Self> {
        let product_scale = i64::from(self.scale) + i64::from(other.scale);
        let scale = ensure_scale(product_scale - i64::from(denominator.scale));
        self.mul_div_with_scale(other, denominator, scale, rounding)
    }

    /// Returns `(self * other) / denominator` computed exactly and expressed at `scale`
    /// decimal places.
    ///
    /// The division is performed once on the scaled integers, so no precision is lost
    /// before the quotient reaches `scale`. With [`MulDivRounding::Up`] one unit at `scale`
    /// is added to the truncated quotient whenever the division leaves a remainder.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `denominator` is zero.
    pub fn mul_div_with_scale(
        &self,
        other: &Self,
        denominator: &Self,
        scale: u32,
        rounding: MulDivRounding,
    ) -> DecimalResult<Self> {
        if denominator.is_zero() {
            return Err(DecimalError::DivisionByZero("mul_div"));
        }

        // A negative shift scales the divisor instead of the numerator
        let product = &self.raw * &other.raw;
        let product_scale = i64::from(self.scale) + i64::from(other.scale);
        let shift = i64::from(scale) + i64::from(denominator.scale) - product_scale;
        let shift_digits = u32::try_from(shift.unsigned_abs())
            .map_err(|_| DecimalError::Overflow(format!("scale shift {shift} is too large")))?;

        let (numerator, divisor) = if shift >= 0 {
            (product * pow10(shift_digits), denominator.raw.clone())
        } else {
            (product, &denominator.raw * pow10(shift_digits))
        };

        let (quotient, remainder) = numerator.div_rem(&divisor);
        let quotient = match rounding {
            MulDivRounding::Up if !remainder.is_zero() => quotient + BigInt::one(),
            _ => quotient,
        };

        Ok(Self::new(quotient, scale))
    }

    /// Returns the absolute value at the same scale.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Returns the negated value at the same scale.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Self {
        Self::new(-&self.raw, self.scale)
    }

    /// Raises this value to the non-negative integer power `exponent` by repeated
    /// multiplication; the result scale is `exponent * scale`.
    ///
    /// `x^0` is the scale-0 value `1` and `0^n` (for `n != 0`) is the scale-0 value `0`.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        if exponent == 0 {
            return Self::new(1, 0);
        }
        if self.is_zero() {
            return Self::zero(0);
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.mul(self);
        }
        result
    }

    /// Returns `true` if `self >= other`.
    #[must_use]
    pub fn gte(&self, other: &Self) -> bool {
        self >= other
    }

    /// Returns `true` if `self <= other`.
    #[must_use]
    pub fn lte(&self, other: &Self) -> bool {
        self <= other
    }

    /// Reduces precision to `decimals` places (defaulting to the current scale) under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] if `decimals` exceeds the current scale:
    /// rounding can only reduce or hold precision.
    pub fn round(&self, decimals: Option<u32>, mode: RoundingMode) -> DecimalResult<Self> {
        let target = decimals.unwrap_or(self.scale);
        check_predicate_true(
            target <= self.scale,
            &format!(
                "cannot round to {target} decimals, value only holds {} decimals",
                self.scale
            ),
        )?;

        Ok(Self::new(
            round_raw(&self.raw, self.scale, target, mode),
            target,
        ))
    }

    /// Truncates toward zero at `decimals` places.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the current scale.
    pub fn round_down(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        self.round(decimals, RoundingMode::Down)
    }

    /// Rounds away from zero at `decimals` places if any nonzero digit is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the current scale.
    pub fn round_up(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        self.round(decimals, RoundingMode::Up)
    }

    /// Rounds toward positive infinity at `decimals` places.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the current scale.
    pub fn round_ceil(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        self.round(decimals, RoundingMode::Ceil)
    }

    /// Rounds toward negative infinity at `decimals` places.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the current scale.
    pub fn round_floor(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        self.round(decimals, RoundingMode::Floor)
    }

    /// Renders this value as a decimal string according to `options`.
    #[must_use]
    pub fn to_string_with(&self, options: &ToStringOptions) -> String {
        let target = options.decimals.unwrap_or(self.scale);
        let mut result = normalize_decimal_str(&format_units(&self.raw, self.scale), target);

        if options.format {
            result = separate_thousands(&result);
        }
        if options.trim {
            result = trim_decimal_str(&result);
        }
        result
    }

    /// Returns the raw scaled integer, optionally re-expressed at `decimals` places
    /// (truncating when reducing).
    #[must_use]
    pub fn to_big_int(&self, decimals: Option<u32>) -> BigInt {
        match decimals {
            Some(decimals) => rescale_raw(&self.raw, self.scale, decimals),
            None => self.raw.clone(),
        }
    }

    /// Returns an approximate `f64` for this value.
    ///
    /// This conversion is lossy and non-authoritative. Use it only where small
    /// floating-point error is tolerable, such as sort keys or chart ticks.
    #[must_use]
    pub fn to_approx_number(&self) -> f64 {
        format_units(&self.raw, self.scale)
            .parse::<f64>()
            .unwrap_or_default()
    }

    /// Returns the value as a [`Decimal`], truncating to 28 decimal places if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::Overflow`] if the mantissa exceeds the 96-bit range.
    pub fn as_decimal(&self) -> DecimalResult<Decimal> {
        let scale = self.scale.min(RUST_DECIMAL_MAX_SCALE);
        let raw = rescale_raw(&self.raw, self.scale, scale);
        raw.to_i128()
            .and_then(|mantissa| Decimal::try_from_i128_with_scale(mantissa, scale).ok())
            .ok_or_else(|| {
                DecimalError::Overflow(format!("{self} exceeds the `Decimal` mantissa range"))
            })
    }

    /// Returns the trailing-zero-stripped `(raw, scale)` pair, identical for numerically
    /// equal values.
    fn normalized(&self) -> (BigInt, u32) {
        let ten = BigInt::from(10u8);
        let mut raw = self.raw.clone();
        let mut scale = self.scale;
        while scale > 0 && !raw.is_zero() && (&raw % &ten).is_zero() {
            raw /= &ten;
            scale -= 1;
        }
        if raw.is_zero() {
            scale = 0;
        }
        (raw, scale)
    }
}

impl Default for FixedPointDecimal {
    fn default() -> Self {
        Self::zero(0)
    }
}

impl PartialEq for FixedPointDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FixedPointDecimal {}

impl PartialOrd for FixedPointDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedPointDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.raw.cmp(&other.raw);
        }
        let (lhs, rhs, _) = self.aligned_raws(other);
        lhs.cmp(&rhs)
    }
}

impl Hash for FixedPointDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl Add for &FixedPointDecimal {
    type Output = FixedPointDecimal;
    fn add(self, rhs: Self) -> Self::Output {
        FixedPointDecimal::add(self, rhs)
    }
}

impl Sub for &FixedPointDecimal {
    type Output = FixedPointDecimal;
    fn sub(self, rhs: Self) -> Self::Output {
        FixedPointDecimal::sub(self, rhs)
    }
}

impl Mul for &FixedPointDecimal {
    type Output = FixedPointDecimal;
    fn mul(self, rhs: Self) -> Self::Output {
        FixedPointDecimal::mul(self, rhs)
    }
}

impl Neg for &FixedPointDecimal {
    type Output = FixedPointDecimal;
    fn neg(self) -> Self::Output {
        FixedPointDecimal::neg(self)
    }
}

impl From<BigInt> for FixedPointDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for FixedPointDecimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for FixedPointDecimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<i128> for FixedPointDecimal {
    fn from(value: i128) -> Self {
        Self::new(value, 0)
    }
}

impl From<u128> for FixedPointDecimal {
    fn from(value: u128) -> Self {
        Self::new(value, 0)
    }
}

impl From<Decimal> for FixedPointDecimal {
    fn from(value: Decimal) -> Self {
        Self::new(value.mantissa(), value.scale())
    }
}

impl FromStr for FixedPointDecimal {
    type Err = DecimalError;

    /// Strictly parses a decimal string, inferring the scale.
    ///
    /// Unlike [`FixedPointDecimal::parse`], non-numeric input is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !is_decimal_str(value) {
            return Err(DecimalError::invalid_argument(format!(
                "error parsing '{value}' as a decimal"
            )));
        }
        Ok(Self::parse(value))
    }
}

impl Debug for FixedPointDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({})",
            stringify!(FixedPointDecimal),
            format_units(&self.raw, self.scale)
        )
    }
}

impl Display for FixedPointDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(&ToStringOptions::default()))
    }
}

impl Serialize for FixedPointDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FixedPointDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}
