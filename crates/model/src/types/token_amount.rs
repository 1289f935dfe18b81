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

//! Represents an amount of a token held at the token's native decimal precision.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize};
use tally_core::correctness::check_non_negative_f64;

use super::{
    FixedPointDecimal,
    decimal::ToStringOptions,
    error::{DecimalError, DecimalResult},
    fixed::f64_to_plain_str,
    format::{HumanFormat, friendly_format},
    operand::{BlockchainValue, HumanValue, Operand},
    rounding::MulDivRounding,
};

/// The minimum output scale of percentage calculations.
const PCT_MIN_DECIMALS: u32 = 2;

/// An immutable amount of a token at the token's `decimals` precision.
///
/// Construction only happens through the factories ([`TokenAmount::from_human`],
/// [`TokenAmount::from_blockchain`], [`TokenAmount::from_decimal`]). The human and on-chain
/// string forms are computed once at construction.
///
/// Binary operations accept any `impl Into<Operand>`: another amount, a floating-point or
/// narrow integer *human* number (scale inferred), or a wide integer treated as an
/// *on-chain* integer at scale zero.
#[derive(Clone)]
pub struct TokenAmount {
    value: FixedPointDecimal,
    human: String,
    blockchain: String,
}

impl TokenAmount {
    fn wrap(value: FixedPointDecimal) -> Self {
        let human = value.to_string();
        let blockchain = value.raw().to_string();
        Self {
            value,
            human,
            blockchain,
        }
    }

    /// Creates an amount from a human (decimal) value at `decimals` places.
    ///
    /// Excess fractional digits are truncated. Empty or non-numeric strings become zero.
    /// Floating-point values which would render in exponent form are pre-formatted at
    /// `decimals` places. A wide integer is accepted but logs a warning, since it was
    /// most likely meant for [`TokenAmount::from_blockchain`].
    #[must_use]
    pub fn from_human(value: impl Into<HumanValue>, decimals: u32) -> Self {
        let decimal = match value.into() {
            HumanValue::Text(text) => FixedPointDecimal::parse_with_scale(&text, decimals),
            HumanValue::Number(number) => {
                FixedPointDecimal::parse_with_scale(&f64_to_plain_str(number, decimals), decimals)
            }
            HumanValue::Integer(integer) => {
                log::warn!(
                    "Creating a human token amount from integer {integer} at {decimals} decimals, \
                     use `from_blockchain` for on-chain values"
                );
                FixedPointDecimal::parse_with_scale(&integer.to_string(), decimals)
            }
        };
        Self::wrap(decimal)
    }

    /// Creates an amount from an on-chain integer in the token's smallest unit.
    ///
    /// Integers are used directly as the scaled value. Strings (decimal or `0x`-prefixed
    /// hexadecimal) and floating-point values are truncated to an integer first; invalid
    /// strings become zero.
    #[must_use]
    pub fn from_blockchain(value: impl Into<BlockchainValue>, decimals: u32) -> Self {
        let raw = match value.into() {
            BlockchainValue::Integer(integer) => integer,
            BlockchainValue::Text(text) => parse_blockchain_str(&text),
            BlockchainValue::Number(number) => {
                FixedPointDecimal::parse_with_scale(&f64_to_plain_str(number, 0), 0)
                    .raw()
                    .clone()
            }
        };
        Self::wrap(FixedPointDecimal::new(raw, decimals))
    }

    /// Wraps an existing decimal, taking its scale as the token decimals.
    #[must_use]
    pub fn from_decimal(value: FixedPointDecimal) -> Self {
        Self::wrap(value)
    }

    /// Returns the token decimals.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.value.scale()
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub fn value(&self) -> &FixedPointDecimal {
        &self.value
    }

    /// Consumes the amount, returning the underlying decimal value.
    #[must_use]
    pub fn into_decimal(self) -> FixedPointDecimal {
        self.value
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    /// Re-expresses the amount at a different number of token decimals (truncating).
    #[must_use]
    pub fn re_decimal(&self, decimals: u32) -> Self {
        Self::wrap(self.value.rescale(decimals))
    }

    /// Returns `self + other`.
    ///
    /// The result carries the larger of the two scales, which may differ from this
    /// amount's decimals when `other` is more precise.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: impl Into<Operand>) -> Self {
        Self::wrap(self.value.add(other.into().as_decimal()))
    }

    /// Returns `self - other`, carrying the larger of the two scales.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: impl Into<Operand>) -> Self {
        Self::wrap(self.value.sub(other.into().as_decimal()))
    }

    /// Returns `self * other` re-expressed (truncating) at this amount's decimals.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: impl Into<Operand>) -> Self {
        let product = self.value.mul(other.into().as_decimal());
        self.at_own_decimals(product)
    }

    /// Returns `self / other` at `decimals` places, defaulting to the sum of both scales.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: impl Into<Operand>, decimals: Option<u32>) -> DecimalResult<Self> {
        Ok(Self::wrap(self.value.div(other.into().as_decimal(), decimals)?))
    }

    /// Returns the remainder of `self / other`, with `other` first re-expressed at this
    /// amount's decimals.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `other` is zero at this amount's decimals.
    pub fn modulo(&self, other: impl Into<Operand>) -> DecimalResult<Self> {
        let other = other.into().into_decimal().rescale(self.decimals());
        Ok(Self::wrap(self.value.modulo(&other)?))
    }

    /// Returns `(self * other) % denominator` at this amount's decimals, with the
    /// denominator first re-expressed at this amount's decimals.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `denominator` is zero at this amount's
    /// decimals.
    pub fn mul_mod(
        &self,
        other: impl Into<Operand>,
        denominator: impl Into<Operand>,
    ) -> DecimalResult<Self> {
        let denominator = denominator.into().into_decimal().rescale(self.decimals());
        let result = self
            .value
            .mul_mod(other.into().as_decimal(), &denominator)?;
        Ok(self.at_own_decimals(result))
    }

    /// Returns `(self * other) / denominator` at this amount's decimals, with the
    /// denominator first re-expressed at this amount's decimals.
    ///
    /// The quotient is computed directly at this amount's decimals whatever the scale of
    /// `other`, and [`MulDivRounding::Up`] rounds the last unit at that scale.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] if `denominator` is zero at this amount's
    /// decimals.
    pub fn mul_div(
        &self,
        other: impl Into<Operand>,
        denominator: impl Into<Operand>,
        rounding: MulDivRounding,
    ) -> DecimalResult<Self> {
        let denominator = denominator.into().into_decimal().rescale(self.decimals());
        let result = self.value.mul_div_with_scale(
            other.into().as_decimal(),
            &denominator,
            self.decimals(),
            rounding,
        )?;
        Ok(Self::wrap(result))
    }

    /// Returns `percent`% of this amount, at no fewer than two decimals.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] if `percent` is negative or not finite.
    pub fn pct(&self, percent: f64) -> DecimalResult<Self> {
        check_non_negative_f64(percent, "percent")?;

        let product = self.value.mul(&FixedPointDecimal::from_f64(percent));
        let result = product.div(
            &FixedPointDecimal::new(100, 0),
            Some(self.decimals().max(PCT_MIN_DECIMALS)),
        )?;
        Ok(Self::wrap(result))
    }

    /// Deducts `slippage` percentage points, returning `pct(100 - slippage)`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] if `slippage` exceeds 100.
    pub fn sub_slippage(&self, slippage: f64) -> DecimalResult<Self> {
        self.pct(100.0 - slippage)
    }

    /// Adds `slippage` percentage points, returning `pct(100 + slippage)`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidArgument`] if the resulting percentage is negative.
    pub fn add_slippage(&self, slippage: f64) -> DecimalResult<Self> {
        self.pct(100.0 + slippage)
    }

    /// Returns the absolute amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::wrap(self.value.abs())
    }

    /// Returns the negated amount.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Self {
        Self::wrap(self.value.neg())
    }

    /// Raises the amount to the power `exponent`, re-expressed at this amount's decimals.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        self.at_own_decimals(self.value.pow(exponent))
    }

    /// Returns `true` if the amount is numerically equal to `other`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn eq(&self, other: impl Into<Operand>) -> bool {
        self.value == *other.into().as_decimal()
    }

    /// Returns `true` if the amount is greater than `other`.
    #[must_use]
    pub fn gt(&self, other: impl Into<Operand>) -> bool {
        self.value > *other.into().as_decimal()
    }

    /// Returns `true` if the amount is greater than or equal to `other`.
    #[must_use]
    pub fn gte(&self, other: impl Into<Operand>) -> bool {
        self.value >= *other.into().as_decimal()
    }

    /// Returns `true` if the amount is less than `other`.
    #[must_use]
    pub fn lt(&self, other: impl Into<Operand>) -> bool {
        self.value < *other.into().as_decimal()
    }

    /// Returns `true` if the amount is less than or equal to `other`.
    #[must_use]
    pub fn lte(&self, other: impl Into<Operand>) -> bool {
        self.value <= *other.into().as_decimal()
    }

    /// Returns the smallest of `values`, or `None` if empty.
    #[must_use]
    pub fn min_of(values: &[Self]) -> Option<Self> {
        values.iter().min().cloned()
    }

    /// Returns the largest of `values`, or `None` if empty.
    #[must_use]
    pub fn max_of(values: &[Self]) -> Option<Self> {
        values.iter().max().cloned()
    }

    /// Truncates toward zero at `decimals` places, keeping the token decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the token decimals.
    pub fn round_down(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        Ok(self.at_own_decimals(self.value.round_down(decimals)?))
    }

    /// Rounds away from zero at `decimals` places, keeping the token decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the token decimals.
    pub fn round_up(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        Ok(self.at_own_decimals(self.value.round_up(decimals)?))
    }

    /// Rounds toward positive infinity at `decimals` places, keeping the token decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the token decimals.
    pub fn round_ceil(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        Ok(self.at_own_decimals(self.value.round_ceil(decimals)?))
    }

    /// Rounds toward negative infinity at `decimals` places, keeping the token decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds the token decimals.
    pub fn round_floor(&self, decimals: Option<u32>) -> DecimalResult<Self> {
        Ok(self.at_own_decimals(self.value.round_floor(decimals)?))
    }

    fn at_own_decimals(&self, value: FixedPointDecimal) -> Self {
        Self::wrap(value.rescale(self.decimals()))
    }

    /// Returns the exact human string, trimmed of trailing zeros.
    #[must_use]
    pub fn to_human(&self) -> &str {
        &self.human
    }

    /// Returns an abbreviated human string (see [`friendly_format`]).
    #[must_use]
    pub fn to_human_formatted(&self, format: HumanFormat, allow_negative: bool) -> String {
        friendly_format(self, format, allow_negative)
    }

    /// Returns the on-chain integer string.
    #[must_use]
    pub fn to_blockchain(&self) -> &str {
        &self.blockchain
    }

    /// Renders the amount according to `options`.
    #[must_use]
    pub fn to_string_with(&self, options: &ToStringOptions) -> String {
        self.value.to_string_with(options)
    }

    /// Returns the on-chain integer, optionally re-expressed at `decimals` places.
    #[must_use]
    pub fn to_big_int(&self, decimals: Option<u32>) -> BigInt {
        self.value.to_big_int(decimals)
    }

    /// Returns the on-chain integer as `0x`-prefixed lowercase hexadecimal (`-0x…` when
    /// negative).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.value.raw())
    }

    /// Returns an approximate `f64` for this amount. Lossy and non-authoritative.
    #[must_use]
    pub fn to_approx_number(&self) -> f64 {
        self.value.to_approx_number()
    }

    /// Returns the on-chain integer as a `U256`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::Overflow`] if the amount is negative or exceeds 256 bits.
    #[cfg(feature = "defi")]
    pub fn to_u256(&self) -> DecimalResult<alloy_primitives::U256> {
        super::operand::big_int_to_u256(self.value.raw()).ok_or_else(|| {
            DecimalError::Overflow(format!(
                "on-chain amount {} does not fit in a U256",
                self.blockchain
            ))
        })
    }
}

/// Parses an on-chain integer string, truncating any fractional part.
fn parse_blockchain_str(text: &str) -> BigInt {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return BigInt::default();
        }
        let magnitude = BigInt::parse_bytes(hex.as_bytes(), 16).unwrap_or_default();
        return if negative { -magnitude } else { magnitude };
    }

    FixedPointDecimal::parse_with_scale(trimmed, 0).raw().clone()
}

impl PartialEq for TokenAmount {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TokenAmount {}

impl PartialOrd for TokenAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TokenAmount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for TokenAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Add for &TokenAmount {
    type Output = TokenAmount;
    fn add(self, rhs: Self) -> Self::Output {
        TokenAmount::add(self, rhs)
    }
}

impl Sub for &TokenAmount {
    type Output = TokenAmount;
    fn sub(self, rhs: Self) -> Self::Output {
        TokenAmount::sub(self, rhs)
    }
}

impl Mul for &TokenAmount {
    type Output = TokenAmount;
    fn mul(self, rhs: Self) -> Self::Output {
        TokenAmount::mul(self, rhs)
    }
}

impl Neg for &TokenAmount {
    type Output = TokenAmount;
    fn neg(self) -> Self::Output {
        TokenAmount::neg(self)
    }
}

impl From<FixedPointDecimal> for TokenAmount {
    fn from(value: FixedPointDecimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<&FixedPointDecimal> for TokenAmount {
    fn from(value: &FixedPointDecimal) -> Self {
        Self::from_decimal(value.clone())
    }
}

impl FromStr for TokenAmount {
    type Err = DecimalError;

    /// Strictly parses a human decimal string, taking its fractional digit count as the
    /// token decimals.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FixedPointDecimal::from_str(value).map(Self::wrap)
    }
}

impl Debug for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(human={}, blockchain={}, decimals={})",
            stringify!(TokenAmount),
            self.human,
            self.blockchain,
            self.decimals(),
        )
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.human)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.human)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tally_core::approx_eq;

    use super::*;
    use crate::types::stubs::{amount_usdc, amount_weth};

    fn human(value: &str, decimals: u32) -> TokenAmount {
        TokenAmount::from_human(value, decimals)
    }

    #[rstest]
    fn test_from_blockchain_end_to_end() {
        let amount = TokenAmount::from_blockchain(3_140_000u64, 6);
        assert_eq!(amount.to_human(), "3.14");
        assert_eq!(amount.to_big_int(None), BigInt::from(3_140_000));
        assert_eq!(amount.to_blockchain(), "3140000");
        assert_eq!(amount.decimals(), 6);
    }

    #[rstest]
    #[case("3140000", "3.14")]
    #[case("0x2fe9a0", "3.14")]
    #[case("-3140000", "-3.14")]
    #[case("3140000.99", "3.14")]
    #[case("3.14e6", "3.14")]
    #[case("garbage", "0")]
    #[case("-0x2fe9a0", "-3.14")]
    #[case("-0x-2fe9a0", "0")]
    #[case("0x+2fe9a0", "0")]
    #[case("0x", "0")]
    fn test_from_blockchain_strings(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(TokenAmount::from_blockchain(input, 6).to_human(), expected);
    }

    #[rstest]
    fn test_from_blockchain_number() {
        let amount = TokenAmount::from_blockchain(1_500_000.7, 6);
        assert_eq!(amount.to_human(), "1.5");
    }

    #[rstest]
    #[case("1.5", 6, "1.5", "1500000")]
    #[case("1.123456789", 6, "1.123456", "1123456")]
    #[case("", 6, "0", "0")]
    #[case("  ", 18, "0", "0")]
    #[case("abc", 6, "0", "0")]
    #[case("-2", 2, "-2", "-200")]
    fn test_from_human_strings(
        #[case] input: &str,
        #[case] decimals: u32,
        #[case] expected_human: &str,
        #[case] expected_blockchain: &str,
    ) {
        let amount = human(input, decimals);
        assert_eq!(amount.to_human(), expected_human);
        assert_eq!(amount.to_blockchain(), expected_blockchain);
        assert_eq!(amount.decimals(), decimals);
    }

    #[rstest]
    #[case(1.5, 6, "1.5")]
    #[case(1e-7, 6, "0")]
    #[case(1e-7, 8, "0.0000001")]
    #[case(2e21, 0, "2000000000000000000000")]
    fn test_from_human_numbers(#[case] input: f64, #[case] decimals: u32, #[case] expected: &str) {
        assert_eq!(TokenAmount::from_human(input, decimals).to_human(), expected);
    }

    #[rstest]
    fn test_from_human_integer_is_treated_as_decimal() {
        let amount = TokenAmount::from_human(5u64, 6);
        assert_eq!(amount.to_human(), "5");
        assert_eq!(amount.to_blockchain(), "5000000");
    }

    #[rstest]
    fn test_from_decimal_takes_scale() {
        let decimal = FixedPointDecimal::parse("1.250");
        let amount = TokenAmount::from(&decimal);
        assert_eq!(amount.decimals(), 3);
        assert_eq!(amount.value(), &decimal);
        assert_eq!(TokenAmount::from_decimal(decimal).to_blockchain(), "1250");
    }

    #[rstest]
    fn test_add_with_scale_mismatch_keeps_larger_scale() {
        let usdc = human("1.5", 6);
        let weth = human("0.000000000000000001", 18);
        let sum = usdc.add(&weth);
        assert_eq!(sum.decimals(), 18);
        assert_eq!(sum.to_human(), "1.500000000000000001");

        let diff = usdc.sub(&weth);
        assert_eq!(diff.decimals(), 18);
    }

    #[rstest]
    fn test_add_number_operand() {
        let amount = human("1.5", 6);
        let sum = amount.add(2.25);
        assert_eq!(sum.to_human(), "3.75");
        assert_eq!(sum.decimals(), 6);
    }

    #[rstest]
    fn test_add_bigint_operand_is_scale_zero() {
        let amount = human("1.5", 6);
        assert_eq!(amount.add(2u64).to_human(), "3.5");
    }

    #[rstest]
    fn test_mul_keeps_token_decimals() {
        let amount = human("1.123456", 6);
        let product = amount.mul(&human("2.5", 6));
        assert_eq!(product.decimals(), 6);
        assert_eq!(product.to_human(), "2.80864");

        let squared = amount.mul(&amount).mul(&amount);
        assert_eq!(squared.decimals(), 6);
    }

    #[rstest]
    fn test_div_precision() {
        let a = human("22", 0);
        let b = human("5", 0);
        assert_eq!(a.div(&b, Some(0)).unwrap().to_human(), "4");
        assert_eq!(a.div(&b, Some(1)).unwrap().to_human(), "4.4");
        assert_eq!(a.div(&b, None).unwrap().to_human(), "4");
        assert_eq!(a.div(&b, None).unwrap().decimals(), 0);
    }

    #[rstest]
    fn test_div_by_zero() {
        let err = human("1", 6).div(0u64, None).unwrap_err();
        assert_eq!(err, DecimalError::DivisionByZero("div"));
    }

    #[rstest]
    fn test_modulo_rescales_operand() {
        let amount = human("7.5", 6);
        let result = amount.modulo(2.0).unwrap();
        assert_eq!(result.to_human(), "1.5");
        assert_eq!(result.decimals(), 6);
    }

    #[rstest]
    fn test_mul_div_and_mul_mod() {
        let amount = human("10", 6);
        let result = amount.mul_div(3u64, &human("4", 6), MulDivRounding::Down).unwrap();
        assert_eq!(result.decimals(), 6);
        assert_eq!(result.to_human(), "7.5");

        let remainder = amount.mul_mod(3u64, &human("4", 6)).unwrap();
        assert_eq!(remainder.decimals(), 6);
        assert_eq!(remainder.to_human(), "2");

        let up = human("1", 0)
            .mul_div(7u64, &human("4", 0), MulDivRounding::Up)
            .unwrap();
        assert_eq!(up.to_human(), "2");
    }

    #[rstest]
    fn test_mul_div_independent_of_operand_type() {
        let amount = human("10", 6);
        let expected = human("7.5", 6);

        let integers = amount.mul_div(3u64, 4u64, MulDivRounding::Down).unwrap();
        let amounts = amount
            .mul_div(&human("3", 6), &human("4", 6), MulDivRounding::Down)
            .unwrap();
        let float = amount.mul_div(0.75, 1u64, MulDivRounding::Down).unwrap();

        for result in [integers, amounts, float] {
            assert_eq!(result, expected);
            assert_eq!(result.decimals(), 6);
            assert_eq!(result.to_blockchain(), "7500000");
        }
    }

    #[rstest]
    fn test_mul_div_rounds_last_token_unit() {
        let amount = human("1", 6);
        let down = amount.mul_div(1u64, 3u64, MulDivRounding::Down).unwrap();
        let up = amount.mul_div(1u64, 3u64, MulDivRounding::Up).unwrap();
        assert_eq!(down.to_human(), "0.333333");
        assert_eq!(up.to_human(), "0.333334");
    }

    #[rstest]
    #[case(50.0, "50")]
    #[case(12.5, "12.5")]
    #[case(0.0, "0")]
    fn test_pct(amount_usdc: TokenAmount, #[case] percent: f64, #[case] expected: &str) {
        assert_eq!(amount_usdc.pct(percent).unwrap().to_human(), expected);
    }

    #[rstest]
    fn test_pct_minimum_decimals() {
        let amount = human("7", 0);
        let result = amount.pct(5.0).unwrap();
        assert_eq!(result.decimals(), 2);
        assert_eq!(result.to_human(), "0.35");
    }

    #[rstest]
    fn test_pct_negative_is_invalid() {
        let err = human("1", 6).pct(-1.0).unwrap_err();
        assert!(matches!(err, DecimalError::InvalidArgument(_)));
    }

    #[rstest]
    fn test_slippage(amount_usdc: TokenAmount) {
        assert_eq!(amount_usdc.sub_slippage(0.5).unwrap().to_human(), "99.5");
        assert_eq!(amount_usdc.add_slippage(1.0).unwrap().to_human(), "101");
        assert!(amount_usdc.sub_slippage(150.0).is_err());
    }

    #[rstest]
    fn test_comparisons(amount_usdc: TokenAmount) {
        assert!(amount_usdc.eq(100u64));
        assert!(amount_usdc.eq(&human("100.000", 3)));
        assert!(amount_usdc.gt(99.99));
        assert!(amount_usdc.gte(100.0));
        assert!(amount_usdc.lt(&human("100.000001", 6)));
        assert!(amount_usdc.lte(100i32));
        assert!(!amount_usdc.lt(100i32));
    }

    #[rstest]
    fn test_min_max_of(amount_usdc: TokenAmount, amount_weth: TokenAmount) {
        let values = vec![amount_usdc.clone(), amount_weth.clone(), human("-1", 6)];
        assert_eq!(TokenAmount::min_of(&values).unwrap().to_human(), "-1");
        assert_eq!(TokenAmount::max_of(&values).unwrap(), amount_usdc);
        assert!(TokenAmount::min_of(&[]).is_none());
        assert!(TokenAmount::max_of(&[]).is_none());
    }

    #[rstest]
    fn test_rounding_keeps_token_decimals() {
        let amount = human("1.25", 6);
        let up = amount.round_up(Some(1)).unwrap();
        assert_eq!(up.to_human(), "1.3");
        assert_eq!(up.decimals(), 6);
        assert_eq!(amount.round_down(Some(1)).unwrap().to_human(), "1.2");

        let negative = human("-1.25", 6);
        assert_eq!(negative.round_ceil(Some(1)).unwrap().to_human(), "-1.2");
        assert_eq!(negative.round_floor(Some(1)).unwrap().to_human(), "-1.3");
        assert!(amount.round_up(Some(7)).is_err());
    }

    #[rstest]
    fn test_neg_abs_pow() {
        let amount = human("-1.5", 6);
        assert_eq!(amount.abs().to_human(), "1.5");
        assert_eq!(amount.neg().to_human(), "1.5");
        assert_eq!((-&amount).to_human(), "1.5");

        let squared = amount.pow(2);
        assert_eq!(squared.to_human(), "2.25");
        assert_eq!(squared.decimals(), 6);
        assert_eq!(amount.pow(0).to_blockchain(), "1000000");
    }

    #[rstest]
    fn test_re_decimal() {
        let amount = human("1.123456", 6);
        let narrowed = amount.re_decimal(2);
        assert_eq!(narrowed.decimals(), 2);
        assert_eq!(narrowed.to_blockchain(), "112");

        let widened = amount.re_decimal(18);
        assert_eq!(widened.to_blockchain(), "1123456000000000000");
    }

    #[rstest]
    fn test_ref_operators(amount_usdc: TokenAmount) {
        let one = human("1", 6);
        assert_eq!((&amount_usdc + &one).to_human(), "101");
        assert_eq!((&amount_usdc - &one).to_human(), "99");
        assert_eq!((&amount_usdc * &one).to_human(), "100");
    }

    #[rstest]
    #[case("255", 0, "0xff")]
    #[case("-255", 0, "-0xff")]
    #[case("0", 6, "0x0")]
    #[case("1", 6, "0xf4240")]
    fn test_to_hex(#[case] value: &str, #[case] decimals: u32, #[case] expected: &str) {
        assert_eq!(human(value, decimals).to_hex(), expected);
    }

    #[cfg(feature = "defi")]
    #[rstest]
    fn test_u256_conversions() {
        use alloy_primitives::U256;

        let amount = TokenAmount::from_blockchain(U256::from(3_140_000u64), 6);
        assert_eq!(amount.to_human(), "3.14");
        assert_eq!(amount.to_u256().unwrap(), U256::from(3_140_000u64));

        let negative = human("-1", 6);
        assert!(matches!(negative.to_u256(), Err(DecimalError::Overflow(_))));
    }

    #[rstest]
    fn test_to_human_formatted(amount_weth: TokenAmount) {
        let whale = human("1500000", 18);
        assert_eq!(whale.to_human_formatted(HumanFormat::Short, false), "1.5M");
        assert_eq!(amount_weth.to_human_formatted(HumanFormat::Short, false), "2.5");
    }

    #[rstest]
    fn test_to_approx_number(amount_weth: TokenAmount) {
        assert!(approx_eq!(f64, amount_weth.to_approx_number(), 2.5, epsilon = 1e-12));
    }

    #[rstest]
    fn test_immutability() {
        let a = human("1.5", 6);
        let before = a.to_human().to_string();
        let _ = a.add(1u64);
        let _ = a.mul(2u64);
        let _ = a.pct(10.0).unwrap();
        let _ = a.round_up(Some(0)).unwrap();
        assert_eq!(a.to_human(), before);
    }

    #[rstest]
    fn test_display_debug_and_serde() {
        let amount = human("1234.5", 6);
        assert_eq!(amount.to_string(), "1234.5");
        assert_eq!(
            format!("{amount:?}"),
            "TokenAmount(human=1234.5, blockchain=1234500000, decimals=6)"
        );

        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1234.5\"");
        let deserialized: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, amount);
        assert_eq!(deserialized.decimals(), 1);
    }

    #[rstest]
    fn test_from_str() {
        assert_eq!(TokenAmount::from_str("0.25").unwrap().decimals(), 2);
        assert!(TokenAmount::from_str("x").is_err());
    }
}
