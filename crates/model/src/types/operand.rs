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

//! Input conversions accepted by [`TokenAmount`](super::TokenAmount) constructors and
//! arithmetic.
//!
//! Floating-point and narrow integer inputs are *human* numbers: decimal values whose
//! scale is inferred from their own fractional digits. Wide integer inputs (`i64` and
//! wider, [`BigInt`], and with the `defi` feature `U256`/`I256`) are *on-chain* integers.

use num_bigint::BigInt;

use super::{FixedPointDecimal, TokenAmount};

/// The right-hand operand of a [`TokenAmount`] operation, already converted into a
/// [`FixedPointDecimal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand(FixedPointDecimal);

impl Operand {
    /// Returns the decimal carried by this operand.
    #[must_use]
    pub fn as_decimal(&self) -> &FixedPointDecimal {
        &self.0
    }

    /// Consumes the operand, returning its decimal.
    #[must_use]
    pub fn into_decimal(self) -> FixedPointDecimal {
        self.0
    }
}

impl From<&TokenAmount> for Operand {
    fn from(value: &TokenAmount) -> Self {
        Self(value.value().clone())
    }
}

impl From<TokenAmount> for Operand {
    fn from(value: TokenAmount) -> Self {
        Self(value.into_decimal())
    }
}

impl From<&FixedPointDecimal> for Operand {
    fn from(value: &FixedPointDecimal) -> Self {
        Self(value.clone())
    }
}

impl From<FixedPointDecimal> for Operand {
    fn from(value: FixedPointDecimal) -> Self {
        Self(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self(FixedPointDecimal::from_f64(value))
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self(FixedPointDecimal::parse(&value.to_string()))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self(FixedPointDecimal::new(value, 0))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self(FixedPointDecimal::new(value, 0))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self(FixedPointDecimal::from(value))
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Self(FixedPointDecimal::from(value))
    }
}

impl From<i128> for Operand {
    fn from(value: i128) -> Self {
        Self(FixedPointDecimal::from(value))
    }
}

impl From<u128> for Operand {
    fn from(value: u128) -> Self {
        Self(FixedPointDecimal::from(value))
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Self(FixedPointDecimal::from(value))
    }
}

/// A value given in human (decimal) units.
#[derive(Debug, Clone, PartialEq)]
pub enum HumanValue {
    /// A decimal string such as `"1.5"`.
    Text(String),
    /// A floating-point number.
    Number(f64),
    /// A raw integer. Almost always a mistake for human input, so construction logs a
    /// warning before treating it as a decimal string.
    Integer(BigInt),
}

/// A value given in on-chain (smallest unit) integer form.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockchainValue {
    /// An integer string, decimal or `0x`-prefixed hexadecimal.
    Text(String),
    /// A floating-point number, truncated to an integer.
    Number(f64),
    /// An integer.
    Integer(BigInt),
}

impl From<&str> for HumanValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for HumanValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for HumanValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for HumanValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for HumanValue {
    fn from(value: f32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for HumanValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for HumanValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for HumanValue {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<u64> for HumanValue {
    fn from(value: u64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<i128> for HumanValue {
    fn from(value: i128) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<u128> for HumanValue {
    fn from(value: u128) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for HumanValue {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for BlockchainValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for BlockchainValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for BlockchainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for BlockchainValue {
    fn from(value: i32) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<u32> for BlockchainValue {
    fn from(value: u32) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<i64> for BlockchainValue {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<u64> for BlockchainValue {
    fn from(value: u64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<i128> for BlockchainValue {
    fn from(value: i128) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<u128> for BlockchainValue {
    fn from(value: u128) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for BlockchainValue {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

#[cfg(feature = "defi")]
mod defi {
    use alloy_primitives::{I256, U256};
    use num_bigint::{BigInt, Sign};

    use super::{BlockchainValue, HumanValue, Operand};
    use crate::types::FixedPointDecimal;

    /// Converts a [`U256`] into a non-negative [`BigInt`].
    #[must_use]
    pub fn u256_to_big_int(value: U256) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>())
    }

    /// Converts an [`I256`] into a [`BigInt`] of the same sign.
    #[must_use]
    pub fn i256_to_big_int(value: I256) -> BigInt {
        let (sign, abs) = value.into_sign_and_abs();
        let magnitude = u256_to_big_int(abs);
        if sign.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Converts a [`BigInt`] into a [`U256`], returning `None` when it is negative or
    /// wider than 256 bits.
    #[must_use]
    pub fn big_int_to_u256(value: &BigInt) -> Option<U256> {
        let (sign, bytes) = value.to_bytes_be();
        if sign == Sign::Minus {
            return None;
        }
        U256::try_from_be_slice(&bytes)
    }

    impl From<U256> for Operand {
        fn from(value: U256) -> Self {
            Self(FixedPointDecimal::from(u256_to_big_int(value)))
        }
    }

    impl From<I256> for Operand {
        fn from(value: I256) -> Self {
            Self(FixedPointDecimal::from(i256_to_big_int(value)))
        }
    }

    impl From<U256> for HumanValue {
        fn from(value: U256) -> Self {
            Self::Integer(u256_to_big_int(value))
        }
    }

    impl From<U256> for BlockchainValue {
        fn from(value: U256) -> Self {
            Self::Integer(u256_to_big_int(value))
        }
    }

    impl From<I256> for BlockchainValue {
        fn from(value: I256) -> Self {
            Self::Integer(i256_to_big_int(value))
        }
    }
}

#[cfg(feature = "defi")]
pub use defi::{big_int_to_u256, i256_to_big_int, u256_to_big_int};

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_number_operand_infers_scale() {
        let operand = Operand::from(2.25);
        assert_eq!(operand.as_decimal().scale(), 2);
        assert_eq!(operand.as_decimal().raw(), &BigInt::from(225));
    }

    #[rstest]
    fn test_integer_operands_are_scale_zero() {
        let operand = Operand::from(1_000_000_000_000_000_000u128);
        assert_eq!(operand.as_decimal().scale(), 0);
        assert_eq!(operand.into_decimal().to_string(), "1000000000000000000");

        let operand = Operand::from(-5i64);
        assert_eq!(operand.as_decimal().to_string(), "-5");
    }

    #[rstest]
    fn test_amount_operand_unwraps_decimal() {
        let amount = TokenAmount::from_human("1.5", 6);
        let operand = Operand::from(&amount);
        assert_eq!(operand.as_decimal().scale(), 6);
        assert_eq!(operand.as_decimal(), amount.value());
    }

    #[rstest]
    fn test_human_value_split() {
        assert_eq!(HumanValue::from("1.5"), HumanValue::Text("1.5".to_string()));
        assert_eq!(HumanValue::from(3i32), HumanValue::Number(3.0));
        assert_eq!(HumanValue::from(3u64), HumanValue::Integer(BigInt::from(3)));
    }

    #[rstest]
    fn test_blockchain_value_integers() {
        assert_eq!(
            BlockchainValue::from(7u32),
            BlockchainValue::Integer(BigInt::from(7))
        );
        assert_eq!(BlockchainValue::from(2.9), BlockchainValue::Number(2.9));
    }

    #[cfg(feature = "defi")]
    #[rstest]
    fn test_u256_round_trip() {
        use alloy_primitives::{I256, U256};

        let big = u256_to_big_int(U256::MAX);
        assert_eq!(big, (BigInt::from(1) << 256usize) - BigInt::from(1));
        assert_eq!(big_int_to_u256(&big), Some(U256::MAX));
        assert_eq!(big_int_to_u256(&(big + BigInt::from(1))), None);
        assert_eq!(big_int_to_u256(&BigInt::from(-1)), None);

        assert_eq!(i256_to_big_int(I256::MINUS_ONE), BigInt::from(-1));
        assert_eq!(
            Operand::from(U256::from(42u64)).into_decimal(),
            FixedPointDecimal::new(42, 0)
        );
    }
}
