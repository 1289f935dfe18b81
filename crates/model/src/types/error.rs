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

//! Errors associated with decimal arithmetic, conversion and formatting.

/// A specialized `Result` for decimal operations.
pub type DecimalResult<T> = Result<T, DecimalError>;

/// Errors raised by [`FixedPointDecimal`](super::FixedPointDecimal) and
/// [`TokenAmount`](super::TokenAmount) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// An argument violated the contract of the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The divisor (or modulus) of an operation was zero.
    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),
    /// The value cannot be represented by the requested target type.
    #[error("Overflow: {0}")]
    Overflow(String),
}

impl DecimalError {
    /// Creates a new [`DecimalError::InvalidArgument`] from any displayable message.
    pub fn invalid_argument(msg: impl ToString) -> Self {
        Self::InvalidArgument(msg.to_string())
    }
}

impl From<anyhow::Error> for DecimalError {
    fn from(e: anyhow::Error) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tally_core::correctness::check_predicate_true;

    use super::*;

    #[rstest]
    fn test_display() {
        assert_eq!(
            DecimalError::invalid_argument("bad scale").to_string(),
            "Invalid argument: bad scale"
        );
        assert_eq!(
            DecimalError::DivisionByZero("div").to_string(),
            "Division by zero: div"
        );
        assert_eq!(
            DecimalError::Overflow("too big for U256".to_string()).to_string(),
            "Overflow: too big for U256"
        );
    }

    #[rstest]
    fn test_from_correctness_failure() {
        let err: DecimalError = check_predicate_true(false, "scale mismatch")
            .unwrap_err()
            .into();
        assert_eq!(
            err,
            DecimalError::InvalidArgument("Condition failed: scale mismatch".to_string())
        );
    }
}
