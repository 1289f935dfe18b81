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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the
//! condition check fails. Every message is prefixed with [`FAILED`].

use anyhow::bail;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true. It is typically used in conjunction with
/// functions like `expect` to provide a consistent error message.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        bail!("{FAILED}: {fail_msg}")
    }
    Ok(())
}

/// Checks the `f64` value is finite and non-negative (>= 0).
///
/// # Errors
///
/// Returns an error if:
/// - `value` is NaN or infinite.
/// - `value` is negative.
#[inline(always)]
pub fn check_non_negative_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if !value.is_finite() {
        bail!("{FAILED}: invalid f64 for '{param}', was {value}")
    }
    if value < 0.0 {
        bail!("{FAILED}: invalid f64 for '{param}' negative, was {value}")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_check_predicate_true() {
        assert!(check_predicate_true(true, "this should be true").is_ok());
        let err = check_predicate_true(false, "the predicate was false").unwrap_err();
        assert_eq!(err.to_string(), "Condition failed: the predicate was false");
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(100.5)]
    fn test_check_non_negative_f64_when_valid(#[case] value: f64) {
        assert!(check_non_negative_f64(value, "value").is_ok());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_check_non_negative_f64_when_invalid(#[case] value: f64) {
        assert!(check_non_negative_f64(value, "value").is_err());
    }

    #[rstest]
    fn test_check_non_negative_f64_message() {
        let err = check_non_negative_f64(-5.0, "pct").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Condition failed: invalid f64 for 'pct' negative, was -5"
        );
    }
}
