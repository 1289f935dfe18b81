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

//! Floating-point helpers for the lossy escape hatches of the decimal types.

/// Macro for approximate floating-point equality comparison.
///
/// Decimal values are exact, but their `to_approx_number` conversions are not. This macro
/// compares two floating-point values with a specified epsilon tolerance.
///
/// # Usage
///
/// ```rust
/// use tally_core::approx_eq;
///
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert!(approx_eq!(f64, a, b, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Returns the relative epsilon for comparing an approximate conversion of `value`
/// carrying `scale` decimal places against an exact `f64` computation.
///
/// The tolerance is the larger of one unit in the last decimal place and a relative
/// error budget for the mantissa of an `f64`.
#[must_use]
pub fn approx_epsilon(value: f64, scale: u32) -> f64 {
    let ulp = 10f64.powi(-(scale.min(300) as i32));
    let relative = value.abs() * 1e-12;
    ulp.max(relative).max(f64::EPSILON)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_approx_eq_macro() {
        assert!(approx_eq!(f64, 0.1 + 0.2, 0.3, epsilon = 1e-10));
        assert!(!approx_eq!(f64, 1.0, 1.1, epsilon = 1e-3));
    }

    #[rstest]
    #[case(1.0, 0, 1.0)]
    #[case(1.0, 2, 0.01)]
    #[case(1e20, 18, 1e8)]
    fn test_approx_epsilon(#[case] value: f64, #[case] scale: u32, #[case] expected: f64) {
        assert!(approx_eq!(
            f64,
            approx_epsilon(value, scale),
            expected,
            epsilon = expected * 1e-9
        ));
    }
}
