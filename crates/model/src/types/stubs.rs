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

//! Test fixtures for decimal and token amount values.

use rstest::fixture;

use crate::types::{FixedPointDecimal, TokenAmount};

/// Returns `100` at 6 decimals, a typical stablecoin balance.
#[fixture]
pub fn amount_usdc() -> TokenAmount {
    TokenAmount::from_human("100", 6)
}

/// Returns `2.5` at 18 decimals, a typical ether-denominated balance.
#[fixture]
pub fn amount_weth() -> TokenAmount {
    TokenAmount::from_human("2.5", 18)
}

/// Returns `3.14159` at its inferred scale of 5.
#[fixture]
pub fn decimal_pi() -> FixedPointDecimal {
    FixedPointDecimal::parse("3.14159")
}
