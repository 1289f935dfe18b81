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


//! Common `TokenAmount` constants.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::One;

use crate::types::TokenAmount;

static ZERO_LOCK: OnceLock<TokenAmount> = OnceLock::new();
static ONE_LOCK: OnceLock<TokenAmount> = OnceLock::new();
static NEGATIVE_ONE_LOCK: OnceLock<TokenAmount> = OnceLock::new();
static MAX_UINT32_LOCK: OnceLock<TokenAmount> = OnceLock::new();
static MAX_UINT256_LOCK: OnceLock<TokenAmount> = OnceLock::new();

impl TokenAmount {
    #[allow(non_snake_case)]
    #[must_use]
    pub fn ZERO() -> Self {
        ZERO_LOCK
            .get_or_init(|| Self::from_blockchain(0u32, 0))
            .clone()
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn ONE() -> Self {
        ONE_LOCK
            .get_or_init(|| Self::from_blockchain(1u32, 0))
            .clone()
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn NEGATIVE_ONE() -> Self {
        NEGATIVE_ONE_LOCK
            .get_or_init(|| Self::from_blockchain(-1i32, 0))
            .clone()
    }

    /// The largest unsigned 32-bit integer, `2^32 - 1`.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn MAX_UINT32() -> Self {
        MAX_UINT32_LOCK
            .get_or_init(|| Self::from_blockchain(u32::MAX, 0))
            .clone()
    }

    /// The largest unsigned 256-bit integer, `2^256 - 1`, used as the unlimited ERC-20
    /// allowance.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn MAX_UINT256() -> Self {
        MAX_UINT256_LOCK
            .get_or_init(|| {
                let max = (BigInt::one() << 256usize) - BigInt::one();
                Self::from_blockchain(max, 0)
            })
            .clone()
    }
}
