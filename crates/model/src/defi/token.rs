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


use std::fmt::{Display, Formatter};

use tally_core::correctness::FAILED;

use crate::types::{
    BlockchainValue, DecimalError, DecimalResult, HumanValue, TokenAmount, trim_decimals,
};

/// Represents an ERC-20 style token and the precision it is stored and displayed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The blockchain address of the token contract.
    pub address: String,
    /// The full name of the token.
    pub name: String,
    /// The token's ticker symbol.
    pub symbol: String,
    /// The number of decimal places used to represent fractional token amounts.
    pub decimals: u8,
    /// The number of decimal places shown to users.
    pub display_decimals: u8,
}

impl Token {
    /// Creates a new [`Token`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::Overflow`] if `decimals` or `display_decimals` exceeds
    /// `u8::MAX`.
    pub fn new_checked(
        address: String,
        name: String,
        symbol: String,
        decimals: u32,
        display_decimals: u32,
    ) -> DecimalResult<Self> {
        let to_u8 = |value: u32, param: &str| {
            u8::try_from(value).map_err(|_| {
                DecimalError::Overflow(format!("'{param}' of {value} exceeds {}", u8::MAX))
            })
        };

        Ok(Self {
            address,
            name,
            symbol,
            decimals: to_u8(decimals, "decimals")?,
            display_decimals: to_u8(display_decimals, "display_decimals")?,
        })
    }

    /// Creates a new [`Token`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `decimals` or `display_decimals` exceeds `u8::MAX`.
    #[must_use]
    pub fn new(
        address: String,
        name: String,
        symbol: String,
        decimals: u32,
        display_decimals: u32,
    ) -> Self {
        Self::new_checked(address, name, symbol, decimals, display_decimals).expect(FAILED)
    }

    /// Creates an amount of this token from a human value.
    #[must_use]
    pub fn amount(&self, value: impl Into<HumanValue>) -> TokenAmount {
        TokenAmount::from_human(value, u32::from(self.decimals))
    }

    /// Creates an amount of this token from an on-chain integer.
    #[must_use]
    pub fn from_blockchain(&self, value: impl Into<BlockchainValue>) -> TokenAmount {
        TokenAmount::from_blockchain(value, u32::from(self.decimals))
    }

    /// Returns a zero amount of this token.
    #[must_use]
    pub fn zero(&self) -> TokenAmount {
        TokenAmount::from_blockchain(0u32, u32::from(self.decimals))
    }

    /// Renders `amount` truncated to this token's display decimals.
    #[must_use]
    pub fn display(&self, amount: &TokenAmount) -> String {
        trim_decimals(amount, u32::from(self.display_decimals))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(symbol={}, name={})", self.symbol, self.name)
    }
}
