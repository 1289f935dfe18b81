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


//! Fixed-point decimal and token amount value types for the `tally` workspace.
//!
//! The `tally-model` crate provides the arithmetic core used for all token accounting:
//!
//! - [`types::FixedPointDecimal`]: an immutable arbitrary-precision scaled integer paired
//!   with an explicit decimal scale, with exact arithmetic and explicit rounding policies.
//! - [`types::TokenAmount`]: an amount held at a token's native decimals, constructed from
//!   human (decimal) or on-chain (integer) representations, with abbreviated formatting.
//! - [`defi::Token`]: a token descriptor producing amounts at its own precision.
//!
//! Values never pass through floating-point arithmetic. The only lossy conversions are the
//! explicitly named `to_approx_number` escape hatches.
//!
//! # Feature flags
//!
//! - `defi`: Enables `U256`/`I256` interop via `alloy-primitives` and the [`defi`] module
//!   (enabled by default).
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod amounts;
pub mod types;

#[cfg(feature = "defi")]
pub mod defi;
