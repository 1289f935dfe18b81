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

//! Core foundational utilities for the `tally` decimal workspace.
//!
//! The `tally-core` crate is deliberately small and free of any knowledge of the value
//! types built on top of it. It supplies:
//!
//! - Correctness validation functions producing uniformly prefixed failure messages.
//! - Decimal-string parsing and normalization primitives (precision inference,
//!   truncating normalization, trailing-zero trimming, thousands separation).
//! - A floating-point approximate equality macro.
//!
//! All decimal arithmetic lives in `tally-model`; this crate only ever manipulates
//! the *textual* representation of decimal values.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod math;
pub mod parsing;
