// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tether-core: the JSON value model and shared protocol types for tether.
//!
//! Messages on the wire are trees of [`Value`]. The model is deliberately
//! narrower than full JSON: integers only, no floating point.

pub mod macros;

pub mod convert;
pub mod limits;
pub mod value;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use convert::{from_json, to_json, ConvertError};
pub use limits::{Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_MESSAGE_BYTES};
pub use value::{Kind, Map, TypeMismatch, Value};
