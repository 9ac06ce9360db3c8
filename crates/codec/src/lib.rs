// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

//! Storage codecs for multi-valued SET columns.
//!
//! A SET column stores a [`LabelSet`] in one of two interchangeable
//! encodings, chosen once when the column type is configured:
//! - **delimited**: labels joined by `,` into a single string
//! - **bitwise**: an integer with one bit per vocabulary label
//!
//! [`SetType::configure`] validates the vocabulary against the requested
//! mode and returns the immutable configuration; its codec translates
//! between [`LabelSet`] and the raw [`SetValue`] crossing the driver
//! boundary.
//!
//! ```
//! use labelset_codec::{SetType, SetValue, Vocabulary};
//!
//! # fn main() -> labelset_codec::Result<()> {
//! let set = SetType::configure(Vocabulary::from(["a", "b", "c"]), true)?;
//! let encoded = set.encode(Some(["a", "c"].into()))?;
//! assert_eq!(encoded, Some(SetValue::Bits(5)));
//! assert_eq!(set.decode(encoded)?, Some(["a", "c"].into()));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod set;

// Re-export from set
pub use set::{BitmaskCodec, ReadExpression, SetCodec, SetMode, SetType, StringCodec, TextTransform};

// Re-export the value model and error machinery of labelset-type
pub use labelset_type::{BitAssignment, Diagnostic, Error, LabelSet, Result, SetError, SetValue, Vocabulary};
