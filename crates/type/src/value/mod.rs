// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod bits;
mod set;
mod vocabulary;

pub use bits::BitAssignment;
pub use set::LabelSet;
pub use vocabulary::Vocabulary;

/// A SET value as it crosses the driver boundary, in either direction.
///
/// Encode accepts any variant: `Members` is the regular path, while `Text`
/// and `Bits` are lenient pass-throughs for values that arrive already
/// serialized. Decode consumes whatever the driver returned: delimited
/// text, a bitmask integer, or a pre-split member set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetValue {
	/// Application-level member set.
	Members(LabelSet),
	/// Delimited text, already encoded or as read from storage.
	Text(String),
	/// Bitmask integer, already encoded or as read from storage.
	Bits(u64),
}

impl From<LabelSet> for SetValue {
	fn from(labels: LabelSet) -> Self {
		SetValue::Members(labels)
	}
}

impl<const N: usize> From<[&str; N]> for SetValue {
	fn from(labels: [&str; N]) -> Self {
		SetValue::Members(labels.into())
	}
}

impl From<String> for SetValue {
	fn from(text: String) -> Self {
		SetValue::Text(text)
	}
}

impl From<&str> for SetValue {
	fn from(text: &str) -> Self {
		SetValue::Text(text.to_string())
	}
}

impl From<u64> for SetValue {
	fn from(bits: u64) -> Self {
		SetValue::Bits(bits)
	}
}

impl Display for SetValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SetValue::Members(labels) => Display::fmt(labels, f),
			SetValue::Text(text) => f.write_str(text),
			SetValue::Bits(bits) => Display::fmt(bits, f),
		}
	}
}
