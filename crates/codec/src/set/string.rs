// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use labelset_type::{LabelSet, Result, SetValue, return_internal_error};
use tracing::warn;

use crate::set::TextTransform;

/// Codec for SET columns stored as a comma-delimited string.
///
/// Members are joined with `,` on the way out and non-empty fragments are
/// collected on the way in. Membership is not checked against the
/// vocabulary here; the storage engine returns exactly what it holds.
pub struct StringCodec<'a> {
	transform: Option<&'a dyn TextTransform>,
}

impl<'a> StringCodec<'a> {
	pub(crate) fn new(transform: Option<&'a dyn TextTransform>) -> Self {
		Self {
			transform,
		}
	}

	/// Encodes a SET value into its delimited-string form.
	///
	/// `Members` joins into `Text`. `Text` and `Bits` are caller-encoded
	/// values and pass through, `Text` still goes through the attached
	/// transform.
	pub fn encode(&self, value: Option<SetValue>) -> Result<Option<SetValue>> {
		match value {
			None => Ok(None),
			Some(SetValue::Members(labels)) => {
				let joined = labels.iter().collect::<Vec<_>>().join(",");
				Ok(Some(SetValue::Text(self.apply_encode(joined))))
			}
			Some(SetValue::Text(text)) => Ok(Some(SetValue::Text(self.apply_encode(text)))),
			Some(SetValue::Bits(bits)) => Ok(Some(SetValue::Bits(bits))),
		}
	}

	/// Decodes a stored value back into a label set.
	///
	/// `Text` splits on `,` keeping only non-empty fragments, so `""`
	/// comes back as the empty set. Drivers that split the string
	/// themselves hand in `Members` already; a blank member slipping in
	/// that way is discarded.
	pub fn decode(&self, value: Option<SetValue>) -> Result<Option<LabelSet>> {
		match value {
			None => Ok(None),
			Some(SetValue::Text(text)) => {
				let text = self.apply_decode(text);
				Ok(Some(text.split(',').filter(|fragment| !fragment.is_empty()).collect()))
			}
			Some(SetValue::Members(mut labels)) => {
				if labels.remove("") {
					warn!("discarding blank member from driver-split SET value");
				}
				Ok(Some(labels))
			}
			Some(value @ SetValue::Bits(_)) => {
				return_internal_error!("delimited SET column received bitmask {} to decode", value)
			}
		}
	}

	fn apply_encode(&self, text: String) -> String {
		match self.transform {
			Some(transform) => transform.encode(text),
			None => text,
		}
	}

	fn apply_decode(&self, text: String) -> String {
		match self.transform {
			Some(transform) => transform.decode(text),
			None => text,
		}
	}
}
