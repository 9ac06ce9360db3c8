// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use labelset_type::{BitAssignment, LabelSet, Result, SetError, SetValue, return_internal_error};

use crate::set::TextTransform;

/// Codec for SET columns stored as an integer bitmask.
///
/// Encoding folds the members into their assigned bits with `|`, decoding
/// walks every bit position of the stored value and resolves the set ones
/// back to labels. Membership is strict in both directions.
pub struct BitmaskCodec<'a> {
	assignment: &'a BitAssignment,
	transform: Option<&'a dyn TextTransform>,
}

impl<'a> BitmaskCodec<'a> {
	pub(crate) fn new(assignment: &'a BitAssignment, transform: Option<&'a dyn TextTransform>) -> Self {
		Self {
			assignment,
			transform,
		}
	}

	/// Encodes a SET value into its bitmask form.
	///
	/// `Members` fold into `Bits`; a member outside the vocabulary fails
	/// with [`SetError::UnknownLabel`]. `Bits` and `Text` are
	/// caller-encoded values and pass through.
	pub fn encode(&self, value: Option<SetValue>) -> Result<Option<SetValue>> {
		match value {
			None => Ok(None),
			Some(SetValue::Members(labels)) => {
				let mut bits = 0u64;
				for label in labels {
					match self.assignment.bit_of(&label) {
						Some(bit) => bits |= bit,
						None => {
							return Err(SetError::UnknownLabel {
								label,
							}
							.into());
						}
					}
				}
				Ok(Some(SetValue::Bits(bits)))
			}
			Some(SetValue::Bits(bits)) => Ok(Some(SetValue::Bits(bits))),
			Some(SetValue::Text(text)) => {
				let text = match self.transform {
					Some(transform) => transform.encode(text),
					None => text,
				};
				Ok(Some(SetValue::Text(text)))
			}
		}
	}

	/// Decodes a stored bitmask back into a label set.
	///
	/// Storage engines that report integer columns as text hand in
	/// `Text`; it is parsed as an unsigned integer first. A set bit with
	/// no assigned label fails with [`SetError::UnassignedBit`].
	pub fn decode(&self, value: Option<SetValue>) -> Result<Option<LabelSet>> {
		match value {
			None => Ok(None),
			Some(SetValue::Bits(bits)) => Ok(Some(self.decode_bits(bits)?)),
			Some(SetValue::Text(text)) => match text.trim().parse::<u64>() {
				Ok(bits) => Ok(Some(self.decode_bits(bits)?)),
				Err(_) => Err(SetError::BitmaskNotInteger {
					value: text,
				}
				.into()),
			},
			Some(value @ SetValue::Members(_)) => {
				return_internal_error!("bitwise SET column received members {} to decode", value)
			}
		}
	}

	fn decode_bits(&self, bits: u64) -> Result<LabelSet> {
		let mut labels = LabelSet::new();
		for position in 0..u64::BITS {
			let bit = 1u64 << position;
			if bits & bit != 0 {
				match self.assignment.label_of(bit) {
					Some(label) => {
						labels.insert(label);
					}
					None => {
						return Err(SetError::UnassignedBit {
							bit,
						}
						.into());
					}
				}
			}
		}
		Ok(labels)
	}
}
