// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

mod bitmask;
mod string;
mod transform;

pub use bitmask::BitmaskCodec;
use labelset_type::{BitAssignment, LabelSet, Result, SetError, SetValue, Vocabulary};
use serde::{Deserialize, Serialize};
pub use string::StringCodec;
use tracing::instrument;
pub use transform::TextTransform;

/// Storage representation of a SET column.
///
/// Delimited columns hold the members as one comma-separated string.
/// Bitwise columns hold an integer where each vocabulary label owns one
/// bit, assigned at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetMode {
	Delimited,
	Bitwise(BitAssignment),
}

impl SetMode {
	pub fn is_bitwise(&self) -> bool {
		matches!(self, SetMode::Bitwise(_))
	}
}

/// How a query layer should read the raw column before decoding.
///
/// Some storage engines report bitwise SET columns as text. `CoerceInteger`
/// tells the reader to cast the column to an integer in the query itself so
/// the decoder receives `Bits` instead of `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadExpression {
	Plain,
	CoerceInteger,
}

/// Configured SET column type.
///
/// Carries the vocabulary, the storage mode and the rendering width, all
/// fixed at [`SetType::configure`] time. Encoding and decoding go through
/// [`SetType::codec`], or [`SetType::codec_with`] when the storage engine
/// applies a charset-level [`TextTransform`] to textual values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetType {
	vocabulary: Vocabulary,
	mode: SetMode,
	display_length: usize,
}

impl SetType {
	/// Configures a SET column over `vocabulary`.
	///
	/// With `bitwise` set, every label is assigned the bit `2^i` for its
	/// position `i`; a vocabulary larger than
	/// [`BitAssignment::CAPACITY`] fails with
	/// [`SetError::VocabularyTooLarge`]. Without it the members are
	/// stored comma-delimited, which cannot represent a blank label:
	/// that case fails with [`SetError::BlankLabelRequiresBitwise`].
	#[instrument(name = "set::configure", level = "trace", skip(vocabulary))]
	pub fn configure(vocabulary: Vocabulary, bitwise: bool) -> Result<Self> {
		let mode = if bitwise {
			SetMode::Bitwise(BitAssignment::build(&vocabulary)?)
		} else {
			if vocabulary.contains("") {
				return Err(SetError::BlankLabelRequiresBitwise.into());
			}
			SetMode::Delimited
		};

		let display_length = vocabulary.max_label_chars();

		Ok(Self {
			vocabulary,
			mode,
			display_length,
		})
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn mode(&self) -> &SetMode {
		&self.mode
	}

	pub fn is_bitwise(&self) -> bool {
		self.mode.is_bitwise()
	}

	/// Bit table of a bitwise column, `None` for delimited columns.
	pub fn assignment(&self) -> Option<&BitAssignment> {
		match &self.mode {
			SetMode::Delimited => None,
			SetMode::Bitwise(assignment) => Some(assignment),
		}
	}

	/// Rendering width hint, the character count of the longest label.
	pub fn display_length(&self) -> usize {
		self.display_length
	}

	pub fn read_expression(&self) -> ReadExpression {
		match self.mode {
			SetMode::Delimited => ReadExpression::Plain,
			SetMode::Bitwise(_) => ReadExpression::CoerceInteger,
		}
	}

	/// Codec for this column without a charset transform.
	pub fn codec(&self) -> SetCodec<'_> {
		self.build_codec(None)
	}

	/// Codec for this column with `transform` applied to textual values.
	pub fn codec_with<'a>(&'a self, transform: &'a dyn TextTransform) -> SetCodec<'a> {
		self.build_codec(Some(transform))
	}

	fn build_codec<'a>(&'a self, transform: Option<&'a dyn TextTransform>) -> SetCodec<'a> {
		match &self.mode {
			SetMode::Delimited => SetCodec::Delimited(StringCodec::new(transform)),
			SetMode::Bitwise(assignment) => SetCodec::Bitwise(BitmaskCodec::new(assignment, transform)),
		}
	}

	pub fn encode(&self, value: Option<SetValue>) -> Result<Option<SetValue>> {
		self.codec().encode(value)
	}

	pub fn decode(&self, value: Option<SetValue>) -> Result<Option<LabelSet>> {
		self.codec().decode(value)
	}
}

/// Encoder and decoder for one configured SET column.
pub enum SetCodec<'a> {
	Delimited(StringCodec<'a>),
	Bitwise(BitmaskCodec<'a>),
}

impl SetCodec<'_> {
	pub fn encode(&self, value: Option<SetValue>) -> Result<Option<SetValue>> {
		match self {
			SetCodec::Delimited(codec) => codec.encode(value),
			SetCodec::Bitwise(codec) => codec.encode(value),
		}
	}

	pub fn decode(&self, value: Option<SetValue>) -> Result<Option<LabelSet>> {
		match self {
			SetCodec::Delimited(codec) => codec.decode(value),
			SetCodec::Bitwise(codec) => codec.decode(value),
		}
	}
}
