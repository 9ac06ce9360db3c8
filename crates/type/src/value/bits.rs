// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::SetError, value::Vocabulary};

/// Dual lookup table for the bitwise encoding: label to bit value and bit
/// value back to label. Built once from a vocabulary, immutable afterwards;
/// codecs borrow it read-only.
///
/// The label at vocabulary position `i` owns bit `2^i`. The table is keyed
/// by a `u64`, so a vocabulary may hold at most [`BitAssignment::CAPACITY`]
/// labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitAssignment {
	bits: IndexMap<String, u64>,
	labels: IndexMap<u64, String>,
}

impl BitAssignment {
	/// Number of available bit positions.
	pub const CAPACITY: usize = u64::BITS as usize;

	/// Assigns `2^i` to the label at position `i` and builds the inverse
	/// map. Fails when the vocabulary is longer than [`Self::CAPACITY`].
	pub fn build(vocabulary: &Vocabulary) -> crate::Result<Self> {
		if vocabulary.len() > Self::CAPACITY {
			return Err(SetError::VocabularyTooLarge {
				count: vocabulary.len(),
				capacity: Self::CAPACITY,
			}
			.into());
		}

		let mut bits = IndexMap::with_capacity(vocabulary.len());
		let mut labels = IndexMap::with_capacity(vocabulary.len());
		for (position, label) in vocabulary.iter().enumerate() {
			let bit = 1u64 << position;
			bits.insert(label.to_string(), bit);
			labels.insert(bit, label.to_string());
		}

		Ok(Self {
			bits,
			labels,
		})
	}

	pub fn bit_of(&self, label: &str) -> Option<u64> {
		self.bits.get(label).copied()
	}

	pub fn label_of(&self, bit: u64) -> Option<&str> {
		self.labels.get(&bit).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.bits.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bits.is_empty()
	}

	/// Iterates `(label, bit)` pairs in vocabulary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.bits.iter().map(|(label, bit)| (label.as_str(), *bit))
	}
}
