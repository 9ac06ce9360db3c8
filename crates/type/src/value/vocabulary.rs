// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use serde::{Deserialize, Serialize};

/// The fixed, ordered list of labels a SET column may hold.
///
/// Insertion order is significant: in bitwise mode the label at position
/// `i` owns bit `2^i`, so the order must match the one the storage engine
/// was declared with. Labels are distinct; uniqueness is guaranteed by the
/// vocabulary source and not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary(Vec<String>);

impl Vocabulary {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	pub fn get(&self, position: usize) -> Option<&str> {
		self.0.get(position).map(String::as_str)
	}

	pub fn position(&self, label: &str) -> Option<usize> {
		self.0.iter().position(|candidate| candidate == label)
	}

	pub fn contains(&self, label: &str) -> bool {
		self.position(label).is_some()
	}

	/// Length in characters of the longest label, 0 when the vocabulary is
	/// empty. Drives the storage-size hint of the column declaration.
	pub fn max_label_chars(&self) -> usize {
		self.iter().map(|label| label.chars().count()).max().unwrap_or(0)
	}
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<const N: usize> From<[&str; N]> for Vocabulary {
	fn from(labels: [&str; N]) -> Self {
		labels.into_iter().collect()
	}
}

impl From<Vec<String>> for Vocabulary {
	fn from(labels: Vec<String>) -> Self {
		Self(labels)
	}
}
