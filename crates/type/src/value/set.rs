// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use std::{
	collections::BTreeSet,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// The application-level SET value: zero or more labels, no duplicates,
/// order-insensitive. Backed by an ordered set so iteration (and therefore
/// the delimited encoding) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
	pub fn new() -> Self {
		Self(BTreeSet::new())
	}

	/// Inserts a label, returning whether it was newly added.
	pub fn insert(&mut self, label: impl Into<String>) -> bool {
		self.0.insert(label.into())
	}

	/// Removes a label, returning whether it was present.
	pub fn remove(&mut self, label: &str) -> bool {
		self.0.remove(label)
	}

	pub fn contains(&self, label: &str) -> bool {
		self.0.contains(label)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<const N: usize> From<[&str; N]> for LabelSet {
	fn from(labels: [&str; N]) -> Self {
		labels.into_iter().collect()
	}
}

impl IntoIterator for LabelSet {
	type Item = String;
	type IntoIter = std::collections::btree_set::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl Display for LabelSet {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("{")?;
		for (idx, label) in self.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			f.write_str(label)?;
		}
		f.write_str("}")
	}
}
