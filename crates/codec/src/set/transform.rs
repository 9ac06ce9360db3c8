// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

/// Charset-level transformation applied to textual SET values on their way
/// to and from storage.
///
/// The codecs own the delimiter logic only; whatever character-set or
/// collation handling the storage engine needs happens behind this trait.
/// `encode` runs on outgoing text after the members are joined, `decode`
/// runs on incoming text before it is split. When no transform is attached
/// the text passes through unchanged. Bitmask integers are never
/// transformed.
pub trait TextTransform {
	fn encode(&self, text: String) -> String;
	fn decode(&self, text: String) -> String;
}
