// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

//! End-to-end coverage of SET column configuration, encoding and decoding
//! in both storage modes, driven through the public crate surface.

use labelset_codec::{
	LabelSet, ReadExpression, SetType, SetValue, TextTransform, Vocabulary,
};

fn delimited(labels: impl IntoIterator<Item = &'static str>) -> SetType {
	SetType::configure(labels.into_iter().collect(), false).unwrap()
}

fn bitwise(labels: impl IntoIterator<Item = &'static str>) -> SetType {
	SetType::configure(labels.into_iter().collect(), true).unwrap()
}

#[test]
fn test_delimited_round_trip() {
	let set = delimited(["foo", "bar", "baz"]);

	let encoded = set.encode(Some(["bar", "baz"].into())).unwrap();
	assert_eq!(encoded, Some(SetValue::Text("bar,baz".to_string())));

	let decoded = set.decode(encoded).unwrap();
	assert_eq!(decoded, Some(["bar", "baz"].into()));
}

#[test]
fn test_bitwise_round_trip() {
	let set = bitwise(["a", "b", "c"]);

	let encoded = set.encode(Some(["a", "c"].into())).unwrap();
	assert_eq!(encoded, Some(SetValue::Bits(5)));

	let decoded = set.decode(encoded).unwrap();
	assert_eq!(decoded, Some(["a", "c"].into()));
}

#[test]
fn test_every_label_round_trips_alone() {
	let labels = ["alpha", "beta", "gamma", "delta", "epsilon"];
	let set = bitwise(labels);

	for label in labels {
		let encoded = set.encode(Some([label].into())).unwrap();
		let decoded = set.decode(encoded).unwrap();
		assert_eq!(decoded, Some([label].into()));
	}
}

#[test]
fn test_bits_are_distinct_powers_in_order() {
	let labels = ["one", "two", "three", "four", "five", "six", "seven", "eight"];
	let set = bitwise(labels);
	let assignment = set.assignment().unwrap();

	for (position, label) in labels.iter().enumerate() {
		assert_eq!(assignment.bit_of(label), Some(1u64 << position));
	}

	let mut seen: Vec<u64> = assignment.iter().map(|(_, bit)| bit).collect();
	seen.sort_unstable();
	seen.dedup();
	assert_eq!(seen.len(), labels.len());
}

#[test]
fn test_blank_label_needs_bitwise() {
	let err = SetType::configure(Vocabulary::from(["a", ""]), false).unwrap_err();
	assert_eq!(err.code, "SET_002");

	let set = bitwise(["a", ""]);
	let encoded = set.encode(Some(["a", ""].into())).unwrap();
	assert_eq!(encoded, Some(SetValue::Bits(3)));
	assert_eq!(set.decode(encoded).unwrap(), Some(["a", ""].into()));
}

#[test]
fn test_empty_string_decodes_to_empty_set() {
	let set = delimited(["a", "b"]);
	let decoded = set.decode(Some(SetValue::Text(String::new()))).unwrap();
	assert_eq!(decoded, Some(LabelSet::new()));
}

#[test]
fn test_bitwise_encode_rejects_unknown_member() {
	let set = bitwise(["a", "b", "c"]);
	let err = set.encode(Some(["a", "d"].into())).unwrap_err();
	assert_eq!(err.code, "SET_003");
	assert_eq!(err.value.as_deref(), Some("d"));
}

#[test]
fn test_bitwise_decode_zero_is_empty_set() {
	let set = bitwise(["a", "b", "c"]);
	let decoded = set.decode(Some(SetValue::Bits(0))).unwrap();
	assert_eq!(decoded, Some(LabelSet::new()));
}

#[test]
fn test_bitwise_decode_rejects_unassigned_bit() {
	let set = bitwise(["a", "b", "c"]);
	let err = set.decode(Some(SetValue::Bits(8))).unwrap_err();
	assert_eq!(err.code, "SET_004");
	assert_eq!(err.value.as_deref(), Some("8"));
}

#[test]
fn test_vocabulary_capacity() {
	let full: Vocabulary = (0..64).map(|i| format!("label{}", i)).collect();
	let set = SetType::configure(full, true).unwrap();
	assert_eq!(set.assignment().unwrap().bit_of("label63"), Some(1u64 << 63));

	let oversized: Vocabulary = (0..65).map(|i| format!("label{}", i)).collect();
	let err = SetType::configure(oversized, true).unwrap_err();
	assert_eq!(err.code, "SET_001");
}

#[test]
fn test_display_length_is_longest_label() {
	assert_eq!(delimited(["a", "bb", "ccc"]).display_length(), 3);
	assert_eq!(delimited(["naïve", "ok"]).display_length(), 5);
	assert_eq!(SetType::configure(Vocabulary::from(Vec::new()), false).unwrap().display_length(), 0);
}

#[test]
fn test_none_propagates_in_both_modes() {
	let delimited = delimited(["a"]);
	assert_eq!(delimited.encode(None).unwrap(), None);
	assert_eq!(delimited.decode(None).unwrap(), None);

	let bitwise = bitwise(["a"]);
	assert_eq!(bitwise.encode(None).unwrap(), None);
	assert_eq!(bitwise.decode(None).unwrap(), None);
}

#[test]
fn test_pre_encoded_values_pass_through() {
	let delimited = delimited(["a", "b"]);
	let text = delimited.encode(Some(SetValue::Text("a,b".to_string()))).unwrap();
	assert_eq!(text, Some(SetValue::Text("a,b".to_string())));
	let bits = delimited.encode(Some(SetValue::Bits(3))).unwrap();
	assert_eq!(bits, Some(SetValue::Bits(3)));

	let bitwise = bitwise(["a", "b"]);
	let bits = bitwise.encode(Some(SetValue::Bits(3))).unwrap();
	assert_eq!(bits, Some(SetValue::Bits(3)));
	let text = bitwise.encode(Some(SetValue::Text("3".to_string()))).unwrap();
	assert_eq!(text, Some(SetValue::Text("3".to_string())));
}

#[test]
fn test_bitwise_decode_coerces_textual_integers() {
	let set = bitwise(["a", "b", "c"]);

	let decoded = set.decode(Some(SetValue::Text("5".to_string()))).unwrap();
	assert_eq!(decoded, Some(["a", "c"].into()));

	let err = set.decode(Some(SetValue::Text("a,c".to_string()))).unwrap_err();
	assert_eq!(err.code, "SET_005");
}

#[test]
fn test_driver_split_members_decode_directly() {
	let set = delimited(["bar", "baz"]);

	let decoded = set.decode(Some(["bar", "baz"].into())).unwrap();
	assert_eq!(decoded, Some(["bar", "baz"].into()));

	let decoded = set.decode(Some(["bar", ""].into())).unwrap();
	assert_eq!(decoded, Some(["bar"].into()));
}

#[test]
fn test_configuration_survives_serialization() {
	let set = bitwise(["a", "b", "c"]);
	let json = serde_json::to_string(&set).unwrap();
	let back: SetType = serde_json::from_str(&json).unwrap();
	assert_eq!(back, set);
	assert_eq!(back.decode(Some(SetValue::Bits(6))).unwrap(), Some(["b", "c"].into()));

	let set = delimited(["foo", "bar"]);
	let json = serde_json::to_string(&set).unwrap();
	let back: SetType = serde_json::from_str(&json).unwrap();
	assert_eq!(back, set);
	assert_eq!(back.decode(Some(SetValue::Text("foo".to_string()))).unwrap(), Some(["foo"].into()));
}

#[test]
fn test_read_expression_matches_mode() {
	assert_eq!(delimited(["a"]).read_expression(), ReadExpression::Plain);
	assert_eq!(bitwise(["a"]).read_expression(), ReadExpression::CoerceInteger);
}

struct Latin1;

impl TextTransform for Latin1 {
	fn encode(&self, text: String) -> String {
		text.replace('ä', "a")
	}

	fn decode(&self, text: String) -> String {
		text.replace('a', "ä")
	}
}

#[test]
fn test_transform_applies_to_delimited_text() {
	let set = SetType::configure(Vocabulary::from(["ä", "b"]), false).unwrap();
	let codec = set.codec_with(&Latin1);

	let encoded = codec.encode(Some(["ä"].into())).unwrap();
	assert_eq!(encoded, Some(SetValue::Text("a".to_string())));

	let decoded = codec.decode(encoded).unwrap();
	assert_eq!(decoded, Some(["ä"].into()));
}

struct Mangle;

impl TextTransform for Mangle {
	fn encode(&self, text: String) -> String {
		format!("<{}>", text)
	}

	fn decode(&self, text: String) -> String {
		format!("<{}>", text)
	}
}

#[test]
fn test_transform_never_touches_bitmask_integers() {
	let set = SetType::configure(Vocabulary::from(["a", "b"]), true).unwrap();
	let codec = set.codec_with(&Mangle);

	let encoded = codec.encode(Some(["a"].into())).unwrap();
	assert_eq!(encoded, Some(SetValue::Bits(1)));

	assert_eq!(codec.encode(Some(SetValue::Bits(2))).unwrap(), Some(SetValue::Bits(2)));

	let decoded = codec.decode(Some(SetValue::Text("2".to_string()))).unwrap();
	assert_eq!(decoded, Some(["b"].into()));
}

#[test]
fn test_transform_applies_to_bitwise_text_pass_through() {
	let set = SetType::configure(Vocabulary::from(["a", "b"]), true).unwrap();
	let codec = set.codec_with(&Mangle);

	let encoded = codec.encode(Some(SetValue::Text("3".to_string()))).unwrap();
	assert_eq!(encoded, Some(SetValue::Text("<3>".to_string())));
}
