// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use crate::error::{
	Error,
	diagnostic::{Diagnostic, IntoDiagnostic},
};

/// Errors raised while configuring a SET column or translating its values.
///
/// Configuration errors (`VocabularyTooLarge`, `BlankLabelRequiresBitwise`)
/// surface once, when the column type is built. The remaining variants are
/// per-value codec failures and propagate to the caller uncaught.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetError {
	#[error("vocabulary exceeds the available bit positions")]
	VocabularyTooLarge {
		count: usize,
		capacity: usize,
	},

	#[error("blank label requires bitwise retrieval")]
	BlankLabelRequiresBitwise,

	#[error("label '{label}' is not part of the vocabulary")]
	UnknownLabel {
		label: String,
	},

	#[error("bit {bit} of the stored bitmask has no assigned label")]
	UnassignedBit {
		bit: u64,
	},

	#[error("stored bitmask '{value}' is not an integer")]
	BitmaskNotInteger {
		value: String,
	},
}

impl IntoDiagnostic for SetError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SetError::VocabularyTooLarge {
				count,
				capacity,
			} => Diagnostic {
				code: "SET_001".to_string(),
				message: format!(
					"SET vocabulary holds {} labels, exceeding the {} available bit positions",
					count, capacity
				),
				value: None,
				label: Some("vocabulary too large".to_string()),
				help: Some(format!(
					"A bitwise SET column stores one bit per label and is limited to {} labels. Split the vocabulary or use several columns.",
					capacity
				)),
				notes: vec![
					"Bit positions follow vocabulary order: the label at position i owns bit 2^i."
						.to_string(),
				],
				cause: None,
			},

			SetError::BlankLabelRequiresBitwise => Diagnostic {
				code: "SET_002".to_string(),
				message: "blank label '' requires bitwise retrieval".to_string(),
				value: Some(String::new()),
				label: Some("blank label in delimited mode".to_string()),
				help: Some(
					"The delimited encoding cannot tell an empty label apart from an empty set. Configure the column with bitwise retrieval to allow the blank label."
						.to_string(),
				),
				notes: vec![
					"In bitwise mode the blank label owns a bit position like any other label."
						.to_string(),
				],
				cause: None,
			},

			SetError::UnknownLabel {
				label,
			} => Diagnostic {
				code: "SET_003".to_string(),
				message: format!("label '{}' is not part of the SET vocabulary", label),
				value: Some(label),
				label: Some("unknown member".to_string()),
				help: Some(
					"Only labels from the configured vocabulary can be encoded. Check for typos or reconfigure the column."
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},

			SetError::UnassignedBit {
				bit,
			} => Diagnostic {
				code: "SET_004".to_string(),
				message: format!("bit {} of the stored bitmask has no assigned label", bit),
				value: Some(bit.to_string()),
				label: Some("unassigned bit set".to_string()),
				help: Some(
					"The stored value does not match the configured vocabulary. The vocabulary may have shrunk since the row was written, or the value is out of range."
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},

			SetError::BitmaskNotInteger {
				value,
			} => Diagnostic {
				code: "SET_005".to_string(),
				message: format!("stored bitmask '{}' is not an integer", value),
				value: Some(value),
				label: Some("unreadable bitmask".to_string()),
				help: Some(
					"Bitwise reads must be coerced to an integer at the expression level before they reach the codec."
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SetError> for Error {
	fn from(err: SetError) -> Self {
		Error(err.into_diagnostic())
	}
}
