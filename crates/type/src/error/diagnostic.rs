// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod internal;

/// Structured error payload with a stable code. `value` carries the
/// offending input (a label, a bit pattern, a raw string) when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub value: Option<String>,

	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

/// Conversion of domain errors into their [`Diagnostic`] representation.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}
