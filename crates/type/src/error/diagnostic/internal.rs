// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

use crate::error::diagnostic::Diagnostic;

/// Diagnostic for states that are unreachable while every collaborator
/// holds its contract. Carries the source location of the violation.
pub fn internal(reason: impl Into<String>, file: &str, line: u32) -> Diagnostic {
	let reason = reason.into();
	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("internal error: {}", reason),
		value: None,
		label: Some(format!("invariant violated at {}:{}", file, line)),
		help: Some(
			"This is a bug. Please file a report at https://github.com/labelset/labelset/issues and include this diagnostic."
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// Creates an internal-error [`Diagnostic`] with automatic source location
/// capture.
#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::error::diagnostic::internal::internal($reason, file!(), line!())
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::error::diagnostic::internal::internal(format!($fmt, $($arg)*), file!(), line!())
	};
}

/// Returns early with an internal [`Error`](crate::Error).
#[macro_export]
macro_rules! return_internal_error {
	($($arg:tt)*) => {
		return Err($crate::error!($crate::internal_error!($($arg)*)))
	};
}
