// SPDX-License-Identifier: MIT
// Copyright (c) 2025 LabelSet

//! Value model and diagnostics for multi-valued SET columns.
//!
//! A SET column holds zero or more labels drawn from a fixed, ordered
//! vocabulary. This crate provides:
//! - [`LabelSet`], the application-level value
//! - [`Vocabulary`], the ordered list of allowed labels
//! - [`BitAssignment`], the label/bit dual lookup used by bitwise storage
//! - [`SetValue`], the raw value as it crosses the driver boundary
//! - [`Error`] and [`Diagnostic`], the error machinery shared by the codecs

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

// Re-export from error
pub use error::{Error, SetError, diagnostic::Diagnostic, diagnostic::IntoDiagnostic};

// Re-export from value
pub use value::{BitAssignment, LabelSet, SetValue, Vocabulary};

pub type Result<T> = std::result::Result<T, Error>;
