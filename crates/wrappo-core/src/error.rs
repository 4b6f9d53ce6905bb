// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while parsing core values from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
	#[error("invalid locale: {0}")]
	InvalidLocale(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
