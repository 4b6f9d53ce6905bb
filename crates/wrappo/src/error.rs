// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Wrappo SDK.

use thiserror::Error;

/// Result type alias for Wrappo operations.
pub type Result<T> = std::result::Result<T, WrappoError>;

/// Errors that can occur while configuring Wrappo or delivering a log.
///
/// None of these ever escape the interception paths; they surface only from
/// the builder and from [`Transport`](crate::Transport) implementations.
#[derive(Debug, Error)]
pub enum WrappoError {
	/// The endpoint is not an absolute http(s) URL.
	#[error("invalid endpoint: {0}")]
	InvalidEndpoint(String),

	/// HTTP request failed.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The delivery thread could not be started.
	#[error("failed to start delivery thread: {0}")]
	Runtime(#[from] std::io::Error),

	/// The delivery thread panicked before finishing.
	#[error("delivery thread panicked")]
	DeliveryPanicked,

	/// A custom transport failed.
	#[error("transport error: {0}")]
	Transport(String),
}
