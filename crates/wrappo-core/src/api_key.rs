// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bearer credential for the remote log endpoint.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

const REDACTED: &str = "[REDACTED]";

/// The API key that switches capture from local display to remote delivery.
///
/// Debug and Display are redacted and the memory is zeroed on drop. Use
/// [`ApiKey::expose`] to read the raw value.
///
/// ```
/// use wrappo_core::ApiKey;
///
/// let key = ApiKey::new("wk_live_123");
/// assert_eq!(format!("{}", key), "[REDACTED]");
/// assert_eq!(key.expose(), "wk_live_123");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey {
	inner: String,
}

impl ApiKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self { inner: key.into() }
	}

	/// Wrap `key` unless it is blank; a blank key means "not configured".
	pub fn non_empty(key: impl Into<String>) -> Option<Self> {
		let key = Self::new(key);
		if key.inner.trim().is_empty() {
			None
		} else {
			Some(key)
		}
	}

	pub fn expose(&self) -> &str {
		&self.inner
	}

	/// Value for the `Authorization` header.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.inner)
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}
