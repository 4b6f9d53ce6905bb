// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turning sink and hook arguments into [`ErrorDetails`].

use std::borrow::Cow;

use wrappo_core::{render_stack, ErrorDetails, Exception, Locale};

use crate::args::LogArg;
use crate::backtrace::capture_frames;

/// Name given to exceptions synthesized from non-exception arguments.
const SYNTHETIC_TYPE: &str = "Error";

/// Extract diagnostics from the first argument.
///
/// Exceptions are used as-is. Any other value becomes a synthetic exception
/// whose message is the value's text and whose stack is captured here, so
/// its location points at the code that made the logging call. Returns `None`
/// when there is no usable first argument; callers substitute
/// [`ErrorDetails::unknown`].
pub fn extract_error_details(args: &[LogArg], locale: Locale) -> Option<ErrorDetails> {
	let exception = match args.first()? {
		LogArg::Empty => return None,
		LogArg::Exception(exception) => Cow::Borrowed(exception),
		other => Cow::Owned(synthetic_exception(&other.to_string(), locale)),
	};
	Some(ErrorDetails::from_exception(&exception, locale))
}

fn synthetic_exception(text: &str, locale: Locale) -> Exception {
	let message = if text.is_empty() {
		locale.messages().unknown_error
	} else {
		text
	};
	let stack = render_stack(SYNTHETIC_TYPE, message, &capture_frames());
	Exception::new(SYNTHETIC_TYPE, message).with_stack(stack)
}
