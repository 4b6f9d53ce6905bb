// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Panic hook integration: panics are Wrappo's uncaught exceptions.

use std::panic::{Location, PanicHookInfo};

use wrappo_core::{render_stack, Exception, Frame};

use crate::backtrace::capture_frames;
use crate::dispatch::DELIVERY_THREAD_NAME;
use crate::interceptor::ErrorInterceptor;

/// Type name reported for panics.
pub const PANIC_TYPE: &str = "panic";

/// Install a panic hook that reports panics through `interceptor`.
///
/// The previously installed hook still runs afterwards, so the usual panic
/// message and process behavior are unchanged.
pub fn install_panic_hook(interceptor: ErrorInterceptor) {
	let default_hook = std::panic::take_hook();

	std::panic::set_hook(Box::new(move |info| {
		// A panicking delivery must not trigger another delivery.
		if std::thread::current().name() != Some(DELIVERY_THREAD_NAME) {
			interceptor.report_uncaught(panic_exception(info).into());
		}

		default_hook(info);
	}));
}

/// Build an exception describing a panic, with the panic site as its first frame.
fn panic_exception(info: &PanicHookInfo<'_>) -> Exception {
	let message = extract_panic_message(info);

	let mut frames = Vec::new();
	if let Some(location) = info.location() {
		frames.push(location_frame(location));
	}
	frames.extend(capture_frames());

	let stack = render_stack(PANIC_TYPE, &message, &frames);
	Exception::new(PANIC_TYPE, message).with_stack(stack)
}

fn location_frame(location: &Location<'_>) -> Frame {
	Frame {
		function: Some("<panic>".to_string()),
		file: Some(location.file().to_string()),
		line: Some(location.line()),
		column: Some(location.column()),
	}
}

/// Extract the panic message from panic info.
fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
	if let Some(s) = info.payload().downcast_ref::<&str>() {
		s.to_string()
	} else if let Some(s) = info.payload().downcast_ref::<String>() {
		s.clone()
	} else {
		"Box<dyn Any>".to_string()
	}
}
