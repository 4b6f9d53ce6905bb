// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Backtrace capture for synthetic exceptions and panics.

use backtrace::Backtrace;
use rustc_demangle::demangle;
use wrappo_core::Frame;

/// Frames belonging to the capture machinery itself.
const CAPTURE_PREFIXES: &[&str] = &[
	"backtrace::",
	"<backtrace::",
	"wrappo::",
	"<wrappo::",
	"wrappo_core::",
	"<wrappo_core::",
];

/// Capture the current stack, dropping the leading frames that belong to
/// Wrappo and the backtrace crate so the first frame is the caller's.
pub fn capture_frames() -> Vec<Frame> {
	let backtrace = Backtrace::new();
	let frames = backtrace
		.frames()
		.iter()
		.flat_map(|frame| frame.symbols())
		.map(|symbol| Frame {
			function: symbol.name().map(|name| match name.as_str() {
				Some(raw) => format!("{:#}", demangle(raw)),
				None => format!("{:#}", name),
			}),
			file: symbol.filename().map(|path| path.display().to_string()),
			line: symbol.lineno(),
			column: symbol.colno(),
		});

	frames.skip_while(is_capture_frame).collect()
}

fn is_capture_frame(frame: &Frame) -> bool {
	match frame.function.as_deref() {
		Some(function) => CAPTURE_PREFIXES
			.iter()
			.any(|prefix| function.starts_with(prefix)),
		None => true,
	}
}
