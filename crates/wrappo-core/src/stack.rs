// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack trace text: rendering, relevance filtering and location parsing.
//!
//! A stack is plain text. Line 0 is a `"<type>: <message>"` header and every
//! following line is one frame rendered as
//! `"    at <function> (<file>:<line>:<column>)"`. Keeping the header in place
//! means index 1 of the relevant lines is the top-most frame worth reporting.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Frames from third-party crates live under the cargo registry.
pub const DEPENDENCY_MARKER: &str = "/.cargo/registry/";

/// Frames from std, core and alloc point at the toolchain's source tree.
pub const INTERNAL_MARKER: &str = "/rustc/";

static LOCATION_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\((.*):(\d+):(\d+)\)").expect("location pattern is a valid regex"));

/// Returns true unless the line belongs to a dependency or the runtime.
pub fn is_relevant(line: &str) -> bool {
	!line.contains(DEPENDENCY_MARKER) && !line.contains(INTERNAL_MARKER)
}

/// Split a stack into lines and keep only the relevant ones.
pub fn relevant_lines(stack: &str) -> Vec<&str> {
	stack.lines().filter(|line| is_relevant(line)).collect()
}

/// A `file:line:column` triple parsed out of a frame line.
///
/// Components are kept as the raw text found in the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
	pub file: String,
	pub line: String,
	pub column: String,
}

impl SourceLocation {
	/// Parse the parenthesised location of a frame line, if present.
	pub fn parse(frame_line: &str) -> Option<Self> {
		let captures = LOCATION_PATTERN.captures(frame_line)?;
		Some(Self {
			file: captures.get(1)?.as_str().to_string(),
			line: captures.get(2)?.as_str().to_string(),
			column: captures.get(3)?.as_str().to_string(),
		})
	}
}

/// Formats as `file:line`, the shape reported as an event's location.
impl fmt::Display for SourceLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.file, self.line)
	}
}

/// One resolved stack frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
	pub function: Option<String>,
	pub file: Option<String>,
	pub line: Option<u32>,
	pub column: Option<u32>,
}

impl Frame {
	/// Render the frame as a single stack line.
	pub fn render(&self) -> String {
		let function = self.function.as_deref().unwrap_or("<unknown>");
		match (&self.file, self.line) {
			(Some(file), Some(line)) => {
				format!("    at {} ({}:{}:{})", function, file, line, self.column.unwrap_or(0))
			}
			_ => format!("    at {}", function),
		}
	}
}

/// Render a header plus frames into stack text.
pub fn render_stack(type_name: &str, message: &str, frames: &[Frame]) -> String {
	let mut lines = Vec::with_capacity(frames.len() + 1);
	lines.push(format!("{}: {}", type_name, message));
	lines.extend(frames.iter().map(Frame::render));
	lines.join("\n")
}
