// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The enriched description of one captured error or warning.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::severity::Severity;
use crate::stack::{relevant_lines, SourceLocation};
use crate::suggestion::suggest_fix;

/// Type name used when an error carries none.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Placeholder for values that could not be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// An exception-like value: a named error with a message and optional stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
	pub name: String,
	pub message: String,
	pub stack: Option<String>,
}

impl Exception {
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
			stack: None,
		}
	}

	pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
		self.stack = Some(stack.into());
		self
	}
}

/// Diagnostic metadata for one captured event.
///
/// Built fresh for every event and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
	pub message: String,
	#[serde(rename = "type")]
	pub error_type: String,
	pub location: String,
	pub file: String,
	pub line: String,
	pub stack: String,
	pub suggestion: String,
}

impl ErrorDetails {
	/// Fully-defaulted details used when nothing usable was captured.
	///
	/// The message depends on the severity of the sink that received the event.
	pub fn unknown(severity: Severity, locale: Locale) -> Self {
		let messages = locale.messages();
		let message = match severity {
			Severity::Warning => messages.unknown_warning,
			Severity::Error => messages.unknown_error,
		};
		Self {
			message: message.to_string(),
			error_type: UNKNOWN_TYPE.to_string(),
			location: NOT_AVAILABLE.to_string(),
			file: NOT_AVAILABLE.to_string(),
			line: NOT_AVAILABLE.to_string(),
			stack: NOT_AVAILABLE.to_string(),
			suggestion: suggest_fix(message, locale).to_string(),
		}
	}

	/// Extract details from an exception.
	///
	/// The location comes from the second relevant stack line (the first frame
	/// below the header); with fewer than two relevant lines it stays unknown.
	pub fn from_exception(exception: &Exception, locale: Locale) -> Self {
		let messages = locale.messages();
		let relevant = exception
			.stack
			.as_deref()
			.map(relevant_lines)
			.unwrap_or_default();

		let mut location = messages.unknown_location.to_string();
		let mut file = messages.unknown_location.to_string();
		let mut line = NOT_AVAILABLE.to_string();

		if let Some(parsed) = relevant.get(1).and_then(|frame| SourceLocation::parse(frame)) {
			location = parsed.to_string();
			file = parsed.file;
			line = parsed.line;
		}

		let message = if exception.message.is_empty() {
			messages.unknown_error.to_string()
		} else {
			exception.message.clone()
		};
		let error_type = if exception.name.is_empty() {
			UNKNOWN_TYPE.to_string()
		} else {
			exception.name.clone()
		};
		let stack = if relevant.is_empty() {
			NOT_AVAILABLE.to_string()
		} else {
			relevant.join("\n")
		};
		let suggestion = suggest_fix(&message, locale).to_string();

		Self {
			message,
			error_type,
			location,
			file,
			line,
			stack,
			suggestion,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn stack(lines: &[&str]) -> String {
		lines.join("\n")
	}

	#[test]
	fn test_location_from_second_relevant_line() {
		let exception = Exception::new("ConfigError", "missing key").with_stack(stack(&[
			"ConfigError: missing key",
			"    at serde_json::de::from_str (/home/me/.cargo/registry/src/serde_json-1.0.0/src/de.rs:10:1)",
			"    at my_app::config::load (src/config.rs:31:14)",
			"    at my_app::main (src/main.rs:5:3)",
		]));
		let details = ErrorDetails::from_exception(&exception, Locale::PtBr);

		assert_eq!(details.location, "src/config.rs:31");
		assert_eq!(details.file, "src/config.rs");
		assert_eq!(details.line, "31");
		assert_eq!(details.error_type, "ConfigError");
		assert_eq!(details.message, "missing key");
		assert!(!details.stack.contains(".cargo/registry"));
		assert_eq!(details.stack.lines().count(), 3);
	}

	#[test]
	fn test_single_frame_keeps_defaults() {
		let exception =
			Exception::new("Error", "boom").with_stack("    at my_app::main (src/main.rs:5:3)");
		let details = ErrorDetails::from_exception(&exception, Locale::PtBr);

		assert_eq!(details.location, "Desconhecido");
		assert_eq!(details.file, "Desconhecido");
		assert_eq!(details.line, NOT_AVAILABLE);
	}

	#[test]
	fn test_all_frames_filtered() {
		let exception = Exception::new("Error", "boom").with_stack(stack(&[
			"    at core::panicking::panic (/rustc/abc/library/core/src/panicking.rs:1:1)",
			"    at tokio::spawn (/root/.cargo/registry/src/tokio-1.0.0/src/lib.rs:1:1)",
		]));
		let details = ErrorDetails::from_exception(&exception, Locale::En);

		assert_eq!(details.location, "Unknown");
		assert_eq!(details.stack, NOT_AVAILABLE);
	}

	#[test]
	fn test_second_line_without_location() {
		let exception = Exception::new("Error", "boom")
			.with_stack(stack(&["Error: boom", "    at my_app::main", "    at my_app::run (src/run.rs:1:1)"]));
		let details = ErrorDetails::from_exception(&exception, Locale::PtBr);

		assert_eq!(details.location, "Desconhecido");
		assert_eq!(details.line, NOT_AVAILABLE);
	}

	#[test]
	fn test_missing_stack_and_empty_fields() {
		let details = ErrorDetails::from_exception(&Exception::new("", ""), Locale::PtBr);

		assert_eq!(details.message, "Erro desconhecido");
		assert_eq!(details.error_type, UNKNOWN_TYPE);
		assert_eq!(details.stack, NOT_AVAILABLE);
		assert_eq!(details.suggestion, Locale::PtBr.messages().suggest_generic);
	}

	#[test]
	fn test_suggestion_follows_message() {
		let details = ErrorDetails::from_exception(
			&Exception::new("TypeError", "Cannot read properties of null (reading 'x')"),
			Locale::PtBr,
		);
		assert_eq!(details.suggestion, Locale::PtBr.messages().suggest_null);
	}

	#[test]
	fn test_unknown_depends_on_severity() {
		let warning = ErrorDetails::unknown(Severity::Warning, Locale::PtBr);
		let error = ErrorDetails::unknown(Severity::Error, Locale::PtBr);

		assert_eq!(warning.message, "Aviso desconhecido");
		assert_eq!(error.message, "Erro desconhecido");
		for details in [&warning, &error] {
			assert_eq!(details.error_type, UNKNOWN_TYPE);
			assert_eq!(details.location, NOT_AVAILABLE);
			assert_eq!(details.stack, NOT_AVAILABLE);
		}
	}

	#[test]
	fn test_serializes_type_field() {
		let details = ErrorDetails::unknown(Severity::Error, Locale::En);
		let json = serde_json::to_value(&details).unwrap();
		assert_eq!(json["type"], "Unknown");
		assert_eq!(json["message"], "Unknown error");
	}

	proptest! {
		#[test]
		fn location_is_file_colon_line(
			file in "[a-z_]{1,12}/[a-z_]{1,12}\\.rs",
			line in 1u32..100_000,
			column in 1u32..500,
		) {
			let exception = Exception::new("Error", "boom").with_stack(format!(
				"Error: boom\n    at my_app::work ({}:{}:{})\n    at my_app::main (src/main.rs:1:1)",
				file, line, column
			));
			let details = ErrorDetails::from_exception(&exception, Locale::PtBr);
			prop_assert_eq!(details.location, format!("{}:{}", file, line));
			prop_assert_eq!(details.line, line.to_string());
		}
	}
}
