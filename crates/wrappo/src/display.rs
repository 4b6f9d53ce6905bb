// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Local, colored rendering of a captured event.

use std::io::{self, Write};

use colored::Colorize;
use wrappo_core::{ErrorDetails, Locale, Severity};

/// Destination for rendered reports and local warnings.
pub trait ReportOutput: Send + Sync {
	fn write(&self, text: &str);
}

/// Writes to stdout, ignoring broken pipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl ReportOutput for StdoutOutput {
	fn write(&self, text: &str) {
		let mut stdout = io::stdout().lock();
		let _ = writeln!(stdout, "{}", text);
	}
}

/// Build the multi-line report for one event.
///
/// Errors and warnings share the body and differ only in the header.
pub fn render_report(severity: Severity, details: &ErrorDetails, locale: Locale) -> String {
	let messages = locale.messages();
	let header = match severity {
		Severity::Error => format!("🔴 {}", messages.error_detected).red(),
		Severity::Warning => format!("🟡 {}", messages.warning_detected).yellow(),
	};

	[
		format!(
			"{} {} {} {}",
			header, details.error_type, messages.located_at, details.location
		),
		format!("{} {}", format!("📌 {}", messages.label_message).white(), details.message),
		format!("{} {}", format!("📄 {}", messages.label_file).white(), details.file),
		format!("{} {}", format!("📍 {}", messages.label_line).white(), details.line),
		format!(
			"{} {}",
			format!("💡 {}", messages.label_suggestion).yellow(),
			details.suggestion
		),
		format!("{}\n {}", format!("🛠️ {}", messages.label_stack).cyan(), details.stack),
	]
	.join("\n")
}
