// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Keyword heuristic that turns an error message into a remediation hint.

use crate::locale::Locale;

/// Category of remediation hint derived from an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixHint {
	UndefinedValue,
	NullValue,
	Network,
	Syntax,
	Type,
	Generic,
}

/// Keywords in priority order; first match wins, comparison is case-sensitive.
const RULES: &[(&str, FixHint)] = &[
	("undefined", FixHint::UndefinedValue),
	("null", FixHint::NullValue),
	("NetworkError", FixHint::Network),
	("SyntaxError", FixHint::Syntax),
	("TypeError", FixHint::Type),
];

impl FixHint {
	/// Classify a message by the first keyword it contains.
	pub fn classify(message: &str) -> Self {
		RULES
			.iter()
			.find(|(keyword, _)| message.contains(keyword))
			.map(|(_, hint)| *hint)
			.unwrap_or(FixHint::Generic)
	}

	/// Localized hint text.
	pub fn text(self, locale: Locale) -> &'static str {
		let messages = locale.messages();
		match self {
			FixHint::UndefinedValue => messages.suggest_undefined,
			FixHint::NullValue => messages.suggest_null,
			FixHint::Network => messages.suggest_network,
			FixHint::Syntax => messages.suggest_syntax,
			FixHint::Type => messages.suggest_type,
			FixHint::Generic => messages.suggest_generic,
		}
	}
}

/// Suggest a fix for `message`. Advisory only.
pub fn suggest_fix(message: &str, locale: Locale) -> &'static str {
	FixHint::classify(message).text(locale)
}
