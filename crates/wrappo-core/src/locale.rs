// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale selection and the message catalogs behind every user-facing string.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Locales with a message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
	/// Brazilian Portuguese.
	#[default]
	PtBr,
	/// English.
	En,
}

/// Locale used when none is requested or the requested one is unsupported.
pub const DEFAULT_LOCALE: Locale = Locale::PtBr;

impl Locale {
	/// BCP 47 tag for the locale.
	pub fn code(&self) -> &'static str {
		match self {
			Locale::PtBr => "pt-BR",
			Locale::En => "en",
		}
	}

	/// Returns the catalog for this locale.
	pub fn messages(&self) -> &'static Messages {
		match self {
			Locale::PtBr => &PT_BR,
			Locale::En => &EN,
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
		match normalized.as_str() {
			"pt" | "pt-br" => Ok(Locale::PtBr),
			"en" => Ok(Locale::En),
			other if other.starts_with("en-") => Ok(Locale::En),
			_ => Err(CoreError::InvalidLocale(s.to_string())),
		}
	}
}

/// Resolve the effective locale from an optional request (e.g. `WRAPPO_LOCALE`).
///
/// Unsupported or missing values fall back to [`DEFAULT_LOCALE`].
pub fn resolve_locale(requested: Option<&str>) -> Locale {
	requested
		.and_then(|code| code.parse().ok())
		.unwrap_or(DEFAULT_LOCALE)
}

/// User-facing strings for one locale.
#[derive(Debug)]
pub struct Messages {
	pub unknown_error: &'static str,
	pub unknown_warning: &'static str,
	pub unknown_location: &'static str,

	pub suggest_undefined: &'static str,
	pub suggest_null: &'static str,
	pub suggest_network: &'static str,
	pub suggest_syntax: &'static str,
	pub suggest_type: &'static str,
	pub suggest_generic: &'static str,

	pub error_detected: &'static str,
	pub warning_detected: &'static str,
	pub located_at: &'static str,
	pub label_message: &'static str,
	pub label_file: &'static str,
	pub label_line: &'static str,
	pub label_suggestion: &'static str,
	pub label_stack: &'static str,

	pub delivery_failed: &'static str,
}

static PT_BR: Messages = Messages {
	unknown_error: "Erro desconhecido",
	unknown_warning: "Aviso desconhecido",
	unknown_location: "Desconhecido",

	suggest_undefined: "🔍 Verifique se a variável está definida antes de usá-la.",
	suggest_null: "🛠️ Certifique-se de que o valor não seja `null` antes de acessar suas propriedades.",
	suggest_network: "🌐 Verifique sua conexão de rede e se a API está acessível.",
	suggest_syntax: "📌 Erro de sintaxe! Revise a estrutura do código.",
	suggest_type: "🔄 Confira se a variável contém o tipo esperado antes de acessá-la.",
	suggest_generic: "🤖 Não foi possível sugerir uma correção específica. Verifique a documentação.",

	error_detected: "Erro detectado!",
	warning_detected: "Aviso detectado!",
	located_at: "em",
	label_message: "Mensagem:",
	label_file: "Arquivo:",
	label_line: "Linha:",
	label_suggestion: "Sugestão:",
	label_stack: "Stack Trace:",

	delivery_failed: "Wrappo: Falha ao enviar log para o servidor.",
};

static EN: Messages = Messages {
	unknown_error: "Unknown error",
	unknown_warning: "Unknown warning",
	unknown_location: "Unknown",

	suggest_undefined: "🔍 Check that the variable is defined before using it.",
	suggest_null: "🛠️ Make sure the value is not `null` before accessing its properties.",
	suggest_network: "🌐 Check your network connection and that the API is reachable.",
	suggest_syntax: "📌 Syntax error! Review the structure of the code.",
	suggest_type: "🔄 Check that the variable holds the expected type before accessing it.",
	suggest_generic: "🤖 Could not suggest a specific fix. Check the documentation.",

	error_detected: "Error detected!",
	warning_detected: "Warning detected!",
	located_at: "at",
	label_message: "Message:",
	label_file: "File:",
	label_line: "Line:",
	label_suggestion: "Suggestion:",
	label_stack: "Stack Trace:",

	delivery_failed: "Wrappo: Failed to send log to the server.",
};
