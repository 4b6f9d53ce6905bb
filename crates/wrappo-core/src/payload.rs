// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! JSON body posted to the remote log endpoint.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::details::ErrorDetails;
use crate::severity::Severity;

/// Request payload for one delivered event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPayload {
	/// Which sink or hook triggered delivery.
	#[serde(rename = "type")]
	pub kind: Severity,
	pub message: String,
	pub error_type: String,
	pub file: String,
	pub line: String,
	pub location: String,
	pub suggestion: String,
	pub stack: String,
	/// RFC 3339 UTC timestamp with millisecond precision, taken at send time.
	pub timestamp: String,
}

impl LogPayload {
	pub fn new(kind: Severity, details: &ErrorDetails) -> Self {
		Self::at(kind, details, Utc::now())
	}

	pub fn at(kind: Severity, details: &ErrorDetails, now: DateTime<Utc>) -> Self {
		Self {
			kind,
			message: details.message.clone(),
			error_type: details.error_type.clone(),
			file: details.file.clone(),
			line: details.line.clone(),
			location: details.location.clone(),
			suggestion: details.suggestion.clone(),
			stack: details.stack.clone(),
			timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::details::Exception;
	use crate::locale::Locale;
	use chrono::TimeZone;

	#[test]
	fn test_wire_field_names() {
		let details = ErrorDetails::from_exception(
			&Exception::new("IoError", "NetworkError: connection reset"),
			Locale::En,
		);
		let now = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
		let payload = LogPayload::at(Severity::Warning, &details, now);
		let json = serde_json::to_value(&payload).unwrap();

		assert_eq!(json["type"], "warn");
		assert_eq!(json["errorType"], "IoError");
		assert_eq!(json["message"], "NetworkError: connection reset");
		assert_eq!(json["timestamp"], "2025-03-04T05:06:07.000Z");
		assert_eq!(json["suggestion"], Locale::En.messages().suggest_network);

		let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
		keys.sort();
		assert_eq!(
			keys,
			[
				"errorType",
				"file",
				"line",
				"location",
				"message",
				"stack",
				"suggestion",
				"timestamp",
				"type"
			]
		);
	}
}
