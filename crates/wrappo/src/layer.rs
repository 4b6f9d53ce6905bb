// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing layer that routes `warn!` and `error!` events through the interceptor.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use wrappo_core::{render_stack, Exception, Frame, Severity};

use crate::args::LogArg;
use crate::backtrace::capture_frames;
use crate::interceptor::ErrorInterceptor;

/// A tracing Layer that treats WARN and ERROR events as console calls.
///
/// Events emitted by Wrappo itself (targets under `wrappo`) are ignored, so a
/// failed delivery never produces another delivery.
#[derive(Clone)]
pub struct WrappoLayer {
	interceptor: ErrorInterceptor,
}

impl WrappoLayer {
	pub fn new(interceptor: ErrorInterceptor) -> Self {
		Self { interceptor }
	}
}

impl<S> Layer<S> for WrappoLayer
where
	S: Subscriber + for<'a> LookupSpan<'a>,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let metadata = event.metadata();
		let severity = match *metadata.level() {
			Level::ERROR => Severity::Error,
			Level::WARN => Severity::Warning,
			_ => return,
		};
		if is_own_target(metadata.target()) {
			return;
		}

		let mut visitor = FieldVisitor::default();
		event.record(&mut visitor);

		let message = match (visitor.message, visitor.error) {
			(Some(message), Some(error)) => format!("{}: {}", message, error),
			(Some(message), None) => message,
			(None, Some(error)) => error,
			(None, None) => String::new(),
		};

		let exception = event_exception(metadata, message);
		self
			.interceptor
			.handle_sink_event(severity, &[LogArg::Exception(exception)]);
	}
}

fn is_own_target(target: &str) -> bool {
	target == "wrappo" || target.starts_with("wrappo::")
}

/// The event's callsite is the first frame; the captured stack follows.
fn event_exception(metadata: &Metadata<'_>, message: String) -> Exception {
	let mut frames = vec![Frame {
		function: Some(metadata.target().to_string()),
		file: metadata.file().map(str::to_string),
		line: metadata.line(),
		column: None,
	}];
	frames.extend(capture_frames());

	let stack = render_stack("Error", &message, &frames);
	Exception::new("Error", message).with_stack(stack)
}

/// Collects the `message` and `error` fields of an event.
#[derive(Default)]
struct FieldVisitor {
	message: Option<String>,
	error: Option<String>,
}

impl FieldVisitor {
	fn record(&mut self, field: &Field, value: String) {
		match field.name() {
			"message" => self.message = Some(value),
			"error" => self.error = Some(value),
			_ => {}
		}
	}
}

impl Visit for FieldVisitor {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		self.record(field, format!("{:?}", value));
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		self.record(field, value.to_string());
	}

	fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
		self.record(field, value.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use std::sync::{Arc, Mutex};
	use tracing_subscriber::layer::SubscriberExt;
	use wrappo_core::{ApiKey, LogPayload};

	use crate::dispatch::DeliveryMode;
	use crate::display::ReportOutput;
	use crate::transport::Transport;

	#[derive(Default)]
	struct RecordingTransport {
		sent: Mutex<Vec<LogPayload>>,
	}

	#[async_trait]
	impl Transport for RecordingTransport {
		async fn send(&self, _api_key: &ApiKey, payload: &LogPayload) -> crate::Result<()> {
			self.sent.lock().unwrap().push(payload.clone());
			Ok(())
		}
	}

	#[derive(Default)]
	struct RecordingOutput {
		blocks: Mutex<Vec<String>>,
	}

	impl ReportOutput for RecordingOutput {
		fn write(&self, text: &str) {
			self.blocks.lock().unwrap().push(text.to_string());
		}
	}

	fn capture<F: FnOnce()>(emit: F) -> Vec<String> {
		let output = Arc::new(RecordingOutput::default());
		let interceptor = ErrorInterceptor::builder()
			.output(output.clone())
			.build()
			.unwrap();
		let subscriber = tracing_subscriber::registry().with(WrappoLayer::new(interceptor));

		tracing::subscriber::with_default(subscriber, emit);

		let blocks = output.blocks.lock().unwrap();
		blocks.clone()
	}

	#[test]
	fn test_warn_event_is_reported_at_callsite() {
		let blocks = capture(|| {
			tracing::warn!(target: "my_app::cache", "cache entry is undefined");
		});

		assert_eq!(blocks.len(), 1);
		assert!(blocks[0].contains("Aviso detectado!"));
		assert!(blocks[0].contains("cache entry is undefined"));
		assert!(blocks[0].contains("layer.rs:"));
	}

	#[test]
	fn test_error_field_is_appended() {
		let blocks = capture(|| {
			let err = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
			tracing::error!(target: "my_app::net", error = %err, "request failed");
		});

		assert_eq!(blocks.len(), 1);
		assert!(blocks[0].contains("Erro detectado!"));
		assert!(blocks[0].contains("request failed: connection reset"));
	}

	#[test]
	fn test_info_and_own_events_are_ignored() {
		let blocks = capture(|| {
			tracing::info!(target: "my_app", "started");
			tracing::warn!(target: "wrappo::interceptor", "Log delivery failed");
			tracing::error!(target: "wrappo", "internal");
		});

		assert!(blocks.is_empty());
	}

	#[test]
	fn test_warn_event_with_key_is_delivered_not_displayed() {
		let output = Arc::new(RecordingOutput::default());
		let transport = Arc::new(RecordingTransport::default());
		let interceptor = ErrorInterceptor::builder()
			.api_key("wk_test")
			.delivery_mode(DeliveryMode::Blocking)
			.transport(transport.clone())
			.output(output.clone())
			.build()
			.unwrap();
		let subscriber = tracing_subscriber::registry().with(WrappoLayer::new(interceptor));

		tracing::subscriber::with_default(subscriber, || {
			tracing::warn!(target: "my_app::cache", "cache entry is undefined");
		});

		assert!(output.blocks.lock().unwrap().is_empty());
		let sent = transport.sent.lock().unwrap();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].kind, Severity::Warning);
		assert_eq!(sent[0].message, "cache entry is undefined");
		assert!(sent[0].location.contains("layer.rs:"));
	}

	#[test]
	fn test_own_target_matching() {
		assert!(is_own_target("wrappo"));
		assert!(is_own_target("wrappo::dispatch"));
		assert!(!is_own_target("wrappo_demo"));
		assert!(!is_own_target("my_app::wrappo"));
	}
}
