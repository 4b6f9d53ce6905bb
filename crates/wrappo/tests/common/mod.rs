// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wrappo::{
	ApiKey, DeliveryMode, ErrorInterceptor, LogArg, LogPayload, LogSink, ReportOutput, Severity,
	Transport,
};

#[derive(Default)]
pub struct RecordingTransport {
	pub sent: Mutex<Vec<(String, LogPayload)>>,
}

impl RecordingTransport {
	pub fn payloads(&self) -> Vec<LogPayload> {
		self
			.sent
			.lock()
			.unwrap()
			.iter()
			.map(|(_, payload)| payload.clone())
			.collect()
	}
}

#[async_trait]
impl Transport for RecordingTransport {
	async fn send(&self, api_key: &ApiKey, payload: &LogPayload) -> wrappo::Result<()> {
		self
			.sent
			.lock()
			.unwrap()
			.push((api_key.expose().to_string(), payload.clone()));
		Ok(())
	}
}

#[derive(Default)]
pub struct RecordingOutput {
	pub blocks: Mutex<Vec<String>>,
}

impl RecordingOutput {
	pub fn blocks(&self) -> Vec<String> {
		self.blocks.lock().unwrap().clone()
	}
}

impl ReportOutput for RecordingOutput {
	fn write(&self, text: &str) {
		self.blocks.lock().unwrap().push(text.to_string());
	}
}

#[derive(Default)]
pub struct RecordingSink {
	pub calls: Mutex<Vec<(Severity, Vec<LogArg>)>>,
}

impl RecordingSink {
	pub fn calls(&self) -> Vec<(Severity, Vec<LogArg>)> {
		self.calls.lock().unwrap().clone()
	}
}

impl LogSink for RecordingSink {
	fn log(&self, severity: Severity, args: &[LogArg]) {
		self.calls.lock().unwrap().push((severity, args.to_vec()));
	}
}

/// An interceptor with a key that records deliveries and reports instead of
/// sending or printing them.
pub fn recording_interceptor() -> (ErrorInterceptor, Arc<RecordingTransport>, Arc<RecordingOutput>) {
	let transport = Arc::new(RecordingTransport::default());
	let output = Arc::new(RecordingOutput::default());
	let interceptor = ErrorInterceptor::builder()
		.api_key("wk_test")
		.delivery_mode(DeliveryMode::Blocking)
		.transport(transport.clone())
		.output(output.clone())
		.build()
		.unwrap();
	(interceptor, transport, output)
}
