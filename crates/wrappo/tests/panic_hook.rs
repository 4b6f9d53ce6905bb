// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod common;

use common::recording_interceptor;
use wrappo::{Locale, Severity};

#[test]
fn test_panic_is_displayed_and_delivered() {
	let (wrappo, transport, output) = recording_interceptor();
	assert!(wrappo.initialize());

	let result = std::thread::spawn(|| {
		let session: Option<&str> = None;
		if session.is_none() {
			panic!("session was null");
		}
	})
	.join();
	assert!(result.is_err());

	let blocks = output.blocks();
	assert_eq!(blocks.len(), 1);
	assert!(blocks[0].contains("Erro detectado!"));
	assert!(blocks[0].contains("session was null"));

	let payloads = transport.payloads();
	assert_eq!(payloads.len(), 1);
	let payload = &payloads[0];
	assert_eq!(payload.kind, Severity::Error);
	assert_eq!(payload.error_type, "panic");
	assert_eq!(payload.message, "session was null");
	assert!(payload.file.ends_with("panic_hook.rs"));
	assert!(payload.location.starts_with(&payload.file));
	assert_eq!(payload.suggestion, Locale::PtBr.messages().suggest_null);
	assert!(payload.stack.starts_with("panic: session was null"));
}
