// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod common;

use std::io;
use std::sync::Arc;

use common::{recording_interceptor, RecordingSink};
use wrappo::{console, task, Locale, Severity};

#[tokio::test]
async fn test_failed_tasks_are_reported() {
	let original = Arc::new(RecordingSink::default());
	console::replace_sink(original.clone());

	// No hook registered yet: the failure goes to the console's error sink.
	task::report_unhandled("early failure".into());
	let calls = original.calls();
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0].0, Severity::Error);

	let (wrappo, transport, output) = recording_interceptor();
	assert!(wrappo.initialize());

	let failed = task::spawn(async {
		Err::<u32, io::Error>(io::Error::new(
			io::ErrorKind::ConnectionReset,
			"NetworkError: connection reset",
		))
	});
	assert_eq!(failed.await.unwrap(), None);

	let blocks = output.blocks();
	assert_eq!(blocks.len(), 1);
	assert!(blocks[0].contains("Erro detectado!"));

	let payloads = transport.payloads();
	assert_eq!(payloads.len(), 1);
	assert_eq!(payloads[0].kind, Severity::Error);
	assert_eq!(payloads[0].error_type, "Error");
	assert_eq!(payloads[0].message, "NetworkError: connection reset");
	assert_eq!(payloads[0].suggestion, Locale::PtBr.messages().suggest_network);

	let succeeded = task::spawn(async { Ok::<_, io::Error>(5) });
	assert_eq!(succeeded.await.unwrap(), Some(5));
	assert_eq!(transport.payloads().len(), 1);
	assert_eq!(output.blocks().len(), 1);
	assert_eq!(original.calls().len(), 1);
}
