// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Walks through every capture path.
//!
//! Run without `WRAPPO_API_KEY` to see the local reports, or with it set to
//! deliver them. `WRAPPO_LOCALE=en` switches the report language.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wrappo::{console_error, console_warn, task, ErrorInterceptorBuilder, LogArg, WrappoLayer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let wrappo = ErrorInterceptorBuilder::from_env().build()?;

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with(tracing_subscriber::fmt::layer())
		.with(WrappoLayer::new(wrappo.clone()))
		.init();

	wrappo.initialize();

	console_warn!("config value is undefined, using defaults");

	let err = io::Error::new(io::ErrorKind::InvalidData, "SyntaxError: unexpected token");
	console_error!(LogArg::error(&err), "while parsing settings");

	tracing::warn!(target: "demo::cache", "cache entry was null");

	let failed = task::spawn(async {
		Err::<(), io::Error>(io::Error::new(
			io::ErrorKind::ConnectionRefused,
			"NetworkError: upstream unavailable",
		))
	});
	failed.await?;

	let missing: Option<u32> = None;
	missing.expect("value was undefined");
	Ok(())
}
