// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Spawning tasks whose failures are reported when nobody handles them.
//!
//! A task spawned with [`spawn`] that resolves to `Err` is an unhandled
//! rejection: the error is passed to the registered interceptor's
//! [`report_rejection`](ErrorInterceptor::report_rejection) and the task's
//! join handle yields `None`.

use once_cell::sync::OnceCell;
use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::args::LogArg;
use crate::console;
use crate::interceptor::ErrorInterceptor;

static REJECTION_HOOK: OnceCell<ErrorInterceptor> = OnceCell::new();

/// Registers the interceptor that receives unhandled failures. The first
/// registration wins.
pub(crate) fn register_rejection_hook(interceptor: ErrorInterceptor) {
	if REJECTION_HOOK.set(interceptor).is_err() {
		debug!("Rejection hook already registered");
	}
}

/// Spawn a fallible task on the current tokio runtime.
///
/// # Panics
///
/// Panics when called outside a tokio runtime, like [`tokio::spawn`].
pub fn spawn<F, T, E>(future: F) -> JoinHandle<Option<T>>
where
	F: Future<Output = std::result::Result<T, E>> + Send + 'static,
	T: Send + 'static,
	E: std::error::Error + Send + 'static,
{
	tokio::spawn(async move {
		match future.await {
			Ok(value) => Some(value),
			Err(e) => {
				report_unhandled(LogArg::error(&e));
				None
			}
		}
	})
}

/// Report a failure nobody handled.
///
/// Without a registered interceptor the reason is written to the console's
/// error sink instead.
pub fn report_unhandled(reason: LogArg) {
	match REJECTION_HOOK.get() {
		Some(interceptor) => interceptor.report_rejection(reason),
		None => console::error(&[reason]),
	}
}
