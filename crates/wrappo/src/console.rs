// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The process-wide console: a warn/error sink pair that can be read and
//! replaced at runtime.
//!
//! Application code logs through [`warn`] and [`error`] (or the
//! [`console_warn!`](crate::console_warn) and
//! [`console_error!`](crate::console_error) macros) and never needs to know
//! whether the active sink has been wrapped.

use std::io::{self, Write};
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use wrappo_core::Severity;

use crate::args::LogArg;

/// Something that accepts loggable arguments and produces output.
pub trait LogSink: Send + Sync {
	fn log(&self, severity: Severity, args: &[LogArg]);
}

/// Default sink: the arguments, space-separated, on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
	fn log(&self, _severity: Severity, args: &[LogArg]) {
		let mut stderr = io::stderr().lock();
		let _ = writeln!(stderr, "{}", join_args(args));
	}
}

/// Render arguments the way the default sink prints them.
pub fn join_args(args: &[LogArg]) -> String {
	args
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

static SINK: Lazy<RwLock<Arc<dyn LogSink>>> = Lazy::new(|| {
	let sink: Arc<dyn LogSink> = Arc::new(StderrSink);
	RwLock::new(sink)
});

/// The sink currently receiving console calls.
pub fn current_sink() -> Arc<dyn LogSink> {
	Arc::clone(&SINK.read().unwrap_or_else(PoisonError::into_inner))
}

/// Install `sink`, returning the one it replaces.
pub fn replace_sink(sink: Arc<dyn LogSink>) -> Arc<dyn LogSink> {
	let mut slot = SINK.write().unwrap_or_else(PoisonError::into_inner);
	std::mem::replace(&mut *slot, sink)
}

/// Replace the current sink with `wrap(current)` in one step.
pub fn wrap_sink<F>(wrap: F)
where
	F: FnOnce(Arc<dyn LogSink>) -> Arc<dyn LogSink>,
{
	let mut slot = SINK.write().unwrap_or_else(PoisonError::into_inner);
	let original = Arc::clone(&slot);
	*slot = wrap(original);
}

/// Log through the current sink.
pub fn log(severity: Severity, args: &[LogArg]) {
	// The lock is released before the sink runs so sinks may log themselves.
	let sink = current_sink();
	sink.log(severity, args);
}

pub fn warn(args: &[LogArg]) {
	log(Severity::Warning, args);
}

pub fn error(args: &[LogArg]) {
	log(Severity::Error, args);
}

/// Log a warning through the console sink.
///
/// ```ignore
/// console_warn!("retrying", attempt);
/// ```
#[macro_export]
macro_rules! console_warn {
	($($arg:expr),* $(,)?) => {
		$crate::console::warn(&[$($crate::LogArg::from($arg)),*])
	};
}

/// Log an error through the console sink.
///
/// ```ignore
/// console_error!(LogArg::error(&err), "while loading config");
/// ```
#[macro_export]
macro_rules! console_error {
	($($arg:expr),* $(,)?) => {
		$crate::console::error(&[$($crate::LogArg::from($arg)),*])
	};
}
