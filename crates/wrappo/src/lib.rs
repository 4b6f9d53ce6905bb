// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime error capture for Rust applications.
//!
//! Wrappo intercepts warnings and errors logged through its console (or
//! through `tracing` via [`WrappoLayer`]), panics, and failures of tasks
//! spawned with [`task::spawn`]. Each event is enriched with its location,
//! a filtered stack and a fix suggestion. Without an API key the result is
//! printed as a colored report; with a key it is posted to the Wrappo log
//! service.
//!
//! # Quick Start
//!
//! ```ignore
//! use wrappo::{console_error, ErrorInterceptor, LogArg};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wrappo = ErrorInterceptor::builder()
//!         .api_key(std::env::var("WRAPPO_API_KEY").unwrap_or_default())
//!         .build()?;
//!     wrappo.initialize();
//!
//!     if let Err(e) = std::fs::read_to_string("config.toml") {
//!         console_error!(LogArg::error(&e), "while loading config");
//!     }
//!
//!     // Panics are reported before the default hook runs.
//!     let value: Option<u32> = None;
//!     value.expect("value is null");
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod backtrace;
pub mod console;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod extract;
pub mod interceptor;
pub mod layer;
pub mod panic_hook;
pub mod task;
pub mod transport;

pub use args::LogArg;
pub use console::{LogSink, StderrSink};
pub use dispatch::DeliveryMode;
pub use display::{render_report, ReportOutput, StdoutOutput};
pub use error::{Result, WrappoError};
pub use extract::extract_error_details;
pub use interceptor::{
	ClientConfig, ErrorInterceptor, ErrorInterceptorBuilder, InterceptingSink, API_KEY_ENV,
	LOCALE_ENV,
};
pub use layer::WrappoLayer;
pub use transport::{HttpTransport, Transport, DEFAULT_ENDPOINT};

pub use wrappo_core::{
	resolve_locale, ApiKey, ErrorDetails, Exception, Locale, LogPayload, Severity,
};
