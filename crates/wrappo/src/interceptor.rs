// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The error interceptor: routes captured events to local display or remote delivery.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info, warn};
use wrappo_core::{resolve_locale, ApiKey, ErrorDetails, Locale, LogPayload, Severity};

use crate::args::LogArg;
use crate::console::{self, LogSink};
use crate::display::{render_report, ReportOutput, StdoutOutput};
use crate::dispatch::{dispatch, DeliveryMode};
use crate::error::{Result, WrappoError};
use crate::extract::extract_error_details;
use crate::panic_hook::install_panic_hook;
use crate::task::register_rejection_hook;
use crate::transport::{HttpTransport, Transport, DEFAULT_ENDPOINT};

/// Set by the first successful [`ErrorInterceptor::initialize`] in the process.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "WRAPPO_API_KEY";
/// Environment variable selecting the display locale.
pub const LOCALE_ENV: &str = "WRAPPO_LOCALE";

/// Configuration for the interceptor.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Where payloads are posted.
	pub endpoint: String,
	/// Locale for defaults, suggestions and the local report.
	pub locale: Locale,
	/// Timeout for HTTP requests.
	pub request_timeout: Duration,
	/// Whether sink and rejection deliveries are awaited.
	pub delivery_mode: DeliveryMode,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			locale: Locale::default(),
			request_timeout: Duration::from_secs(10),
			delivery_mode: DeliveryMode::default(),
		}
	}
}

/// Builder for constructing an [`ErrorInterceptor`].
pub struct ErrorInterceptorBuilder {
	api_key: Option<ApiKey>,
	config: ClientConfig,
	transport: Option<Arc<dyn Transport>>,
	output: Option<Arc<dyn ReportOutput>>,
}

impl ErrorInterceptorBuilder {
	/// Creates a new builder with default settings and no API key.
	pub fn new() -> Self {
		Self {
			api_key: None,
			config: ClientConfig::default(),
			transport: None,
			output: None,
		}
	}

	/// Creates a builder seeded from `WRAPPO_API_KEY` and `WRAPPO_LOCALE`.
	pub fn from_env() -> Self {
		let mut builder = Self::new().locale(resolve_locale(std::env::var(LOCALE_ENV).ok().as_deref()));
		if let Ok(key) = std::env::var(API_KEY_ENV) {
			builder = builder.api_key(key);
		}
		builder
	}

	/// Sets the API key. A blank key leaves the interceptor in local-display mode.
	pub fn api_key(mut self, key: impl Into<String>) -> Self {
		self.api_key = ApiKey::non_empty(key);
		self
	}

	/// Overrides the log endpoint.
	pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.config.endpoint = endpoint.into();
		self
	}

	pub fn locale(mut self, locale: Locale) -> Self {
		self.config.locale = locale;
		self
	}

	/// Sets the HTTP request timeout.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	pub fn delivery_mode(mut self, mode: DeliveryMode) -> Self {
		self.config.delivery_mode = mode;
		self
	}

	/// Replaces the HTTP transport.
	pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Replaces stdout as the destination for local reports.
	pub fn output(mut self, output: Arc<dyn ReportOutput>) -> Self {
		self.output = Some(output);
		self
	}

	/// Builds the interceptor. Nothing is installed until
	/// [`ErrorInterceptor::initialize`] is called.
	pub fn build(self) -> Result<ErrorInterceptor> {
		let valid = Url::parse(&self.config.endpoint)
			.map(|url| matches!(url.scheme(), "http" | "https"))
			.unwrap_or(false);
		if !valid {
			return Err(WrappoError::InvalidEndpoint(self.config.endpoint));
		}

		let transport: Arc<dyn Transport> = match self.transport {
			Some(transport) => transport,
			None => Arc::new(HttpTransport::new(
				self.config.endpoint.clone(),
				self.config.request_timeout,
			)?),
		};
		let output = self.output.unwrap_or_else(|| Arc::new(StdoutOutput));

		Ok(ErrorInterceptor {
			inner: Arc::new(InterceptorInner {
				api_key: self.api_key,
				config: self.config,
				transport,
				output,
			}),
		})
	}
}

impl Default for ErrorInterceptorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

struct InterceptorInner {
	api_key: Option<ApiKey>,
	config: ClientConfig,
	transport: Arc<dyn Transport>,
	output: Arc<dyn ReportOutput>,
}

/// Captures warnings, errors, panics and unhandled task failures.
///
/// Without an API key, sink events are printed as a colored report. With a
/// key they are posted to the log service instead. Panics and unhandled task
/// failures are always printed and, when a key is set, also posted.
///
/// # Example
///
/// ```ignore
/// use wrappo::{console_warn, ErrorInterceptor};
///
/// let wrappo = ErrorInterceptor::builder()
///     .api_key(std::env::var("WRAPPO_API_KEY").unwrap_or_default())
///     .build()?;
/// wrappo.initialize();
///
/// console_warn!("cache is undefined, falling back");
/// ```
#[derive(Clone)]
pub struct ErrorInterceptor {
	inner: Arc<InterceptorInner>,
}

impl ErrorInterceptor {
	/// Creates an interceptor with default settings and an optional API key.
	pub fn new(api_key: Option<String>) -> Result<Self> {
		let builder = Self::builder();
		match api_key {
			Some(key) => builder.api_key(key).build(),
			None => builder.build(),
		}
	}

	/// Creates a new builder.
	pub fn builder() -> ErrorInterceptorBuilder {
		ErrorInterceptorBuilder::new()
	}

	/// Returns true when events are delivered remotely.
	pub fn has_api_key(&self) -> bool {
		self.inner.api_key.is_some()
	}

	pub fn locale(&self) -> Locale {
		self.inner.config.locale
	}

	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	/// Installs console interception, the panic hook and the rejection hook.
	///
	/// Should be called once, early in startup; events raised before this are
	/// not captured. Installation happens at most once per process: later
	/// calls, from this or any other interceptor, return `false` and change
	/// nothing. There is no uninstall.
	pub fn initialize(&self) -> bool {
		if INITIALIZED.swap(true, Ordering::SeqCst) {
			debug!("Wrappo already initialized, skipping");
			return false;
		}

		let interceptor = self.clone();
		console::wrap_sink(move |original| -> Arc<dyn LogSink> {
			Arc::new(interceptor.wrap(original))
		});
		install_panic_hook(self.clone());
		register_rejection_hook(self.clone());

		info!(
			remote = self.has_api_key(),
			locale = %self.locale(),
			"Wrappo initialized"
		);
		true
	}

	/// Wraps `original` so every call is captured before being forwarded.
	pub fn wrap(&self, original: Arc<dyn LogSink>) -> InterceptingSink {
		InterceptingSink {
			interceptor: self.clone(),
			original,
		}
	}

	/// Extracts details from the first argument; see [`extract_error_details`].
	pub fn extract_error_details(&self, args: &[LogArg]) -> Option<ErrorDetails> {
		extract_error_details(args, self.locale())
	}

	/// Handles one warn/error sink call: display without a key, deliver with one.
	pub fn handle_sink_event(&self, severity: Severity, args: &[LogArg]) {
		let details = self.details_or_unknown(severity, args);
		if self.has_api_key() {
			self.deliver(severity, &details, self.inner.config.delivery_mode);
		} else {
			self.display(severity, &details);
		}
	}

	/// Reports a fatal error: displays it and waits for delivery.
	///
	/// Called by the panic hook; also useful for errors returned from `main`.
	pub fn report_uncaught(&self, error: LogArg) {
		let details = self.details_or_unknown(Severity::Error, &[error]);
		self.display(Severity::Error, &details);
		self.deliver(Severity::Error, &details, DeliveryMode::Blocking);
	}

	/// Reports a failure nobody handled: displays it and attempts delivery.
	pub fn report_rejection(&self, reason: LogArg) {
		let details = self.details_or_unknown(Severity::Error, &[reason]);
		self.display(Severity::Error, &details);
		self.send_to_server(Severity::Error, &details);
	}

	/// Writes the colored report for `details` to the local output.
	pub fn display(&self, severity: Severity, details: &ErrorDetails) {
		self
			.inner
			.output
			.write(&render_report(severity, details, self.locale()));
	}

	/// Posts `details` to the log service. No-op without an API key.
	pub fn send_to_server(&self, severity: Severity, details: &ErrorDetails) {
		self.deliver(severity, details, self.inner.config.delivery_mode);
	}

	fn details_or_unknown(&self, severity: Severity, args: &[LogArg]) -> ErrorDetails {
		self
			.extract_error_details(args)
			.unwrap_or_else(|| ErrorDetails::unknown(severity, self.locale()))
	}

	fn deliver(&self, severity: Severity, details: &ErrorDetails, mode: DeliveryMode) {
		let Some(api_key) = self.inner.api_key.clone() else {
			return;
		};

		let payload = LogPayload::new(severity, details);
		let interceptor = self.clone();
		let delivery = async move {
			if let Err(e) = interceptor.inner.transport.send(&api_key, &payload).await {
				interceptor.report_delivery_failure(&e);
			}
		};

		if let Err(e) = dispatch(mode, delivery) {
			self.report_delivery_failure(&e);
		}
	}

	fn report_delivery_failure(&self, error: &WrappoError) {
		warn!(error = %error, "Log delivery failed");
		self
			.inner
			.output
			.write(&format!("⚠️ {}", self.locale().messages().delivery_failed));
	}
}

/// A sink that captures every call and then forwards it, unchanged, to the
/// sink it wraps.
pub struct InterceptingSink {
	interceptor: ErrorInterceptor,
	original: Arc<dyn LogSink>,
}

impl LogSink for InterceptingSink {
	fn log(&self, severity: Severity, args: &[LogArg]) {
		self.interceptor.handle_sink_event(severity, args);
		self.original.log(severity, args);
	}
}
