// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote delivery of captured events.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;
use wrappo_core::{ApiKey, LogPayload};

use crate::error::Result;

/// Fixed ingestion endpoint of the Wrappo log service.
pub const DEFAULT_ENDPOINT: &str = "https://wrappo-logs.com/api/logs";

/// SDK version for identification.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
/// SDK name for identification.
const SDK_NAME: &str = "wrappo-rust";

/// Returns the User-Agent sent with every delivery, e.g. `wrappo-rust/0.1.0`.
pub fn user_agent() -> String {
	format!("{}/{}", SDK_NAME, SDK_VERSION)
}

/// Sends one payload to the log service.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, api_key: &ApiKey, payload: &LogPayload) -> Result<()>;
}

/// JSON-over-HTTPS transport.
///
/// The response body and status are not interpreted; only failing to complete
/// the request counts as a delivery failure.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
	endpoint: String,
}

impl HttpTransport {
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
		// Deliveries may run on short-lived runtimes; pooled connections would outlive them.
		let client = Client::builder()
			.user_agent(user_agent())
			.timeout(timeout)
			.pool_max_idle_per_host(0)
			.build()?;

		Ok(Self {
			client,
			endpoint: endpoint.into(),
		})
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, api_key: &ApiKey, payload: &LogPayload) -> Result<()> {
		debug!(endpoint = %self.endpoint, kind = %payload.kind, "Sending log");

		let response = self
			.client
			.post(&self.endpoint)
			.header(CONTENT_TYPE, "application/json")
			.header(AUTHORIZATION, api_key.bearer())
			.json(payload)
			.send()
			.await?;

		debug!(status = response.status().as_u16(), "Log delivered");
		Ok(())
	}
}
