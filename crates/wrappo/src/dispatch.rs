// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Running a delivery future from synchronous sink and hook code.

use std::future::Future;
use std::thread;

use tokio::runtime::{Builder, Handle};
use tracing::warn;

use crate::error::{Result, WrappoError};

/// Whether the caller waits for a delivery to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
	/// Fire and forget. Uses the ambient tokio runtime when there is one,
	/// otherwise a detached thread. Deliveries in flight at exit are lost.
	#[default]
	Background,
	/// Run on a dedicated thread and join it before returning.
	Blocking,
}

/// Name of the threads that run deliveries outside a tokio runtime.
pub(crate) const DELIVERY_THREAD_NAME: &str = "wrappo-delivery";

pub(crate) fn dispatch<F>(mode: DeliveryMode, delivery: F) -> Result<()>
where
	F: Future<Output = ()> + Send + 'static,
{
	match mode {
		DeliveryMode::Background => {
			if let Ok(handle) = Handle::try_current() {
				handle.spawn(delivery);
			} else {
				spawn_delivery_thread(delivery)?;
			}
			Ok(())
		}
		DeliveryMode::Blocking => spawn_delivery_thread(delivery)?
			.join()
			.map_err(|_| WrappoError::DeliveryPanicked),
	}
}

fn spawn_delivery_thread<F>(delivery: F) -> Result<thread::JoinHandle<()>>
where
	F: Future<Output = ()> + Send + 'static,
{
	let handle = thread::Builder::new()
		.name(DELIVERY_THREAD_NAME.to_string())
		.spawn(move || match Builder::new_current_thread().enable_all().build() {
			Ok(runtime) => runtime.block_on(delivery),
			Err(e) => warn!(error = %e, "Failed to start delivery runtime"),
		})?;
	Ok(handle)
}
