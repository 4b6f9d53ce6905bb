// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Wrappo error-capture shim.
//!
//! This crate holds everything that does not touch the process: the
//! [`ErrorDetails`] value built for every captured event, stack filtering and
//! location parsing, the fix-suggestion heuristic, the JSON payload shipped to
//! the log endpoint and the locale catalogs used for user-facing text. The
//! `wrappo` crate wires these into sinks, hooks and HTTP delivery.

pub mod api_key;
pub mod details;
pub mod error;
pub mod locale;
pub mod payload;
pub mod severity;
pub mod stack;
pub mod suggestion;

pub use api_key::ApiKey;
pub use details::{ErrorDetails, Exception, NOT_AVAILABLE, UNKNOWN_TYPE};
pub use error::{CoreError, Result};
pub use locale::{resolve_locale, Locale, Messages, DEFAULT_LOCALE};
pub use payload::LogPayload;
pub use severity::Severity;
pub use stack::{render_stack, Frame, SourceLocation, DEPENDENCY_MARKER, INTERNAL_MARKER};
pub use suggestion::{suggest_fix, FixHint};
