// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Arguments passed to a logging sink or a hook.

use std::fmt;

use wrappo_core::{render_stack, Exception};

use crate::backtrace::capture_frames;

/// One loggable argument.
///
/// Only the first argument of a sink call is inspected for diagnostics; the
/// whole list is forwarded untouched to the original sink.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
	/// An exception-like value carrying its own name and stack.
	Exception(Exception),
	/// Free text.
	Text(String),
	/// Any other displayable value (numbers, booleans, ...).
	Value(String),
	/// No value at all.
	Empty,
}

impl LogArg {
	/// Capture a Rust error as an exception, with a stack taken at the call site.
	pub fn error<E>(error: &E) -> Self
	where
		E: std::error::Error + ?Sized,
	{
		let name = short_type_name(std::any::type_name::<E>());
		let message = error.to_string();
		let stack = render_stack(name, &message, &capture_frames());
		LogArg::Exception(Exception::new(name, message).with_stack(stack))
	}
}

impl fmt::Display for LogArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LogArg::Exception(exception) => match &exception.stack {
				Some(stack) => f.write_str(stack),
				None => write!(f, "{}: {}", exception.name, exception.message),
			},
			LogArg::Text(text) | LogArg::Value(text) => f.write_str(text),
			LogArg::Empty => f.write_str("()"),
		}
	}
}

impl From<&str> for LogArg {
	fn from(text: &str) -> Self {
		LogArg::Text(text.to_string())
	}
}

impl From<String> for LogArg {
	fn from(text: String) -> Self {
		LogArg::Text(text)
	}
}

impl From<Exception> for LogArg {
	fn from(exception: Exception) -> Self {
		LogArg::Exception(exception)
	}
}

impl From<()> for LogArg {
	fn from(_: ()) -> Self {
		LogArg::Empty
	}
}

macro_rules! impl_from_value {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for LogArg {
				fn from(value: $ty) -> Self {
					LogArg::Value(value.to_string())
				}
			}
		)*
	};
}

impl_from_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

/// `std::io::error::Error` -> `Error`, `my_app::Wrapper<T>` -> `Wrapper`,
/// `dyn core::error::Error + Send` -> `Error`.
pub(crate) fn short_type_name(full: &str) -> &str {
	let name = full.trim_start_matches('&').trim_start_matches("dyn ");
	let name = name.split(['<', ' ']).next().unwrap_or(name);
	name.rsplit("::").next().unwrap_or(name)
}
