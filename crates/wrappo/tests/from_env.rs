// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reads process environment variables, so this binary holds a single test.

use std::env;

use wrappo::{ErrorInterceptorBuilder, Locale, API_KEY_ENV, LOCALE_ENV};

fn from_env() -> wrappo::ErrorInterceptor {
	ErrorInterceptorBuilder::from_env().build().unwrap()
}

#[test]
fn test_builder_reads_key_and_locale_from_env() {
	env::remove_var(API_KEY_ENV);
	env::remove_var(LOCALE_ENV);
	let wrappo = from_env();
	assert!(!wrappo.has_api_key());
	assert_eq!(wrappo.locale(), Locale::PtBr);

	env::set_var(API_KEY_ENV, "");
	assert!(!from_env().has_api_key());

	env::set_var(API_KEY_ENV, "wk_live");
	assert!(from_env().has_api_key());

	env::set_var(LOCALE_ENV, "en_US");
	assert_eq!(from_env().locale(), Locale::En);

	env::set_var(LOCALE_ENV, "pt_BR");
	assert_eq!(from_env().locale(), Locale::PtBr);

	env::set_var(LOCALE_ENV, "klingon");
	assert_eq!(from_env().locale(), Locale::PtBr);
}
