// ABOUTME: Logging configuration and structured logging setup for the engine
// ABOUTME: Configures tracing-subscriber with env-filter and pluggable output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Structured logging setup built on `tracing-subscriber`.
//!
//! Library code only emits `tracing` events; binaries (and embedding services)
//! call [`init_logging`] once at startup. The filter honors `RUST_LOG` and
//! falls back to the configured default level.

use crate::errors::{AppError, AppResult};
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output for development
    Pretty,
    /// Single-line output for terminals and CI
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Build a config from the environment (`LOG_LEVEL`, `LOG_FORMAT`)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => defaults.format,
        };
        Self {
            level: env::var("LOG_LEVEL").unwrap_or(defaults.level),
            format,
            include_location: defaults.include_location,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns `InternalError` if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| AppError::internal(format!("failed to install tracing subscriber: {e}")))
}
