// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tracing subscriber setup for the relayer and its tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directives, `RUST_LOG` syntax. Falls back to `info`.
    pub log_string: Option<String>,
    /// Emit one JSON object per event instead of human-readable lines
    pub json_log_output: bool,
    pub enable_ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryConfig {
    pub fn new() -> Self {
        Self {
            log_string: None,
            json_log_output: false,
            enable_ansi: true,
        }
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_string = Some(level.to_owned());
        self
    }

    pub fn with_json(mut self) -> Self {
        self.json_log_output = true;
        self
    }

    /// Reads `RUST_LOG`, `RUST_LOG_JSON` and `NO_COLOR` on top of the
    /// current settings.
    pub fn with_env(mut self) -> Self {
        if let Ok(filter) = std::env::var("RUST_LOG") {
            self.log_string = Some(filter);
        }
        if std::env::var("RUST_LOG_JSON").is_ok() {
            self.json_log_output = true;
        }
        if std::env::var("NO_COLOR").is_ok() {
            self.enable_ansi = false;
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let directives = self.log_string.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .parse_lossy(directives)
    }

    /// Installs the global subscriber. Fails if one is already installed.
    pub fn init(self) -> Result<(), TryInitError> {
        let filter = self.env_filter();
        if self.json_log_output {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_filter(filter))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(self.enable_ansi).with_filter(filter))
                .try_init()
        }
    }
}

/// Routes logs through the test harness writer. Safe to call from every test.
pub fn init_for_testing() {
    static LOGGER: OnceCell<()> = OnceCell::new();

    LOGGER.get_or_init(|| {
        let filter = TelemetryConfig::new()
            .with_log_level("debug")
            .with_env()
            .env_filter();
        // Another harness may have installed a subscriber already
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().with_filter(filter))
            .try_init();
    });
}
