//! Centralized, category-keyed logging configuration.
//!
//! This core is a library: it must not assume a global logger is installed,
//! so every actual log line goes through the `log` facade (`log::debug!`,
//! `log::warn!`, ...) and a caller's chosen backend decides what happens to
//! it. [`LogConfig`] exists on top of that for call sites that want to gate
//! expensive message construction (e.g. pretty-printing a whole `Game`) on
//! whether anyone would see it, without depending on `log::log_enabled!`
//! picking the right target string.
//!
//! # Categories
//!
//! - **Build**: `GameBuilder` construction and DSL-time range checks.
//! - **Validate**: one entry per diagnostic the validator raises.
//! - **Codegen**: emission-layer boundaries in `generate()`.
//! - **Interp**: the IR interpreter test harness.
//! - **Services**: the asset/sprite/variable/entity registries.

use std::sync::atomic::{AtomicU8, Ordering};

/// Log level for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Parse log level from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "err" | "1" => Some(LogLevel::Error),
            "warn" | "warning" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    fn from_u8(val: u8) -> Self {
        match val {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Off,
        }
    }
}

/// Log category for the core's pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Build,
    Validate,
    Codegen,
    Interp,
    Services,
}

/// Global, atomic, per-category logging configuration.
pub struct LogConfig {
    global_level: AtomicU8,
    build_level: AtomicU8,
    validate_level: AtomicU8,
    codegen_level: AtomicU8,
    interp_level: AtomicU8,
    services_level: AtomicU8,
}

impl LogConfig {
    const fn new() -> Self {
        Self {
            global_level: AtomicU8::new(LogLevel::Off as u8),
            build_level: AtomicU8::new(LogLevel::Off as u8),
            validate_level: AtomicU8::new(LogLevel::Off as u8),
            codegen_level: AtomicU8::new(LogLevel::Off as u8),
            interp_level: AtomicU8::new(LogLevel::Off as u8),
            services_level: AtomicU8::new(LogLevel::Off as u8),
        }
    }

    pub fn global() -> &'static Self {
        static INSTANCE: LogConfig = LogConfig::new();
        &INSTANCE
    }

    pub fn set_global_level(&self, level: LogLevel) {
        self.global_level.store(level.to_u8(), Ordering::Relaxed);
    }

    pub fn get_global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Relaxed))
    }

    fn slot(&self, category: LogCategory) -> &AtomicU8 {
        match category {
            LogCategory::Build => &self.build_level,
            LogCategory::Validate => &self.validate_level,
            LogCategory::Codegen => &self.codegen_level,
            LogCategory::Interp => &self.interp_level,
            LogCategory::Services => &self.services_level,
        }
    }

    pub fn set_level(&self, category: LogCategory, level: LogLevel) {
        self.slot(category).store(level.to_u8(), Ordering::Relaxed);
    }

    pub fn get_level(&self, category: LogCategory) -> LogLevel {
        LogLevel::from_u8(self.slot(category).load(Ordering::Relaxed))
    }

    /// True if a message at `level` for `category` should be logged: a
    /// category-specific level if one is set, otherwise the global level.
    pub fn should_log(&self, category: LogCategory, level: LogLevel) -> bool {
        let category_level = self.get_level(category);
        if category_level != LogLevel::Off {
            level <= category_level
        } else {
            level <= self.get_global_level()
        }
    }

    pub fn reset(&self) {
        self.set_global_level(LogLevel::Off);
        for category in [
            LogCategory::Build,
            LogCategory::Validate,
            LogCategory::Codegen,
            LogCategory::Interp,
            LogCategory::Services,
        ] {
            self.set_level(category, LogLevel::Off);
        }
    }
}
