// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::fmt::Arguments;
use std::io::{Result, Stderr, Write};

/// Log levels, ordered by increasing verbosity.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Level {
    /// Designates serious failures.
    Error,
    /// Designates hazardous situations.
    Warning,
    /// Designates useful information.
    Info,
    /// Designates lower priority information for debugging.
    Debug,
}

/// Logger that writes messages up to the configured level to `out`.
pub struct Logger<W: Write> {
    level: Level,
    out: W,
}

impl<W: Write> Logger<W> {
    pub fn new(level: Level, out: W) -> Self {
        Self { level, out }
    }

    pub fn log(&mut self, level: Level, args: Arguments) -> Result<()> {
        if level <= self.level {
            writeln!(self.out, "{args}")?;
        }
        Ok(())
    }
}

impl Logger<Stderr> {
    pub fn new_stderr(level: Level) -> Self {
        Self::new(level, std::io::stderr())
    }
}

impl Logger<Vec<u8>> {
    /// Logger that collects the messages in memory, for tests.
    pub fn new_vec(level: Level) -> Self {
        Self::new(level, Vec::new())
    }

    pub fn get_logs(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logger::Level::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_respects_level() {
        let mut logger = Logger::new_vec(Level::Info);
        info!(logger, "kept").unwrap();
        debug!(logger, "dropped").unwrap();
        assert_eq!(logger.get_logs(), "kept\n");
    }

    #[test]
    fn test_logger_debug_keeps_everything() {
        let mut logger = Logger::new_vec(Level::Debug);
        warning!(logger, "w").unwrap();
        info!(logger, "i").unwrap();
        debug!(logger, "d").unwrap();
        assert_eq!(logger.get_logs(), "w\ni\nd\n");
    }

    #[test]
    fn test_logger_formats_arguments() {
        let mut logger = Logger::new_vec(Level::Warning);
        warning!(logger, "mode {:o} for '{}'", 0o644, "file").unwrap();
        assert_eq!(logger.get_logs(), "mode 644 for 'file'\n");
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Info);
        assert!(Level::Info < Level::Debug);
    }
}
