//! Utilities: leveled logging to stderr, kept separate from command output
//! so `--output json|yaml` stays machine readable.
//!
//! Key items:
//!   init_logging / derive_level
//!   log_error! / log_info! / log_debug! / log_trace!

/// Logging helpers.
pub mod logging {
    use std::fmt;
    use std::sync::atomic::{AtomicU8, Ordering};

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
    pub enum LogLevel {
        Error = 0,
        Info = 1,
        Debug = 2,
        Trace = 3,
    }

    impl LogLevel {
        pub fn as_str(&self) -> &'static str {
            match self {
                LogLevel::Error => "ERROR",
                LogLevel::Info => "INFO",
                LogLevel::Debug => "DEBUG",
                LogLevel::Trace => "TRACE",
            }
        }

        fn from_u8(raw: u8) -> LogLevel {
            match raw {
                0 => LogLevel::Error,
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            }
        }
    }

    static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

    pub fn init_logging(level: LogLevel) {
        LEVEL.store(level as u8, Ordering::Relaxed);
    }

    /// `-q` wins over any number of `-v`.
    pub fn derive_level(verbose: u8, quiet: bool) -> LogLevel {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    fn enabled(level: LogLevel, threshold: LogLevel) -> bool {
        level <= threshold
    }

    fn line(level: LogLevel, args: fmt::Arguments<'_>) -> String {
        format!("flag-decode [{}] {args}", level.as_str())
    }

    /// Entry point for the `log_*!` macros. Formatting is skipped entirely
    /// when the level is filtered out.
    pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
        if enabled(level, LogLevel::from_u8(LEVEL.load(Ordering::Relaxed))) {
            eprintln!("{}", line(level, args));
        }
    }

    #[macro_export]
    macro_rules! log_error {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Error, format_args!($($t)*))
        };
    }
    #[macro_export]
    macro_rules! log_info {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Info, format_args!($($t)*))
        };
    }
    #[macro_export]
    macro_rules! log_debug {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Debug, format_args!($($t)*))
        };
    }
    #[macro_export]
    macro_rules! log_trace {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Trace, format_args!($($t)*))
        };
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn quiet_overrides_verbose() {
            assert_eq!(derive_level(2, true), LogLevel::Error);
        }

        #[test]
        fn verbosity_steps() {
            assert_eq!(derive_level(0, false), LogLevel::Info);
            assert_eq!(derive_level(1, false), LogLevel::Debug);
            assert_eq!(derive_level(5, false), LogLevel::Trace);
        }

        #[test]
        fn threshold_filters_noisier_levels() {
            assert!(enabled(LogLevel::Error, LogLevel::Error));
            assert!(!enabled(LogLevel::Info, LogLevel::Error));
            assert!(enabled(LogLevel::Debug, LogLevel::Trace));
            assert!(!enabled(LogLevel::Trace, LogLevel::Debug));
        }

        #[test]
        fn stored_level_round_trips() {
            for level in [LogLevel::Error, LogLevel::Info, LogLevel::Debug, LogLevel::Trace] {
                assert_eq!(LogLevel::from_u8(level as u8), level);
            }
            assert_eq!(LogLevel::from_u8(200), LogLevel::Trace);
        }

        #[test]
        fn line_carries_program_and_level() {
            let flag = "ids";
            assert_eq!(
                line(LogLevel::Debug, format_args!("flag '{flag}' as list")),
                "flag-decode [DEBUG] flag 'ids' as list"
            );
        }
    }
}

pub use logging::{derive_level, init_logging};
