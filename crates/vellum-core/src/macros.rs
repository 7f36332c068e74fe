//! Call-site convenience macros.
//!
//! The macros capture `file!()` and `line!()` so the location field shows
//! where the message came from without the caller spelling it out. They
//! expand to plain [`Logger::log_at`](crate::Logger::log_at) calls and work
//! on anything that derefs to a `Logger` (`&Logger`, `Arc<Logger>`).

/// Log at an arbitrary numeric level, capturing the call site.
///
/// # Example
///
/// ```
/// use vellum_core::{vlog, Logger};
/// use vellum_types::WARNING;
///
/// let logger = Logger::new("app", 0, '|');
/// logger.toggle_color(false);
/// vlog!(logger, WARNING, "disk at {}%", 93);
/// ```
#[macro_export]
macro_rules! vlog {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, file!(), line!(), format_args!($($arg)+))
    };
}

/// Log at the seeded DEBUG level, capturing the call site.
#[macro_export]
macro_rules! vdebug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::vlog!($logger, $crate::DEBUG, $($arg)+)
    };
}

/// Log at the seeded INFO level, capturing the call site.
#[macro_export]
macro_rules! vinfo {
    ($logger:expr, $($arg:tt)+) => {
        $crate::vlog!($logger, $crate::INFO, $($arg)+)
    };
}

/// Log at the seeded WARNING level, capturing the call site.
#[macro_export]
macro_rules! vwarning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::vlog!($logger, $crate::WARNING, $($arg)+)
    };
}

/// Log at the seeded ERROR level, capturing the call site.
#[macro_export]
macro_rules! verror {
    ($logger:expr, $($arg:tt)+) => {
        $crate::vlog!($logger, $crate::ERROR, $($arg)+)
    };
}

/// Log at the seeded CRITICAL level, capturing the call site.
#[macro_export]
macro_rules! vcritical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::vlog!($logger, $crate::CRITICAL, $($arg)+)
    };
}
