//! Formatting macros

/// Build a traced [`Message`](crate::Message) error from a format string
///
/// ```
/// let err = tracewrap::newf!("value {} invalid", 7);
/// assert_eq!(err.describe(), "value 7 invalid");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::new_formatted(::core::format_args!($($arg)*))
    };
}

/// Wrap an `Option` of an error with a formatted annotation
///
/// `None` stays `None` and nothing is formatted.
///
/// ```
/// let cause = std::io::Error::other("disk full");
/// let err = tracewrap::wrapf!(Some(cause), "step {} failed", 3);
/// assert_eq!(err.map(|e| e.describe()).as_deref(), Some("step 3 failed: disk full"));
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap_formatted($err, ::core::format_args!($($arg)*))
    };
}
