//! Set-once configuration of the default tracer
//!
//! Kept in its own test binary: the default tracer is process-wide.

use tracewrap::{ConfigError, TraceConfig, TracedError, Tracer};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("deep")]
struct Deep;

#[inline(never)]
fn nested(remaining: usize) -> TracedError<Deep> {
    if remaining == 0 {
        return TracedError::new(Deep);
    }
    std::hint::black_box(nested(remaining - 1))
}

#[test]
fn test_configure_once_then_frozen() {
    tracewrap::logging::init_test();

    // Rejected settings leave the default tracer unset
    assert_eq!(
        tracewrap::configure_max_depth(0),
        Err(ConfigError::InvalidDepth)
    );

    assert_eq!(tracewrap::configure_max_depth(4), Ok(()));
    assert_eq!(Tracer::global().max_depth(), 4);

    assert_eq!(
        tracewrap::configure(TraceConfig::with_max_depth(64)),
        Err(ConfigError::AlreadyConfigured { max_depth: 4 })
    );
    assert_eq!(Tracer::global().max_depth(), 4);

    let err = nested(20);
    assert_eq!(err.stack().len(), 4);
    assert!(err.frames().iter().all(|frame| frame.function.contains("nested")));

    let err = tracewrap::newf!("formatted {}", "too");
    assert!(err.stack().len() <= 4);
}
