//! Error Extension Tests

use agenda_domain::error::Error;
use agenda_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let err = io_failure().context("Failed to read config").unwrap_err();

    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Failed to read config: missing file");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let mut called = false;
    let ok: Result<u32, io::Error> = Ok(7);

    let value = ok
        .with_context(|| {
            called = true;
            "never built"
        })
        .unwrap();

    assert_eq!(value, 7);
    assert!(!called);
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let err = io_failure()
        .config_context("Failed to load agenda.toml")
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Failed to load agenda.toml"));
}
