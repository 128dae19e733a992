//! Unit tests for domain error types

use agenda_domain::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Invalid input provided");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Invalid input provided"),
        _ => panic!("Expected InvalidArgument error"),
    }
}


#[test]
fn test_connection_error() {
    let error = Error::connection("refused");
    assert!(error.is_connection());
    assert_eq!(error.to_string(), "Connection error: refused");

    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "nope");
    let error = Error::connection_with_source("dial failed", io);
    assert!(error.is_connection());
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_cache_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error = Error::cache_with_source("Cache operation failed", io);
    assert!(!error.is_connection());
    assert_eq!(error.to_string(), "Cache error: Cache operation failed");
    match error {
        Error::Cache { message, source } => {
            assert_eq!(message, "Cache operation failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Cache error"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
    assert!(error.to_string().starts_with("JSON parsing error"));
}
