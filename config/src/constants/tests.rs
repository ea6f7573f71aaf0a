//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.default_point_size > 0.0);
    assert!(cfg.axis_tolerance > 0.0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 1.0e-6).unwrap_err(),
        ConfigError::InvalidPointSize(0.0)
    );
    assert_eq!(
        GlobalConfig::new(0.1, -1.0).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0)
    );
}

#[test]
fn new_rejects_nan() {
    assert!(GlobalConfig::new(f64::NAN, 1.0e-6).is_err());
    assert!(GlobalConfig::new(0.1, f64::NAN).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let msg = ConfigError::InvalidPointSize(-2.0).to_string();
    assert!(msg.contains("default_point_size"));
    let msg = ConfigError::InvalidTolerance(0.0).to_string();
    assert!(msg.contains("axis_tolerance"));
}
