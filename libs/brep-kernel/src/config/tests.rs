use super::*;

#[test]
fn default_matches_workspace_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.default_point_size, DEFAULT_POINT_SIZE);
    assert_eq!(cfg.axis_tolerance, AXIS_TOLERANCE);
}

#[test]
fn new_forwards_validation() {
    let err = KernelConfig::new(0.0, 1.0e-6).unwrap_err();
    assert_eq!(err, KernelConfigError(ConfigError::InvalidPointSize(0.0)));
    assert!(err.to_string().contains("default_point_size"));
}

#[test]
fn from_global_config() {
    let global = GlobalConfig::new(2.0, 1.0e-4).unwrap();
    let cfg = KernelConfig::from(global);
    assert_eq!(cfg.default_point_size, 2.0);
    assert_eq!(cfg.axis_tolerance, 1.0e-4);
}
