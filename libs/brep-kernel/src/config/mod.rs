//! Kernel-level configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so modeling components can
//! stay decoupled from literal constants.

use ::config::constants::{ConfigError, GlobalConfig, AXIS_TOLERANCE, DEFAULT_POINT_SIZE};

/// Modeling kernel configuration.
///
/// # Examples
/// ```
/// use brep_kernel::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert_eq!(cfg.default_point_size, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Mesh size attached to points created without an explicit size.
    pub default_point_size: f64,
    /// Tolerance used by the axis alignment predicates.
    pub axis_tolerance: f64,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use brep_kernel::config::KernelConfig;
    /// let cfg = KernelConfig::new(0.5, 1.0e-8).unwrap();
    /// assert_eq!(cfg.default_point_size, 0.5);
    /// assert!(KernelConfig::new(-1.0, 1.0e-8).is_err());
    /// ```
    pub fn new(default_point_size: f64, axis_tolerance: f64) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(default_point_size, axis_tolerance)
            .map(Self::from)
            .map_err(KernelConfigError)
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            default_point_size: cfg.default_point_size,
            axis_tolerance: cfg.axis_tolerance,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_point_size: DEFAULT_POINT_SIZE,
            axis_tolerance: AXIS_TOLERANCE,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq)]
pub struct KernelConfigError(ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}

#[cfg(test)]
mod tests;
