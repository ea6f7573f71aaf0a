//! Centralized configuration values shared by the modeling kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that the kernel can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// DISCRETIZATION CONSTANTS
// =============================================================================

/// Target mesh size attached to points created without an explicit size.
///
/// The mesher reads this value as the characteristic length near the point.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_POINT_SIZE;
/// assert_eq!(DEFAULT_POINT_SIZE, 0.1);
/// ```
pub const DEFAULT_POINT_SIZE: f64 = 0.1;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for axis alignment predicates (parallel / perpendicular).
///
/// Compared against `1 - |cos θ|` for parallel checks and `|cos θ|` for
/// perpendicular checks between normalized directions.
///
/// # Examples
/// ```
/// use config::constants::AXIS_TOLERANCE;
/// assert!(AXIS_TOLERANCE < 1.0e-3);
/// ```
pub const AXIS_TOLERANCE: f64 = 1.0e-6;

/// Minimum vector length considered non-degenerate when estimating a plane
/// normal from its boundary points.
///
/// # Examples
/// ```
/// use config::constants::PLANE_NORMAL_EPSILON;
/// assert!(PLANE_NORMAL_EPSILON > 0.0);
/// ```
pub const PLANE_NORMAL_EPSILON: f64 = 1.0e-10;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Number of decimals written for every floating-point value in the textual
/// export formats.
///
/// # Examples
/// ```
/// use config::constants::EXPORT_PRECISION;
/// assert_eq!(format!("{:.*}", EXPORT_PRECISION, 0.5), "0.500000");
/// ```
pub const EXPORT_PRECISION: usize = 6;

/// Immutable snapshot of kernel-wide settings.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.default_point_size > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Mesh size given to points created without an explicit size.
    pub default_point_size: f64,
    /// Tolerance forwarded into axis alignment predicates.
    pub axis_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// point size and tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.25, 1.0e-8).expect("valid config");
    /// assert_eq!(cfg.default_point_size, 0.25);
    /// ```
    pub fn new(default_point_size: f64, axis_tolerance: f64) -> Result<Self, ConfigError> {
        if !(default_point_size > 0.0) {
            return Err(ConfigError::InvalidPointSize(default_point_size));
        }
        if !(axis_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(axis_tolerance));
        }
        Ok(Self {
            default_point_size,
            axis_tolerance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_point_size: DEFAULT_POINT_SIZE,
            axis_tolerance: AXIS_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the default point size is zero, negative or NaN.
    InvalidPointSize(f64),
    /// Raised when the tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPointSize(value) => {
                write!(f, "default_point_size must be positive: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "axis_tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
