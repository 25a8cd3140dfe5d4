//! Generator configuration

use std::fmt;
use std::time::Duration;

/// Default grid side length
pub const DEFAULT_SIZE: usize = 8;

/// Default distance between scheduled anchors
pub const DEFAULT_STRIDE: usize = 2;

/// Largest accepted grid side length
pub const MAX_SIZE: usize = 256;

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize(usize),
    InvalidStride(usize),
    InvalidRuns(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => {
                write!(f, "Grid size must be between 1 and {MAX_SIZE}, got {size}")
            }
            Self::InvalidStride(stride) => {
                write!(f, "Anchor stride must be positive, got {stride}")
            }
            Self::InvalidRuns(runs) => write!(f, "Number of runs must be positive, got {runs}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one generation loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Side length of the grid
    pub size: usize,
    /// Step between scheduled anchors along the top row and left column
    pub stride: usize,
    /// Evaluate candidates of a span in parallel
    pub parallel: bool,
    /// Stop between steps once this much time has passed
    pub time_limit: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stride: DEFAULT_STRIDE,
            parallel: false,
            time_limit: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with the given size and stride
    #[must_use]
    pub const fn new(size: usize, stride: usize) -> Self {
        Self {
            size,
            stride,
            parallel: false,
            time_limit: None,
        }
    }

    /// Check that size and stride are usable
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero or the size exceeds
    /// [`MAX_SIZE`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.stride == 0 {
            return Err(ConfigError::InvalidStride(self.stride));
        }
        Ok(())
    }
}
