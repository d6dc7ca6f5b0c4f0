use thiserror::Error;

/// Crate-wide result type for fallible construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors reported before any simulation state exists.
///
/// Once a simulation has been constructed, stepping and rendering are
/// infallible; every invalid combination of parameters is rejected here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimension {0} is too small (need at least 3 cells per axis)")]
    GridTooSmall(usize),

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f32),

    #[error("{name} must be non-negative, got {value}")]
    NegativeRate { name: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f32 },

    #[error(
        "Courant condition violated: dt * wave_speed = {0} must be below grid_spacing = {1}"
    )]
    CourantViolation(f32, f32),

    #[error("screen dimension must be positive")]
    EmptyScreen,
}
