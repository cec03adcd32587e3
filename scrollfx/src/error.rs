use alloc::string::String;

/// Errors raised while building or validating animation configuration.
///
/// Runtime operations (scrolling, ticking) never fail; only declarative configuration does.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("range mapping needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("range mapping has {input} input stops but {output} output stops")]
    MismatchedStops { input: usize, output: usize },
    #[error("input stop {index} ({value}) is outside [0, 1]")]
    InputOutOfRange { index: usize, value: f32 },
    #[error("input stops must be non-decreasing (stop {index} is {value}, previous is {previous})")]
    NonMonotonicInput {
        index: usize,
        value: f32,
        previous: f32,
    },
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
    #[error("invalid spring parameter `{name}`: {value}")]
    InvalidSpring { name: &'static str, value: f32 },
    #[error("invalid scroll offset `{0}`")]
    InvalidOffset(String),
    #[error("unknown toggle action `{0}`")]
    UnknownToggleAction(String),
    #[error("toggle actions need exactly four entries, got {0}")]
    ToggleActionCount(usize),
    #[error("keyframes need at least two values, got {0}")]
    TooFewKeyframes(usize),
}
