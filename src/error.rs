use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    #[error("Range bounds error: lower bound {lower} exceeds upper bound {upper}")]
    Bounds { lower: String, upper: String },
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),
    #[error("Type error: {0}")]
    Type(String),
    #[error("Unsupported operand: {0}")]
    Unsupported(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl IntervalError {
    /// True when the operation was not attempted because the operand could
    /// not be turned into a compatible interval. Callers may try another
    /// route (a reflected operator, a different domain) instead of failing.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;

// Helper conversions
impl From<config::ConfigError> for IntervalError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
