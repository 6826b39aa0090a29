use core::fmt;

/// Minimal error set for core-domain validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// A required input field is empty or whitespace-only.
    MissingField(&'static str),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::MissingField(name) => write!(f, "missing required field: {name}"),
        }
    }
}

impl std::error::Error for CoreError {}
