use std::fmt;

#[derive(Debug)]
pub enum ViewError {
    /// Tile string or mjai token could not be parsed.
    Parse { input: String, message: String },
    /// A meld could not be built from the given event or parent meld.
    InvalidMeld { message: String },
    /// JSON input (events, snapshots, config) failed to decode.
    Serialization { message: String },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Parse { input, message } => {
                write!(f, "Parse error on '{}': {}", input, message)
            }
            ViewError::InvalidMeld { message } => {
                write!(f, "Invalid meld: {}", message)
            }
            ViewError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ViewError {}

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type ViewResult<T> = Result<T, ViewError>;
