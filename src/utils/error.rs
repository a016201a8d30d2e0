use thiserror::Error;

/// Failures of the code primitives. Encoding never fails; decoding does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Index {index} is not an index of the alphabet (0..={max})")]
    InvalidIndex { index: usize, max: usize },

    #[error("Malformed code: {message}")]
    MalformedCode { message: String },

    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    #[error("Invalid circle id '{value}': expected exactly 2 digits")]
    InvalidCircleId { value: String },
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum HamedError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Incorrect {field} '{value}': {reason}")]
    InputError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HamedError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HamedError::Codec(CodecError::MalformedCode { .. })
            | HamedError::Codec(CodecError::InvalidDate { .. }) => {
                format!("ERROR. Invalid RequestCode: {}", self)
            }
            HamedError::Codec(e) => format!("ERROR. {}", e),
            HamedError::IoError(e) => format!("ERROR. Could not talk to the terminal: {}", e),
            HamedError::SerializationError(e) => format!("ERROR. Could not write report: {}", e),
            HamedError::ConfigError { .. }
            | HamedError::ConfigValidationError { .. }
            | HamedError::InvalidConfigValueError { .. } => {
                format!("ERROR. Bad configuration: {}", self)
            }
            HamedError::InputError { .. } => format!("ERROR. {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HamedError::Codec(CodecError::InvalidCircleId { .. }) => {
                "A circle id is made of exactly two digits, e.g. 07"
            }
            HamedError::Codec(_) => "Check the code was typed completely (9 characters)",
            HamedError::IoError(_) => "Make sure standard input and output are available",
            HamedError::SerializationError(_) => "Run again without --json",
            HamedError::ConfigError { .. }
            | HamedError::ConfigValidationError { .. }
            | HamedError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or remove the --config option"
            }
            HamedError::InputError { .. } => "Run the action again with a corrected value",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            HamedError::IoError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HamedError>;
