use thiserror::Error;

use crate::unit::Unit;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Points are in different units. first: {first}, second: {second}")]
    UnitMismatch { first: Unit, second: Unit },

    #[error("Min zoom '{min}' can not be larger than max zoom '{max}'")]
    InvalidRange { min: u8, max: u8 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Property not found: {0}")]
    MissingProperty(String),

    #[error("Invalid value '{value}' for property: {key}")]
    InvalidProperty { key: String, value: String },

    #[error("Unknown grid id: {0}")]
    UnknownGrid(usize),

    #[error("Grid key registered twice: {0}")]
    DuplicateKey(String),
}

impl GridError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        GridError::InvalidArgument(message.into())
    }
}
