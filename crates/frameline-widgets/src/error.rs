#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! Rendering itself never fails; only parsing names into border
//! configuration values can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BorderError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorderError {
    #[error("unknown border preset: {name}")]
    UnknownPreset { name: String },

    #[error("unknown border side: {name}")]
    UnknownSide { name: String },

    #[error("unknown alignment: {name}")]
    UnknownAlignment { name: String },
}

impl BorderError {
    #[must_use]
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    #[must_use]
    pub fn unknown_side(name: impl Into<String>) -> Self {
        Self::UnknownSide { name: name.into() }
    }

    #[must_use]
    pub fn unknown_alignment(name: impl Into<String>) -> Self {
        Self::UnknownAlignment { name: name.into() }
    }
}
