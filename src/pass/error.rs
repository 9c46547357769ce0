//! Validation failures and advisory warnings.

use std::fmt;

use thiserror::Error;

/// Length below which a password is reported as weak.
pub const STRONG_LENGTH: usize = 12;

/// Longest password a request may ask for.
pub const MAX_LENGTH: usize = 1_000_000;

/// Number of enabled classes below which diversity is reported as low.
pub const MIN_DIVERSITY: usize = 3;

/// Why a generation request was rejected. No password is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid length: {0}")]
    InvalidLength(#[from] LengthError),

    #[error("select at least one character type")]
    NoCharacterClassSelected,

    #[error(
        "pool only has {available} unique characters, {requested} requested. \
         Decrease length or disable unique"
    )]
    PoolTooSmall { available: usize, requested: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("must be a positive integer")]
    NotPositive,

    #[error("must be at most {max}")]
    TooLong { max: usize },

    #[error("{length} is shorter than the {classes} selected character types")]
    ShorterThanClasses { length: usize, classes: usize },
}

/// Category of a [`ValidationError`], without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidLength,
    NoCharacterClassSelected,
    PoolTooSmall,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidLength(_) => ErrorKind::InvalidLength,
            ValidationError::NoCharacterClassSelected => ErrorKind::NoCharacterClassSelected,
            ValidationError::PoolTooSmall { .. } => ErrorKind::PoolTooSmall,
        }
    }
}

/// Non-fatal advice that accompanies a successful generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    WeakLength,
    LowDiversity,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::WeakLength => write!(
                f,
                "Weak password: length should be at least {STRONG_LENGTH} for a strong rating."
            ),
            Warning::LowDiversity => write!(
                f,
                "Low diversity: select at least {MIN_DIVERSITY} character types for better security."
            ),
        }
    }
}
