//! Generation request.

use super::charset::{ClassSet, Pool};
use super::error::{
    LengthError, MAX_LENGTH, MIN_DIVERSITY, STRONG_LENGTH, ValidationError, Warning,
};

/// Immutable description of one password to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
    pub unique: bool,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet, unique: bool) -> Self {
        Self {
            length,
            classes,
            unique,
        }
    }

    /// Build a config from raw length text as typed by a user.
    pub fn parse(length: &str, classes: ClassSet, unique: bool) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_length(length)?, classes, unique))
    }

    /// Check the request without drawing randomness.
    ///
    /// Checks run in a fixed order so the same invalid config always
    /// reports the same error. Warnings are only returned for valid configs.
    pub fn validate(&self) -> Result<Vec<Warning>, ValidationError> {
        if self.length == 0 {
            return Err(LengthError::NotPositive.into());
        }
        if self.length > MAX_LENGTH {
            return Err(LengthError::TooLong { max: MAX_LENGTH }.into());
        }
        if self.classes.is_empty() {
            return Err(ValidationError::NoCharacterClassSelected);
        }
        if self.length < self.classes.len() {
            return Err(LengthError::ShorterThanClasses {
                length: self.length,
                classes: self.classes.len(),
            }
            .into());
        }
        if self.unique {
            let available = Pool::build(&self.classes).distinct_len();
            if self.length > available {
                return Err(ValidationError::PoolTooSmall {
                    available,
                    requested: self.length,
                });
            }
        }

        let mut warnings = Vec::new();
        if self.length < STRONG_LENGTH {
            warnings.push(Warning::WeakLength);
        }
        if self.classes.len() < MIN_DIVERSITY {
            warnings.push(Warning::LowDiversity);
        }
        Ok(warnings)
    }
}

/// Parse a length as typed by a user. Zero, negative and oversized values
/// are rejected here as well as anything that is not an integer.
pub fn parse_length(s: &str) -> Result<usize, LengthError> {
    let s = s.trim();
    match s.parse::<usize>() {
        Ok(0) => Err(LengthError::NotPositive),
        Ok(n) if n > MAX_LENGTH => Err(LengthError::TooLong { max: MAX_LENGTH }),
        Ok(n) => Ok(n),
        Err(_) if s.strip_prefix('-').is_some_and(is_integer) => Err(LengthError::NotPositive),
        // Digits only, but past usize::MAX.
        Err(_) if is_integer(s.strip_prefix('+').unwrap_or(s)) => {
            Err(LengthError::TooLong { max: MAX_LENGTH })
        }
        Err(_) => Err(LengthError::NotANumber(s.to_string())),
    }
}

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
