//! Password assembly: character classes, validation and generation.

pub mod charset;
mod config;
mod error;
mod generate;
mod password;
pub mod strength;

pub use charset::{CharacterClass, ClassSet, Pool};
pub use config::{GenerationConfig, parse_length};
pub use error::{
    ErrorKind, LengthError, MAX_LENGTH, MIN_DIVERSITY, STRONG_LENGTH, ValidationError, Warning,
};
pub use generate::generate;
pub use password::{Generation, Password};
