//! Persisted default options.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::{ClassSet, GenerationConfig};
use crate::rand::EntropySource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub unique: bool,
    pub source: EntropySource,
}

impl Settings {
    /// Default settings location, `$HOME/.config/passforge/settings`.
    pub fn path() -> PathBuf {
        file::get_path()
    }

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&Self::path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::path())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }

    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.pass_length, self.classes, self.unique)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            classes: ClassSet::all(),
            unique: false,
            source: EntropySource::Os,
        }
    }
}
