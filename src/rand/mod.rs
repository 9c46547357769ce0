//! Random sources for password generation.
//!
//! Everything here implements [`RngCore`], so any source can be handed to
//! [`crate::pass::generate`].

mod hw;
mod mixer;

use std::fmt;
use std::str::FromStr;

use ::rand::RngCore;
use ::rand::rngs::OsRng;

pub use mixer::HwRng;

/// Which generator backs a [`Source`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntropySource {
    /// Operating system CSPRNG.
    #[default]
    Os,
    /// Cycle-counter mixing generator.
    Hardware,
}

impl EntropySource {
    pub fn describe(self) -> &'static str {
        match self {
            EntropySource::Os => "OS CSPRNG (getrandom)",
            EntropySource::Hardware => hw::source_name(),
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntropySource::Os => "os",
            EntropySource::Hardware => "hw",
        })
    }
}

impl FromStr for EntropySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "os" => Ok(EntropySource::Os),
            "hw" => Ok(EntropySource::Hardware),
            other => Err(format!("unknown entropy source: {other}")),
        }
    }
}

/// A generator selected at runtime.
pub enum Source {
    Os(OsRng),
    Hardware(HwRng),
}

impl Source {
    pub fn new(kind: EntropySource) -> Self {
        match kind {
            EntropySource::Os => Source::Os(OsRng),
            EntropySource::Hardware => Source::Hardware(HwRng::new()),
        }
    }

    pub fn kind(&self) -> EntropySource {
        match self {
            Source::Os(_) => EntropySource::Os,
            Source::Hardware(_) => EntropySource::Hardware,
        }
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Os(rng) => rng.next_u32(),
            Source::Hardware(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Os(rng) => rng.next_u64(),
            Source::Hardware(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Os(rng) => rng.fill_bytes(dest),
            Source::Hardware(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ::rand::Error> {
        match self {
            Source::Os(rng) => rng.try_fill_bytes(dest),
            Source::Hardware(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for kind in [EntropySource::Os, EntropySource::Hardware] {
            assert_eq!(kind.to_string().parse::<EntropySource>(), Ok(kind));
        }
        assert!("urandom".parse::<EntropySource>().is_err());
    }

    #[test]
    fn source_reports_kind() {
        assert_eq!(Source::new(EntropySource::Os).kind(), EntropySource::Os);
        assert_eq!(
            Source::new(EntropySource::Hardware).kind(),
            EntropySource::Hardware
        );
    }
}
