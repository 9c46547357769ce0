//! Entropy estimate for a generation config.

use std::fmt;

use super::charset::Pool;
use super::config::GenerationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}

/// Password entropy in bits, assuming uniform draws from the pool.
///
/// Ignores the small loss from guaranteed class coverage. Unique passwords
/// count permutations, so each draw shrinks the pool by one.
pub fn entropy_bits(config: &GenerationConfig) -> f64 {
    let pool = Pool::build(&config.classes);
    if pool.is_empty() {
        return 0.0;
    }

    if config.unique {
        let n = pool.distinct_len();
        (0..config.length.min(n))
            .map(|i| ((n - i) as f64).log2())
            .sum()
    } else {
        config.length as f64 * (pool.len() as f64).log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{CharacterClass, ClassSet};

    #[test]
    fn digits_with_replacement() {
        let config = GenerationConfig::new(4, ClassSet::empty().with(CharacterClass::Digit), false);
        let bits = entropy_bits(&config);
        assert!((bits - 4.0 * 10f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn unique_is_lower_than_replacement() {
        let classes = ClassSet::empty().with(CharacterClass::Lowercase);
        let unique = entropy_bits(&GenerationConfig::new(10, classes, true));
        let repeat = entropy_bits(&GenerationConfig::new(10, classes, false));
        assert!(unique < repeat);
        assert!(unique > 0.0);
    }

    #[test]
    fn empty_pool_has_no_entropy() {
        assert_eq!(entropy_bits(&GenerationConfig::new(10, ClassSet::empty(), false)), 0.0);
    }

    #[test]
    fn buckets() {
        assert_eq!(Strength::from_bits(20.0), Strength::Weak);
        assert_eq!(Strength::from_bits(40.0), Strength::Fair);
        // 12 chars over 94 symbols is about 78.7 bits
        let config = GenerationConfig::new(12, ClassSet::all(), false);
        assert_eq!(Strength::from_bits(entropy_bits(&config)), Strength::Strong);
        assert_eq!(Strength::from_bits(200.0), Strength::VeryStrong);
    }
}
