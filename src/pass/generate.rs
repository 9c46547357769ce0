//! Password generation.

use rand::Rng;
use rand::seq::{SliceRandom, index};
use zeroize::Zeroize;

use super::charset::Pool;
use super::config::GenerationConfig;
use super::error::ValidationError;
use super::password::{Generation, Password};

/// Generate a single password.
///
/// Draws one character from each enabled class first so every class is
/// represented, fills the rest from the merged pool (without replacement
/// when `unique` is set), then shuffles the whole sequence so the seeded
/// positions cannot be inferred.
pub fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Generation, ValidationError> {
    let warnings = config.validate()?;
    let pool = Pool::build(&config.classes);

    let mut chars = Vec::with_capacity(config.length);
    seed(&pool, rng, &mut chars);

    let remaining = config.length - chars.len();
    if config.unique {
        fill_unique(&pool, remaining, rng, &mut chars);
    } else {
        fill(&pool, remaining, rng, &mut chars);
    }

    chars.shuffle(rng);
    let password = Password::from_chars(&chars);
    chars.zeroize();

    Ok(Generation { password, warnings })
}

/// One character from each class's own set, in class order.
fn seed<R: Rng + ?Sized>(pool: &Pool, rng: &mut R, out: &mut Vec<char>) {
    out.extend(pool.classes().iter().filter_map(|set| set.choose(rng)));
}

#[inline]
fn fill<R: Rng + ?Sized>(pool: &Pool, count: usize, rng: &mut R, out: &mut Vec<char>) {
    let chars = pool.merged();
    out.extend((0..count).filter_map(|_| chars.choose(rng)));
}

/// Draw `count` distinct characters not already in `out`.
fn fill_unique<R: Rng + ?Sized>(pool: &Pool, count: usize, rng: &mut R, out: &mut Vec<char>) {
    let mut available: Vec<char> = pool
        .distinct()
        .into_iter()
        .filter(|c| !out.contains(c))
        .collect();

    let picks = index::sample(rng, available.len(), count.min(available.len()));
    out.extend(picks.into_iter().map(|i| available[i]));
    available.zeroize();
}
