//! Timer-seeded mixing generator.

use ::rand::RngCore;
use zeroize::Zeroize;

use super::hw;

/// Odd 64-bit multipliers from well-known hash and PRNG finalizers.
/// Odd multipliers are bijective mod 2^64, so no state is lost.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0xd6e8_feb8_6659_fd93,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];

/// Generator that folds a fresh timer reading into its state on every draw.
///
/// Each output passes through the SplitMix64 finalizer. State is wiped
/// on drop.
pub struct HwRng {
    state: u64,
    entropy: fn() -> u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self::with_entropy(hw::entropy)
    }

    /// Use a custom entropy function instead of the hardware timer.
    pub fn with_entropy(entropy: fn() -> u64) -> Self {
        Self {
            state: entropy(),
            entropy,
        }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let state = self.state;
        let ent = (self.entropy)();

        // Mix entropy into multiplier selection
        let mixed = state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // State transition: rotate, multiply, XOR entropy
        let new_state = state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;
        self.state = new_state;

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.step().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.step().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ::rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
