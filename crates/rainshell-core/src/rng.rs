#![forbid(unsafe_code)]

//! Seeded xorshift64 source for glyph identity and column resets.

/// Fallback state; xorshift never leaves the all-zero state.
const ZERO_SEED_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic xorshift64 PRNG.
///
/// Same seed, same glyph stream: rain frames are reproducible in tests while
/// the web host seeds from `Math.random()` for a fresh pattern per page load.
#[derive(Debug, Clone)]
pub struct GlyphRng {
    state: u64,
}

impl GlyphRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_STATE } else { seed },
        }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn below(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    /// `true` with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
