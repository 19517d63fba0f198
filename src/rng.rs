//! Uniform random numbers for placement and effects.
//!
//! Not crypto secure; the page only needs visually random positions. Seeding
//! comes from `getrandom` when the `rng` feature is enabled, otherwise from the
//! performance clock.

/// Anything that yields uniform samples in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform in `[lo, lo + spread)`.
    fn range(&mut self, lo: f64, spread: f64) -> f64 {
        lo + self.next_unit() * spread
    }

    /// Uniform index in `0..len` (0 for empty).
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }
}

/// xorshift64* generator.
#[derive(Clone, Debug)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn new(seed: u64) -> Self {
        // zero is a fixed point of xorshift
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Generator seeded from the environment.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl UniformSource for Xorshift64 {
    fn next_unit(&mut self) -> f64 {
        // top 53 bits -> [0, 1)
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => clock_seed(),
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // sub-millisecond bits carry most of the variation
    (now * 1_000.0) as u64 ^ 0xA076_1D64_78BD_642F
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_samples_in_range() {
        let mut r = Xorshift64::new(42);
        for _ in 0..10_000 {
            let u = r.next_unit();
            assert!((0.0..1.0).contains(&u), "sample {} out of [0,1)", u);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Xorshift64::new(1234);
        let mut b = Xorshift64::new(1234);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_zero_seed_not_stuck() {
        let mut r = Xorshift64::new(0);
        let first = r.next_unit();
        let second = r.next_unit();
        assert_ne!(first, second);
    }

    #[test]
    fn test_index_bounds() {
        let mut r = Xorshift64::new(9);
        assert_eq!(r.index(0), 0);
        for _ in 0..1_000 {
            assert!(r.index(5) < 5);
        }
    }
}
