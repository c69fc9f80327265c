//! Park–Miller minimal standard Lehmer generator.
//!
//! `state ← 16807 · state mod (2³¹ − 1)`, output `state / m`.  The product fits
//! in 46 bits, so plain `u64` arithmetic is exact.

pub const MODULUS: u64 = 2_147_483_647;
pub const MULTIPLIER: u64 = 16_807;

#[derive(Debug, Clone)]
pub struct ParkMiller {
    state: u64,
}

impl ParkMiller {
    /// Seed is folded into `[1, m − 1]`: `|seed| mod (m − 1) + 1`.
    pub fn new(seed: i64) -> Self {
        let state = seed.unsigned_abs() % (MODULUS - 1) + 1;
        Self { state }
    }

    /// Draw the next value in the open interval (0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = (MULTIPLIER * self.state) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    pub fn state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draws_for_seed_zero() {
        // Seed 0 normalises to state 1.
        let mut pm = ParkMiller::new(0);
        assert_eq!(pm.state(), 1);
        assert_eq!(pm.next_f64(), 16_807.0 / MODULUS as f64);
        assert_eq!(pm.state(), 16_807);
        assert_eq!(pm.next_f64(), 282_475_249.0 / MODULUS as f64);
    }

    #[test]
    fn known_value_after_10000_steps() {
        // Park & Miller (1988): starting from 1, the 10 000th state is 1043618065.
        let mut pm = ParkMiller::new(0);
        for _ in 0..10_000 {
            pm.next_f64();
        }
        assert_eq!(pm.state(), 1_043_618_065);
    }

    #[test]
    fn negative_seed_uses_absolute_value() {
        let mut a = ParkMiller::new(-42);
        let mut b = ParkMiller::new(42);
        assert_eq!(a.state(), 43);
        for _ in 0..16 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn state_never_reaches_zero() {
        let mut pm = ParkMiller::new(i64::MIN);
        for _ in 0..10_000 {
            let v = pm.next_f64();
            assert!(v > 0.0 && v < 1.0);
            assert_ne!(pm.state(), 0);
        }
    }
}
