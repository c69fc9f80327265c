//! L'Ecuyer combined multiplicative congruential generator with a
//! Bays–Durham style shuffle (the "ran2" construction).
//!
//! Two Schrage-factored sequences with moduli `IM1`, `IM2` are subtracted
//! and pushed through a `NTAB`-entry shuffle table.  Output is clamped below
//! `RNMX` so it never reaches 1.

const IM1: i64 = 2_147_483_563;
const IM2: i64 = 2_147_483_399;
const AM: f64 = 1.0 / IM1 as f64;
const IMM1: i64 = IM1 - 1;
const IA1: i64 = 40_014;
const IA2: i64 = 40_692;
const IQ1: i64 = 53_668;
const IQ2: i64 = 52_774;
const IR1: i64 = 12_211;
const IR2: i64 = 3_791;
pub const NTAB: usize = 32;
// 1 + (IM1 - 1) / NTAB keeps `iy / NDIV` below NTAB.
const NDIV: i64 = 1 + IMM1 / NTAB as i64;
const EPS: f64 = 1.2e-7;
pub const RNMX: f64 = 1.0 - EPS;
const IDUM2_INIT: i64 = 123_456_789;

#[derive(Debug, Clone)]
pub struct Lecuyer {
    idum: i64,
    idum2: i64,
    iy: i64,
    iv: [i64; NTAB],
}

/// One Schrage step: `a · x mod m` without overflow, result in `[0, m)`.
#[inline]
fn schrage(x: i64, a: i64, q: i64, r: i64, m: i64) -> i64 {
    let k = x / q;
    let y = a * (x - k * q) - k * r;
    if y < 0 { y + m } else { y }
}

impl Lecuyer {
    /// Seed is `|seed| + 1`, folded below `IM1` so seeds wider than 31 bits
    /// stay in the generator's domain.  The first sequence is run `NTAB + 8`
    /// times; the last `NTAB` states fill the shuffle table.
    pub fn new(seed: i64) -> Self {
        let mut idum = (seed.unsigned_abs() % IMM1 as u64) as i64 + 1;
        let mut iv = [0i64; NTAB];
        for j in (0..NTAB + 8).rev() {
            idum = schrage(idum, IA1, IQ1, IR1, IM1);
            if j < NTAB {
                iv[j] = idum;
            }
        }
        Self { idum, idum2: IDUM2_INIT, iy: iv[0], iv }
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.idum = schrage(self.idum, IA1, IQ1, IR1, IM1);
        self.idum2 = schrage(self.idum2, IA2, IQ2, IR2, IM2);
        let j = (self.iy / NDIV) as usize;
        self.iy = self.iv[j] - self.idum2;
        self.iv[j] = self.idum;
        if self.iy < 1 {
            self.iy += IMM1;
        }
        let t = AM * self.iy as f64;
        if t > RNMX { RNMX } else { t }
    }
}
