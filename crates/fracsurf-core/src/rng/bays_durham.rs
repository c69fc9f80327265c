//! Bays–Durham shuffle over a Park–Miller stream.
//!
//! A table of `TABLE_SIZE` draws is kept; each output picks a slot with a
//! fresh draw, returns the stored value, and refills the slot with another
//! draw.  This breaks short-range serial correlation of the underlying LCG.
use super::park_miller::ParkMiller;

pub const TABLE_SIZE: usize = 32;

#[derive(Debug, Clone)]
pub struct BaysDurham {
    inner: ParkMiller,
    table: [f64; TABLE_SIZE],
}

impl BaysDurham {
    pub fn new(seed: i64) -> Self {
        let mut inner = ParkMiller::new(seed);
        let mut table = [0.0; TABLE_SIZE];
        for slot in table.iter_mut() {
            *slot = inner.next_f64();
        }
        Self { inner, table }
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // inner draws are < 1, so j < TABLE_SIZE.
        let j = (self.inner.next_f64() * TABLE_SIZE as f64).floor() as usize;
        let r = self.table[j];
        self.table[j] = self.inner.next_f64();
        r
    }
}
