//! String-seeded deterministic random number generator.
//!
//! A [`Seed`] hashes its seed string with xmur3 into four 32-bit words and
//! then advances them with the sfc32 step. All arithmetic wraps at 32 bits,
//! so the draw sequence is identical on every platform and matches other
//! implementations of the same pair of algorithms bit for bit.

use crate::error::RangeError;

const XMUR3_INIT: u32 = 1_779_033_703;
const XMUR3_BYTE_MUL: u32 = 3_432_918_353;
const XMUR3_MIX_MUL_1: u32 = 2_246_822_507;
const XMUR3_MIX_MUL_2: u32 = 3_266_489_909;

/// 2^32, the divisor mapping a 32-bit output onto `[0, 1)`.
const U32_SPAN: f64 = 4_294_967_296.0;

/// Deterministic generator seeded from a string.
///
/// Two generators built from the same string produce identical draw
/// sequences. There is no way to rewind a generator; build a new one from
/// the same string instead.
///
/// # Example
///
/// ```
/// use uwuify::Seed;
///
/// let mut first = Seed::new("kitten");
/// let mut second = Seed::new("kitten");
///
/// let a = first.random(0.0, 1.0).expect("valid range");
/// let b = second.random(0.0, 1.0).expect("valid range");
/// assert_eq!(a, b);
/// assert!((0.0..1.0).contains(&a));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Seed {
    /// Builds a generator from the UTF-8 bytes of `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        // Lengths beyond u32::MAX wrap, like every other step of the hash.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "xmur3 folds the length into a 32-bit accumulator"
        )]
        let mut h = XMUR3_INIT ^ (seed.len() as u32);
        for &byte in seed.as_bytes() {
            h = (h ^ u32::from(byte)).wrapping_mul(XMUR3_BYTE_MUL);
            h = h.rotate_left(13);
        }

        let a = xmur3_mix(&mut h);
        let b = xmur3_mix(&mut h);
        let c = xmur3_mix(&mut h);
        let d = xmur3_mix(&mut h);
        Self { a, b, c, d }
    }

    /// Draws a float in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] when `min > max` or `min == max`.
    pub fn random(&mut self, min: f64, max: f64) -> Result<f64, RangeError> {
        check_range(min, max)?;
        Ok(self.next_unit() * (max - min) + min)
    }

    /// Draws an integer in `[min, max]`.
    ///
    /// The underlying float draw is rounded half away from zero, so both
    /// endpoints are reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] when `min > max` or `min == max`.
    ///
    /// # Example
    ///
    /// ```
    /// use uwuify::Seed;
    ///
    /// let mut seed = Seed::new("dice");
    /// let roll = seed.random_int(1, 6).expect("valid range");
    /// assert!((1..=6).contains(&roll));
    /// assert!(seed.random_int(3, 3).is_err());
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        reason = "bounds are converted to f64 exactly as the reference generator does"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the rounded draw lies within [min, max]"
    )]
    pub fn random_int(&mut self, min: i64, max: i64) -> Result<i64, RangeError> {
        let value = self.random(min as f64, max as f64)?;
        Ok(value.round() as i64)
    }

    /// Advances the state once and returns the draw in `[0, 1)`.
    pub(crate) fn next_unit(&mut self) -> f64 {
        let mut t = self.a.wrapping_add(self.b);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21);
        self.d = self.d.wrapping_add(1);
        t = t.wrapping_add(self.d);
        self.c = self.c.wrapping_add(t);
        f64::from(t) / U32_SPAN
    }

    /// Picks an index into a list of `len` items.
    ///
    /// Consumes exactly the draw `random_int(0, len - 1)` would. A single
    /// item is returned without drawing and an empty list yields `None`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "lexicon lengths are far below 2^52"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the rounded draw lies within [0, len - 1]"
    )]
    pub(crate) fn index_for(&mut self, len: usize) -> Option<usize> {
        match len {
            0 => None,
            1 => Some(0),
            _ => {
                let upper = (len - 1) as f64;
                Some((self.next_unit() * upper).round() as usize)
            }
        }
    }
}

/// One xmur3 finalising round; the accumulator carries into the next round.
const fn xmur3_mix(h: &mut u32) -> u32 {
    *h = (*h ^ (*h >> 16)).wrapping_mul(XMUR3_MIX_MUL_1);
    *h = (*h ^ (*h >> 13)).wrapping_mul(XMUR3_MIX_MUL_2);
    *h ^= *h >> 16;
    *h
}

const fn check_range(min: f64, max: f64) -> Result<(), RangeError> {
    if min > max {
        return Err(RangeError::MinAboveMax { min, max });
    }
    if min == max {
        return Err(RangeError::EmptyRange { value: min });
    }
    Ok(())
}
