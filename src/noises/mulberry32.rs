//! mulberry32: a 32-bit state generator with two multiply-xorshift rounds.
//!
//! Every multiply, add and xor is done on `u32` with wraparound; the output
//! sequence is pinned by golden tests and must not drift.

pub const STEP: u32 = 0x6D2B79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Clone, Copy, Debug)]
enum Accumulator {
    Wrapping(u32),
    /// Advanced as a double and reduced to 32 bits on every draw, so that
    /// fractional and negative seeds land where a JavaScript caller's would.
    Float(f64),
}

impl Accumulator {
    #[inline]
    fn advance(&mut self) -> u32 {
        match self {
            Accumulator::Wrapping(state) => {
                *state = state.wrapping_add(STEP);
                *state
            }
            Accumulator::Float(state) => {
                *state += STEP as f64;
                to_uint32(*state)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: Accumulator,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 {
            state: Accumulator::Wrapping(seed),
        }
    }

    pub fn from_f64(seed: f64) -> Self {
        Mulberry32 {
            state: Accumulator::Float(seed),
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        mix(self.state.advance())
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }
}

#[inline]
pub const fn mix(state: u32) -> u32 {
    let mut t = state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
}

/// Truncates toward zero and reduces modulo 2^32. Non-finite values map to 0.
#[inline]
pub fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(TWO_POW_32) as u32
}
