use super::{
    helpers::{fade, grad, lerp, shuffle},
    mulberry32::Mulberry32,
    noise::Noise2D,
};

/// 256 shuffled bytes followed by a copy of themselves, so corner lookups
/// never need to wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    pub fn new(rng: &mut Mulberry32) -> Self {
        let mut source: [u8; 256] = std::array::from_fn(|i| i as u8);
        shuffle(&mut source, rng);

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);
        PermutationTable { perm }
    }

    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        self.perm[i]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

#[derive(Clone, Debug)]
pub struct NoiseField {
    permutation: PermutationTable,
}

impl NoiseField {
    /// Seeds the field the way a JavaScript caller passing `seed` would.
    pub fn new(seed: f64) -> Self {
        Self::with_rng(Mulberry32::from_f64(seed))
    }

    pub fn from_u32_seed(seed: u32) -> Self {
        Self::with_rng(Mulberry32::new(seed))
    }

    /// Non-deterministic seed. Pass an explicit one when output has to repeat.
    pub fn random() -> Self {
        Self::new(random_seed())
    }

    fn with_rng(mut rng: Mulberry32) -> Self {
        NoiseField {
            permutation: PermutationTable::new(&mut rng),
        }
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    #[inline]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let xi = lattice(x);
        let yi = lattice(y);

        let xf = x - x.floor();
        let yf = y - y.floor();

        let u = fade(xf);
        let v = fade(yf);

        let a = self.permutation.get(xi) as usize + yi;
        let b = self.permutation.get(xi + 1) as usize + yi;

        let aa = self.permutation.get(a);
        let ba = self.permutation.get(b);
        let ab = self.permutation.get(a + 1);
        let bb = self.permutation.get(b + 1);

        lerp(
            v,
            lerp(u, grad(aa, xf, yf), grad(ba, xf - 1.0, yf)),
            lerp(u, grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0)),
        )
    }
}

impl Noise2D for NoiseField {
    #[inline]
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        NoiseField::sample_2d(self, x, y)
    }
}

/// `floor(v) & 255` for every finite `v`, however large. NaN lands on cell 0.
#[inline]
fn lattice(v: f64) -> usize {
    v.floor().rem_euclid(256.0) as usize
}

#[cfg(target_arch = "wasm32")]
fn random_seed() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn random_seed() -> f64 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf) as f64,
        Err(e) => {
            crate::console_log!("Failed to read OS entropy for noise seed: {e}");
            clock_seed() as f64
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0)
}
