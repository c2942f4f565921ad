//! Seeded 2D gradient noise for animated page backgrounds.
//!
//! [`NoiseField`] owns a permutation table shuffled by a mulberry32 generator
//! and answers point queries; [`sample_grid`] fills whole frames in parallel.
//! Compiled to wasm the same API is exported to JavaScript as `NoiseField`
//! with `create` and `sample2D`.

mod bindings;
pub mod error;
pub mod log;
pub mod noises;
pub mod sampler;

pub use bindings::JsNoiseField;
pub use error::GridError;
pub use noises::{
    fractal::{FractalSettings, fbm},
    mulberry32::Mulberry32,
    noise::Noise2D,
    perlin_noise::{NoiseField, PermutationTable},
};
pub use sampler::{GridSettings, sample_grid};

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen_rayon::init_thread_pool;
