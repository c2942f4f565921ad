use wasm_bindgen::prelude::*;

use crate::{
    console_log,
    error::GridError,
    noises::{fractal::FractalSettings, perlin_noise::NoiseField},
    sampler::{GridSettings, sample_grid},
};

#[wasm_bindgen(js_name = NoiseField)]
pub struct JsNoiseField {
    inner: NoiseField,
}

#[wasm_bindgen(js_class = NoiseField)]
impl JsNoiseField {
    /// A missing seed is drawn at random.
    pub fn create(seed: Option<f64>) -> JsNoiseField {
        let inner = match seed {
            Some(seed) => NoiseField::new(seed),
            None => NoiseField::random(),
        };
        JsNoiseField { inner }
    }

    #[wasm_bindgen(js_name = sample2D)]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.inner.sample_2d(x, y)
    }

    #[wasm_bindgen(js_name = sampleGrid)]
    #[allow(clippy::too_many_arguments)]
    pub fn sample_grid(
        &self,
        width: usize,
        height: usize,
        scale: f64,
        offset_x: f64,
        offset_y: f64,
        time: f64,
        octaves: u32,
    ) -> Result<Vec<f64>, JsError> {
        self.logged_grid(width, height, scale, offset_x, offset_y, time, octaves)
            .map_err(JsError::from)
    }

    /// The 512-entry permutation table, for debugging overlays.
    pub fn permutation(&self) -> Vec<u8> {
        self.inner.permutation().as_slice().to_vec()
    }
}

impl JsNoiseField {
    #[allow(clippy::too_many_arguments)]
    fn logged_grid(
        &self,
        width: usize,
        height: usize,
        scale: f64,
        offset_x: f64,
        offset_y: f64,
        time: f64,
        octaves: u32,
    ) -> Result<Vec<f64>, GridError> {
        let settings = GridSettings {
            width,
            height,
            scale,
            offset_x,
            offset_y,
            time,
            fractal: FractalSettings::with_octaves(octaves),
            ..Default::default()
        };
        sample_grid(&self.inner, &settings).inspect_err(|e| {
            console_log!("Failed to sample noise grid: {e}");
        })
    }
}
