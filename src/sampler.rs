//! Row-major batch sampling of a noise field, one value per pixel.
//!
//! Pixel `(px, py)` maps to `((px + offset_x) / scale + time * drift,
//! (py + offset_y) / scale)`, so advancing `time` slides the texture sideways
//! between animation frames.

use rayon::prelude::*;

use crate::{
    error::{GridError, Result},
    noises::{
        fractal::{FractalSettings, fbm},
        noise::Noise2D,
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSettings {
    pub width: usize,
    pub height: usize,
    /// Pixels per lattice cell.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub time: f64,
    /// Lattice cells travelled per unit of `time`.
    pub drift: f64,
    pub fractal: FractalSettings,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            scale: 50.0,
            offset_x: 0.0,
            offset_y: 0.0,
            time: 0.0,
            drift: 0.1,
            fractal: FractalSettings::default(),
        }
    }
}

impl GridSettings {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<usize> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        let count = self
            .width
            .checked_mul(self.height)
            .ok_or(GridError::TooLarge {
                width: self.width,
                height: self.height,
            })?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GridError::InvalidScale(self.scale));
        }
        if self.fractal.octaves == 0 {
            return Err(GridError::NoOctaves);
        }
        for (name, value) in [
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("time", self.time),
            ("drift", self.drift),
            ("frequency", self.fractal.frequency),
            ("lacunarity", self.fractal.lacunarity),
            ("gain", self.fractal.gain),
        ] {
            if !value.is_finite() {
                return Err(GridError::NonFinite { name, value });
            }
        }
        let sum = self.fractal.amplitude_sum();
        if !sum.is_finite() || sum == 0.0 {
            return Err(GridError::DegenerateAmplitude {
                octaves: self.fractal.octaves,
                gain: self.fractal.gain,
                sum,
            });
        }
        Ok(count)
    }

    #[inline]
    pub fn field_coords(&self, px: usize, py: usize) -> (f64, f64) {
        let x = (px as f64 + self.offset_x) / self.scale + self.time * self.drift;
        let y = (py as f64 + self.offset_y) / self.scale;
        (x, y)
    }
}

pub fn sample_grid<N: Noise2D + Sync>(noise: &N, settings: &GridSettings) -> Result<Vec<f64>> {
    let count = settings.validate()?;
    let width = settings.width;

    Ok((0..count)
        .into_par_iter()
        .map(|i| {
            let (x, y) = settings.field_coords(i % width, i / width);
            fbm(noise, x, y, &settings.fractal)
        })
        .collect())
}
