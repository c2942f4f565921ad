use super::noise::Noise2D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalSettings {
    pub octaves: u32,
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
    /// Amplitude multiplier per octave.
    pub gain: f64,
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self {
            octaves: 1,
            frequency: 1.0,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl FractalSettings {
    pub fn with_octaves(octaves: u32) -> Self {
        Self {
            octaves,
            ..Default::default()
        }
    }

    /// Divisor `fbm` normalises by. Must be finite and non-zero.
    pub fn amplitude_sum(&self) -> f64 {
        let mut amplitude = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.gain;
        }
        sum
    }
}

/// Octave sum normalised by the total amplitude. Zero octaves yield NaN;
/// validate settings before calling from untrusted input.
pub fn fbm<N: Noise2D>(noise: &N, x: f64, y: f64, settings: &FractalSettings) -> f64 {
    let mut total = 0.0;
    let mut frequency = settings.frequency;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..settings.octaves {
        total += noise.sample_2d(x * frequency, y * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= settings.gain;
        frequency *= settings.lacunarity;
    }

    total / max_value
}
