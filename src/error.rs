#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} samples does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("fractal sampling needs at least one octave")]
    NoOctaves,

    #[error("{octaves} octaves at gain {gain} sum to an amplitude of {sum}")]
    DegenerateAmplitude { octaves: u32, gain: f64, sum: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, GridError>;
