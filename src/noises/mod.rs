pub mod fractal;
pub mod helpers;
pub mod mulberry32;
pub mod noise;
pub mod perlin_noise;
