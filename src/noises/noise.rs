pub trait Noise2D {
    fn sample_2d(&self, x: f64, y: f64) -> f64;
}

impl<T: Noise2D + ?Sized> Noise2D for &T {
    #[inline]
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        (**self).sample_2d(x, y)
    }
}
