use super::mulberry32::Mulberry32;

/// Fisher-Yates driven by `rng`, one draw per swap with `i` descending.
pub fn shuffle(v: &mut [u8; 256], rng: &mut Mulberry32) {
    for i in (1..256).rev() {
        let j = ((i + 1) as f64 * rng.next_f64()).floor() as usize;
        v.swap(i, j);
    }
}

#[inline]
pub const fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub const fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Sixteen coarse directions taken from the low nibble: `x` weight in 1..=8,
/// `y` weight +1 except when the `x` weight is 8.
#[inline]
pub const fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let (gx, gy) = gradient_vec(hash);
    gx * x + gy * y
}

#[inline]
pub const fn gradient_vec(hash: u8) -> (f64, f64) {
    let h = hash & 15;
    let gx = 1 + (h & 7);
    let gy = if gx < 8 { 1.0 } else { -1.0 };
    (gx as f64, gy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);

        // first and second derivatives vanish at both ends
        let h = 1e-4;
        for t in [0.0, 1.0] {
            let d1 = (fade(t + h) - fade(t - h)) / (2.0 * h);
            let d2 = (fade(t + h) - 2.0 * fade(t) + fade(t - h)) / (h * h);
            assert!(d1.abs() < 1e-6, "d1 at {t} = {d1}");
            assert!(d2.abs() < 1e-2, "d2 at {t} = {d2}");
        }
    }

    #[test]
    fn gradient_set() {
        assert_eq!(gradient_vec(0), (1.0, 1.0));
        assert_eq!(gradient_vec(6), (7.0, 1.0));
        assert_eq!(gradient_vec(7), (8.0, -1.0));
        assert_eq!(gradient_vec(8), (1.0, 1.0));
        assert_eq!(gradient_vec(15), (8.0, -1.0));
        // only the low nibble matters
        assert_eq!(gradient_vec(0x37), gradient_vec(0x07));
        assert_eq!(grad(7, 0.5, 0.25), 3.75);
    }

    #[test]
    fn shuffle_keeps_every_value() {
        let mut v: [u8; 256] = std::array::from_fn(|i| i as u8);
        shuffle(&mut v, &mut Mulberry32::new(9));
        let mut seen = [false; 256];
        for &x in &v {
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
        }
    }

    #[test]
    fn lerp_order() {
        assert_eq!(lerp(0.0, 3.0, 7.0), 3.0);
        assert_eq!(lerp(1.0, 3.0, 7.0), 7.0);
        assert_eq!(lerp(0.25, 3.0, 7.0), 4.0);
    }
}
