// src/core/visualization/colormap.rs
//
// Perceptual colormaps sampled at fixed anchors and linearly interpolated.

use image::Rgb;

/// Color map for heatmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Colormap {
    #[default]
    Magma,
    Viridis,
    Grayscale,
}

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

impl Colormap {
    /// Color for `value` in [0, 1]; out-of-range values are clamped
    pub fn color(&self, value: f32) -> Rgb<u8> {
        let v = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Colormap::Magma => interpolate(&MAGMA, v),
            Colormap::Viridis => interpolate(&VIRIDIS, v),
            Colormap::Grayscale => {
                let g = (v * 255.0).round() as u8;
                Rgb([g, g, g])
            }
        }
    }
}

fn interpolate(anchors: &[[u8; 3]], v: f32) -> Rgb<u8> {
    let scaled = v * (anchors.len() - 1) as f32;
    let lo = (scaled.floor() as usize).min(anchors.len() - 2);
    let t = scaled - lo as f32;
    let (a, b) = (anchors[lo], anchors[lo + 1]);
    let mix = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    Rgb([mix(0), mix(1), mix(2)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(Colormap::Magma.color(0.0), Rgb([0, 0, 4]));
        assert_eq!(Colormap::Magma.color(1.0), Rgb([252, 253, 191]));
        assert_eq!(Colormap::Viridis.color(1.0), Rgb([253, 231, 37]));
        assert_eq!(Colormap::Grayscale.color(0.5), Rgb([128, 128, 128]));
    }

    #[test]
    fn test_clamps_and_nan() {
        assert_eq!(Colormap::Magma.color(-3.0), Colormap::Magma.color(0.0));
        assert_eq!(Colormap::Magma.color(7.0), Colormap::Magma.color(1.0));
        assert_eq!(Colormap::Magma.color(f32::NAN), Colormap::Magma.color(0.0));
    }

    #[test]
    fn test_monotonic_brightness() {
        let lum = |c: Rgb<u8>| c.0.iter().map(|&x| x as u32).sum::<u32>();
        let mut prev = 0;
        for i in 0..=20 {
            let l = lum(Colormap::Magma.color(i as f32 / 20.0));
            assert!(l >= prev);
            prev = l;
        }
    }
}
