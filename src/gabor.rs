//! Gabor patch synthesis: a sinusoidal grating under a circular Gaussian
//! window, sitting on a mid-gray background.

use std::f64::consts::TAU;

use crate::types::{PatchGeometry, StimulusParameters};

/// Background luminance the grating modulates around.
pub const MID_GRAY: f64 = 0.5;

/// Square luminance field. Samples are row-major with the row index following
/// the `y` coordinate upwards from `-fov/2`.
#[derive(Clone, Debug)]
pub struct GaborPatch {
    size: usize,
    samples: Vec<f64>,
}

impl GaborPatch {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dimensions(&self) -> [usize; 2] {
        [self.size, self.size]
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.samples[self.idx(col, row)]
    }

    pub fn min_max(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// 8-bit grayscale pixels ready for display, top row first.
    ///
    /// Luminance is clipped to `[0, 1]` and rows are emitted from the highest
    /// `y` down so that positive `y` points up on screen.
    pub fn to_gray8(&self) -> Vec<u8> {
        let mut gray = Vec::with_capacity(self.samples.len());
        for row in (0..self.size).rev() {
            let start = row * self.size;
            for &value in &self.samples[start..start + self.size] {
                gray.push((value.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        gray
    }

    fn idx(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }
}

pub fn gaussian_envelope(x: f64, y: f64, sigma: f64) -> f64 {
    (-(x * x + y * y) / (2.0 * sigma * sigma)).exp()
}

/// Renders one stimulus.
///
/// `luminance = 0.5 + contrast * sin(2π f (x cos θ + y sin θ)) * envelope`
/// with `θ = orientation + 90°`, so a 0° label yields horizontal stripes.
/// The result is not clamped.
pub fn generate(params: &StimulusParameters, geometry: &PatchGeometry) -> GaborPatch {
    let size = geometry.size_pixels;
    let theta = f64::from(params.orientation.degrees() + 90).to_radians();
    let (sin_t, cos_t) = theta.sin_cos();
    let angular_freq = TAU * params.spatial_frequency_cpd;

    let axis: Vec<f64> = (0..size).map(|i| geometry.coordinate(i)).collect();
    let mut samples = Vec::with_capacity(size * size);

    for &y in &axis {
        for &x in &axis {
            let grating = (angular_freq * (x * cos_t + y * sin_t)).sin();
            let envelope = gaussian_envelope(x, y, geometry.sigma_deg);
            samples.push(MID_GRAY + params.contrast * grating * envelope);
        }
    }

    GaborPatch { size, samples }
}
