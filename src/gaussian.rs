//! Closed-form 2-D Gaussian weights.
//!
//! `weight(x, y) = A * exp(-((x - x0)² / 2σx² + (y - y0)² / 2σy²))`
//!
//! Weight maps for a `w × h` image centre the bell at `(w/2, h/2)` with
//! spreads `w/5` and `h/5` and peak 255, so the map doubles as a grayscale
//! picture. Samples are taken at pixel centres `(col + 0.5, row + 0.5)`,
//! which makes the map symmetric about the true image centre.
//! [`SampleGrid::PixelCorner`] samples at `(col, row)` instead; that grid is
//! shifted half a pixel and is not symmetric.
use crate::error::PixelError;
use crate::image::{Rgba, RgbaImage, WeightMap};
use serde::{Deserialize, Serialize};

/// Parameters of one Gaussian surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    /// Peak value at the centre.
    pub amplitude: f64,
    pub x0: f64,
    pub y0: f64,
    pub sigma_x: f64,
    pub sigma_y: f64,
}

impl GaussianParams {
    pub const fn new(amplitude: f64, x0: f64, y0: f64, sigma_x: f64, sigma_y: f64) -> Self {
        Self {
            amplitude,
            x0,
            y0,
            sigma_x,
            sigma_y,
        }
    }

    /// Peak 255 at the image centre, spreads of one fifth of each side.
    pub fn centred(width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self::new(255.0, w / 2.0, h / 2.0, w / 5.0, h / 5.0)
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Standalone evaluator bound to these parameters.
    pub fn evaluator(self) -> impl Fn(f64, f64) -> f64 {
        move |x, y| evaluate(&self, x, y)
    }
}

/// Value of the Gaussian described by `p` at `(x, y)`.
#[inline]
pub fn evaluate(p: &GaussianParams, x: f64, y: f64) -> f64 {
    let dx = x - p.x0;
    let dy = y - p.y0;
    let exponent = -((dx * dx) / (2.0 * p.sigma_x * p.sigma_x)
        + (dy * dy) / (2.0 * p.sigma_y * p.sigma_y));
    p.amplitude * exponent.exp()
}

/// Where inside each pixel cell the surface is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleGrid {
    /// `(col + 0.5, row + 0.5)`
    #[default]
    PixelCentre,
    /// `(col, row)`
    PixelCorner,
}

impl SampleGrid {
    #[inline]
    fn offset(self) -> f64 {
        match self {
            SampleGrid::PixelCentre => 0.5,
            SampleGrid::PixelCorner => 0.0,
        }
    }
}

/// Evaluate `params` on a `width × height` grid.
pub fn sample(params: &GaussianParams, width: usize, height: usize, grid: SampleGrid) -> WeightMap {
    let o = grid.offset();
    WeightMap::from_fn(width, height, |col, row| {
        evaluate(params, col as f64 + o, row as f64 + o)
    })
}

/// Centred weight map sampled at pixel centres.
pub fn weight_matrix(width: usize, height: usize) -> WeightMap {
    weight_matrix_sampled(width, height, SampleGrid::PixelCentre)
}

pub fn weight_matrix_sampled(width: usize, height: usize, grid: SampleGrid) -> WeightMap {
    sample(&GaussianParams::centred(width, height), width, height, grid)
}

/// Render the weight map as an opaque grayscale image: `(g, g, g, 255)` with
/// `g = round(weight)`.
pub fn weight_image(width: usize, height: usize) -> Result<RgbaImage, PixelError> {
    weights_to_image(&weight_matrix(width, height))
}

/// Grayscale rendering of an arbitrary weight map, clamped to `0..=255`.
pub fn weights_to_image(map: &WeightMap) -> Result<RgbaImage, PixelError> {
    RgbaImage::from_fn(map.w, map.h, |x, y| {
        let g = map.get(x, y).round().clamp(0.0, 255.0) as u8;
        Rgba::new(g, g, g, 255)
    })
}

/// Normalized square kernel of side `2 * radius + 1` for weighted blurs.
///
/// Offsets are measured from the centre cell, so the kernel is symmetric and
/// its weights sum to one.
pub fn gaussian_kernel(radius: usize, sigma: f64) -> WeightMap {
    let side = 2 * radius + 1;
    let c = radius as f64;
    let params = GaussianParams::new(1.0, c, c, sigma, sigma);
    sample(&params, side, side, SampleGrid::PixelCorner).normalized()
}
