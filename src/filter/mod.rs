//! Neighbourhood-averaging blur over a pixel matrix.
//!
//! The neighbourhood of radius `r` around `(row, col)` is the centre pixel
//! plus the perimeters of the centred squares of side `2k + 1`, `k = 1..=r`
//! (concentric rings). Together they cover the full `(2r + 1)²` square.
//!
//! Border rule: ring cells that fall outside the matrix are dropped from the
//! sample set. They are not clamped, mirrored or zero-filled, so the effective
//! kernel shrinks near the edges and the mean is taken over fewer samples.
//! Edge outputs depend on this rule.
//!
//! Every output pixel is computed from the input matrix only; the filter never
//! reads back what it has written. Alpha in the output is always 255.
mod convolve;

pub use convolve::{convolve, gaussian_blur};

use crate::image::{Channel, PixelMatrix, Rgba, RgbaImage};
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// What happens to pixels whose neighbourhood crosses the image border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Average whatever neighbours exist.
    #[default]
    Omit,
    /// Copy border pixels (alpha included) and blur only the interior.
    PassThrough,
}

/// Options controlling the ring blur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlurOptions {
    /// Number of rings around the centre pixel.
    pub radius: usize,
    pub border: BorderPolicy,
}

impl Default for BlurOptions {
    fn default() -> Self {
        Self {
            radius: 1,
            border: BorderPolicy::Omit,
        }
    }
}

impl BlurOptions {
    pub fn new(radius: usize) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    pub fn with_border(mut self, border: BorderPolicy) -> Self {
        self.border = border;
        self
    }
}

/// Number of cells in a full (unclipped) neighbourhood of `radius`,
/// saturating at `usize::MAX`.
pub fn neighbourhood_size(radius: usize) -> usize {
    let side = radius.saturating_mul(2).saturating_add(1);
    side.saturating_mul(side)
}

/// Largest radius that can still reach a cell of `matrix`. Rings beyond it
/// lie entirely outside, so clamping to it leaves every average unchanged.
fn effective_radius(matrix: &PixelMatrix, radius: usize) -> usize {
    radius.min(matrix.width().max(matrix.height()).saturating_sub(1))
}

/// `(d_row, d_col)` offsets of the ring cells for `k = 1..=radius`, ring by
/// ring: top and bottom edges column by column, then the left and right
/// edges of the rows in between. The centre `(0, 0)` is not included.
pub fn ring_offsets(radius: usize) -> Vec<(isize, isize)> {
    let mut out = Vec::with_capacity(neighbourhood_size(radius) - 1);
    for k in 1..=radius as isize {
        for dc in -k..=k {
            out.push((-k, dc));
            out.push((k, dc));
        }
        for dr in (-k + 1)..k {
            out.push((dr, -k));
            out.push((dr, k));
        }
    }
    out
}

/// Rounded mean of `channel` over the ring neighbourhood of `(row, col)`.
///
/// Radius 0 returns the centre value. Panics if `(row, col)` is outside the
/// matrix.
pub fn average_neighbours(
    matrix: &PixelMatrix,
    row: usize,
    col: usize,
    channel: Channel,
    radius: usize,
) -> u8 {
    let offsets = ring_offsets(effective_radius(matrix, radius));
    average_with_offsets(matrix, row, col, channel, &offsets)
}

fn average_with_offsets(
    matrix: &PixelMatrix,
    row: usize,
    col: usize,
    channel: Channel,
    offsets: &[(isize, isize)],
) -> u8 {
    let centre = matrix.rows()[row][col].channel(channel);
    let (r, c) = (row as isize, col as isize);
    let mut sum = u64::from(centre);
    let mut count = 1u64;
    for &(dr, dc) in offsets {
        if let Some(px) = matrix.get_signed(r + dr, c + dc) {
            sum += u64::from(px.channel(channel));
            count += 1;
        }
    }
    (sum as f64 / count as f64).round() as u8
}

fn blurred_pixel(
    matrix: &PixelMatrix,
    row: usize,
    col: usize,
    offsets: &[(isize, isize)],
) -> Rgba {
    let [r, g, b] =
        Channel::COLOR.map(|ch| average_with_offsets(matrix, row, col, ch, offsets));
    Rgba::new(r, g, b, 255)
}

/// Blur every pixel's R, G and B over its ring neighbourhood, dropping
/// out-of-bounds cells. Output alpha is 255 everywhere.
pub fn blur(matrix: &PixelMatrix, radius: usize) -> RgbaImage {
    let t0 = Instant::now();
    let offsets = ring_offsets(effective_radius(matrix, radius));
    let (w, h) = (matrix.width(), matrix.height());
    let mut out = RgbaImage::blank_like(w, h);
    for row in 0..h {
        for col in 0..w {
            out.set_pixel(col, row, blurred_pixel(matrix, row, col, &offsets));
        }
    }
    debug!(
        "blur: {}x{} radius={} samples<={} elapsed_ms={:.3}",
        w,
        h,
        radius,
        offsets.len() + 1,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    out
}

/// Like [`blur`], but pixels within `radius` of any edge are copied through
/// unchanged, alpha included. Only pixels whose whole neighbourhood lies
/// inside the matrix are averaged.
pub fn blur_interior(matrix: &PixelMatrix, radius: usize) -> RgbaImage {
    let t0 = Instant::now();
    let offsets = ring_offsets(effective_radius(matrix, radius));
    let (w, h) = (matrix.width(), matrix.height());
    let mut out = RgbaImage::blank_like(w, h);
    for (row, cells) in matrix.rows().iter().enumerate() {
        // `row < h` and `col < w`, so the subtractions cannot underflow.
        let inner_row = row >= radius && radius < h - row;
        for (col, &px) in cells.iter().enumerate() {
            let inner = inner_row && col >= radius && radius < w - col;
            let value = if inner {
                blurred_pixel(matrix, row, col, &offsets)
            } else {
                px
            };
            out.set_pixel(col, row, value);
        }
    }
    debug!(
        "blur_interior: {}x{} radius={} elapsed_ms={:.3}",
        w,
        h,
        radius,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    out
}

/// Dispatch on [`BlurOptions::border`].
pub fn blur_with(matrix: &PixelMatrix, options: &BlurOptions) -> RgbaImage {
    match options.border {
        BorderPolicy::Omit => blur(matrix, options.radius),
        BorderPolicy::PassThrough => blur_interior(matrix, options.radius),
    }
}
