//! Weighted blur with an arbitrary odd-sized kernel.
//!
//! Follows the same border rule as the ring blur: kernel taps that land
//! outside the matrix are skipped, and the remaining weights are renormalized
//! so a uniform image stays uniform up to the edges.
use crate::error::PixelError;
use crate::gaussian::gaussian_kernel;
use crate::image::{Channel, PixelMatrix, Rgba, RgbaImage, WeightMap};
use log::debug;
use std::time::Instant;

/// Convolve R, G and B with `kernel` (centred on each pixel). Alpha is 255.
///
/// The kernel must have odd width and height.
pub fn convolve(matrix: &PixelMatrix, kernel: &WeightMap) -> Result<RgbaImage, PixelError> {
    if kernel.w % 2 == 0 || kernel.h % 2 == 0 {
        return Err(PixelError::ShapeMismatch(format!(
            "kernel must have odd sides, got {}x{}",
            kernel.w, kernel.h
        )));
    }
    Ok(convolve_odd(matrix, kernel))
}

fn convolve_odd(matrix: &PixelMatrix, kernel: &WeightMap) -> RgbaImage {
    let t0 = Instant::now();
    let (rx, ry) = ((kernel.w / 2) as isize, (kernel.h / 2) as isize);
    let (w, h) = (matrix.width(), matrix.height());
    let mut out = RgbaImage::blank_like(w, h);

    for row in 0..h {
        for col in 0..w {
            let mut acc = [0.0f64; 3];
            let mut total = 0.0f64;
            for ky in 0..kernel.h {
                for kx in 0..kernel.w {
                    let sr = row as isize + ky as isize - ry;
                    let sc = col as isize + kx as isize - rx;
                    let Some(px) = matrix.get_signed(sr, sc) else {
                        continue;
                    };
                    let wgt = kernel.get(kx, ky);
                    for (a, ch) in acc.iter_mut().zip(Channel::COLOR) {
                        *a += wgt * f64::from(px.channel(ch));
                    }
                    total += wgt;
                }
            }
            let centre = matrix.rows()[row][col];
            let [r, g, b] = [0, 1, 2].map(|i| {
                if total > 0.0 {
                    (acc[i] / total).round().clamp(0.0, 255.0) as u8
                } else {
                    centre.0[i]
                }
            });
            out.set_pixel(col, row, Rgba::new(r, g, b, 255));
        }
    }

    debug!(
        "convolve: {}x{} kernel={}x{} elapsed_ms={:.3}",
        w,
        h,
        kernel.w,
        kernel.h,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    out
}

/// Blur with a normalized Gaussian kernel of side `2 * radius + 1`.
pub fn gaussian_blur(matrix: &PixelMatrix, radius: usize, sigma: f64) -> RgbaImage {
    convolve_odd(matrix, &gaussian_kernel(radius, sigma))
}
