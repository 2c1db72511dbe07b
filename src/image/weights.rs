//! Owned single-channel f64 grid in row-major layout (stride == width).
//!
//! Holds Gaussian weights: one value per pixel-sized sample cell. Values are
//! unbounded floats; conversion to displayable bytes happens in
//! [`crate::gaussian::weight_image`].
use super::ops;
use super::traits::{ImageView, ImageViewMut};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightMap {
    /// Grid width in samples
    pub w: usize,
    /// Grid height in samples
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f64>,
}

impl WeightMap {
    /// Construct a zero-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Fill a grid by evaluating `f(col, row)` for every cell.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut out = Self::new(w, h);
        for y in 0..h {
            let row = out.row_mut(y);
            for (x, v) in row.iter_mut().enumerate() {
                *v = f(x, y);
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f64) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Copy of the grid scaled so that all weights sum to one.
    ///
    /// A grid whose weights sum to zero is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total == 0.0 {
            return self.clone();
        }
        Self {
            w: self.w,
            h: self.h,
            data: self.data.iter().map(|v| v / total).collect(),
        }
    }

    /// Nested `height × width` rows, the literal matrix form.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn rotate_180(&self) -> Self {
        let rows = ops::rotate_180(self.to_rows());
        Self {
            w: self.w,
            h: self.h,
            data: rows.into_iter().flatten().collect(),
        }
    }
}

impl ImageView for WeightMap {
    type Sample = f64;
    const CHANNELS: usize = 1;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f64]> {
        Some(&self.data)
    }
}

impl ImageViewMut for WeightMap {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f64] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [f64]> {
        Some(&mut self.data)
    }
}
