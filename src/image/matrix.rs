//! Row/column addressable view of an RGBA buffer.
//!
//! `cell[row][col]` holds the pixel stored at byte offset `(row * w + col) * 4`
//! of the flat buffer. The mapping is a bijection for fixed dimensions:
//! flattening a matrix built from a buffer yields that buffer again.
use super::ops;
use super::pixel::{Channel, Rgba};
use super::rgba::{RgbaImage, RgbaView};
use super::traits::ImageView;
use crate::error::{check_rgba_len, PixelError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMatrix {
    w: usize,
    h: usize,
    rows: Vec<Vec<Rgba>>,
}

impl PixelMatrix {
    /// Split a flat RGBA buffer into `h` rows of `w` pixels.
    pub fn from_raw(data: &[u8], w: usize, h: usize) -> Result<Self, PixelError> {
        check_rgba_len(w, h, data.len())?;
        Ok(Self::from_rows_unchecked(w, h, data))
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        Self::from_rows_unchecked(image.width(), image.height(), image.as_bytes())
    }

    pub fn from_view(view: &RgbaView<'_>) -> Self {
        let (w, h) = (view.width(), view.height());
        let rows = view
            .rows()
            .map(|row| row.chunks_exact(4).map(Rgba::from_slice).collect())
            .collect();
        Self { w, h, rows }
    }

    /// Adopt nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Rgba>>) -> Result<Self, PixelError> {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != w) {
            return Err(PixelError::ShapeMismatch(format!(
                "row {y} has {} pixels, expected {w}",
                row.len()
            )));
        }
        Ok(Self { w, h, rows })
    }

    fn from_rows_unchecked(w: usize, h: usize, data: &[u8]) -> Self {
        let mut rows = Vec::with_capacity(h);
        for y in 0..h {
            let start = y * w * 4;
            let row = data[start..start + w * 4]
                .chunks_exact(4)
                .map(Rgba::from_slice)
                .collect();
            rows.push(row);
        }
        Self { w, h, rows }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Rgba>] {
        &self.rows
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgba> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Lookup with signed coordinates; anything outside the matrix is `None`.
    #[inline]
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Rgba> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    #[inline]
    pub fn channel(&self, row: usize, col: usize, channel: Channel) -> Option<u8> {
        self.get(row, col).map(|px| px.channel(channel))
    }

    /// Flatten back into the row-major byte layout.
    pub fn to_buffer(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h * 4);
        for row in &self.rows {
            for px in row {
                out.extend_from_slice(&px.0);
            }
        }
        out
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage {
            w: self.w,
            h: self.h,
            data: self.to_buffer(),
        }
    }

    /// The matrix turned upside down (row and column order both reversed).
    pub fn rotate_180(&self) -> Self {
        Self {
            w: self.w,
            h: self.h,
            rows: ops::rotate_180(self.rows.clone()),
        }
    }
}
