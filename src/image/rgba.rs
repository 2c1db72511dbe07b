//! Flat 8-bit RGBA buffers in row-major layout.
//!
//! `RgbaImage` owns its bytes, `RgbaView` borrows them. Both hold the
//! invariant `data.len() == w * h * 4`, checked once at construction so that
//! all later index arithmetic stays in bounds.
use super::pixel::Rgba;
use super::traits::{ImageView, ImageViewMut};
use crate::error::{check_rgba_len, rgba_len, PixelError};

/// Owned RGBA buffer, channel order R, G, B, A.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    /// Image width in pixels
    pub(crate) w: usize,
    /// Image height in pixels
    pub(crate) h: usize,
    /// Backing storage, `w * h * 4` bytes
    pub(crate) data: Vec<u8>,
}

impl RgbaImage {
    /// Construct a zero-initialized (transparent black) image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Result<Self, PixelError> {
        let len = rgba_len(w, h)?;
        Ok(Self {
            w,
            h,
            data: vec![0; len],
        })
    }

    /// Wrap decoded pixel data, rejecting buffers whose length is not `w * h * 4`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self, PixelError> {
        check_rgba_len(w, h, data.len())?;
        Ok(Self { w, h, data })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        w: usize,
        h: usize,
        mut f: impl FnMut(usize, usize) -> Rgba,
    ) -> Result<Self, PixelError> {
        let mut data = Vec::with_capacity(rgba_len(w, h)?);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&f(x, y).0);
            }
        }
        Ok(Self { w, h, data })
    }

    /// Pre-sized output buffer of the same dimensions as an already valid image.
    pub(crate) fn blank_like(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h * 4],
        }
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
    /// Convert (x, y) to the byte offset of that pixel's red channel.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 4
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = self.idx(x, y);
        Rgba::from_slice(&self.data[i..i + 4])
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: Rgba) {
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&px.0);
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data.chunks_exact(4).map(Rgba::from_slice)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `RgbaView`.
    pub fn as_view(&self) -> RgbaView<'_> {
        RgbaView {
            w: self.w,
            h: self.h,
            data: &self.data,
        }
    }
}

impl ImageView for RgbaImage {
    type Sample = u8;
    const CHANNELS: usize = 4;

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
        self.w * 4
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.w * 4]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for RgbaImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let stride = self.stride();
        let start = y * stride;
        &mut self.data[start..start + stride]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.data)
    }
}

/// Borrowed RGBA buffer, e.g. the `data` of a decoder's output record.
#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    w: usize,
    h: usize,
    data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self, PixelError> {
        check_rgba_len(w, h, data.len())?;
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.w + x) * 4;
        Rgba::from_slice(&self.data[i..i + 4])
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage {
            w: self.w,
            h: self.h,
            data: self.data.to_vec(),
        }
    }
}

impl<'a> ImageView for RgbaView<'a> {
    type Sample = u8;
    const CHANNELS: usize = 4;

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
        self.w * 4
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.w * 4]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(self.data)
    }
}
