//! Per-pixel colour transforms.
//!
//! Each transform maps one RGBA pixel to another and leaves alpha as is. The
//! whole-image variants run the pixel function over every 4-byte stride and
//! return a freshly allocated image of the same size.
use crate::image::{Rgba, RgbaImage};

/// ITU-R BT.601 luma weights for R, G and B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// `l = round(0.299 R + 0.587 G + 0.114 B)`, output `(l, l, l, A)`.
#[inline]
pub fn grayscale_luma(px: Rgba) -> Rgba {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let luma = (f64::from(px.r()) * wr + f64::from(px.g()) * wg + f64::from(px.b()) * wb).round();
    let l = luma.clamp(0.0, 255.0) as u8;
    Rgba::new(l, l, l, px.a())
}

/// `(255 - R, 255 - G, 255 - B, A)`.
#[inline]
pub fn invert(px: Rgba) -> Rgba {
    Rgba::new(255 - px.r(), 255 - px.g(), 255 - px.b(), px.a())
}

/// Apply `f` to every pixel of `image`.
pub fn map_pixels(image: &RgbaImage, f: impl Fn(Rgba) -> Rgba) -> RgbaImage {
    let mut out = RgbaImage::blank_like(image.width(), image.height());
    for (src, dst) in image
        .as_bytes()
        .chunks_exact(4)
        .zip(out.data.chunks_exact_mut(4))
    {
        dst.copy_from_slice(&f(Rgba::from_slice(src)).0);
    }
    out
}

pub fn grayscale_image(image: &RgbaImage) -> RgbaImage {
    map_pixels(image, grayscale_luma)
}

pub fn invert_image(image: &RgbaImage) -> RgbaImage {
    map_pixels(image, invert)
}
