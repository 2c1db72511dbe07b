//! Pixel-level processing for decoded RGBA images.
//!
//! - [`sniff`]: recognise an encoded file from its boundary markers.
//! - [`image`]: flat RGBA buffers, the row/column [`PixelMatrix`] view, and
//!   float [`WeightMap`] grids.
//! - [`color`]: per-pixel grayscale and invert.
//! - [`filter`]: ring-neighbourhood blur and kernel convolution.
//! - [`gaussian`]: closed-form 2-D Gaussian weights and weight images.
//!
//! Every transform takes its input by reference and returns a new buffer.

pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod gaussian;
pub mod image;
pub mod sniff;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::PixelError;
pub use crate::image::{Channel, PixelMatrix, Rgba, RgbaImage, RgbaView, WeightMap};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_filters::prelude::*;
///
/// let data = vec![255u8; 3 * 3 * 4];
/// let matrix = PixelMatrix::from_raw(&data, 3, 3).unwrap();
/// let blurred = blur(&matrix, 1);
/// assert_eq!(blurred.as_bytes(), data.as_slice());
/// ```
pub mod prelude {
    pub use crate::color::{grayscale_image, grayscale_luma, invert, invert_image};
    pub use crate::filter::{average_neighbours, blur, blur_interior, BlurOptions};
    pub use crate::gaussian::{weight_image, weight_matrix, GaussianParams};
    pub use crate::image::{Channel, PixelMatrix, Rgba, RgbaImage};
    pub use crate::sniff::{is_jpeg, locate_start_of_scan};
}
