pub mod io;
pub mod matrix;
pub mod ops;
pub mod pixel;
pub mod rgba;
pub mod traits;
pub mod weights;

pub use self::matrix::PixelMatrix;
pub use self::pixel::{Channel, Rgba};
pub use self::rgba::{RgbaImage, RgbaView};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::weights::WeightMap;
