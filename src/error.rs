//! Error type shared by the buffer adapters and matrix helpers.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelError {
    /// Buffer length disagrees with the declared dimensions.
    #[error(
        "buffer of {actual} bytes does not match a {width}x{height} RGBA image \
         (expected {expected} bytes)"
    )]
    SizeMismatch {
        expected: usize,
        actual: usize,
        width: usize,
        height: usize,
    },
    /// `width * height * 4` does not fit in `usize`.
    #[error("image dimensions {width}x{height} overflow the addressable buffer size")]
    Overflow { width: usize, height: usize },
    /// Rows of a grid have inconsistent lengths, or two grids cannot be joined.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Number of bytes an RGBA image of `width × height` occupies.
pub fn rgba_len(width: usize, height: usize) -> Result<usize, PixelError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(PixelError::Overflow { width, height })
}

/// Validate that `len` bytes hold exactly one `width × height` RGBA image.
pub fn check_rgba_len(width: usize, height: usize, len: usize) -> Result<(), PixelError> {
    let expected = rgba_len(width, height)?;
    if expected != len {
        return Err(PixelError::SizeMismatch {
            expected,
            actual: len,
            width,
            height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_len_detects_overflow() {
        assert_eq!(rgba_len(3, 2), Ok(24));
        assert_eq!(
            rgba_len(usize::MAX, 2),
            Err(PixelError::Overflow {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn size_mismatch_reports_both_lengths() {
        let err = check_rgba_len(2, 2, 15).unwrap_err();
        assert_eq!(
            err,
            PixelError::SizeMismatch {
                expected: 16,
                actual: 15,
                width: 2,
                height: 2
            }
        );
        assert!(err.to_string().contains("expected 16 bytes"));
    }
}
