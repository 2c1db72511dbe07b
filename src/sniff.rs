//! Format detection from boundary markers.
//!
//! Only the first and last bytes of a buffer are inspected; nothing here
//! parses segment structure. Short or empty input never matches.

/// Fixed byte sequences framing an encoded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSignature {
    pub name: &'static str,
    pub start: &'static [u8],
    /// Trailing marker; empty when the format has none we check.
    pub end: &'static [u8],
}

impl FormatSignature {
    /// JPEG: SOI `FF D8` ... EOI `FF D9`.
    pub const JPEG: FormatSignature = FormatSignature {
        name: "jpeg",
        start: &[0xFF, 0xD8],
        end: &[0xFF, 0xD9],
    };

    /// PNG: 8-byte magic header.
    pub const PNG: FormatSignature = FormatSignature {
        name: "png",
        start: &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        end: &[],
    };

    /// True if `buf` starts with `start`, ends with `end` and has room for both.
    pub fn matches(&self, buf: &[u8]) -> bool {
        buf.len() >= self.start.len() + self.end.len()
            && buf.starts_with(self.start)
            && buf.ends_with(self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// JPEG start-of-scan marker.
pub const START_OF_SCAN: [u8; 2] = [0xFF, 0xDA];

/// True iff `buf` is at least 4 bytes, begins with `FF D8` and ends with `FF D9`.
pub fn is_jpeg(buf: &[u8]) -> bool {
    FormatSignature::JPEG.matches(buf)
}

/// Name the encoding of `buf` from its markers, if known.
pub fn sniff_format(buf: &[u8]) -> Option<ImageFormat> {
    if is_jpeg(buf) {
        Some(ImageFormat::Jpeg)
    } else if FormatSignature::PNG.matches(buf) {
        Some(ImageFormat::Png)
    } else {
        None
    }
}

/// Index just past the last `FF DA` pair found on an even byte offset, or 0.
///
/// Bytes are read as consecutive pairs `(buf[2i], buf[2i + 1])`, so a marker
/// starting at an odd offset is not seen. Diagnostic only.
pub fn locate_start_of_scan(buf: &[u8]) -> usize {
    buf.chunks_exact(2)
        .enumerate()
        .filter(|(_, pair)| *pair == START_OF_SCAN)
        .last()
        .map_or(0, |(i, _)| i * 2 + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg_like(len: usize) -> Vec<u8> {
        let mut buf = vec![0x11; len];
        buf[0] = 0xFF;
        buf[1] = 0xD8;
        buf[len - 2] = 0xFF;
        buf[len - 1] = 0xD9;
        buf
    }

    fn png_like(len: usize) -> Vec<u8> {
        let mut buf = vec![0x22; len];
        buf[..8].copy_from_slice(FormatSignature::PNG.start);
        buf
    }

    #[test]
    fn jpeg_markers_detected() {
        assert!(is_jpeg(&jpeg_like(4)));
        assert!(is_jpeg(&jpeg_like(64)));
        assert_eq!(sniff_format(&jpeg_like(64)), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn png_of_same_size_is_not_jpeg() {
        let png = png_like(64);
        assert!(!is_jpeg(&png));
        assert_eq!(sniff_format(&png), Some(ImageFormat::Png));
    }

    #[test]
    fn short_or_empty_input_fails_closed() {
        assert!(!is_jpeg(&[]));
        assert!(!is_jpeg(&[0xFF]));
        assert!(!is_jpeg(&[0xFF, 0xD8]));
        assert!(!is_jpeg(&[0xFF, 0xD8, 0xD9]));
        // Overlapping start/end markers are too short to be a JPEG.
        assert!(!is_jpeg(&[0xFF, 0xD8, 0xFF]));
        assert_eq!(sniff_format(&[]), None);
    }

    #[test]
    fn wrong_trailer_is_rejected() {
        let mut buf = jpeg_like(16);
        buf[15] = 0xD8;
        assert!(!is_jpeg(&buf));
        let mut buf = jpeg_like(16);
        buf[1] = 0xD9;
        assert!(!is_jpeg(&buf));
    }

    #[test]
    fn start_of_scan_found_on_even_offset() {
        let mut buf = jpeg_like(32);
        buf[10] = 0xFF;
        buf[11] = 0xDA;
        assert_eq!(locate_start_of_scan(&buf), 12);
    }

    #[test]
    fn start_of_scan_reports_last_match() {
        let mut buf = vec![0u8; 20];
        buf[4..6].copy_from_slice(&START_OF_SCAN);
        buf[14..16].copy_from_slice(&START_OF_SCAN);
        assert_eq!(locate_start_of_scan(&buf), 16);
    }

    #[test]
    fn start_of_scan_absent_is_zero() {
        assert_eq!(locate_start_of_scan(&[]), 0);
        assert_eq!(locate_start_of_scan(&jpeg_like(32)), 0);
    }

    // Known limitation: only even-aligned pairs are examined, so a marker
    // beginning at an odd offset is missed.
    #[test]
    fn start_of_scan_on_odd_offset_is_missed() {
        let mut buf = vec![0u8; 16];
        buf[5] = 0xFF;
        buf[6] = 0xDA;
        assert_eq!(locate_start_of_scan(&buf), 0);
    }
}
