/// Generates an opaque RGBA checkerboard alternating `dark` and `light` cells.
pub fn checkerboard_rgba(width: usize, height: usize, cell: usize, dark: u8, light: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { dark } else { light };
            let o = (y * width + x) * 4;
            img[o..o + 4].copy_from_slice(&[val, val, val, 255]);
        }
    }
    img
}

/// Horizontal red ramp with a constant green/blue and a vertical alpha ramp.
pub fn gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    let span_x = width.saturating_sub(1).max(1);
    let span_y = height.saturating_sub(1).max(1);
    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / span_x) as u8;
            let a = (y * 255 / span_y) as u8;
            img.extend_from_slice(&[r, 100, 200, a]);
        }
    }
    img
}

/// Minimal byte stream framed like a JPEG, with a start-of-scan marker at
/// `sos_at` (must be even for the scanner to report it).
pub fn jpeg_framed(len: usize, sos_at: Option<usize>) -> Vec<u8> {
    assert!(len >= 4);
    let mut buf = vec![0x00u8; len];
    buf[..2].copy_from_slice(&[0xFF, 0xD8]);
    buf[len - 2..].copy_from_slice(&[0xFF, 0xD9]);
    if let Some(at) = sos_at {
        buf[at..at + 2].copy_from_slice(&[0xFF, 0xDA]);
    }
    buf
}
