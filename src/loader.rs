// Loads the picture to be colored and converts it into a buffer
// suitable for the window.
// Visual expectation: after `load_picture`, you hold a Vec<u32> where each
// pixel is 0x00RRGGBB, ready for outline tracing and display.

use crate::error::Error;
use crate::types::{pack_rgb, FrameBuffer};

/// Decode an image file (JPEG, PNG, ...) into a FrameBuffer.
pub fn load_picture(path: &str) -> Result<FrameBuffer, Error> {
    // 1) Open and decode the file (this might fail: missing file, bad data).
    let decoded = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("Open {path}: {e}")))?;

    // 2) Normalize to RGB8 regardless of the on-disk format.
    let rgb_img = decoded.to_rgb8();

    // 3) Pack into the window's pixel layout (u32 per pixel, 0x00RRGGBB).
    let (w, h) = rgb_img.dimensions();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));
    for (_x, _y, pixel) in rgb_img.enumerate_pixels() {
        out.push(pack_rgb(pixel[0], pixel[1], pixel[2]));
    }

    Ok(FrameBuffer {
        width: w as usize,
        height: h as usize,
        pixels: out,
    })
}
