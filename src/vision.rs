// Outline tracer.
// Visual expectation: after `render_outline`, the white page carries the
// picture's dark line work as pure black, and nothing else; everything the
// user will color stays white.

use crate::error::Error;
use crate::types::FrameBuffer;

/// Luma cutoff for "this pixel is line work". The original picture is
/// thresholded here: at or below the cutoff a pixel counts as part of the
/// outline, above it the page stays blank.
pub const OUTLINE_THRESHOLD: u8 = 180;

/// BT.601 grayscale of a packed pixel, integer arithmetic only.
#[inline]
fn luma(px: u32) -> u8 {
    let r = (px >> 16) & 0xFF;
    let g = (px >> 8) & 0xFF;
    let b = px & 0xFF;
    ((r * 299 + g * 587 + b * 114) / 1000) as u8
}

/// Transfer the dark pixels of `src` onto `canvas` as `marker`.
///
/// Every source pixel whose luma is at or below `threshold` sets the
/// corresponding canvas pixel to `marker`; all other canvas pixels are left
/// exactly as they were. The canvas must match the source's dimensions.
pub fn render_outline(
    src: &FrameBuffer,
    canvas: &mut FrameBuffer,
    threshold: u8,
    marker: u32,
) -> Result<(), Error> {
    if src.width != canvas.width || src.height != canvas.height {
        return Err(Error::BufferShape(
            "render_outline: size mismatch src<->canvas".into(),
        ));
    }
    if src.pixels.len() != src.width * src.height {
        return Err(Error::BufferShape(
            "render_outline: src storage disagrees with its dimensions".into(),
        ));
    }

    for (idx, &px) in src.pixels.iter().enumerate() {
        if luma(px) <= threshold {
            canvas.pixels[idx] = marker;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{pack_rgb, OUTLINE_BLACK, PAGE_WHITE};

    #[test]
    fn dark_pixels_land_on_the_canvas_as_marker() {
        let mut src = FrameBuffer::filled(3, 1, PAGE_WHITE);
        src.pixels[1] = pack_rgb(20, 20, 20); // a line pixel
        let mut canvas = FrameBuffer::filled(3, 1, PAGE_WHITE);

        render_outline(&src, &mut canvas, OUTLINE_THRESHOLD, OUTLINE_BLACK).unwrap();

        assert_eq!(canvas.pixels, vec![PAGE_WHITE, OUTLINE_BLACK, PAGE_WHITE]);
    }

    #[test]
    fn threshold_is_inclusive() {
        // Gray 180 is line work, gray 181 is page.
        let mut src = FrameBuffer::filled(2, 1, pack_rgb(180, 180, 180));
        src.pixels[1] = pack_rgb(181, 181, 181);
        let mut canvas = FrameBuffer::filled(2, 1, PAGE_WHITE);

        render_outline(&src, &mut canvas, OUTLINE_THRESHOLD, OUTLINE_BLACK).unwrap();

        assert_eq!(canvas.pixels[0], OUTLINE_BLACK);
        assert_eq!(canvas.pixels[1], PAGE_WHITE);
    }

    #[test]
    fn untouched_canvas_pixels_keep_their_color() {
        let src = FrameBuffer::filled(2, 2, PAGE_WHITE); // nothing dark
        let mut canvas = FrameBuffer::filled(2, 2, 0x00123456);

        render_outline(&src, &mut canvas, OUTLINE_THRESHOLD, OUTLINE_BLACK).unwrap();

        assert!(canvas.pixels.iter().all(|&px| px == 0x00123456));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let src = FrameBuffer::filled(3, 3, PAGE_WHITE);
        let mut canvas = FrameBuffer::filled(2, 3, PAGE_WHITE);
        let result = render_outline(&src, &mut canvas, OUTLINE_THRESHOLD, OUTLINE_BLACK);
        assert!(result.is_err());
    }
}
