// Window + software drawing utilities.
// Provided here:
// 1) A window that shows the canvas with the picker bar beside it.
// 2) Rectangle fills and whole-buffer blits for compositing the screen.
// 3) A tiny 5x7 bitmap font for the HUD line.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,       // the on-screen window you see
    left_was_down: bool,  // previous frame's button state, for click edges
}

impl Drawer {
    /// Create a window sized to the canvas plus the picker bar.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, left_was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<(usize, usize)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as usize, y.max(0.0) as usize))
    }

    /// A fresh left-button press and where it landed. Fires once per press;
    /// holding the button does not repeat it, matching fill-on-click.
    pub fn take_click(&mut self) -> Option<(usize, usize)> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let fresh = down && !self.left_was_down;
        self.left_was_down = down;
        if fresh { self.mouse_pos() } else { None }
    }
}

/* ---------- Software drawing: pixels, rectangles, blits, tiny font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill an axis-aligned rectangle, clipped to the buffer.
/// Visual: a solid block of `color`, used for palette rows and the HUD swatch.
pub fn fill_rect(fb: &mut FrameBuffer, x: usize, y: usize, w: usize, h: usize, color: u32) {
    let x1 = (x + w).min(fb.width);
    let y1 = (y + h).min(fb.height);
    for row in y..y1 {
        let ofs = row * fb.width;
        for col in x..x1 {
            fb.pixels[ofs + col] = color;
        }
    }
}

/// Copy all of `src` into `dst` with its top-left corner at (dx, dy),
/// clipping whatever would land outside `dst`.
/// Visual: how the canvas and the picker bar land on the screen each frame.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, dx: usize, dy: usize) {
    let rows = src.height.min(dst.height.saturating_sub(dy));
    let cols = src.width.min(dst.width.saturating_sub(dx));
    for row in 0..rows {
        let s = row * src.width;
        let d = (dy + row) * dst.width + dx;
        dst.pixels[d..d + cols].copy_from_slice(&src.pixels[s..s + cols]);
    }
}

/* ---------- 5x7 bitmap font (ASCII subset we need for "FILL: 255 255 255") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters we need: F I L
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),

        // Punctuation: space, colon
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a small glyph with a 1-pixel white halo so it stays readable on
/// both the white page and freshly filled regions.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Halo pass: offset by (1,1) in white for contrast on dark fills
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00FFFFFF);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PAGE_WHITE;

    #[test]
    fn fill_rect_clips_to_the_buffer() {
        let mut fb = FrameBuffer::filled(4, 4, 0);
        fill_rect(&mut fb, 2, 2, 10, 10, PAGE_WHITE);
        let lit = fb.pixels.iter().filter(|&&px| px == PAGE_WHITE).count();
        assert_eq!(lit, 4); // the 2x2 corner, nothing out of range
    }

    #[test]
    fn blit_places_src_at_the_offset() {
        let mut dst = FrameBuffer::filled(5, 3, 0);
        let src = FrameBuffer::filled(2, 3, PAGE_WHITE);
        blit(&mut dst, &src, 3, 0);
        for y in 0..3 {
            for x in 0..5 {
                let expect = if x >= 3 { PAGE_WHITE } else { 0 };
                assert_eq!(dst.pixels[y * 5 + x], expect, "({x}, {y})");
            }
        }
    }

    #[test]
    fn blit_clips_an_oversized_source() {
        let mut dst = FrameBuffer::filled(3, 3, 0);
        let src = FrameBuffer::filled(5, 5, PAGE_WHITE);
        blit(&mut dst, &src, 1, 1);
        assert_eq!(dst.pixels.iter().filter(|&&px| px == PAGE_WHITE).count(), 4);
    }
}
