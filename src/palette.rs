// Rainbow picker bar.
// Visual expectation: a vertical strip beside the canvas walking the hue
// circle top to bottom, with a near-black band and a white band at the
// bottom so dark and blank are both selectable.

use crate::draw::fill_rect;
use crate::types::{pack_rgb, FrameBuffer, PAGE_WHITE};

/// Width of the picker strip in pixels.
pub const BAR_WIDTH: usize = 50;

/// Rows reserved below the ramps: one band this tall for off-black,
/// one for white.
const STRIP_HEIGHT: usize = 10;

/// One vertical ramp sweeps a single channel while the other two stay
/// fixed. The fixed pair always includes a 255, so no ramp color can ever
/// reach pure black.
#[derive(Clone, Copy)]
enum Ramp {
    Red(u8, u8),   // sweep red, fixed (green, blue)
    Green(u8, u8), // sweep green, fixed (red, blue)
    Blue(u8, u8),  // sweep blue, fixed (red, green)
}

impl Ramp {
    fn color_at(self, v: u8) -> u32 {
        match self {
            Ramp::Red(g, b) => pack_rgb(v, g, b),
            Ramp::Green(r, b) => pack_rgb(r, v, b),
            Ramp::Blue(r, g) => pack_rgb(r, g, v),
        }
    }
}

/// The six ramps of the hue circle in order: green up, red down, blue up,
/// green down, red up, blue down. (start, stop) bound the swept value;
/// stop sits one step past the last drawn value, matching an exclusive end.
const RAMPS: [(Ramp, f32, f32); 6] = [
    (Ramp::Green(255, 0), 0.0, 256.0),
    (Ramp::Red(255, 0), 255.0, -1.0),
    (Ramp::Blue(0, 255), 0.0, 256.0),
    (Ramp::Green(0, 255), 255.0, -1.0),
    (Ramp::Red(0, 255), 0.0, 256.0),
    (Ramp::Blue(255, 0), 255.0, -1.0),
];

/// Build the picker bar for a canvas of the given height.
pub fn render_bar(height: usize) -> FrameBuffer {
    let mut bar = FrameBuffer::filled(BAR_WIDTH, height, PAGE_WHITE);

    // The ramps share the rows above the two reserved strips; each ramp
    // advances the swept channel by `step` per 1-pixel row, so all six
    // together cover the 6 * 255 steps of the hue circle.
    let ramp_rows = height.saturating_sub(2 * STRIP_HEIGHT);
    if ramp_rows == 0 {
        return bar; // window too short for ramps; an all-white bar still works
    }
    let step = 255.0 / (ramp_rows as f32 / 6.0);

    let mut y = 0usize;
    for &(ramp, start, stop) in &RAMPS {
        let signed_step = if start < stop { step } else { -step };
        y = sweep(&mut bar, ramp, y, start, stop, signed_step);
    }

    // Off-black band: (1, 1, 1) is the darkest pickable color, one step
    // away from the outline black the fill engine refuses to paint.
    fill_rect(&mut bar, 0, ramp_rows - 1, BAR_WIDTH, STRIP_HEIGHT, pack_rgb(1, 1, 1));
    // The rows below it keep the initial white.
    bar
}

/// Draw one ramp starting at row `y`, one bar-wide row per step.
/// Returns the row after the last one drawn.
fn sweep(bar: &mut FrameBuffer, ramp: Ramp, mut y: usize, start: f32, stop: f32, step: f32) -> usize {
    let mut val = start;
    while (step > 0.0 && val < stop) || (step < 0.0 && val > stop) {
        fill_rect(bar, 0, y, BAR_WIDTH, 1, ramp.color_at(val.clamp(0.0, 255.0) as u8));
        y += 1;
        val += step;
    }
    y
}
