// What you SEE now:
// • The picture's dark line work, traced in black on a white page.
// • A rainbow picker bar down the right edge of the window.
// • Left-click the bar: that color becomes the active brush.
// • Left-click inside the drawing: the enclosed region floods with the
//   active color, stopping at the outline. ESC quits.

mod draw;
mod error;
mod fill;
mod loader;
mod palette;
mod types;
mod vision;

use draw::{blit, draw_text_5x7, fill_rect, Drawer};
use error::Error;
use fill::FillEngine;
use types::{unpack_rgb, FrameBuffer, OUTLINE_BLACK, PAGE_WHITE};

// Picture used when no path is given on the command line.
const DEFAULT_PICTURE: &str = "pusheen.jpg";

fn main() -> Result<(), Error> {
    /* --- Picture + outline setup ---
       Visual: nothing on screen yet; we build the page the user will color. */
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PICTURE.to_string());
    let picture = loader::load_picture(&path)?;
    let (w, h) = (picture.width, picture.height);
    println!("Loaded {path} ({w}x{h})");

    // White page, then the picture's dark lines transferred onto it.
    let mut canvas = FrameBuffer::filled(w, h, PAGE_WHITE);
    vision::render_outline(&picture, &mut canvas, vision::OUTLINE_THRESHOLD, OUTLINE_BLACK)?;

    /* --- Picker bar + window + reusable screen buffer ---
       Visual: the window opens showing page and bar side by side. */
    let bar = palette::render_bar(h);
    let mut drawer = Drawer::new("Colorbook - Click To Fill", w + palette::BAR_WIDTH, h)?;
    let mut screen = FrameBuffer::filled(w + palette::BAR_WIDTH, h, PAGE_WHITE);

    /* --- Fill engine + brush ---
       The engine is configured once with the outline color it must never
       repaint; the brush starts white like an empty page. */
    let engine = FillEngine::new(OUTLINE_BLACK);
    let mut fill_color = PAGE_WHITE;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Route a fresh click either to the bar (pick) or the page (fill).
           One fill runs to completion here before the next frame is drawn. */
        if let Some((mx, my)) = drawer.take_click() {
            if mx >= w {
                // Visual: the HUD swatch changes to the clicked bar cell.
                fill_color = bar.pixels[my * bar.width + (mx - w)];
                let (r, g, b) = unpack_rgb(fill_color);
                println!("Picked ({r}, {g}, {b})");
            } else {
                // Visual: the region around the click floods with the brush.
                let painted = engine.fill(&mut canvas, mx as i32, my as i32, fill_color)?;
                println!("Filled {painted} pixels at ({mx}, {my})");
            }
        }

        /* 2) Rebuild the screen: drawing on the left, picker on the right.
           The HUD goes on the screen only, never on the persistent canvas. */
        blit(&mut screen, &canvas, 0, 0);
        blit(&mut screen, &bar, w, 0);

        let (r, g, b) = unpack_rgb(fill_color);
        let hud = format!("FILL: {r} {g} {b}");
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_20_20_20);
        // Swatch of the active brush right after the text.
        let swatch_x = 8 + 6 * hud.len() + 4;
        fill_rect(&mut screen, swatch_x, 7, 18, 9, fill_color);

        /* 3) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
    }

    Ok(())
}
