// Click-to-fill engine: repaints the connected region around a seed pixel
// without ever crossing the outline.
//
// The traversal runs in generations. Each generation's frontier is the list
// of pixels painted in the previous round; their 4-connected neighbors form
// the next round's candidates. A candidate is dropped when it lies off the
// canvas, sits on the outline, or already carries the fill color. The last
// rule is what stops the loop: a pixel can be painted at most once, so the
// total number of paint events never exceeds width * height.

use crate::error::Error;
use crate::types::FrameBuffer;

/// A pixel location. Signed so that neighbors of edge pixels can exist
/// before the bounds check throws them out.
pub type Point = (i32, i32);

/// True iff (x, y) addresses a pixel inside a width x height canvas.
#[inline]
pub fn in_bounds(x: i32, y: i32, width: usize, height: usize) -> bool {
    x >= 0 && (x as usize) < width && y >= 0 && (y as usize) < height
}

/// Region filler, configured with the one color it must treat as a wall.
pub struct FillEngine {
    boundary: u32,
}

impl FillEngine {
    /// `boundary` is the reserved outline color; the engine will refuse to
    /// repaint any pixel holding it.
    pub fn new(boundary: u32) -> Self {
        Self { boundary }
    }

    /// True iff `color` is the reserved outline color.
    #[inline]
    pub fn is_boundary(&self, color: u32) -> bool {
        color == self.boundary
    }

    /// Flood-fill the region around (seed_x, seed_y) with `color`.
    ///
    /// Returns the number of pixels painted. A seed that is off the canvas,
    /// on the outline, or already the requested color paints nothing; that
    /// is a normal outcome, not an error. The only error is a canvas whose
    /// storage disagrees with its declared dimensions, rejected before any
    /// pixel is touched.
    pub fn fill(
        &self,
        canvas: &mut FrameBuffer,
        seed_x: i32,
        seed_y: i32,
        color: u32,
    ) -> Result<usize, Error> {
        if canvas.pixels.len() != canvas.width * canvas.height {
            return Err(Error::BufferShape(format!(
                "fill: {}x{} canvas holds {} pixels",
                canvas.width,
                canvas.height,
                canvas.pixels.len()
            )));
        }

        let mut painted = 0;

        // The first frontier is just the click point itself.
        let mut frontier =
            self.paint_candidates(vec![(seed_x, seed_y)], canvas, color, &mut painted);

        // Expand until a whole generation yields nothing paintable.
        while !frontier.is_empty() {
            let candidates = neighbors(&frontier);
            frontier = self.paint_candidates(candidates, canvas, color, &mut painted);
        }

        Ok(painted)
    }

    /// Pruning step: walk the candidates in order, paint every legal one and
    /// keep it for the next expansion; drop everything off-canvas, on the
    /// outline, or already painted. The outline test runs before the
    /// fill-color test, so outline pixels survive even when the outline
    /// color itself is requested as the fill color.
    ///
    /// A coordinate appearing twice in one batch is painted on first sight
    /// and dropped on second sight, so `neighbors` never needs to dedup.
    fn paint_candidates(
        &self,
        candidates: Vec<Point>,
        canvas: &mut FrameBuffer,
        color: u32,
        painted: &mut usize,
    ) -> Vec<Point> {
        let mut kept = Vec::with_capacity(candidates.len());
        for (x, y) in candidates {
            if !in_bounds(x, y, canvas.width, canvas.height) {
                continue;
            }
            let idx = (y as usize) * canvas.width + (x as usize);
            let current = canvas.pixels[idx];
            if self.is_boundary(current) || current == color {
                continue;
            }
            canvas.pixels[idx] = color;
            *painted += 1;
            kept.push((x, y));
        }
        kept
    }
}

/// The 4-connected neighbors of every frontier pixel, emitted in
/// above / below / right / left order. No bounds or duplicate filtering
/// happens here; the next pruning pass handles both. Diagonals are
/// deliberately not generated.
fn neighbors(frontier: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(frontier.len() * 4);
    for &(x, y) in frontier {
        out.push((x, y + 1));
        out.push((x, y - 1));
        out.push((x + 1, y));
        out.push((x - 1, y));
    }
    out
}
