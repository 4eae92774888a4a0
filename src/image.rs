#![allow(dead_code)]

use crate::renderer::Renderer;
use crate::vector::Vec2i;

/////////////////////////////////////////////////////////////////////////////
//
// Blitting a whole source image onto the canvas, pixel by pixel, sampling
// color straight from the caller's buffer rather than from `current_color`
// set ahead of time. This is the one primitive that mutates `current_color`
// as a side effect: it walks it across the source buffer row by row the
// same way the textured triangle path walks it across a texture, and
// leaves it pointing at whatever the last emitted pixel used. Callers that
// still care about the color set before the call must save and restore it
// themselves.
//
/////////////////////////////////////////////////////////////////////////////

impl<'c, S> Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Draw `buffer`, a `w x h` grid of `channels`-byte pixels, with its
    /// top-left corner at `(x, y)`. Off-canvas origins are a silent no-op;
    /// cells that spill past the right or bottom edge are dropped one by
    /// one by `draw_pixel`'s own bounds check rather than clamped here.
    pub fn draw_image(&mut self, x: u32, y: u32, buffer: &'c [u8], w: u32, h: u32, scale: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        let channels = self.channels as u32;

        for row in 0..h {
            for col in 0..w {
                let start = ((row * w + col) * channels) as usize;
                self.current_color = &buffer[start..start + channels as usize];

                let px = x + col * scale;
                let py = y + row * scale;

                if scale == 1 {
                    self.draw_pixel(px, py);
                } else {
                    self.draw_square(
                        Vec2i::new(px as i32, py as i32),
                        Vec2i::new((px + scale - 1) as i32, (py + scale - 1) as i32),
                    );
                }
            }
        }
    }
}
