#![allow(dead_code)]

use crate::renderer::Renderer;
use crate::vector::Vec2i;

/////////////////////////////////////////////////////////////////////////////
//
// Bitmap glyph and string drawing. A glyph is 8 rows of 8 bits, row `gy`
// bit `gx` set means "paint this cell". The caller owns the font table
// (a `[[u8; 8]; N]`-shaped byte slice indexed by character code) and lends
// it for the duration of the call, same as the color and texture bytes.
//
/////////////////////////////////////////////////////////////////////////////

impl<'c, S> Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Draw one 8x8 glyph at `(x, y)`, scaling each set bit into an
    /// `scale x scale` square of pixels. `glyph` must have exactly 8
    /// bytes, one per row, bit `gx` of row `gy` selecting column `gx`.
    pub fn draw_glyph(&mut self, x: u32, y: u32, glyph: &[u8], scale: u32) {
        let x = crate::math::max_clamp(x as i32, self.wen) as u32;
        let y = crate::math::max_clamp(y as i32, self.hen) as u32;

        for gx in 0..8u32 {
            let bit = 1u8 << gx;

            for gy in 0..8u32 {
                if glyph[gy as usize] & bit == 0 {
                    continue;
                }

                if scale == 1 {
                    self.draw_pixel(x + gx, y + gy);
                } else {
                    let sx = x + gx * scale;
                    let sy = y + gy * scale;
                    self.draw_square(
                        Vec2i::new(sx as i32, sy as i32),
                        Vec2i::new((sx + scale - 1) as i32, (sy + scale - 1) as i32),
                    );
                }
            }
        }
    }

    /// Draw `text` glyph-by-glyph starting at `(x, y)`, advancing the cursor
    /// by `8 * scale + hs` pixels after every glyph. `font` is indexed by
    /// byte value, so it must have at least `fmax + 1` rows.
    ///
    /// When `special` is set, `\n` drops the cursor down `8 + vs` pixels and
    /// resets it to the starting column, and `\r` resets the column without
    /// moving vertically; both are skipped rather than drawn as glyphs.
    /// Any byte greater than `fmax` is skipped outright, which is how the
    /// logo's own lettering restricts itself to a font subset.
    pub fn draw_string(
        &mut self,
        x: u32,
        y: u32,
        text: &str,
        font: &[[u8; 8]],
        scale: u32,
        vs: i32,
        hs: i32,
        fmax: u8,
        special: bool,
    ) {
        let x = crate::math::max_clamp(x as i32, self.wen) as u32;
        let y = crate::math::max_clamp(y as i32, self.hen) as u32;

        let x0 = x as i32;
        let mut cx = x as i32;
        let mut cy = y as i32;

        for &byte in text.as_bytes() {
            if byte > fmax {
                continue;
            }

            self.draw_glyph(cx as u32, cy as u32, &font[byte as usize], scale);

            if special {
                if byte == b'\n' {
                    cy += 8 + vs;
                    continue;
                }
                if byte == b'\r' {
                    cx = x0;
                    continue;
                }
            }

            cx += 8 * scale as i32 + hs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;

    fn solid_glyph() -> [u8; 8] {
        [0xFF; 8]
    }

    fn recording_renderer<'c>(
        w: u32,
        h: u32,
    ) -> (
        Renderer<'c, impl FnMut(u32, u32, &[u8])>,
        std::rc::Rc<std::cell::RefCell<Vec<(u32, u32)>>>,
    ) {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let log2 = log.clone();
        let sink = move |x: u32, y: u32, _color: &[u8]| {
            log2.borrow_mut().push((x, y));
        };
        (Renderer::new(w, h, sink, 3).unwrap(), log)
    }

    #[test]
    fn fully_set_glyph_paints_all_64_cells() {
        let (mut r, log) = recording_renderer(40, 40);
        r.set_color(&rgb::WHITE);
        r.draw_glyph(4, 4, &solid_glyph(), 1);
        assert_eq!(log.borrow().len(), 64);
    }

    #[test]
    fn scaled_glyph_paints_squares_not_single_pixels() {
        let (mut r, log) = recording_renderer(40, 40);
        r.set_color(&rgb::WHITE);
        r.draw_glyph(0, 0, &solid_glyph(), 2);
        // every one of the 64 "on" cells becomes a 2x2 block: 256 pixels
        assert_eq!(log.borrow().len(), 256);
    }

    #[test]
    fn newline_drops_the_cursor_and_resets_the_column() {
        let (mut r, log) = recording_renderer(60, 60);
        r.set_color(&rgb::WHITE);
        let font = vec![solid_glyph(); 128];
        r.draw_string(0, 0, "A\nB", &font, 1, 1, 0, 127, true);

        let recorded = log.borrow();
        let max_y_first_row = recorded.iter().filter(|(_, y)| *y < 9).count();
        assert!(max_y_first_row > 0);
        let second_row_min_y = recorded.iter().map(|(_, y)| *y).max().unwrap();
        assert!(second_row_min_y >= 9);
    }

    #[test]
    fn bytes_above_fmax_are_skipped() {
        let (mut r, log) = recording_renderer(60, 60);
        r.set_color(&rgb::WHITE);
        let font = vec![solid_glyph(); 128];
        r.draw_string(0, 0, "AB", &font, 1, 0, 0, b'A', true);
        // only 'A' draws; 'B' (66 > 65) is skipped entirely.
        assert_eq!(log.borrow().len(), 64);
    }
}
