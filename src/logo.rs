#![allow(dead_code)]

use crate::renderer::Renderer;
use crate::vector::Vec2i;

/////////////////////////////////////////////////////////////////////////////
//
// A convenience composition over the 2D primitives: a stylized badge made
// of one triangle, one square, one circle, and three glyphs. Nothing here
// earns its own algorithm; it exists so a caller can drop a recognizable
// mark on the canvas without hand-assembling the shapes themselves.
//
/////////////////////////////////////////////////////////////////////////////

impl<'c, S> Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Draw a "TGL"-style badge anchored at `pos`, scaled by `size`: a
    /// triangle in `a`, a square in `b`, a circle in `c`, and the three
    /// glyphs in `fg`. `font` must cover at least the bytes of `"TGL"`.
    pub fn draw_logo(
        &mut self,
        pos: Vec2i,
        size: u32,
        fg: &'c [u8],
        a: &'c [u8],
        b: &'c [u8],
        c: &'c [u8],
        font: &[[u8; 8]],
    ) {
        let x = pos.x;
        let y = pos.y;
        let s = (size * 8) as i32;
        let h = (size * 4) as i32;

        self.set_color(a);
        self.draw_triangle(
            Vec2i::new(x + h, y + s),
            Vec2i::new(x + s + h, y + s),
            Vec2i::new(x + s, y),
        );

        self.set_color(b);
        self.draw_square(Vec2i::new(x + s * 2, y), Vec2i::new(x + s * 3, y + s));

        self.set_color(c);
        self.draw_circle(Vec2i::new(x + s * 4, y + h), h);

        self.set_color(fg);
        self.draw_string(
            (x + h + h / 3) as u32,
            (y + s + h) as u32,
            "TGL",
            font,
            size,
            0,
            h,
            255,
            false,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;

    fn solid_font() -> Vec<[u8; 8]> {
        vec![[0xFF; 8]; 128]
    }

    #[test]
    fn logo_paints_all_four_colors() {
        let colors = std::rc::Rc::new(std::cell::RefCell::new(std::collections::HashSet::new()));
        let colors2 = colors.clone();
        let sink = move |_: u32, _: u32, color: &[u8]| {
            colors2.borrow_mut().insert(color.to_vec());
        };
        let mut r = crate::renderer::Renderer::new(200, 200, sink, 3).unwrap();
        let font = solid_font();

        r.draw_logo(Vec2i::new(0, 0), 2, &rgb::WHITE, &rgb::RED, &rgb::GREEN, &rgb::BLUE, &font);

        let seen = colors.borrow();
        assert!(seen.contains(&rgb::RED.to_vec()));
        assert!(seen.contains(&rgb::GREEN.to_vec()));
        assert!(seen.contains(&rgb::BLUE.to_vec()));
        assert!(seen.contains(&rgb::WHITE.to_vec()));
    }
}
