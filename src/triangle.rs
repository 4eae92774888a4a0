#![allow(dead_code)]

use crate::matrix::Mat3x3f;
use crate::renderer::Renderer;
use crate::vector::{Vec2i, Vec3f};
use debug_print::debug_println;

/////////////////////////////////////////////////////////////////////////////
//
// The triangle scan. Everything else in this crate (lines, squares,
// circles, glyphs, images, the 3D pipeline) either calls this directly or
// bottoms out in draw_pixel; this is the one routine that has to earn its
// keep on every frame, so it leans on the column-major / early-exit scan
// rather than anything more general.
//
/////////////////////////////////////////////////////////////////////////////

impl<'c, S> Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Build the matrix mapping a screen-space triangle onto a UV-space one
    /// by inverting the screen-space side and composing with the UV side.
    /// A singular screen-space triangle (degenerate to a line or a point)
    /// collapses the whole mapping to zero rather than propagating `None`:
    /// every sampled texel ends up at UV `(0, 0)`, which is a visibly wrong
    /// but harmless fallback for a triangle nobody should be drawing anyway.
    fn triangle_mapping_matrix(screen: crate::matrix::Triangle2f, uv: crate::matrix::Triangle2f) -> Mat3x3f {
        let m_screen = Mat3x3f::from_columns(screen.v1, screen.v2, screen.v3);

        let inv = match m_screen.invert() {
            Some(inv) => inv,
            None => {
                debug_println!("triangle: screen-space triangle is singular, texture mapping degenerates to (0,0)");
                return Mat3x3f::zero();
            }
        };

        let m_uv = Mat3x3f::from_columns(uv.v1, uv.v2, uv.v3);
        m_uv * inv
    }

    fn sample_texture(&mut self, x: i32, y: i32) {
        let uv = self.texture_matrix * Vec3f::new(x as f32, y as f32, 1.0);

        let u = crate::math::max_clamp(uv.x.floor() as i32, self.tw as i32) as u32;
        let v = crate::math::max_clamp(uv.y.floor() as i32, self.th as i32) as u32;

        let channels = self.channels as u32;
        let start = ((v * (self.tw + 1) + u) * channels) as usize;
        let bytes = self.texture_bytes.expect("sample_texture requires texture_bytes");
        self.current_color = &bytes[start..start + channels as usize];
    }

    /// Rasterize the triangle `(v1, v2, v3)`, sampling the active texture
    /// per-pixel if texture mode is enabled, and emitting every covered
    /// pixel through `draw_pixel` (which applies the depth test).
    pub fn draw_triangle(&mut self, v1: Vec2i, v2: Vec2i, v3: Vec2i) {
        let xmax = crate::math::max_clamp(v1.x.max(v2.x).max(v3.x), self.wen);
        let xmin = crate::math::max_clamp(v1.x.min(v2.x).min(v3.x), self.wen);
        let ymax = crate::math::max_clamp(v1.y.max(v2.y).max(v3.y), self.hen);
        let ymin = crate::math::max_clamp(v1.y.min(v2.y).min(v3.y), self.hen);

        if self.texture_enable {
            let screen = crate::matrix::Triangle2f::new(v1.to_f(), v2.to_f(), v3.to_f());
            self.texture_matrix = Self::triangle_mapping_matrix(screen, self.uv_triangle);
        }

        for x in (xmin..=xmax).rev() {
            let mut painted = false;

            for y in (ymin..=ymax).rev() {
                let b1 = crate::math::cross(
                    x as f32, y as f32, v1.x as f32, v1.y as f32, v2.x as f32, v2.y as f32,
                ) < 0.0;
                let b2 = crate::math::cross(
                    x as f32, y as f32, v2.x as f32, v2.y as f32, v3.x as f32, v3.y as f32,
                ) < 0.0;
                let b3 = crate::math::cross(
                    x as f32, y as f32, v3.x as f32, v3.y as f32, v1.x as f32, v1.y as f32,
                ) < 0.0;

                if b1 == b2 && b2 == b3 {
                    if self.texture_enable {
                        self.sample_texture(x, y);
                    }

                    self.draw_pixel(x as u32, y as u32);
                    painted = true;
                } else if painted {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;
    use crate::vector::Vec2f;

    fn recording_renderer<'c>(
        w: u32,
        h: u32,
    ) -> (
        Renderer<'c, impl FnMut(u32, u32, &[u8])>,
        std::rc::Rc<std::cell::RefCell<Vec<(u32, u32, Vec<u8>)>>>,
    ) {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let log2 = log.clone();
        let sink = move |x: u32, y: u32, color: &[u8]| {
            log2.borrow_mut().push((x, y, color.to_vec()));
        };
        (Renderer::new(w, h, sink, 3).unwrap(), log)
    }

    #[test]
    fn flat_triangle_paints_a_nonempty_interior() {
        let (mut r, log) = recording_renderer(20, 20);
        r.set_color(&rgb::WHITE);
        r.draw_triangle(Vec2i::new(2, 2), Vec2i::new(15, 2), Vec2i::new(8, 15));
        assert!(!log.borrow().is_empty());
    }

    #[test]
    fn degenerate_triangle_paints_nothing_or_a_line_but_never_panics() {
        let (mut r, _log) = recording_renderer(20, 20);
        r.set_color(&rgb::WHITE);
        r.draw_triangle(Vec2i::new(5, 5), Vec2i::new(5, 5), Vec2i::new(5, 5));
    }

    #[test]
    fn textured_triangle_samples_from_the_texture_buffer() {
        let (mut r, log) = recording_renderer(20, 20);
        let texture: [u8; 3 * 2 * 2] = [
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];
        r.set_texture_src(&texture, 2, 2);
        r.set_texture_uv(crate::matrix::Triangle2f::new(
            Vec2f::new(0.0, 0.0),
            Vec2f::new(1.0, 0.0),
            Vec2f::new(0.0, 1.0),
        ));
        r.set_texture(true);

        r.draw_triangle(Vec2i::new(2, 2), Vec2i::new(12, 2), Vec2i::new(2, 12));

        let recorded = log.borrow();
        assert!(!recorded.is_empty());
        // every emitted color must be one of the four texels above.
        let texels: [Vec<u8>; 4] = [
            vec![255, 0, 0],
            vec![0, 255, 0],
            vec![0, 0, 255],
            vec![255, 255, 0],
        ];
        for (_, _, color) in recorded.iter() {
            assert!(texels.contains(color), "unexpected color {color:?}");
        }
    }
}
