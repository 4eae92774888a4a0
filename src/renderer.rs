#![allow(dead_code)]

use crate::error::RendererError;
use crate::matrix::{Mat3x3f, Triangle2f};
use crate::vector::Vec2i;
use debug_print::debug_println;

/////////////////////////////////////////////////////////////////////////////
//
// Renderer
//
// The sole long-lived entity in this crate. Owns the depth buffer, borrows
// everything else (color, texture bytes, font tables) from the caller for
// the duration of a draw. See lib.rs for the module layout this is split
// across: this file has construction, the configuration setters, and the
// handful of 2D primitives simple enough not to need their own file
// (pixel, line, square, circle). The triangle rasterizer, text/image
// blitter, 3D pipeline, and logo composition each get their own `impl`
// block in a sibling module.
//
// `'c` is the lifetime of everything the caller lends the renderer: the
// current color, the texture bytes, and (via draw_string/draw_glyph) the
// font table. `S` is the pixel sink, a plain `FnMut` rather than a boxed
// trait object: this is meant to run on constrained targets, and a
// generic sink monomorphizes away the indirection entirely.
//
/////////////////////////////////////////////////////////////////////////////

/// Every channel count this crate supports fits in a byte, so a single
/// static zeroed buffer is enough to seed `current_color` with "black" (or
/// its equivalent for non-RGB channel counts) without allocating.
const ZERO_COLOR: [u8; 255] = [0; 255];

pub struct Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) xo: u32,
    pub(crate) yo: u32,
    pub(crate) wen: i32,
    pub(crate) hen: i32,
    pub(crate) channels: u8,

    pub(crate) sink: S,
    pub(crate) current_color: &'c [u8],

    pub(crate) depth_buffer: Vec<f32>,
    pub(crate) depth_enable: bool,
    pub(crate) depth_active: bool,
    pub(crate) current_depth: f32,

    pub(crate) texture_bytes: Option<&'c [u8]>,
    pub(crate) tw: u32,
    pub(crate) th: u32,
    pub(crate) texture_enable: bool,
    pub(crate) uv_triangle: Triangle2f,
    pub(crate) texture_matrix: Mat3x3f,

    pub(crate) rxc: f32,
    pub(crate) rxs: f32,
    pub(crate) ryc: f32,
    pub(crate) rys: f32,
    pub(crate) rzc: f32,
    pub(crate) rzs: f32,
    pub(crate) cam: crate::vector::Vec3f,
    pub(crate) dist: f32,
    pub(crate) scale: f32,
    pub(crate) fov: f32,
    pub(crate) near: f32,
    pub(crate) far: f32,
}

impl<'c, S> Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Construct a new renderer over a `width x height` canvas with the
    /// given channel count, driven by `sink`. Allocates the depth buffer
    /// and seeds every configuration option to its documented default.
    pub fn new(width: u32, height: u32, sink: S, channels: u8) -> Result<Self, RendererError> {
        if width == 0 {
            return Err(RendererError::ZeroWidth);
        }
        if height == 0 {
            return Err(RendererError::ZeroHeight);
        }
        if channels == 0 {
            return Err(RendererError::ZeroChannels);
        }

        debug_println!(
            "renderer: new {}x{} canvas, {} channels",
            width,
            height,
            channels
        );

        let mut renderer = Renderer {
            width,
            height,
            xo: width / 2,
            yo: height / 2,
            wen: width as i32 - 1,
            hen: height as i32 - 1,
            channels,

            sink,
            current_color: &ZERO_COLOR[..channels as usize],

            depth_buffer: vec![f32::MAX; (width * height) as usize],
            depth_enable: true,
            depth_active: false,
            current_depth: 0.0,

            texture_bytes: None,
            tw: 0,
            th: 0,
            texture_enable: false,
            uv_triangle: Triangle2f::new(
                crate::vector::Vec2f::zero(),
                crate::vector::Vec2f::zero(),
                crate::vector::Vec2f::zero(),
            ),
            texture_matrix: Mat3x3f::zero(),

            rxc: 1.0,
            rxs: 0.0,
            ryc: 1.0,
            rys: 0.0,
            rzc: 1.0,
            rzs: 0.0,
            cam: crate::vector::Vec3f::zero(),
            dist: 10.0,
            scale: 1.0,
            fov: 0.0,
            near: 1.0,
            far: 255.0,
        };

        renderer.set_rotation(crate::vector::Vec3f::zero());
        renderer.set_fov(80f32.to_radians());

        Ok(renderer)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    // --- configuration setters ------------------------------------------

    /// Store a pointer to the caller's color bytes. Reassigned freely;
    /// the renderer never copies or owns the bytes.
    pub fn set_color(&mut self, color: &'c [u8]) {
        self.current_color = color;
    }

    pub fn set_depth(&mut self, enable: bool) {
        debug_println!("renderer: depth testing {}", if enable { "enabled" } else { "disabled" });
        self.depth_enable = enable;
    }

    /// Refill the depth buffer with +infinity, meaning "nothing drawn
    /// here yet." Call once per frame before any 3D drawing.
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(f32::MAX);
    }

    /// Enable or disable texture sampling in `draw_triangle`. Forced to
    /// `false` regardless of `enable` if no texture source has been set.
    pub fn set_texture(&mut self, enable: bool) {
        self.texture_enable = self.texture_bytes.is_some() && enable;
        debug_println!("renderer: texture mode {}", if self.texture_enable { "enabled" } else { "disabled" });
    }

    pub fn set_texture_src(&mut self, bytes: &'c [u8], width: u32, height: u32) {
        debug_assert_eq!(
            bytes.len(),
            (width * height * self.channels as u32) as usize,
            "texture buffer length must equal width*height*channels"
        );
        self.texture_bytes = Some(bytes);
        self.tw = width - 1;
        self.th = height - 1;
    }

    pub fn set_texture_uv(&mut self, uv: Triangle2f) {
        self.uv_triangle = uv;
    }

    pub fn set_rotation(&mut self, rot: crate::vector::Vec3f) {
        self.rxc = rot.x.cos();
        self.rxs = rot.x.sin();
        self.ryc = rot.y.cos();
        self.rys = rot.y.sin();
        self.rzc = rot.z.cos();
        self.rzs = rot.z.sin();
    }

    pub fn set_camera(&mut self, pos: crate::vector::Vec3f) {
        self.cam = pos;
    }

    pub fn set_distance(&mut self, dist: f32) {
        self.dist = dist;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// `fov` is the caller's field-of-view angle in radians; the field we
    /// actually store is `tan(fov / 2)`, to avoid recomputing it for
    /// every projected vertex.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = (fov / 2.0).tan();
    }

    pub fn set_clip(&mut self, near: f32, far: f32) {
        debug_println!("renderer: clip planes set to near={near}, far={far}");
        self.near = near;
        self.far = far;
    }

    // --- pixel & line ----------------------------------------------------

    /// The only path to the sink. Out-of-bounds coordinates are dropped
    /// silently; callers upstream (line, square, circle, triangle, glyph)
    /// clamp the shapes they draw, but glyph/image cells near an edge can
    /// still land off-canvas, so the check stays here rather than being
    /// trusted away.
    pub fn draw_pixel(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        if self.depth_active {
            let index = (y * self.width + x) as usize;
            if self.depth_buffer[index] > self.current_depth {
                self.depth_buffer[index] = self.current_depth;
            } else {
                return;
            }
        }

        (self.sink)(x, y, self.current_color);
    }

    /// Incremental DDA line, stepping along whichever axis has the larger
    /// span so every pixel differs from its predecessor by exactly one
    /// unit on the minor axis.
    pub fn draw_line(&mut self, v1: Vec2i, v2: Vec2i) {
        let v1 = self.clamp_to_canvas(v1);
        let v2 = self.clamp_to_canvas(v2);

        let lx = v2.x - v1.x;
        let ly = v2.y - v1.y;

        let xf = crate::math::signum(lx);
        let yf = crate::math::signum(ly);

        let lx = lx * xf;
        let ly = ly * yf;

        let mut inter = 0.0f32;

        if lx > ly {
            let step = ly as f32 / lx as f32;
            while (inter as i32) < lx {
                self.draw_pixel(
                    (v1.x + (inter * xf as f32) as i32) as u32,
                    (v1.y + (inter * step * yf as f32) as i32) as u32,
                );
                inter += 1.0;
            }
        } else {
            if ly == 0 {
                return;
            }
            let step = lx as f32 / ly as f32;
            while (inter as i32) < ly {
                self.draw_pixel(
                    (v1.x + (inter * step * xf as f32) as i32) as u32,
                    (v1.y + (inter * yf as f32) as i32) as u32,
                );
                inter += 1.0;
            }
        }
    }

    // --- square & circle ---------------------------------------------

    pub fn draw_square(&mut self, v1: Vec2i, v2: Vec2i) {
        let v1 = self.clamp_to_canvas(v1);
        let v2 = self.clamp_to_canvas(v2);

        let xmax = v1.x.max(v2.x);
        let xmin = v1.x.min(v2.x);
        let ymax = v1.y.max(v2.y);
        let ymin = v1.y.min(v2.y);

        for x in (xmin..=xmax).rev() {
            for y in (ymin..=ymax).rev() {
                self.draw_pixel(x as u32, y as u32);
            }
        }
    }

    pub fn draw_circle(&mut self, pos: Vec2i, r: i32) {
        let xmax = crate::math::max_clamp(pos.x + r, self.wen);
        let xmin = crate::math::max_clamp(pos.x - r, self.wen);
        let ymax = crate::math::max_clamp(pos.y + r, self.hen);
        let ymin = crate::math::max_clamp(pos.y - r, self.hen);

        let powr = r * r;

        for x in (xmin..=xmax).rev() {
            let mut painted = false;

            for y in (ymin..=ymax).rev() {
                let dx = x - pos.x;
                let dy = y - pos.y;

                if dx * dx + dy * dy <= powr {
                    self.draw_pixel(x as u32, y as u32);
                    painted = true;
                } else if painted {
                    break;
                }
            }
        }
    }

    // --- helpers --------------------------------------------------------

    pub(crate) fn clamp_to_canvas(&self, v: Vec2i) -> Vec2i {
        Vec2i::new(
            crate::math::max_clamp(v.x, self.wen),
            crate::math::max_clamp(v.y, self.hen),
        )
    }
}
