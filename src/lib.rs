//! A dependency-light software rasterizer: 2D primitives (pixels, lines,
//! rectangles, circles, bitmap text, images), a scanline triangle filler
//! with affine texture mapping, and a minimal 3D pipeline (projection,
//! depth testing, back-face culling) on top of it.
//!
//! Everything funnels through a single pixel sink supplied at construction,
//! a plain `FnMut(u32, u32, &[u8])` rather than a boxed trait object, so
//! the whole renderer monomorphizes down to direct calls with no dynamic
//! dispatch. This is meant to run comfortably on targets with no heap of
//! consequence to speak of: the only allocation is the depth buffer, sized
//! once at construction.
//!
//! ```
//! use raster3d::Renderer;
//! use raster3d::color::rgb;
//!
//! let mut canvas = vec![0u8; 64 * 64 * 3];
//! let mut renderer = Renderer::new(64, 64, |x, y, color: &[u8]| {
//!     let i = ((y * 64 + x) * 3) as usize;
//!     canvas[i..i + 3].copy_from_slice(color);
//! }, 3).unwrap();
//!
//! renderer.set_color(&rgb::WHITE);
//! renderer.draw_circle(raster3d::vector::Vec2i::new(32, 32), 10);
//! ```

mod depth;
mod image;
mod logo;
mod projection;
mod text;
mod triangle;

pub mod color;
pub mod error;
pub mod math;
pub mod matrix;
pub mod renderer;
pub mod vector;

pub use depth::DepthScope;
pub use error::RendererError;
pub use renderer::Renderer;
