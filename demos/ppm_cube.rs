//! Renders a single rotated, textured cube and writes it to `cube.ppm` in
//! the current directory. Run with `cargo run --example ppm_cube`.
//!
//! This mirrors the cube-drawing sequence from the reference renderer this
//! crate's 3D pipeline is modeled on: six faces, one pair of triangles
//! each, two of them textured from an in-memory checkerboard.

use raster3d::color::rgb;
use raster3d::matrix::Triangle2f;
use raster3d::vector::{Vec2f, Vec3f};
use raster3d::Renderer;

const WIDTH: u32 = 128;
const HEIGHT: u32 = 128;
const CHANNELS: u32 = 3;

fn checkerboard(size: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; (size * size * CHANNELS) as usize];
    for y in 0..size {
        for x in 0..size {
            let i = ((y * size + x) * CHANNELS) as usize;
            let on = (x + y) % 2 == 0;
            let shade = if on { 220 } else { 40 };
            bytes[i] = shade;
            bytes[i + 1] = shade;
            bytes[i + 2] = shade;
        }
    }
    bytes
}

fn main() -> std::io::Result<()> {
    let mut canvas = vec![0u8; (WIDTH * HEIGHT * CHANNELS) as usize];
    let texture = checkerboard(8);

    {
        let mut renderer = Renderer::new(
            WIDTH,
            HEIGHT,
            |x, y, color: &[u8]| {
                let i = ((y * WIDTH + x) * CHANNELS) as usize;
                canvas[i..i + CHANNELS as usize].copy_from_slice(color);
            },
            CHANNELS as u8,
        )
        .expect("128x128x3 is a valid canvas");

        renderer.set_distance(6.0);
        renderer.set_rotation(Vec3f::new(0.4, 0.6, 0.0));

        let v = Vec3f::new(0.0, 0.0, 0.0);

        renderer.set_color(&rgb::RED);
        renderer.draw_3d_triangle(
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z + 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z + 1.0),
        );
        renderer.draw_3d_triangle(
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z + 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z + 1.0),
        );

        renderer.set_color(&rgb::RED);
        renderer.draw_3d_triangle(
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z - 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z - 1.0),
        );
        renderer.draw_3d_triangle(
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z - 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z - 1.0),
        );

        renderer.set_color(&rgb::BLUE);
        renderer.draw_3d_triangle(
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z - 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z - 1.0),
        );
        renderer.draw_3d_triangle(
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z - 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z + 1.0),
        );

        renderer.set_color(&rgb::BLUE);
        renderer.draw_3d_triangle(
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z + 1.0),
        );
        renderer.draw_3d_triangle(
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z + 1.0),
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z + 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z - 1.0),
        );

        renderer.set_texture_src(&texture, 8, 8);
        renderer.set_texture_uv(Triangle2f::new(
            Vec2f::new(0.0, 0.0),
            Vec2f::new(0.0, 8.0),
            Vec2f::new(8.0, 0.0),
        ));
        renderer.set_texture(true);
        renderer.draw_3d_triangle(
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z - 1.0),
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z + 1.0),
        );
        renderer.set_texture_uv(Triangle2f::new(
            Vec2f::new(8.0, 8.0),
            Vec2f::new(8.0, 0.0),
            Vec2f::new(0.0, 8.0),
        ));
        renderer.draw_3d_triangle(
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z + 1.0),
            Vec3f::new(v.x - 1.0, v.y + 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y + 1.0, v.z - 1.0),
        );
        renderer.set_texture(false);

        renderer.set_color(&rgb::GREEN);
        renderer.draw_3d_triangle(
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z - 1.0),
        );
        renderer.draw_3d_triangle(
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z + 1.0),
            Vec3f::new(v.x + 1.0, v.y - 1.0, v.z - 1.0),
            Vec3f::new(v.x - 1.0, v.y - 1.0, v.z + 1.0),
        );
    }

    let mut file = std::io::BufWriter::new(std::fs::File::create("cube.ppm")?);
    use std::io::Write;
    writeln!(file, "P6\n{} {}\n255", WIDTH, HEIGHT)?;
    file.write_all(&canvas)?;

    Ok(())
}
