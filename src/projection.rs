#![allow(dead_code)]

use crate::depth::DepthScope;
use crate::renderer::Renderer;
use crate::vector::{Vec2i, Vec3f};
use debug_print::debug_println;

/////////////////////////////////////////////////////////////////////////////
//
// The 3D pipeline: projecting a world-space vertex down to screen space
// plus a pseudo-depth, and the two entry points (line, triangle) that
// project their vertices and then fall through to the 2D primitives.
//
/////////////////////////////////////////////////////////////////////////////

impl<'c, S> Renderer<'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Transform `v` in place from world space to screen space, with its
    /// `z` recoded into a pseudo-depth in roughly `[0, 255]`. The caller
    /// is responsible for keeping `dist + z != 0` and `fov != 0`; neither
    /// is checked here, matching every other division in this crate.
    pub fn project_vector(&self, v: &mut Vec3f) {
        *v -= self.cam;
        *v *= self.scale;

        let a = self.rzs * v.y + self.rzc * v.x;
        let b = self.rzc * v.y - self.rzs * v.x;
        let c = self.ryc * v.z + self.rys * a;

        v.x = self.ryc * a - self.rys * v.z;
        v.y = self.rxs * c + self.rxc * b;
        v.z = self.rxc * c - self.rxs * b;

        let d = v.z + self.dist;
        let m = self.width as f32 / (d * self.fov);
        v.x *= m;
        v.y *= m;

        v.z = d * (255.0 / self.far);
        v.x += self.xo as f32;
        v.y += self.yo as f32;
    }

    /// Project both endpoints and delegate to `draw_line`, with the depth
    /// test scoped to the midpoint of the two recoded depths.
    pub fn draw_3d_line(&mut self, mut v1: Vec3f, mut v2: Vec3f) {
        self.project_vector(&mut v1);
        self.project_vector(&mut v2);

        let depth = (v1.z + v2.z) * 0.5;
        let mut scope = DepthScope::enter(self, depth);

        let p1 = Vec2i::new(v1.x.round() as i32, v1.y.round() as i32);
        let p2 = Vec2i::new(v2.x.round() as i32, v2.y.round() as i32);
        scope.draw_line(p1, p2);
    }

    /// Project all three vertices, discard the triangle if any projected
    /// depth falls outside `(near, far]`, back-face cull in screen space,
    /// and delegate the survivors to `draw_triangle`.
    ///
    /// The depth written for the whole triangle is the *average* of the
    /// three projected depths scaled by `0.33` rather than `1.0 / 3.0`,
    /// kept exactly as inherited, since nudging it to a true third would
    /// shift every triangle's depth-test threshold by a hair and is not
    /// worth chasing for a pseudo-depth that was never meant to be exact.
    pub fn draw_3d_triangle(&mut self, mut v1: Vec3f, mut v2: Vec3f, mut v3: Vec3f) {
        self.project_vector(&mut v1);
        self.project_vector(&mut v2);
        self.project_vector(&mut v3);

        let depth = (v1.z + v2.z + v3.z) * 0.33;
        let mut scope = DepthScope::enter(self, depth);

        if v1.z <= scope.near
            || v2.z <= scope.near
            || v3.z <= scope.near
            || v1.z > scope.far
            || v2.z > scope.far
            || v3.z > scope.far
        {
            debug_println!(
                "projection: triangle discarded, depths ({}, {}, {}) outside clip range ({}, {}]",
                v1.z, v2.z, v3.z, scope.near, scope.far
            );
            return;
        }

        let ax = v2.x - v1.x;
        let ay = v2.y - v1.y;
        let bx = v3.x - v1.x;
        let by = v3.y - v1.y;

        if ax * by - ay * bx < 0.0 {
            return;
        }

        let p1 = Vec2i::new(v1.x.round() as i32, v1.y.round() as i32);
        let p2 = Vec2i::new(v2.x.round() as i32, v2.y.round() as i32);
        let p3 = Vec2i::new(v3.x.round() as i32, v3.y.round() as i32);

        scope.draw_triangle(p1, p2, p3);
    }
}
