#![allow(dead_code)]

use std::ops;

/////////////////////////////////////////////////////////////////////////////
//
// Vec2i / Vec2f / Vec3f
//
// The small vector types used throughout the rasterizer: integer screen
// coordinates, float screen coordinates (also used for UV), and float
// world-space coordinates. Kept separate rather than generic over a scalar
// type, since the conversions between them (rounding, centering, clamping)
// are exactly the seams where this kind of renderer tends to go wrong.
//
/////////////////////////////////////////////////////////////////////////////

/// An integer point in screen space.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub fn new(x: i32, y: i32) -> Vec2i {
        Vec2i { x, y }
    }

    pub fn to_f(self) -> Vec2f {
        Vec2f {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

/// A float point in screen space (or UV space).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn new(x: f32, y: f32) -> Vec2f {
        Vec2f { x, y }
    }

    pub fn zero() -> Vec2f {
        Vec2f { x: 0.0, y: 0.0 }
    }
}

/// A float point in world space; also used to carry pseudo-depth in `z`
/// once it has passed through `Renderer::project_vector`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3f {
        Vec3f { x, y, z }
    }

    pub fn zero() -> Vec3f {
        Vec3f {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl ops::SubAssign for Vec3f {
    fn sub_assign(&mut self, rhs: Vec3f) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl ops::MulAssign<f32> for Vec3f {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2i_converts_to_vec2f() {
        let v = Vec2i::new(3, -4);
        assert_eq!(v.to_f(), Vec2f::new(3.0, -4.0));
    }

    #[test]
    fn vec3f_sub_assign() {
        let mut v = Vec3f::new(5.0, 5.0, 5.0);
        v -= Vec3f::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3f::new(4.0, 3.0, 2.0));
    }

    #[test]
    fn vec3f_mul_assign() {
        let mut v = Vec3f::new(1.0, 2.0, 3.0);
        v *= 2.0;
        assert_eq!(v, Vec3f::new(2.0, 4.0, 6.0));
    }
}
