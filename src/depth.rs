#![allow(dead_code)]

use crate::renderer::Renderer;
use std::ops::{Deref, DerefMut};

/////////////////////////////////////////////////////////////////////////////
//
// DepthScope
//
// The source this lineage descends from toggles depth testing around a
// single draw call with a pair of macros that flip a flag on entry and
// flip it back off on exit, with the caller responsible for remembering to
// invoke both. Forgetting the second one silently leaves depth testing
// stuck on (or off) for everything drawn afterwards.
//
// This is an RAII replacement: `DepthScope::enter` flips `depth_active` on
// (if the renderer's depth testing is enabled at all) and returns a guard
// that flips it back off in `Drop`, so there is no way to forget the exit
// half. The guard derefs to the renderer it borrows, so callers write
// `scope.draw_triangle(...)` exactly as they would on the renderer itself.
//
/////////////////////////////////////////////////////////////////////////////

pub struct DepthScope<'r, 'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    renderer: &'r mut Renderer<'c, S>,
}

impl<'r, 'c, S> DepthScope<'r, 'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    /// Set the current depth and activate depth testing for the scope's
    /// lifetime, then hand back a guard that deactivates it on drop.
    pub fn enter(renderer: &'r mut Renderer<'c, S>, depth: f32) -> Self {
        renderer.current_depth = depth;
        renderer.depth_active = renderer.depth_enable;
        DepthScope { renderer }
    }
}

impl<'r, 'c, S> Deref for DepthScope<'r, 'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    type Target = Renderer<'c, S>;

    fn deref(&self) -> &Self::Target {
        self.renderer
    }
}

impl<'r, 'c, S> DerefMut for DepthScope<'r, 'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.renderer
    }
}

impl<'r, 'c, S> Drop for DepthScope<'r, 'c, S>
where
    S: FnMut(u32, u32, &[u8]),
{
    fn drop(&mut self) {
        self.renderer.depth_active = false;
    }
}
