#![allow(dead_code)]

use std::error::Error;
use std::fmt;

/////////////////////////////////////////////////////////////////////////////
//
// RendererError
//
// The one fallible entry point in this crate: construction. Everything
// past this point degrades silently rather than erroring: clamped
// coordinates, skipped glyphs, a zeroed texture
// matrix on a singular mapping. Construction is different, because a
// zero-sized canvas would otherwise surface as a division by zero deep
// inside `project_vector` or an empty depth buffer indexed by a draw call,
// both far from the actual mistake.
//
/////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RendererError {
    ZeroWidth,
    ZeroHeight,
    ZeroChannels,
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::ZeroWidth => write!(f, "canvas width must be non-zero"),
            RendererError::ZeroHeight => write!(f, "canvas height must be non-zero"),
            RendererError::ZeroChannels => write!(f, "channel count must be non-zero"),
        }
    }
}

impl Error for RendererError {}
