//! overlay_core: mask compositing and quad rendering primitives.

pub mod compose;
pub mod quad;

pub mod prelude {
    pub use crate::compose::*;
    pub use crate::quad::*;
}
