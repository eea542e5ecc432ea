//! Coordinate and geometry types shared by the layout and the renderers.
//!
//! Canonical CPU space:
//! - Physical pixels of the window surface
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
