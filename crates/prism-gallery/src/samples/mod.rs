//! Built-in samples.
//!
//! Each sample is static data (vertices, WGSL, uniforms) plus a routine that
//! hands it to a [`Renderer`](prism_engine::render::Renderer) as one pass.

use prism_engine::paint::Color;
use prism_engine::render::Vertex2;

pub mod grid;
pub mod rectangle;

/// Background every sample clears to.
pub const CLEAR: Color = Color::opaque(0.0, 0.0, 0.4);

/// Two triangles forming a square of half-extent 0.8 in clip space.
pub const CELL_VERTICES: [Vertex2; 6] = [
    Vertex2::new(-0.8, -0.8),
    Vertex2::new(0.8, -0.8),
    Vertex2::new(0.8, 0.8),

    Vertex2::new(-0.8, -0.8),
    Vertex2::new(0.8, 0.8),
    Vertex2::new(-0.8, 0.8),
];

const VERTEX_ENTRY: &str = "vertexMain";
const FRAGMENT_ENTRY: &str = "fragmentMain";
