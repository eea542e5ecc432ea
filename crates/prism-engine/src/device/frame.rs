/// The surface texture currently being drawn.
///
/// Acquired lazily by the first pass of a frame and shared by every later pass
/// until the frame is presented. Holding it prevents acquisition of the next one.
pub(crate) struct Frame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}
