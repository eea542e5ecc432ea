use crate::coords::Viewport;

/// The frame an overlay draws into, plus the handles needed to do so.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub format: wgpu::TextureFormat,
    /// Surface size in pixels.
    pub viewport: Viewport,
    pub view: &'a wgpu::TextureView,
}
