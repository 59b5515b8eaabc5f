#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Export was requested while no render surface is mounted.
    #[error("no render surface available for export")]
    NoCanvasAvailable,
    /// A zero dimension or stripe width, or a pattern too large to allocate.
    #[error("degenerate texture pattern: {width}x{height} with stripe width {stripe_width}")]
    DegenerateTexture {
        width: u32,
        height: u32,
        stripe_width: u32,
    },
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),
}
