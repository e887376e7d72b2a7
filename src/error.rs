// Crate error type. Every variant states *where* things went wrong.
// Pixel writes never show up here: an out-of-range write is just skipped.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed (fatal, nothing to draw into).
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the framebuffer to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}
