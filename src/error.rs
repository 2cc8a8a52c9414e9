// One error type for the whole program.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the framebuffer to the window failed
    #[error("Invalid grid: {width}x{height} cells")]
    InvalidGrid { width: usize, height: usize }, // Zero-sized height field requested
    #[error("Invalid scale: {0} (must be positive and finite)")]
    InvalidScale(f64), // Scale that would divide coordinates by <= 0 or NaN
}
