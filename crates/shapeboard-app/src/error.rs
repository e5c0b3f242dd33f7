//! Application-level errors.

use thiserror::Error;

/// Errors that abort application start-up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Invalid board config: {0}")]
    Board(#[from] shapeboard_core::BoardError),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("Surface is not supported by the adapter")]
    UnsupportedSurface,
}
