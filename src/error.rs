//! Error types for backdrop.
//!
//! The simulations themselves never fail: a missing drawing surface is a
//! silent no-op. Errors only come from the ambient layers around them:
//! loading configuration, opening a window and GPU surface, and exporting
//! snapshots.

use thiserror::Error;

/// Errors that can occur while loading or validating an [`EffectConfig`](crate::EffectConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur during GPU initialization.
#[derive(Error, Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,

    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    /// The surface reports no texture formats for this adapter.
    #[error("Surface is not supported by the GPU adapter")]
    UnsupportedSurface,
}

/// Errors that can occur when running the windowed host.
#[derive(Error, Debug)]
pub enum HostError {
    /// Failed to create or run the event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}

/// Errors that can occur while rendering a headless snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to encode or write the image.
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// The requested canvas size is empty.
    #[error("Snapshot size must be non-zero, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}
