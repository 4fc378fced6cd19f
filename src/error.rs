//! Error types for the pendulum lab.
//!
//! GPU initialization and session startup are the fallible surfaces; both
//! get a dedicated error enum with a `source` chain down to the wgpu/winit
//! originals.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running a session.
#[derive(Debug)]
pub enum SessionError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            SessionError::Window(e) => write!(f, "Failed to create window: {}", e),
            SessionError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::EventLoop(e) => Some(e),
            SessionError::Window(e) => Some(e),
            SessionError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SessionError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SessionError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SessionError {
    fn from(e: winit::error::OsError) -> Self {
        SessionError::Window(e)
    }
}

impl From<GpuError> for SessionError {
    fn from(e: GpuError) -> Self {
        SessionError::Gpu(e)
    }
}
