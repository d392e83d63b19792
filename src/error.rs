//! Error types for window and GPU bring-up.
//!
//! Startup follows a fatal-on-first-failure policy: any of these errors
//! aborts the run with a report on stderr. Conditions that arise during
//! a running simulation (a full node store, a momentarily lost surface)
//! are handled where they occur and never travel through these types.

use std::fmt;

/// Errors that can occur while initializing the GPU.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for the window.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "could not create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "no compatible GPU adapter found; a Vulkan/Metal/DX12-capable GPU is required"
            ),
            GpuError::DeviceCreation(e) => write!(f, "could not create GPU device: {}", e),
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

/// Errors that can occur when launching the sandbox.
#[derive(Debug)]
pub enum SandboxError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::EventLoop(e) => write!(f, "could not create event loop: {}", e),
            SandboxError::Window(e) => write!(f, "could not create window: {}", e),
            SandboxError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for SandboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SandboxError::EventLoop(e) => Some(e),
            SandboxError::Window(e) => Some(e),
            SandboxError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SandboxError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SandboxError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SandboxError {
    fn from(e: winit::error::OsError) -> Self {
        SandboxError::Window(e)
    }
}

impl From<GpuError> for SandboxError {
    fn from(e: GpuError) -> Self {
        SandboxError::Gpu(e)
    }
}
