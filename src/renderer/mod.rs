//! WebGPU rendering module
//!
//! Implements `RenderSurface` by batching colored triangles per frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::GpuSurface;

use std::fmt;

/// Failures while bringing up the GPU surface
#[derive(Debug)]
pub enum RenderError {
    CreateSurface(wgpu::CreateSurfaceError),
    Adapter(wgpu::RequestAdapterError),
    Device(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format
    UnsupportedSurface,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CreateSurface(e) => write!(f, "failed to create surface: {}", e),
            RenderError::Adapter(e) => write!(f, "no suitable GPU adapter: {}", e),
            RenderError::Device(e) => write!(f, "failed to create device: {}", e),
            RenderError::UnsupportedSurface => write!(f, "surface has no supported formats"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::CreateSurface(e) => Some(e),
            RenderError::Adapter(e) => Some(e),
            RenderError::Device(e) => Some(e),
            RenderError::UnsupportedSurface => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::CreateSurface(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::Adapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::Device(e)
    }
}
