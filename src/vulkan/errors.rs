use thiserror::Error;

pub use super::{
    command_buffer::CommandBufferError,
    debug_name::VulkanDebugError,
    framebuffer::FramebufferError,
    instance::InstanceError,
    pipeline::PipelineError,
    render_device::RenderDeviceError,
    render_pass::RenderPassError,
    swapchain::SwapchainError,
    sync::{FenceError, SemaphoreError},
    window_surface::WindowSurfaceError,
};

/// An umbrella for every error the vulkan module can produce. Callers which
/// don't care about the specific subsystem can hold one of these.
#[derive(Debug, Error)]
pub enum VulkanError {
    #[error(transparent)]
    InstanceError(#[from] InstanceError),

    #[error(transparent)]
    WindowSurfaceError(#[from] WindowSurfaceError),

    #[error(transparent)]
    RenderDeviceError(#[from] RenderDeviceError),

    #[error(transparent)]
    SwapchainError(#[from] SwapchainError),

    #[error(transparent)]
    RenderPassError(#[from] RenderPassError),

    #[error(transparent)]
    FramebufferError(#[from] FramebufferError),

    #[error(transparent)]
    PipelineError(#[from] PipelineError),

    #[error(transparent)]
    CommandBufferError(#[from] CommandBufferError),

    #[error(transparent)]
    FenceError(#[from] FenceError),

    #[error(transparent)]
    SemaphoreError(#[from] SemaphoreError),

    #[error(transparent)]
    VulkanDebugError(#[from] VulkanDebugError),
}
