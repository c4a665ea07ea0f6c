mod debug_name;
mod window_surface;

pub mod command_buffer;
pub mod errors;
pub mod instance;
pub mod framebuffer;
pub mod pipeline;
pub mod render_device;
pub mod render_pass;
pub mod swapchain;
pub mod sync;

pub use self::{
    command_buffer::{CommandBuffer, CommandPool},
    debug_name::VulkanDebug,
    framebuffer::Framebuffer,
    instance::Instance,
    pipeline::{Pipeline, PipelineLayout, ShaderModule},
    render_device::{GpuQueue, RenderDevice},
    render_pass::RenderPass,
    swapchain::Swapchain,
    sync::{Fence, FrameSync, Semaphore},
    window_surface::{WindowSurface, WindowSurfaceError},
};
