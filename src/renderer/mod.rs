mod triangle_canvas;

use std::sync::Arc;

use anyhow::Result;
use ash::vk;

use crate::vulkan::{
    CommandBuffer, Framebuffer, Pipeline, PipelineLayout, RenderDevice,
    RenderPass,
};

pub trait Renderer {
    /// Fill the frame's command buffer.
    ///
    /// The `current_image` parameter is the index of the swapchain image
    /// currently being targeted.
    fn fill_command_buffer(
        &self,
        command_buffer: &CommandBuffer,
        current_image: u32,
    ) -> Result<()>;
}

/// A renderer which clears the screen and draws a single triangle.
///
/// The triangle's vertices are generated in the vertex shader, so the
/// pipeline binds no vertex buffers at all.
pub struct TriangleCanvas {
    clear_color: [f32; 4],
    extent: vk::Extent2D,
    framebuffers: Vec<Framebuffer>,
    pipeline: Pipeline,
    pipeline_layout: PipelineLayout,
    render_pass: RenderPass,

    /// The device used to create this renderer's resources.
    pub vk_dev: Arc<RenderDevice>,
}
