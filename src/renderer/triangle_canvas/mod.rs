mod pipeline;

use std::sync::Arc;

use anyhow::Result;
use ash::vk;

use super::{Renderer, TriangleCanvas};
use crate::vulkan::{
    errors::VulkanError, CommandBuffer, Framebuffer, PipelineLayout,
    RenderDevice, RenderPass, Swapchain, VulkanDebug,
};

impl TriangleCanvas {
    /// Create a new triangle canvas which renders into the given
    /// swapchain's images.
    ///
    /// The shader sources are raw SPIR-V bytes, typically read from
    /// compiled shader files at startup.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        swapchain: &Swapchain,
        vertex_spirv: &[u8],
        fragment_spirv: &[u8],
    ) -> Result<Self, VulkanError> {
        let render_pass =
            RenderPass::new_color_only(vk_dev.clone(), swapchain.format)?;
        render_pass.set_debug_name("TriangleCanvas - render pass")?;

        let framebuffers = Framebuffer::for_swapchain(
            vk_dev.clone(),
            &render_pass,
            swapchain,
            "TriangleCanvas - framebuffer",
        )?;

        let pipeline_layout = PipelineLayout::new_empty(vk_dev.clone())?;
        pipeline_layout
            .set_debug_name("TriangleCanvas - pipeline layout")?;

        let pipeline = pipeline::create_pipeline(
            vk_dev.clone(),
            &render_pass,
            &pipeline_layout,
            vertex_spirv,
            fragment_spirv,
        )?;
        pipeline.set_debug_name("TriangleCanvas - pipeline")?;

        Ok(Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            extent: swapchain.extent,
            framebuffers,
            pipeline,
            pipeline_layout,
            render_pass,
            vk_dev,
        })
    }
}

impl Renderer for TriangleCanvas {
    /// Record the full frame: clear the image, then draw the triangle.
    fn fill_command_buffer(
        &self,
        command_buffer: &CommandBuffer,
        current_image: u32,
    ) -> Result<()> {
        let clear_value = vk::ClearValue {
            color: vk::ClearColorValue {
                float32: self.clear_color,
            },
        };
        let render_pass_begin_info = vk::RenderPassBeginInfo {
            render_pass: self.render_pass.raw,
            framebuffer: self.framebuffers[current_image as usize].raw,
            render_area: vk::Rect2D {
                offset: vk::Offset2D { x: 0, y: 0 },
                extent: self.extent,
            },
            clear_value_count: 1,
            p_clear_values: &clear_value,
            ..Default::default()
        };
        let viewport = vk::Viewport {
            x: 0.0,
            y: 0.0,
            width: self.extent.width as f32,
            height: self.extent.height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        };
        let scissor = vk::Rect2D {
            offset: vk::Offset2D { x: 0, y: 0 },
            extent: self.extent,
        };
        unsafe {
            let device = &self.vk_dev.logical_device;
            device.cmd_begin_render_pass(
                command_buffer.raw,
                &render_pass_begin_info,
                vk::SubpassContents::INLINE,
            );
            device.cmd_bind_pipeline(
                command_buffer.raw,
                self.pipeline.bind_point,
                self.pipeline.raw,
            );
            device.cmd_set_viewport(command_buffer.raw, 0, &[viewport]);
            device.cmd_set_scissor(command_buffer.raw, 0, &[scissor]);
            device.cmd_draw(command_buffer.raw, 3, 1, 0, 0);
            device.cmd_end_render_pass(command_buffer.raw);
        }
        Ok(())
    }
}
