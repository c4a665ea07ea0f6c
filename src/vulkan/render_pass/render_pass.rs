use std::sync::Arc;

use ash::vk;

use super::{RenderDevice, RenderPass, RenderPassError};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl RenderPass {
    /// Create a render pass with a single color attachment which clears on
    /// load and is left ready for presentation.
    ///
    /// The subpass dependency orders the implicit transition out of
    /// UNDEFINED against any color writes from a previous frame which are
    /// still in flight on the same image.
    pub fn new_color_only(
        vk_dev: Arc<RenderDevice>,
        format: vk::Format,
    ) -> Result<Self, RenderPassError> {
        let color_attachment = vk::AttachmentDescription {
            format,
            samples: vk::SampleCountFlags::TYPE_1,
            load_op: vk::AttachmentLoadOp::CLEAR,
            store_op: vk::AttachmentStoreOp::STORE,
            stencil_load_op: vk::AttachmentLoadOp::DONT_CARE,
            stencil_store_op: vk::AttachmentStoreOp::DONT_CARE,
            initial_layout: vk::ImageLayout::UNDEFINED,
            final_layout: vk::ImageLayout::PRESENT_SRC_KHR,
            ..Default::default()
        };
        let color_attachment_reference = vk::AttachmentReference {
            attachment: 0,
            layout: vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
        };
        let subpass = vk::SubpassDescription {
            pipeline_bind_point: vk::PipelineBindPoint::GRAPHICS,
            color_attachment_count: 1,
            p_color_attachments: &color_attachment_reference,
            ..Default::default()
        };
        let dependency = vk::SubpassDependency {
            src_subpass: vk::SUBPASS_EXTERNAL,
            dst_subpass: 0,
            src_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
            src_access_mask: vk::AccessFlags::empty(),
            dst_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
            dst_access_mask: vk::AccessFlags::COLOR_ATTACHMENT_WRITE,
            ..Default::default()
        };
        let create_info = vk::RenderPassCreateInfo {
            attachment_count: 1,
            p_attachments: &color_attachment,
            subpass_count: 1,
            p_subpasses: &subpass,
            dependency_count: 1,
            p_dependencies: &dependency,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_render_pass(&create_info, None)
                .map_err(RenderPassError::UnableToCreateRenderPass)?
        };
        Ok(Self { raw, vk_dev })
    }
}

impl VulkanDebug for RenderPass {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::RENDER_PASS,
            self.raw,
        )
    }
}

impl Drop for RenderPass {
    /// The owner must ensure that no command buffers still reference the
    /// render pass on the GPU. There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_render_pass(self.raw, None);
        }
    }
}
