use std::sync::Arc;

use ash::vk;

use super::{Framebuffer, FramebufferError, RenderDevice};
use crate::vulkan::{
    errors::VulkanDebugError, RenderPass, Swapchain, VulkanDebug,
};

impl Framebuffer {
    /// Create a framebuffer with a single color attachment.
    pub fn with_color_attachment(
        vk_dev: Arc<RenderDevice>,
        render_pass: &RenderPass,
        image_view: vk::ImageView,
        extent: vk::Extent2D,
    ) -> Result<Self, FramebufferError> {
        let create_info = vk::FramebufferCreateInfo {
            render_pass: render_pass.raw,
            attachment_count: 1,
            p_attachments: &image_view,
            width: extent.width,
            height: extent.height,
            layers: 1,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_framebuffer(&create_info, None)
                .map_err(FramebufferError::UnableToCreateFramebuffer)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// Create one framebuffer per swapchain image view, in image order.
    pub fn for_swapchain(
        vk_dev: Arc<RenderDevice>,
        render_pass: &RenderPass,
        swapchain: &Swapchain,
        name: impl Into<String>,
    ) -> Result<Vec<Self>, FramebufferError> {
        let name = name.into();
        swapchain
            .image_views
            .iter()
            .enumerate()
            .map(|(index, &image_view)| {
                let framebuffer = Self::with_color_attachment(
                    vk_dev.clone(),
                    render_pass,
                    image_view,
                    swapchain.extent,
                )?;
                framebuffer
                    .set_debug_name(format!("{} - {}", name, index))?;
                Ok(framebuffer)
            })
            .collect()
    }
}

impl VulkanDebug for Framebuffer {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::FRAMEBUFFER,
            self.raw,
        )
    }
}

impl Drop for Framebuffer {
    /// The owner must ensure that the framebuffer is not in use by the GPU.
    /// There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_framebuffer(self.raw, None);
        }
    }
}
