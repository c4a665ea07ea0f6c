use std::sync::Arc;

use ash::vk;

use super::{Pipeline, PipelineError, RenderDevice};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl Pipeline {
    /// Create a new graphics pipeline from a fully-populated create info.
    pub fn new_graphics_pipeline(
        vk_dev: Arc<RenderDevice>,
        create_info: vk::GraphicsPipelineCreateInfo,
    ) -> Result<Self, PipelineError> {
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_graphics_pipelines(
                    vk::PipelineCache::null(),
                    &[create_info],
                    None,
                )
                .map_err(|(_, err)| {
                    PipelineError::UnableToCreateGraphicsPipeline(err)
                })?[0]
        };
        Ok(Self {
            raw,
            bind_point: vk::PipelineBindPoint::GRAPHICS,
            vk_dev,
        })
    }
}

impl VulkanDebug for Pipeline {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::PIPELINE,
            self.raw,
        )
    }
}

impl Drop for Pipeline {
    /// The owner must ensure that the pipeline is not in use by the GPU.
    /// There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev.logical_device.destroy_pipeline(self.raw, None);
        }
    }
}
