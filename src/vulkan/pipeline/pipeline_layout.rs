use std::sync::Arc;

use ash::vk;

use super::{PipelineError, PipelineLayout, RenderDevice};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl PipelineLayout {
    /// Create a pipeline layout with no descriptor sets and no push
    /// constants.
    pub fn new_empty(
        vk_dev: Arc<RenderDevice>,
    ) -> Result<Self, PipelineError> {
        let create_info = vk::PipelineLayoutCreateInfo::default();
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_pipeline_layout(&create_info, None)
                .map_err(PipelineError::UnableToCreatePipelineLayout)?
        };
        Ok(Self { raw, vk_dev })
    }
}

impl VulkanDebug for PipelineLayout {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::PIPELINE_LAYOUT,
            self.raw,
        )
    }
}

impl Drop for PipelineLayout {
    /// The owner must ensure that the layout is not referenced by any
    /// pending pipeline creation. There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_pipeline_layout(self.raw, None);
        }
    }
}
