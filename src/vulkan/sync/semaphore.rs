use std::sync::Arc;

use ash::vk;

use super::{RenderDevice, Semaphore, SemaphoreError};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl Semaphore {
    /// Create a new binary semaphore.
    pub fn new(vk_dev: Arc<RenderDevice>) -> Result<Self, SemaphoreError> {
        let create_info = vk::SemaphoreCreateInfo::default();
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_semaphore(&create_info, None)
                .map_err(SemaphoreError::UnableToCreateSemaphore)?
        };
        Ok(Self { raw, vk_dev })
    }
}

impl VulkanDebug for Semaphore {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::SEMAPHORE,
            self.raw,
        )
    }
}

impl Drop for Semaphore {
    /// The owner must ensure that the semaphore is not in use by the GPU.
    /// There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_semaphore(self.raw, None);
        }
    }
}
