use std::sync::Arc;

use ash::vk;

use super::{CommandBufferError, CommandPool, RenderDevice};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl CommandPool {
    /// Create a command pool for the given queue family.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        queue_family_index: u32,
        flags: vk::CommandPoolCreateFlags,
    ) -> Result<Self, CommandBufferError> {
        let create_info = vk::CommandPoolCreateInfo {
            queue_family_index,
            flags,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_command_pool(&create_info, None)
                .map_err(CommandBufferError::UnableToCreateCommandPool)?
        };
        Ok(Self {
            raw,
            queue_family_index,
            vk_dev,
        })
    }

    /// Create a command pool for short-lived graphics command buffers which
    /// are re-recorded every frame.
    pub fn new_transient_graphics_pool(
        vk_dev: Arc<RenderDevice>,
    ) -> Result<Self, CommandBufferError> {
        let queue_family_index = vk_dev.graphics_queue.family_id;
        Self::new(
            vk_dev,
            queue_family_index,
            vk::CommandPoolCreateFlags::TRANSIENT,
        )
    }

    /// Return every command buffer allocated from this pool to the initial
    /// state.
    ///
    /// # Safety
    ///
    /// The caller must ensure that none of the pool's command buffers are
    /// still pending execution on the GPU.
    pub unsafe fn reset(&self) -> Result<(), CommandBufferError> {
        self.vk_dev
            .logical_device
            .reset_command_pool(
                self.raw,
                vk::CommandPoolResetFlags::empty(),
            )
            .map_err(CommandBufferError::UnableToResetCommandPool)
    }
}

impl VulkanDebug for CommandPool {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::COMMAND_POOL,
            self.raw,
        )
    }
}

impl Drop for CommandPool {
    /// The owner must ensure that none of the pool's command buffers are in
    /// use by the GPU. There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_command_pool(self.raw, None);
        }
    }
}
