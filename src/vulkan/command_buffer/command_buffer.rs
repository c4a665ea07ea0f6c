use std::sync::Arc;

use ash::vk;

use super::{CommandBuffer, CommandBufferError, CommandPool, RenderDevice};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl CommandBuffer {
    /// Allocate a primary command buffer from the given pool.
    pub fn new_primary(
        vk_dev: Arc<RenderDevice>,
        pool: Arc<CommandPool>,
    ) -> Result<Self, CommandBufferError> {
        let allocate_info = vk::CommandBufferAllocateInfo {
            command_pool: pool.raw,
            level: vk::CommandBufferLevel::PRIMARY,
            command_buffer_count: 1,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .allocate_command_buffers(&allocate_info)
                .map_err(CommandBufferError::UnableToAllocateCommandBuffer)?
                [0]
        };
        Ok(Self { raw, pool, vk_dev })
    }

    /// Begin recording commands which will be submitted exactly once.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the buffer is not pending execution.
    pub unsafe fn begin_one_time_submit(
        &self,
    ) -> Result<(), CommandBufferError> {
        let begin_info = vk::CommandBufferBeginInfo {
            flags: vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT,
            ..Default::default()
        };
        self.vk_dev
            .logical_device
            .begin_command_buffer(self.raw, &begin_info)
            .map_err(CommandBufferError::UnableToBeginCommandBuffer)
    }

    /// Finish recording commands.
    ///
    /// # Safety
    ///
    /// The caller must have started recording with one of the begin
    /// methods.
    pub unsafe fn end_commands(&self) -> Result<(), CommandBufferError> {
        self.vk_dev
            .logical_device
            .end_command_buffer(self.raw)
            .map_err(CommandBufferError::UnableToEndCommandBuffer)
    }
}

impl VulkanDebug for CommandBuffer {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::COMMAND_BUFFER,
            self.raw,
        )
    }
}

impl Drop for CommandBuffer {
    /// The owner must ensure that the buffer is not in use by the GPU.
    /// There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .free_command_buffers(self.pool.raw, &[self.raw]);
        }
    }
}
