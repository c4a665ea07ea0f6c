use std::sync::Arc;

use ash::vk;

use super::{Fence, FenceError, RenderDevice};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl Fence {
    /// Create a new fence.
    ///
    /// The fence starts signaled so the first wait completes immediately.
    pub fn new(vk_dev: Arc<RenderDevice>) -> Result<Self, FenceError> {
        let create_info = vk::FenceCreateInfo {
            flags: vk::FenceCreateFlags::SIGNALED,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_fence(&create_info, None)
                .map_err(FenceError::UnableToCreateFence)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// Block until the fence is signaled.
    pub fn wait(&self) -> Result<(), FenceError> {
        unsafe {
            self.vk_dev
                .logical_device
                .wait_for_fences(&[self.raw], true, u64::MAX)
                .map_err(FenceError::UnexpectedWaitError)
        }
    }

    /// Return the fence to the unsignaled state.
    pub fn reset(&self) -> Result<(), FenceError> {
        unsafe {
            self.vk_dev
                .logical_device
                .reset_fences(&[self.raw])
                .map_err(FenceError::UnexpectedResetError)
        }
    }

    /// Block until the fence is signaled, then reset it for reuse.
    pub fn wait_and_reset(&self) -> Result<(), FenceError> {
        self.wait()?;
        self.reset()
    }
}

impl VulkanDebug for Fence {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::FENCE,
            self.raw,
        )
    }
}

impl Drop for Fence {
    /// The owner must ensure that the fence is not in use by the GPU.
    /// There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev.logical_device.destroy_fence(self.raw, None);
        }
    }
}
