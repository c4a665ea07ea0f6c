use std::sync::Arc;

use super::{Fence, FrameSync, RenderDevice, Semaphore};
use crate::vulkan::{
    errors::{VulkanDebugError, VulkanError},
    VulkanDebug,
};

impl FrameSync {
    /// Create the synchronization objects for one frame in flight.
    pub fn new(vk_dev: Arc<RenderDevice>) -> Result<Self, VulkanError> {
        let image_acquired = Semaphore::new(vk_dev.clone())?;
        let render_finished = Semaphore::new(vk_dev.clone())?;
        let in_flight = Fence::new(vk_dev)?;
        Ok(Self {
            image_acquired,
            render_finished,
            in_flight,
        })
    }
}

impl VulkanDebug for FrameSync {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        let name = debug_name.into();
        self.image_acquired
            .set_debug_name(format!("{} - image acquired", name))?;
        self.render_finished
            .set_debug_name(format!("{} - render finished", name))?;
        self.in_flight
            .set_debug_name(format!("{} - in flight", name))
    }
}
