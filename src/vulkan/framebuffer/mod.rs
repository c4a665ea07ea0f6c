mod framebuffer;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::RenderDevice;
use crate::vulkan::errors::VulkanDebugError;

/// This enum represents the errors which can occur while building
/// framebuffers.
#[derive(Debug, Error)]
pub enum FramebufferError {
    #[error("Unable to create a framebuffer")]
    UnableToCreateFramebuffer(#[source] vk::Result),

    #[error("Unable to name a framebuffer")]
    UnableToNameFramebuffer(#[from] VulkanDebugError),
}

/// An owned framebuffer which is destroyed automatically when dropped.
pub struct Framebuffer {
    /// The raw framebuffer handle.
    pub raw: vk::Framebuffer,

    /// The device used to create and destroy the framebuffer.
    pub vk_dev: Arc<RenderDevice>,
}
