mod frame_pipeline;
mod protocol;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use crate::vulkan::{
    errors::VulkanError, CommandBuffer, CommandPool, FrameSync, RenderDevice,
};

pub use self::protocol::{run_frame, FrameStation};

#[derive(Debug, Error)]
pub enum FrameError {
    #[error(
        "The swapchain no longer matches the surface and must be rebuilt"
    )]
    SurfaceStale,

    #[error("Unable to submit the frame's commands")]
    UnableToSubmitFrame(#[source] vk::Result),

    #[error(transparent)]
    UnexpectedRuntimeError(#[from] anyhow::Error),

    #[error(transparent)]
    UnexpectedVulkanError(#[from] VulkanError),
}

/// A frame pipeline aids with the swapchain acquire->render->present
/// workflow.
///
/// A single frame is kept in flight: every call to draw_frame waits for the
/// previous submission to finish before recording new commands into the one
/// command buffer.
pub struct FramePipeline {
    frame_sync: FrameSync,
    command_pool: Arc<CommandPool>,
    command_buffer: CommandBuffer,

    /// The device used to create this frame pipeline.
    pub vk_dev: Arc<RenderDevice>,
}
