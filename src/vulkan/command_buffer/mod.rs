mod command_buffer;
mod command_pool;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::RenderDevice;

/// This enum represents the errors which can occur while recording and
/// managing command buffers.
#[derive(Debug, Error)]
pub enum CommandBufferError {
    #[error("Unable to create the command pool")]
    UnableToCreateCommandPool(#[source] vk::Result),

    #[error("Unable to reset the command pool")]
    UnableToResetCommandPool(#[source] vk::Result),

    #[error("Unable to allocate a command buffer")]
    UnableToAllocateCommandBuffer(#[source] vk::Result),

    #[error("Unable to begin recording the command buffer")]
    UnableToBeginCommandBuffer(#[source] vk::Result),

    #[error("Unable to finish recording the command buffer")]
    UnableToEndCommandBuffer(#[source] vk::Result),
}

/// An owned command pool which is destroyed automatically when dropped.
pub struct CommandPool {
    /// The raw command pool handle.
    pub raw: vk::CommandPool,

    /// The queue family this pool allocates command buffers for.
    pub queue_family_index: u32,

    /// The device used to create and destroy the pool.
    pub vk_dev: Arc<RenderDevice>,
}

/// A command buffer allocated from a pool.
///
/// The buffer keeps its pool alive so the allocation can be freed when the
/// buffer is dropped.
pub struct CommandBuffer {
    /// The raw command buffer handle.
    pub raw: vk::CommandBuffer,

    /// The pool the buffer was allocated from.
    pub pool: Arc<CommandPool>,

    /// The device used to record and free the buffer.
    pub vk_dev: Arc<RenderDevice>,
}
