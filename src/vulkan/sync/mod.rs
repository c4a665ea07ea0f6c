mod fence;
mod frame_sync;
mod semaphore;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::RenderDevice;

/// This enum represents the errors which can occur while creating and using
/// fences.
#[derive(Debug, Error)]
pub enum FenceError {
    #[error("Unable to create the fence")]
    UnableToCreateFence(#[source] vk::Result),

    #[error("Unable to wait for the fence")]
    UnexpectedWaitError(#[source] vk::Result),

    #[error("Unable to reset the fence")]
    UnexpectedResetError(#[source] vk::Result),
}

/// This enum represents the errors which can occur while creating
/// semaphores.
#[derive(Debug, Error)]
pub enum SemaphoreError {
    #[error("Unable to create the semaphore")]
    UnableToCreateSemaphore(#[source] vk::Result),
}

/// An owned fence which is destroyed automatically when dropped.
pub struct Fence {
    /// The raw fence handle.
    pub raw: vk::Fence,

    /// The device used to create and destroy the fence.
    pub vk_dev: Arc<RenderDevice>,
}

/// An owned semaphore which is destroyed automatically when dropped.
pub struct Semaphore {
    /// The raw semaphore handle.
    pub raw: vk::Semaphore,

    /// The device used to create and destroy the semaphore.
    pub vk_dev: Arc<RenderDevice>,
}

/// The synchronization objects for a single frame in flight.
pub struct FrameSync {
    /// Signaled by the swapchain when the acquired image is ready for
    /// writes.
    pub image_acquired: Semaphore,

    /// Signaled by the graphics queue when rendering commands for the frame
    /// have finished.
    pub render_finished: Semaphore,

    /// Signaled when the frame's submission has fully completed. Created
    /// signaled so the very first frame does not deadlock.
    pub in_flight: Fence,
}
