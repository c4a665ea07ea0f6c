mod adapter;
mod queue_family_indices;
mod render_device;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::{Instance, WindowSurface};
use crate::vulkan::errors::{InstanceError, WindowSurfaceError};

pub use self::{
    adapter::{negotiate, AdapterProfile, QueueFamilyProfile},
    queue_family_indices::QueueFamilyIndices,
};

/// This enum represents the errors which can occur while negotiating a
/// device and its queues for the application.
#[derive(Debug, Error)]
pub enum RenderDeviceError {
    #[error("Unable to enumerate physical devices")]
    UnableToEnumerateDevices(#[source] vk::Result),

    #[error("No Vulkan adapters were reported by this platform")]
    NoAdapterPresent,

    #[error(
        "No adapter supports graphics, presentation, the swapchain \
         extension, and at least one surface format and present mode"
    )]
    NoCapableAdapter,

    #[error("Unable to list the extensions for an adapter")]
    UnableToListDeviceExtensions(#[source] vk::Result),

    #[error("Unexpected Vulkan instance error")]
    UnexpectedInstanceError(#[from] InstanceError),

    #[error("Unexpected window surface error")]
    UnexpectedSurfaceError(#[from] WindowSurfaceError),
}

/// This struct bundles a Vulkan queue with related data for easy tracking.
#[derive(Debug, Clone, Copy)]
pub struct GpuQueue {
    pub queue: vk::Queue,
    pub family_id: u32,
    pub index: u32,
}

impl GpuQueue {
    /// True when both queues are the same underlying queue.
    pub fn is_same(&self, other: &GpuQueue) -> bool {
        self.family_id == other.family_id && self.index == other.index
    }
}

/// The render device holds the core Vulkan state which is shared by all
/// parts of the application: the negotiated adapter, the logical device, and
/// the command queues.
pub struct RenderDevice {
    /// The adapter chosen during negotiation.
    pub physical_device: vk::PhysicalDevice,

    /// The Vulkan logical device used to issue commands.
    pub logical_device: ash::Device,

    /// The queue used for graphics commands.
    pub graphics_queue: GpuQueue,

    /// The queue used for presentation. May alias the graphics queue.
    pub present_queue: GpuQueue,

    /// The Vulkan presentation surface for the current window.
    pub window_surface: WindowSurface,

    /// Device-scoped debug naming functions, when diagnostics are enabled.
    debug_fns: Option<ash::ext::debug_utils::Device>,

    /// The Vulkan library instance.
    pub instance: Arc<Instance>,
}
