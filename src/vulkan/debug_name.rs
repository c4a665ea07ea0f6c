use ash::vk;
use thiserror::Error;

/// This enum represents errors which can occur while assigning debug names to
/// Vulkan objects.
#[derive(Debug, Error)]
pub enum VulkanDebugError {
    #[error("Unable to set debug name, {}, for {:?}", .0, .1)]
    UnableToSetDebugName(String, vk::ObjectType, #[source] vk::Result),
}

/// Types which implement this trait can be assigned a name which shows up in
/// the Vulkan debug callback logs.
///
/// Naming is a no-op when the debug utils extension was not enabled at
/// instance creation, so callers never need to check for availability.
pub trait VulkanDebug {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError>;
}
