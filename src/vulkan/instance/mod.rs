mod debug_callback;
mod extensions;
mod instance;
mod layers;

use std::ffi::CStr;

use ash::{vk, Entry};
use thiserror::Error;

/// This enum represents the errors which can occur while building and
/// handling the Vulkan instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("Error while creating the Vulkan function loader")]
    VulkanLoadingError(#[source] ash::LoadingError),

    #[error("Unable to list the available Vulkan extensions on this platform")]
    UnableToListAvailableExtensions(#[source] vk::Result),

    #[error("Required extensions are not available on this platform: {:?}", .0)]
    RequiredExtensionsNotFound(Vec<String>),

    #[error("Unable to list the available Vulkan layers on this platform")]
    UnableToListAvailableLayers(#[source] vk::Result),

    #[error("Unable to create the Vulkan instance")]
    UnableToCreateInstance(#[source] vk::Result),

    #[error("Unable to setup the Vulkan debug callback")]
    DebugMessengerCreateFailed(#[source] vk::Result),

    #[error("Unable to create the logical device")]
    UnableToCreateLogicalDevice(#[source] vk::Result),
}

/// The Instance struct holds the ash entry and instance handle along with the
/// optional debug messenger.
///
/// The debug messenger is only created when both the debug utils extension
/// and the Khronos validation layer are available at runtime; otherwise every
/// diagnostic entry point degrades to a no-op.
pub struct Instance {
    /// The Ash Vulkan instance handle.
    pub ash: ash::Instance,

    /// The validation-layer message pump, when diagnostics are available.
    debug_messenger: Option<DebugMessenger>,

    /// The layers enabled on this instance.
    layers: Vec<&'static CStr>,

    /// The vulkan function loader.
    pub entry: Entry,
}

/// The debug utils instance functions bundled with the messenger they
/// created.
struct DebugMessenger {
    instance_fns: ash::ext::debug_utils::Instance,
    messenger: vk::DebugUtilsMessengerEXT,
}
