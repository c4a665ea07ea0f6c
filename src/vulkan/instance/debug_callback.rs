use std::ffi::CStr;

use ash::{vk, Entry};

use super::{DebugMessenger, InstanceError};

/// Create the debug messenger which routes validation layer messages into
/// the log.
pub(super) fn create_debug_messenger(
    entry: &Entry,
    instance: &ash::Instance,
) -> Result<DebugMessenger, InstanceError> {
    let instance_fns = ash::ext::debug_utils::Instance::new(entry, instance);

    let create_info = vk::DebugUtilsMessengerCreateInfoEXT {
        message_severity:
            vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
                | vk::DebugUtilsMessageSeverityFlagsEXT::INFO
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        message_type: vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
            | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
            | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        pfn_user_callback: Some(debug_callback),
        ..Default::default()
    };

    let messenger = unsafe {
        instance_fns
            .create_debug_utils_messenger(&create_info, None)
            .map_err(InstanceError::DebugMessengerCreateFailed)?
    };

    Ok(DebugMessenger {
        instance_fns,
        messenger,
    })
}

/// Route validation layer messages to the corresponding log level.
unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut std::os::raw::c_void,
) -> vk::Bool32 {
    let message = if p_callback_data.is_null()
        || (*p_callback_data).p_message.is_null()
    {
        std::borrow::Cow::from("<no message>")
    } else {
        CStr::from_ptr((*p_callback_data).p_message).to_string_lossy()
    };

    match message_severity {
        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR => {
            log::error!("Vulkan [{:?}]: {}", message_type, message);
        }
        vk::DebugUtilsMessageSeverityFlagsEXT::WARNING => {
            log::warn!("Vulkan [{:?}]: {}", message_type, message);
        }
        vk::DebugUtilsMessageSeverityFlagsEXT::INFO => {
            log::debug!("Vulkan [{:?}]: {}", message_type, message);
        }
        _ => {
            log::trace!("Vulkan [{:?}]: {}", message_type, message);
        }
    }

    vk::FALSE
}
