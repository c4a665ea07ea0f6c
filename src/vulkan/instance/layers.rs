use std::ffi::CStr;

use ash::Entry;

use super::InstanceError;

/// The debug layer enabled when diagnostics are available.
pub(super) const VALIDATION_LAYER: &CStr = c"VK_LAYER_KHRONOS_validation";

/// Check for the Khronos validation layer without failing when it is
/// missing.
pub(super) fn validation_layer_available(
    entry: &Entry,
) -> Result<bool, InstanceError> {
    let properties = unsafe {
        entry
            .enumerate_instance_layer_properties()
            .map_err(InstanceError::UnableToListAvailableLayers)?
    };
    Ok(properties.iter().any(|properties| {
        (unsafe { CStr::from_ptr(properties.layer_name.as_ptr()) })
            == VALIDATION_LAYER
    }))
}
