use std::ffi::{c_char, CStr};

use ash::Entry;

use super::InstanceError;

/// Verify that every required extension is offered by the platform.
///
/// Fails with a list of every missing extension name so the operator can see
/// the whole picture in one pass.
pub(super) fn check_required_extensions(
    entry: &Entry,
    required_extensions: &[*const c_char],
) -> Result<(), InstanceError> {
    let available = available_extension_names(entry)?;
    let missing: Vec<String> = required_extensions
        .iter()
        .map(|&ptr| unsafe { CStr::from_ptr(ptr) })
        .filter(|required| {
            !available.iter().any(|name| name.as_c_str() == *required)
        })
        .map(|required| required.to_string_lossy().into_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(InstanceError::RequiredExtensionsNotFound(missing))
    }
}

/// Check for the debug utils extension without failing when it is missing.
pub(super) fn debug_utils_available(
    entry: &Entry,
) -> Result<bool, InstanceError> {
    let available = available_extension_names(entry)?;
    Ok(available
        .iter()
        .any(|name| name.as_c_str() == ash::ext::debug_utils::NAME))
}

fn available_extension_names(
    entry: &Entry,
) -> Result<Vec<std::ffi::CString>, InstanceError> {
    let properties = unsafe {
        entry
            .enumerate_instance_extension_properties(None)
            .map_err(InstanceError::UnableToListAvailableExtensions)?
    };
    Ok(properties
        .iter()
        .map(|properties| {
            unsafe { CStr::from_ptr(properties.extension_name.as_ptr()) }
                .to_owned()
        })
        .collect())
}
