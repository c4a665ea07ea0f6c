use std::ffi::{c_char, CStr, CString};

use ash::{vk, Entry};

use super::{
    debug_callback, extensions, layers, DebugMessenger, Instance,
    InstanceError,
};
use crate::logging::BulletList;

impl Instance {
    /// Create a new ash instance with the required extensions.
    ///
    /// The required extensions typically come from the window system. The
    /// debug utils extension and the validation layer are added automatically
    /// when the platform offers them; their absence is logged, never an
    /// error.
    pub fn new(
        required_extensions: &[*const c_char],
    ) -> Result<Self, InstanceError> {
        let entry = unsafe {
            Entry::load().map_err(InstanceError::VulkanLoadingError)?
        };

        extensions::check_required_extensions(&entry, required_extensions)?;

        let with_diagnostics = extensions::debug_utils_available(&entry)?
            && layers::validation_layer_available(&entry)?;
        if !with_diagnostics {
            log::info!(
                "Vulkan diagnostics are unavailable on this platform, \
                 continuing without the debug messenger"
            );
        }

        let enabled_layers: Vec<&'static CStr> = if with_diagnostics {
            vec![layers::VALIDATION_LAYER]
        } else {
            vec![]
        };
        let mut enabled_extensions: Vec<*const c_char> =
            required_extensions.to_vec();
        if with_diagnostics {
            enabled_extensions.push(ash::ext::debug_utils::NAME.as_ptr());
        }

        let instance =
            create_instance(&entry, &enabled_layers, &enabled_extensions)?;

        let debug_messenger = if with_diagnostics {
            Some(debug_callback::create_debug_messenger(&entry, &instance)?)
        } else {
            None
        };

        Ok(Self {
            ash: instance,
            debug_messenger,
            layers: enabled_layers,
            entry,
        })
    }

    /// Create the logical device with the provided queues and device
    /// extensions.
    pub fn create_logical_device(
        &self,
        physical_device: vk::PhysicalDevice,
        physical_device_features: vk::PhysicalDeviceFeatures,
        physical_device_extensions: &[&CStr],
        queue_create_infos: &[vk::DeviceQueueCreateInfo],
    ) -> Result<ash::Device, InstanceError> {
        let layer_name_ptrs: Vec<*const c_char> =
            self.layers.iter().map(|layer| layer.as_ptr()).collect();
        let ext_name_ptrs: Vec<*const c_char> = physical_device_extensions
            .iter()
            .map(|ext| ext.as_ptr())
            .collect();

        let create_info = vk::DeviceCreateInfo {
            queue_create_info_count: queue_create_infos.len() as u32,
            p_queue_create_infos: queue_create_infos.as_ptr(),
            p_enabled_features: &physical_device_features,
            pp_enabled_layer_names: layer_name_ptrs.as_ptr(),
            enabled_layer_count: layer_name_ptrs.len() as u32,
            pp_enabled_extension_names: ext_name_ptrs.as_ptr(),
            enabled_extension_count: ext_name_ptrs.len() as u32,
            ..Default::default()
        };

        unsafe {
            self.ash
                .create_device(physical_device, &create_info, None)
                .map_err(InstanceError::UnableToCreateLogicalDevice)
        }
    }

    /// True when the instance was created with the debug utils extension.
    pub fn debug_utils_enabled(&self) -> bool {
        self.debug_messenger.is_some()
    }
}

impl Drop for Instance {
    /// The owner must ensure that the Instance is only dropped after other
    /// resources which depend on it! There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            if let Some(DebugMessenger {
                instance_fns,
                messenger,
            }) = self.debug_messenger.take()
            {
                instance_fns.destroy_debug_utils_messenger(messenger, None);
            }
            self.ash.destroy_instance(None);
        }
    }
}

/// Create a Vulkan instance with the given layers and extensions.
fn create_instance(
    entry: &Entry,
    layers: &[&CStr],
    extensions: &[*const c_char],
) -> Result<ash::Instance, InstanceError> {
    let extension_names: Vec<&str> = extensions
        .iter()
        .map(|&ptr| unsafe { CStr::from_ptr(ptr) })
        .map(|name| name.to_str().unwrap_or("<non-utf8 extension name>"))
        .collect();
    log::debug!(
        "Requested instance extensions: {}",
        BulletList(&extension_names)
    );

    let app_name = CString::new("firstlight").unwrap();
    let engine_name = CString::new("no engine").unwrap();

    let app_info = vk::ApplicationInfo {
        p_application_name: app_name.as_ptr(),
        p_engine_name: engine_name.as_ptr(),
        application_version: vk::make_api_version(0, 1, 0, 0),
        engine_version: vk::make_api_version(0, 1, 0, 0),
        api_version: vk::API_VERSION_1_0,
        ..Default::default()
    };

    let layer_ptrs: Vec<*const c_char> =
        layers.iter().map(|layer| layer.as_ptr()).collect();

    let create_info = vk::InstanceCreateInfo {
        p_application_info: &app_info,
        pp_enabled_layer_names: layer_ptrs.as_ptr(),
        enabled_layer_count: layer_ptrs.len() as u32,
        pp_enabled_extension_names: extensions.as_ptr(),
        enabled_extension_count: extensions.len() as u32,
        ..Default::default()
    };

    unsafe {
        entry
            .create_instance(&create_info, None)
            .map_err(InstanceError::UnableToCreateInstance)
    }
}
