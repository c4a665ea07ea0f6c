use std::{ffi::CString, sync::Arc};

use ash::vk;

use super::{
    negotiate, AdapterProfile, GpuQueue, Instance, QueueFamilyIndices,
    RenderDevice, RenderDeviceError, WindowSurface,
};
use crate::{logging::BulletList, vulkan::errors::VulkanDebugError};

impl RenderDevice {
    /// Negotiate an adapter and create the logical device and queues.
    ///
    /// Adapters are considered in enumeration order and the first one which
    /// supports graphics, presentation to the given surface, the swapchain
    /// extension, and at least one surface format and present mode wins.
    /// The render device takes ownership of the window surface so the two
    /// are always destroyed in the right order.
    pub fn new(
        instance: Arc<Instance>,
        window_surface: WindowSurface,
    ) -> Result<Self, RenderDeviceError> {
        let physical_devices = unsafe {
            instance
                .ash
                .enumerate_physical_devices()
                .map_err(RenderDeviceError::UnableToEnumerateDevices)?
        };

        let adapters: Vec<AdapterProfile> = physical_devices
            .iter()
            .map(|&physical_device| unsafe {
                AdapterProfile::query(
                    &instance,
                    &window_surface,
                    physical_device,
                )
            })
            .collect::<Result<Vec<_>, RenderDeviceError>>()?;

        let adapter_names: Vec<&str> =
            adapters.iter().map(|adapter| adapter.name.as_str()).collect();
        log::debug!(
            "Adapters reported by the platform: {}",
            BulletList(&adapter_names)
        );

        let (adapter_index, queue_family_indices) = negotiate(&adapters)?;
        log::info!(
            "Using adapter {} with graphics family {} and present family {}",
            adapters[adapter_index].name,
            queue_family_indices.graphics_family_index,
            queue_family_indices.present_family_index,
        );

        let physical_device = physical_devices[adapter_index];
        let logical_device = create_logical_device(
            &instance,
            physical_device,
            &queue_family_indices,
        )?;

        let graphics_queue = GpuQueue {
            queue: unsafe {
                logical_device.get_device_queue(
                    queue_family_indices.graphics_family_index,
                    0,
                )
            },
            family_id: queue_family_indices.graphics_family_index,
            index: 0,
        };
        let present_queue = GpuQueue {
            queue: unsafe {
                logical_device.get_device_queue(
                    queue_family_indices.present_family_index,
                    0,
                )
            },
            family_id: queue_family_indices.present_family_index,
            index: 0,
        };

        let debug_fns = instance.debug_utils_enabled().then(|| {
            ash::ext::debug_utils::Device::new(&instance.ash, &logical_device)
        });

        Ok(Self {
            physical_device,
            logical_device,
            graphics_queue,
            present_queue,
            window_surface,
            debug_fns,
            instance,
        })
    }

    /// Assign a name to a Vulkan object which shows up in debug messages.
    ///
    /// A no-op when the instance was created without the debug utils
    /// extension.
    pub fn name_vulkan_object<Name, Handle>(
        &self,
        name: Name,
        object_type: vk::ObjectType,
        handle: Handle,
    ) -> Result<(), VulkanDebugError>
    where
        Name: Into<String>,
        Handle: vk::Handle + Copy,
    {
        let Some(debug_fns) = &self.debug_fns else {
            return Ok(());
        };
        let owned_name = name.into();
        let c_name = CString::new(owned_name.clone()).unwrap();
        let name_info = vk::DebugUtilsObjectNameInfoEXT {
            object_type,
            object_handle: handle.as_raw(),
            p_object_name: c_name.as_ptr(),
            ..Default::default()
        };
        unsafe {
            debug_fns
                .set_debug_utils_object_name(&name_info)
                .map_err(|err| {
                    VulkanDebugError::UnableToSetDebugName(
                        owned_name,
                        object_type,
                        err,
                    )
                })
        }
    }
}

impl Drop for RenderDevice {
    /// The owner must ensure that all device resources have been destroyed
    /// and that the GPU is idle before dropping the render device. There is
    /// no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.logical_device.destroy_device(None);
        }
    }
}

/// Build one queue create info per distinct queue family, then create the
/// logical device with the swapchain extension enabled.
fn create_logical_device(
    instance: &Instance,
    physical_device: vk::PhysicalDevice,
    queue_family_indices: &QueueFamilyIndices,
) -> Result<ash::Device, RenderDeviceError> {
    let priorities = [1.0_f32];
    let mut queue_create_infos = vec![vk::DeviceQueueCreateInfo {
        queue_family_index: queue_family_indices.graphics_family_index,
        queue_count: 1,
        p_queue_priorities: priorities.as_ptr(),
        ..Default::default()
    }];
    if queue_family_indices.present_family_index
        != queue_family_indices.graphics_family_index
    {
        queue_create_infos.push(vk::DeviceQueueCreateInfo {
            queue_family_index: queue_family_indices.present_family_index,
            queue_count: 1,
            p_queue_priorities: priorities.as_ptr(),
            ..Default::default()
        });
    }

    let device = instance.create_logical_device(
        physical_device,
        vk::PhysicalDeviceFeatures::default(),
        &[ash::khr::swapchain::NAME],
        &queue_create_infos,
    )?;
    Ok(device)
}
