use std::ffi::CStr;

use ash::vk;

use super::{
    Instance, QueueFamilyIndices, RenderDeviceError, WindowSurface,
};

/// The capabilities of a single queue family, as far as this application is
/// concerned.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueFamilyProfile {
    pub supports_graphics: bool,
    pub supports_present: bool,
}

/// Everything this application needs to know about an adapter in order to
/// decide whether it can be used for rendering.
#[derive(Debug, Clone)]
pub struct AdapterProfile {
    /// The adapter's self-reported name. Only used for logging.
    pub name: String,

    /// One entry per queue family, in family-index order.
    pub queue_families: Vec<QueueFamilyProfile>,

    /// True when the adapter supports the swapchain device extension.
    pub supports_swapchain_extension: bool,

    /// The surface formats the adapter can render for the current surface.
    pub surface_formats: Vec<vk::SurfaceFormatKHR>,

    /// The presentation modes the adapter supports for the current surface.
    pub present_modes: Vec<vk::PresentModeKHR>,
}

impl AdapterProfile {
    /// Query an adapter's capabilities relative to the window surface.
    ///
    /// # Safety
    ///
    /// Unsafe because the physical device must belong to the given instance
    /// and the surface must still exist.
    pub unsafe fn query(
        instance: &Instance,
        window_surface: &WindowSurface,
        physical_device: vk::PhysicalDevice,
    ) -> Result<Self, RenderDeviceError> {
        let properties = instance
            .ash
            .get_physical_device_properties(physical_device);
        let name = CStr::from_ptr(properties.device_name.as_ptr())
            .to_string_lossy()
            .into_owned();

        let queue_families = instance
            .ash
            .get_physical_device_queue_family_properties(physical_device)
            .iter()
            .enumerate()
            .map(|(index, family)| {
                let supports_present = window_surface
                    .queue_family_can_present(physical_device, index as u32)?;
                Ok(QueueFamilyProfile {
                    supports_graphics: family
                        .queue_flags
                        .contains(vk::QueueFlags::GRAPHICS),
                    supports_present,
                })
            })
            .collect::<Result<Vec<_>, RenderDeviceError>>()?;

        let extensions = instance
            .ash
            .enumerate_device_extension_properties(physical_device)
            .map_err(RenderDeviceError::UnableToListDeviceExtensions)?;
        let supports_swapchain_extension =
            extensions.iter().any(|extension| {
                CStr::from_ptr(extension.extension_name.as_ptr())
                    == ash::khr::swapchain::NAME
            });

        let surface_formats =
            window_surface.supported_formats(physical_device)?;
        let present_modes =
            window_surface.supported_presentation_modes(physical_device)?;

        Ok(Self {
            name,
            queue_families,
            supports_swapchain_extension,
            surface_formats,
            present_modes,
        })
    }

    /// True when the adapter can actually be used for rendering and
    /// presentation. Missing any one requirement disqualifies the adapter.
    pub fn is_suitable(&self) -> bool {
        self.supports_swapchain_extension
            && !self.surface_formats.is_empty()
            && !self.present_modes.is_empty()
            && QueueFamilyIndices::find(self).is_some()
    }
}

/// Pick the adapter to use for rendering.
///
/// Adapters are considered in enumeration order and the first suitable one
/// wins. Returns the index of the chosen adapter along with the queue
/// families resolved on it.
pub fn negotiate(
    adapters: &[AdapterProfile],
) -> Result<(usize, QueueFamilyIndices), RenderDeviceError> {
    if adapters.is_empty() {
        return Err(RenderDeviceError::NoAdapterPresent);
    }
    adapters
        .iter()
        .enumerate()
        .find(|(_, adapter)| adapter.is_suitable())
        .and_then(|(index, adapter)| {
            QueueFamilyIndices::find(adapter)
                .map(|indices| (index, indices))
        })
        .ok_or(RenderDeviceError::NoCapableAdapter)
}

#[cfg(test)]
mod test {
    use super::*;

    fn graphics_and_present() -> QueueFamilyProfile {
        QueueFamilyProfile {
            supports_graphics: true,
            supports_present: true,
        }
    }

    fn capable_adapter(name: &str) -> AdapterProfile {
        AdapterProfile {
            name: name.to_owned(),
            queue_families: vec![graphics_and_present()],
            supports_swapchain_extension: true,
            surface_formats: vec![vk::SurfaceFormatKHR {
                format: vk::Format::B8G8R8A8_SRGB,
                color_space: vk::ColorSpaceKHR::SRGB_NONLINEAR,
            }],
            present_modes: vec![vk::PresentModeKHR::FIFO],
        }
    }

    #[test]
    fn no_adapters_is_a_distinct_error() {
        let result = negotiate(&[]);
        assert!(matches!(
            result,
            Err(RenderDeviceError::NoAdapterPresent)
        ));
    }

    #[test]
    fn adapters_without_required_support_are_rejected() {
        let mut no_swapchain = capable_adapter("no swapchain");
        no_swapchain.supports_swapchain_extension = false;

        let mut no_formats = capable_adapter("no formats");
        no_formats.surface_formats.clear();

        let mut no_present_modes = capable_adapter("no present modes");
        no_present_modes.present_modes.clear();

        let mut no_graphics = capable_adapter("no graphics");
        no_graphics.queue_families[0].supports_graphics = false;

        let result =
            negotiate(&[no_swapchain, no_formats, no_present_modes, no_graphics]);
        assert!(matches!(
            result,
            Err(RenderDeviceError::NoCapableAdapter)
        ));
    }

    #[test]
    fn the_first_suitable_adapter_wins() {
        let mut unsuitable = capable_adapter("integrated");
        unsuitable.queue_families[0].supports_present = false;

        let adapters =
            [unsuitable, capable_adapter("discrete"), capable_adapter("spare")];
        let (index, _) = negotiate(&adapters).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn a_single_family_can_serve_both_roles() {
        let adapters = [capable_adapter("only one")];
        let (index, indices) = negotiate(&adapters).unwrap();
        assert_eq!(index, 0);
        assert_eq!(indices.graphics_family_index, 0);
        assert_eq!(indices.present_family_index, 0);
    }

    #[test]
    fn split_graphics_and_present_families_are_resolved() {
        let mut adapter = capable_adapter("split families");
        adapter.queue_families = vec![
            QueueFamilyProfile {
                supports_graphics: true,
                supports_present: false,
            },
            QueueFamilyProfile {
                supports_graphics: false,
                supports_present: true,
            },
        ];
        let (_, indices) = negotiate(&[adapter]).unwrap();
        assert_eq!(indices.graphics_family_index, 0);
        assert_eq!(indices.present_family_index, 1);
    }
}
