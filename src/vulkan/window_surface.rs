use ash::{khr, vk};
use raw_window_handle::{RawDisplayHandle, RawWindowHandle};
use thiserror::Error;

use super::Instance;

/// This enum represents errors which can occur while creating and querying
/// the presentation surface.
#[derive(Debug, Error)]
pub enum WindowSurfaceError {
    #[error("Unable to create the Vulkan surface for the window")]
    UnableToCreateSurface(#[source] vk::Result),

    #[error("Unable to query the surface capabilities")]
    UnableToGetSurfaceCapabilities(#[source] vk::Result),

    #[error("Unable to query the supported surface formats")]
    UnableToGetSurfaceFormats(#[source] vk::Result),

    #[error("Unable to query the supported presentation modes")]
    UnableToGetPresentModes(#[source] vk::Result),

    #[error("Unable to check presentation support for queue family {}", .0)]
    UnableToCheckPresentSupport(u32, #[source] vk::Result),
}

/// The Vulkan presentation surface for a window, bundled with the extension
/// functions used to query it.
pub struct WindowSurface {
    pub khr: vk::SurfaceKHR,
    pub loader: khr::surface::Instance,
}

impl WindowSurface {
    /// Create a presentation surface for the window identified by the raw
    /// handles.
    pub fn new(
        instance: &Instance,
        display_handle: RawDisplayHandle,
        window_handle: RawWindowHandle,
    ) -> Result<Self, WindowSurfaceError> {
        let khr = unsafe {
            ash_window::create_surface(
                &instance.entry,
                &instance.ash,
                display_handle,
                window_handle,
                None,
            )
            .map_err(WindowSurfaceError::UnableToCreateSurface)?
        };
        let loader =
            khr::surface::Instance::new(&instance.entry, &instance.ash);
        Ok(Self { khr, loader })
    }

    /// Query the surface capabilities reported by a physical device.
    ///
    /// # Safety
    ///
    /// Safe when the physical device supports the surface extension, which
    /// is verified during device negotiation.
    pub unsafe fn surface_capabilities(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> Result<vk::SurfaceCapabilitiesKHR, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_capabilities(
                physical_device,
                self.khr,
            )
            .map_err(WindowSurfaceError::UnableToGetSurfaceCapabilities)
    }

    /// Query the surface formats reported by a physical device.
    ///
    /// # Safety
    ///
    /// Safe when the physical device supports the surface extension, which
    /// is verified during device negotiation.
    pub unsafe fn supported_formats(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> Result<Vec<vk::SurfaceFormatKHR>, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_formats(physical_device, self.khr)
            .map_err(WindowSurfaceError::UnableToGetSurfaceFormats)
    }

    /// Query the presentation modes reported by a physical device.
    ///
    /// # Safety
    ///
    /// Safe when the physical device supports the surface extension, which
    /// is verified during device negotiation.
    pub unsafe fn supported_presentation_modes(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> Result<Vec<vk::PresentModeKHR>, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_present_modes(
                physical_device,
                self.khr,
            )
            .map_err(WindowSurfaceError::UnableToGetPresentModes)
    }

    /// Check whether a queue family can present to this surface.
    ///
    /// # Safety
    ///
    /// Safe when the queue family index is in range for the physical device.
    pub unsafe fn queue_family_can_present(
        &self,
        physical_device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> Result<bool, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_support(
                physical_device,
                queue_family_index,
                self.khr,
            )
            .map_err(|err| {
                WindowSurfaceError::UnableToCheckPresentSupport(
                    queue_family_index,
                    err,
                )
            })
    }
}

impl Drop for WindowSurface {
    /// The owner must ensure the surface is dropped before the instance
    /// which created it. There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.loader.destroy_surface(self.khr, None);
        }
    }
}
