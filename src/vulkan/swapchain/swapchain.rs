use std::sync::Arc;

use ash::vk;

use super::{selection, RenderDevice, Swapchain, SwapchainError};

impl Swapchain {
    /// Build a swapchain for the render device's window surface.
    ///
    /// The framebuffer size is the window's current drawable size in
    /// pixels. It is only consulted when the surface leaves the extent up
    /// to the application.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        framebuffer_size: (u32, u32),
    ) -> Result<Self, SwapchainError> {
        let capabilities = unsafe {
            vk_dev
                .window_surface
                .surface_capabilities(vk_dev.physical_device)?
        };
        let formats = unsafe {
            vk_dev
                .window_surface
                .supported_formats(vk_dev.physical_device)?
        };
        let present_modes = unsafe {
            vk_dev
                .window_surface
                .supported_presentation_modes(vk_dev.physical_device)?
        };

        let surface_format = selection::choose_surface_format(&formats)
            .ok_or(SwapchainError::NoSurfaceFormats)?;
        let present_mode = selection::choose_present_mode(&present_modes);
        let extent =
            selection::choose_swap_extent(&capabilities, framebuffer_size);
        let image_count = selection::choose_image_count(&capabilities);

        // Images must be shared when graphics and present are different
        // families, otherwise the queues would need ownership transfers.
        let queue_family_indices = [
            vk_dev.graphics_queue.family_id,
            vk_dev.present_queue.family_id,
        ];
        let (sharing_mode, family_count, families) = if vk_dev
            .graphics_queue
            .is_same(&vk_dev.present_queue)
        {
            (vk::SharingMode::EXCLUSIVE, 0, std::ptr::null())
        } else {
            (
                vk::SharingMode::CONCURRENT,
                queue_family_indices.len() as u32,
                queue_family_indices.as_ptr(),
            )
        };

        let create_info = vk::SwapchainCreateInfoKHR {
            surface: vk_dev.window_surface.khr,
            min_image_count: image_count,
            image_format: surface_format.format,
            image_color_space: surface_format.color_space,
            image_extent: extent,
            image_array_layers: 1,
            image_usage: vk::ImageUsageFlags::COLOR_ATTACHMENT,
            image_sharing_mode: sharing_mode,
            queue_family_index_count: family_count,
            p_queue_family_indices: families,
            pre_transform: capabilities.current_transform,
            composite_alpha: vk::CompositeAlphaFlagsKHR::OPAQUE,
            present_mode,
            clipped: vk::TRUE,
            old_swapchain: vk::SwapchainKHR::null(),
            ..Default::default()
        };

        let loader = ash::khr::swapchain::Device::new(
            &vk_dev.instance.ash,
            &vk_dev.logical_device,
        );
        let khr = unsafe {
            loader
                .create_swapchain(&create_info, None)
                .map_err(SwapchainError::UnableToCreateSwapchain)?
        };

        let images = unsafe {
            loader
                .get_swapchain_images(khr)
                .map_err(SwapchainError::UnableToGetSwapchainImages)?
        };
        let image_views =
            create_image_views(&vk_dev, &images, surface_format.format)?;

        log::info!(
            "Built a swapchain with {} images at {}x{} using {:?} / {:?}",
            images.len(),
            extent.width,
            extent.height,
            surface_format.format,
            present_mode,
        );

        Ok(Self {
            loader,
            khr,
            images,
            image_views,
            format: surface_format.format,
            color_space: surface_format.color_space,
            present_mode,
            extent,
            vk_dev,
        })
    }

    /// Acquire the next swapchain image for rendering.
    ///
    /// The semaphore is signaled once the image is actually ready for
    /// writes. A stale surface is reported as SurfaceStale rather than a
    /// fatal error so the caller can rebuild. A suboptimal acquire still
    /// acquired an image, so after a SurfaceStale result the semaphore may
    /// be left pending a signal; the caller must not reuse it for another
    /// acquire before rebuilding the swapchain.
    pub fn acquire_next_image(
        &self,
        semaphore: vk::Semaphore,
    ) -> Result<u32, SwapchainError> {
        let result = unsafe {
            self.loader.acquire_next_image(
                self.khr,
                u64::MAX,
                semaphore,
                vk::Fence::null(),
            )
        };
        match result {
            Ok((index, false)) => Ok(index),
            Ok((_, true)) => Err(SwapchainError::SurfaceStale),
            Err(vk::Result::ERROR_OUT_OF_DATE_KHR) => {
                Err(SwapchainError::SurfaceStale)
            }
            Err(err) => {
                Err(SwapchainError::UnableToAcquireSwapchainImage(err))
            }
        }
    }

    /// Queue the image at the given index for presentation.
    ///
    /// Presentation waits on the given semaphore, which the caller signals
    /// when rendering commands for the image have finished.
    pub fn present(
        &self,
        index: u32,
        wait_semaphore: vk::Semaphore,
    ) -> Result<(), SwapchainError> {
        let present_info = vk::PresentInfoKHR {
            wait_semaphore_count: 1,
            p_wait_semaphores: &wait_semaphore,
            swapchain_count: 1,
            p_swapchains: &self.khr,
            p_image_indices: &index,
            ..Default::default()
        };
        let result = unsafe {
            self.loader
                .queue_present(self.vk_dev.present_queue.queue, &present_info)
        };
        match result {
            Ok(false) => Ok(()),
            Ok(true) => Err(SwapchainError::SurfaceStale),
            Err(vk::Result::ERROR_OUT_OF_DATE_KHR) => {
                Err(SwapchainError::SurfaceStale)
            }
            Err(err) => {
                Err(SwapchainError::UnableToPresentSwapchainImage(err))
            }
        }
    }
}

impl Drop for Swapchain {
    /// The owner must ensure that the GPU is done with the swapchain images
    /// before dropping. There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            for view in self.image_views.drain(..) {
                self.vk_dev
                    .logical_device
                    .destroy_image_view(view, None);
            }
            self.loader.destroy_swapchain(self.khr, None);
        }
    }
}

/// Build one color view per swapchain image.
fn create_image_views(
    vk_dev: &RenderDevice,
    images: &[vk::Image],
    format: vk::Format,
) -> Result<Vec<vk::ImageView>, SwapchainError> {
    images
        .iter()
        .map(|&image| {
            let create_info = vk::ImageViewCreateInfo {
                image,
                view_type: vk::ImageViewType::TYPE_2D,
                format,
                components: vk::ComponentMapping::default(),
                subresource_range: vk::ImageSubresourceRange {
                    aspect_mask: vk::ImageAspectFlags::COLOR,
                    base_mip_level: 0,
                    level_count: 1,
                    base_array_layer: 0,
                    layer_count: 1,
                },
                ..Default::default()
            };
            unsafe {
                vk_dev
                    .logical_device
                    .create_image_view(&create_info, None)
                    .map_err(SwapchainError::UnableToCreateSwapchainImageView)
            }
        })
        .collect()
}
