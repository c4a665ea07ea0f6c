mod selection;
mod swapchain;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::RenderDevice;
use crate::vulkan::errors::WindowSurfaceError;

pub use self::selection::{
    choose_image_count, choose_present_mode, choose_surface_format,
    choose_swap_extent,
};

/// This enum represents the errors which can occur while building or using
/// the swapchain.
#[derive(Debug, Error)]
pub enum SwapchainError {
    #[error("The surface reports no formats to render into")]
    NoSurfaceFormats,

    #[error("Unable to create the swapchain")]
    UnableToCreateSwapchain(#[source] vk::Result),

    #[error("Unable to get the swapchain images")]
    UnableToGetSwapchainImages(#[source] vk::Result),

    #[error("Unable to create a view for a swapchain image")]
    UnableToCreateSwapchainImageView(#[source] vk::Result),

    #[error(
        "The swapchain no longer matches the surface and must be rebuilt"
    )]
    SurfaceStale,

    #[error("Unable to acquire a swapchain image")]
    UnableToAcquireSwapchainImage(#[source] vk::Result),

    #[error("Unable to present a swapchain image")]
    UnableToPresentSwapchainImage(#[source] vk::Result),

    #[error("Unexpected window surface error")]
    UnexpectedSurfaceError(#[from] WindowSurfaceError),
}

/// The swapchain and the resources derived from its images.
pub struct Swapchain {
    /// The swapchain extension functions.
    pub loader: ash::khr::swapchain::Device,

    /// The raw swapchain handle.
    pub khr: vk::SwapchainKHR,

    /// The images owned by the swapchain.
    pub images: Vec<vk::Image>,

    /// One view per swapchain image, in image order.
    pub image_views: Vec<vk::ImageView>,

    /// The pixel format chosen for the swapchain images.
    pub format: vk::Format,

    /// The color space chosen for the swapchain images.
    pub color_space: vk::ColorSpaceKHR,

    /// The presentation mode chosen for the swapchain.
    pub present_mode: vk::PresentModeKHR,

    /// The resolution of the swapchain images.
    pub extent: vk::Extent2D,

    /// The device used to create and destroy swapchain resources.
    pub vk_dev: Arc<RenderDevice>,
}
