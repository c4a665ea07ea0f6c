mod render_pass;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::RenderDevice;

/// This enum represents the errors which can occur while building a render
/// pass.
#[derive(Debug, Error)]
pub enum RenderPassError {
    #[error("Unable to create the render pass")]
    UnableToCreateRenderPass(#[source] vk::Result),
}

/// An owned render pass which is destroyed automatically when dropped.
pub struct RenderPass {
    /// The raw render pass handle.
    pub raw: vk::RenderPass,

    /// The device used to create and destroy the render pass.
    pub vk_dev: Arc<RenderDevice>,
}
