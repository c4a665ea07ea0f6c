mod pipeline;
mod pipeline_layout;
mod shader_module;

use std::sync::Arc;

use ash::vk;
use thiserror::Error;

use super::RenderDevice;
use crate::vulkan::errors::VulkanDebugError;

/// This enum represents the errors which can occur while building pipelines
/// and the resources they depend on.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(
        "Shader SPIR-V must have a length which is a multiple of 4, got {}",
        .0
    )]
    InvalidSourceLengthInShaderSPIRV(usize),

    #[error("Unable to create the shader module")]
    UnableToCreateShaderModule(#[source] vk::Result),

    #[error("Unable to create the pipeline layout")]
    UnableToCreatePipelineLayout(#[source] vk::Result),

    #[error("Unable to create the graphics pipeline")]
    UnableToCreateGraphicsPipeline(#[source] vk::Result),

    #[error("Unable to name a pipeline resource")]
    UnableToNamePipelineResource(#[from] VulkanDebugError),
}

/// An owned shader module which is destroyed automatically when dropped.
pub struct ShaderModule {
    /// The raw shader module handle.
    pub raw: vk::ShaderModule,

    /// The device used to create and destroy the shader module.
    pub vk_dev: Arc<RenderDevice>,
}

/// An owned pipeline layout which is destroyed automatically when dropped.
pub struct PipelineLayout {
    /// The raw pipeline layout handle.
    pub raw: vk::PipelineLayout,

    /// The device used to create and destroy the pipeline layout.
    pub vk_dev: Arc<RenderDevice>,
}

/// An owned pipeline which is destroyed automatically when dropped.
pub struct Pipeline {
    /// The raw pipeline handle.
    pub raw: vk::Pipeline,

    /// The bind point to use for this pipeline.
    pub bind_point: vk::PipelineBindPoint,

    /// The device used to create and destroy the pipeline.
    pub vk_dev: Arc<RenderDevice>,
}
