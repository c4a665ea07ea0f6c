use std::sync::Arc;

use ash::vk;

use super::{PipelineError, RenderDevice, ShaderModule};
use crate::vulkan::{errors::VulkanDebugError, VulkanDebug};

impl ShaderModule {
    /// Create a shader module from SPIR-V bytes, typically read straight
    /// from a compiled shader file.
    pub fn from_spirv(
        vk_dev: Arc<RenderDevice>,
        source: &[u8],
    ) -> Result<Self, PipelineError> {
        let words = Self::copy_to_u32(source)?;
        let create_info = vk::ShaderModuleCreateInfo {
            code_size: words.len() * std::mem::size_of::<u32>(),
            p_code: words.as_ptr(),
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_shader_module(&create_info, None)
                .map_err(PipelineError::UnableToCreateShaderModule)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// Build the create info for this module's stage in a pipeline.
    ///
    /// The entry point is always `main`.
    pub fn stage_create_info(
        &self,
        stage: vk::ShaderStageFlags,
    ) -> vk::PipelineShaderStageCreateInfo {
        vk::PipelineShaderStageCreateInfo {
            stage,
            module: self.raw,
            p_name: c"main".as_ptr(),
            ..Default::default()
        }
    }

    /// Copy a byte slice into a properly-aligned u32 array.
    ///
    /// SPIR-V is a stream of 32-bit words, but files are read as bytes with
    /// no alignment guarantee.
    fn copy_to_u32(bytes: &[u8]) -> Result<Vec<u32>, PipelineError> {
        const U32_SIZE: usize = std::mem::size_of::<u32>();
        if bytes.len() % U32_SIZE != 0 {
            return Err(PipelineError::InvalidSourceLengthInShaderSPIRV(
                bytes.len(),
            ));
        }
        let words = bytes
            .chunks_exact(U32_SIZE)
            .map(|chunk| {
                u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            })
            .collect();
        Ok(words)
    }
}

impl VulkanDebug for ShaderModule {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::SHADER_MODULE,
            self.raw,
        )
    }
}

impl Drop for ShaderModule {
    /// The owner must ensure that no pipelines are still being created from
    /// this module. There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_shader_module(self.raw, None);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_streams_become_native_endian_words() {
        let bytes = 1024_u32
            .to_ne_bytes()
            .iter()
            .chain(99_u32.to_ne_bytes().iter())
            .copied()
            .collect::<Vec<u8>>();
        let words = ShaderModule::copy_to_u32(&bytes).unwrap();
        assert_eq!(words, vec![1024, 99]);
    }

    #[test]
    fn a_truncated_stream_is_rejected() {
        let bytes = [0_u8, 1, 2, 3, 4];
        let result = ShaderModule::copy_to_u32(&bytes);
        assert!(matches!(
            result,
            Err(PipelineError::InvalidSourceLengthInShaderSPIRV(5))
        ));
    }

    #[test]
    fn an_empty_stream_is_zero_words() {
        let words = ShaderModule::copy_to_u32(&[]).unwrap();
        assert!(words.is_empty());
    }
}
