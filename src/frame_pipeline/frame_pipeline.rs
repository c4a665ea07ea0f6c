use std::sync::Arc;

use anyhow::Context;
use ash::vk;

use super::{run_frame, FrameError, FramePipeline, FrameStation};
use crate::{
    renderer::Renderer,
    vulkan::{
        errors::{SwapchainError, VulkanError},
        CommandBuffer, CommandPool, FrameSync, RenderDevice, Swapchain,
        VulkanDebug,
    },
};

impl FramePipeline {
    /// Create the per-frame resources for a single frame in flight.
    pub fn new(vk_dev: Arc<RenderDevice>) -> Result<Self, FrameError> {
        let frame_sync = FrameSync::new(vk_dev.clone())?;
        frame_sync
            .set_debug_name("FramePipeline")
            .map_err(VulkanError::VulkanDebugError)?;

        let command_pool = Arc::new(
            CommandPool::new_transient_graphics_pool(vk_dev.clone())
                .map_err(VulkanError::CommandBufferError)?,
        );
        command_pool
            .set_debug_name("FramePipeline - command pool")
            .map_err(VulkanError::VulkanDebugError)?;

        let command_buffer =
            CommandBuffer::new_primary(vk_dev.clone(), command_pool.clone())
                .map_err(VulkanError::CommandBufferError)?;
        command_buffer
            .set_debug_name("FramePipeline - command buffer")
            .map_err(VulkanError::VulkanDebugError)?;

        Ok(Self {
            frame_sync,
            command_pool,
            command_buffer,
            vk_dev,
        })
    }

    /// Render and present a single frame.
    ///
    /// The renderer re-records the frame's commands every call. A
    /// SurfaceStale result means nothing was presented and the caller must
    /// rebuild the swapchain before trying again.
    pub fn draw_frame(
        &mut self,
        swapchain: &Swapchain,
        renderer: &dyn Renderer,
    ) -> Result<(), FrameError> {
        let mut station = DeviceFrameStation {
            frame_pipeline: self,
            swapchain,
            renderer,
        };
        run_frame(&mut station)
    }

    /// Block until the GPU has finished all submitted work.
    ///
    /// Called before destroying resources which may still be in use.
    pub fn wait_for_all_frames(&self) -> Result<(), FrameError> {
        unsafe {
            self.vk_dev
                .logical_device
                .device_wait_idle()
                .context("Unable to wait for the device to idle")?;
        }
        Ok(())
    }
}

/// The frame stations, executed on the real device.
struct DeviceFrameStation<'a> {
    frame_pipeline: &'a mut FramePipeline,
    swapchain: &'a Swapchain,
    renderer: &'a dyn Renderer,
}

impl<'a> FrameStation for DeviceFrameStation<'a> {
    fn wait_for_previous_frame(&mut self) -> Result<(), FrameError> {
        self.frame_pipeline
            .frame_sync
            .in_flight
            .wait_and_reset()
            .map_err(VulkanError::FenceError)?;
        Ok(())
    }

    fn acquire_image(&mut self) -> Result<u32, FrameError> {
        let result = self.swapchain.acquire_next_image(
            self.frame_pipeline.frame_sync.image_acquired.raw,
        );
        match result {
            Ok(index) => Ok(index),
            Err(SwapchainError::SurfaceStale) => Err(FrameError::SurfaceStale),
            Err(err) => Err(VulkanError::SwapchainError(err).into()),
        }
    }

    fn record_and_submit(
        &mut self,
        image_index: u32,
    ) -> Result<(), FrameError> {
        let frame_pipeline = &mut *self.frame_pipeline;
        unsafe {
            // The previous frame's fence wait guarantees the buffer is no
            // longer pending.
            frame_pipeline
                .command_pool
                .reset()
                .map_err(VulkanError::CommandBufferError)?;
            frame_pipeline
                .command_buffer
                .begin_one_time_submit()
                .map_err(VulkanError::CommandBufferError)?;
        }

        self.renderer
            .fill_command_buffer(&frame_pipeline.command_buffer, image_index)
            .with_context(|| {
                format!(
                    "Unable to record commands for swapchain image {}",
                    image_index
                )
            })?;

        unsafe {
            frame_pipeline
                .command_buffer
                .end_commands()
                .map_err(VulkanError::CommandBufferError)?;
        }

        let wait_stage = vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT;
        let submit_info = vk::SubmitInfo {
            wait_semaphore_count: 1,
            p_wait_semaphores: &frame_pipeline.frame_sync.image_acquired.raw,
            p_wait_dst_stage_mask: &wait_stage,
            command_buffer_count: 1,
            p_command_buffers: &frame_pipeline.command_buffer.raw,
            signal_semaphore_count: 1,
            p_signal_semaphores: &frame_pipeline
                .frame_sync
                .render_finished
                .raw,
            ..Default::default()
        };
        unsafe {
            frame_pipeline
                .vk_dev
                .logical_device
                .queue_submit(
                    frame_pipeline.vk_dev.graphics_queue.queue,
                    &[submit_info],
                    frame_pipeline.frame_sync.in_flight.raw,
                )
                .map_err(FrameError::UnableToSubmitFrame)?;
        }
        Ok(())
    }

    fn present(&mut self, image_index: u32) -> Result<(), FrameError> {
        let result = self.swapchain.present(
            image_index,
            self.frame_pipeline.frame_sync.render_finished.raw,
        );
        match result {
            Ok(()) => Ok(()),
            Err(SwapchainError::SurfaceStale) => Err(FrameError::SurfaceStale),
            Err(err) => Err(VulkanError::SwapchainError(err).into()),
        }
    }
}
