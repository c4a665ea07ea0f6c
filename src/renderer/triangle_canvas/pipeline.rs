use std::sync::Arc;

use ash::vk;

use crate::vulkan::{
    errors::PipelineError, Pipeline, PipelineLayout, RenderDevice,
    RenderPass, ShaderModule, VulkanDebug,
};

/// Build the graphics pipeline for the triangle.
///
/// The pipeline reads no vertex inputs and expects the viewport and scissor
/// to be set dynamically each frame, so it survives window resizes without
/// being rebuilt.
pub(super) fn create_pipeline(
    vk_dev: Arc<RenderDevice>,
    render_pass: &RenderPass,
    pipeline_layout: &PipelineLayout,
    vertex_spirv: &[u8],
    fragment_spirv: &[u8],
) -> Result<Pipeline, PipelineError> {
    let vertex_module =
        ShaderModule::from_spirv(vk_dev.clone(), vertex_spirv)?;
    vertex_module.set_debug_name("TriangleCanvas - vertex shader")?;
    let fragment_module =
        ShaderModule::from_spirv(vk_dev.clone(), fragment_spirv)?;
    fragment_module.set_debug_name("TriangleCanvas - fragment shader")?;

    let stages = [
        vertex_module.stage_create_info(vk::ShaderStageFlags::VERTEX),
        fragment_module.stage_create_info(vk::ShaderStageFlags::FRAGMENT),
    ];

    let vertex_input_state = vk::PipelineVertexInputStateCreateInfo {
        vertex_binding_description_count: 0,
        vertex_attribute_description_count: 0,
        ..Default::default()
    };
    let input_assembly_state = vk::PipelineInputAssemblyStateCreateInfo {
        topology: vk::PrimitiveTopology::TRIANGLE_LIST,
        primitive_restart_enable: vk::FALSE,
        ..Default::default()
    };
    let viewport_state = vk::PipelineViewportStateCreateInfo {
        viewport_count: 1,
        scissor_count: 1,
        ..Default::default()
    };
    let rasterization_state = vk::PipelineRasterizationStateCreateInfo {
        depth_clamp_enable: vk::FALSE,
        rasterizer_discard_enable: vk::FALSE,
        polygon_mode: vk::PolygonMode::FILL,
        cull_mode: vk::CullModeFlags::BACK,
        front_face: vk::FrontFace::CLOCKWISE,
        depth_bias_enable: vk::FALSE,
        line_width: 1.0,
        ..Default::default()
    };
    let multisample_state = vk::PipelineMultisampleStateCreateInfo {
        rasterization_samples: vk::SampleCountFlags::TYPE_1,
        sample_shading_enable: vk::FALSE,
        ..Default::default()
    };
    let blend_attachment = vk::PipelineColorBlendAttachmentState {
        blend_enable: vk::FALSE,
        color_write_mask: vk::ColorComponentFlags::RGBA,
        ..Default::default()
    };
    let color_blend_state = vk::PipelineColorBlendStateCreateInfo {
        logic_op_enable: vk::FALSE,
        attachment_count: 1,
        p_attachments: &blend_attachment,
        ..Default::default()
    };
    let dynamic_states =
        [vk::DynamicState::VIEWPORT, vk::DynamicState::SCISSOR];
    let dynamic_state = vk::PipelineDynamicStateCreateInfo {
        dynamic_state_count: dynamic_states.len() as u32,
        p_dynamic_states: dynamic_states.as_ptr(),
        ..Default::default()
    };

    let create_info = vk::GraphicsPipelineCreateInfo {
        stage_count: stages.len() as u32,
        p_stages: stages.as_ptr(),
        p_vertex_input_state: &vertex_input_state,
        p_input_assembly_state: &input_assembly_state,
        p_viewport_state: &viewport_state,
        p_rasterization_state: &rasterization_state,
        p_multisample_state: &multisample_state,
        p_color_blend_state: &color_blend_state,
        p_dynamic_state: &dynamic_state,
        layout: pipeline_layout.raw,
        render_pass: render_pass.raw,
        subpass: 0,
        ..Default::default()
    };

    Pipeline::new_graphics_pipeline(vk_dev, create_info)
}
