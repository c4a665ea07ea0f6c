//! A small Vulkan starter: instance/device/swapchain bootstrap plus a
//! single-frame-in-flight render loop.
//!
//! The `vulkan` module owns every Vulkan object behind a scoped wrapper which
//! releases the resource when it falls out of scope. The `frame_pipeline`
//! module drives the per-frame wait/acquire/submit/present protocol, and
//! `renderer` holds the command recorders which fill each frame's command
//! buffer.

pub mod frame_pipeline;
pub mod logging;
pub mod renderer;
pub mod vulkan;
