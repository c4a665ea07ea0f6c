//! Open a window, bring up the Vulkan device and swapchain, and draw a
//! triangle with a single frame in flight.
//!
//! The shader sources live next to this file in `shaders/`. Compile them
//! before running:
//!
//! ```text
//! glslc demos/triangle/shaders/triangle.vert \
//!     -o demos/triangle/shaders/triangle.vert.spv
//! glslc demos/triangle/shaders/triangle.frag \
//!     -o demos/triangle/shaders/triangle.frag.spv
//! cargo run --example triangle
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    raw_window_handle::{HasDisplayHandle, HasWindowHandle},
    window::{Window, WindowId},
};

use firstlight::{
    frame_pipeline::{FrameError, FramePipeline},
    renderer::TriangleCanvas,
    vulkan::{Instance, RenderDevice, Swapchain, WindowSurface},
};

const VERTEX_SHADER_PATH: &str =
    "demos/triangle/shaders/triangle.vert.spv";
const FRAGMENT_SHADER_PATH: &str =
    "demos/triangle/shaders/triangle.frag.spv";

/// Everything which only exists once a window has been created.
struct RenderState {
    frame_pipeline: FramePipeline,
    canvas: TriangleCanvas,
    swapchain: Swapchain,
    window: Window,
}

impl RenderState {
    fn new(window: Window) -> Result<Self> {
        let display_handle = window.display_handle()?.as_raw();
        let window_handle = window.window_handle()?.as_raw();

        let required_extensions =
            ash_window::enumerate_required_extensions(display_handle)
                .context(
                    "Unable to list the Vulkan extensions the window needs",
                )?;
        let instance = Arc::new(Instance::new(required_extensions)?);
        let window_surface =
            WindowSurface::new(&instance, display_handle, window_handle)?;
        let vk_dev =
            Arc::new(RenderDevice::new(instance, window_surface)?);

        let size = window.inner_size();
        let swapchain = Swapchain::new(
            vk_dev.clone(),
            (size.width.max(1), size.height.max(1)),
        )?;

        let canvas = TriangleCanvas::new(
            vk_dev.clone(),
            &swapchain,
            &read_shader(VERTEX_SHADER_PATH)?,
            &read_shader(FRAGMENT_SHADER_PATH)?,
        )?;
        let frame_pipeline = FramePipeline::new(vk_dev.clone())?;

        Ok(Self {
            frame_pipeline,
            canvas,
            swapchain,
            window,
        })
    }
}

impl Drop for RenderState {
    fn drop(&mut self) {
        if let Err(err) = self.frame_pipeline.wait_for_all_frames() {
            log::error!(
                "Unable to wait for the device while shutting down: {}",
                err
            );
        }
    }
}

#[derive(Default)]
struct App {
    state: Option<RenderState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = match event_loop.create_window(
            Window::default_attributes().with_title("triangle"),
        ) {
            Ok(window) => window,
            Err(err) => {
                log::error!("Unable to create the window: {}", err);
                event_loop.exit();
                return;
            }
        };
        match RenderState::new(window) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(err) => {
                log::error!("Unable to start rendering: {:?}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };
        if window_id != state.window.id() {
            return;
        }
        match event {
            WindowEvent::CloseRequested => {
                self.state = None;
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let result = state
                    .frame_pipeline
                    .draw_frame(&state.swapchain, &state.canvas);
                match result {
                    Ok(()) => {
                        state.window.request_redraw();
                    }
                    Err(FrameError::SurfaceStale) => {
                        log::warn!(
                            "The swapchain no longer matches the \
                             surface, exiting"
                        );
                        self.state = None;
                        event_loop.exit();
                    }
                    Err(err) => {
                        log::error!("Unable to render a frame: {:?}", err);
                        self.state = None;
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

fn read_shader(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| {
        format!(
            "Unable to read {}. Compile the shader sources in \
             demos/triangle/shaders with glslc first.",
            path
        )
    })
}

fn main() -> Result<()> {
    firstlight::logging::setup()?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
