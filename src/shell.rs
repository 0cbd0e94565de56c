use anyhow::Result;
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::graphics::{self, GlRenderer};
use crate::hooks::ShellHooks;
use crate::input::{frame_action, keycode_to_button, Button, FrameAction, InputState};
use crate::monitor::DisplayMode;

/// Owns the window, the GL state, and the input state, and drives the
/// clear-and-present loop. There is no other mutable state in the program.
pub struct WindowShell {
    // The surface and context must be dropped before the window
    renderer: Option<GlRenderer>,
    window: Option<Window>,
    input: InputState,
    fatal: Option<anyhow::Error>,
}

impl WindowShell {
    pub fn new() -> Self {
        Self {
            renderer: None,
            window: None,
            input: InputState::new(),
            fatal: None,
        }
    }

    /// Detect the monitor mode, create the window and GL state, and set the
    /// initial viewport. Any failure here is fatal to the process.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mode = DisplayMode::detect(event_loop);
        info!(
            "monitor mode: {}x{} @ {:?} Hz",
            mode.width,
            mode.height,
            mode.refresh_rate_hz()
        );

        let (window, gl_config) = graphics::create_window(event_loop, mode)?;
        let renderer = GlRenderer::new(&window, &gl_config)?;

        let size = window.inner_size();
        renderer.set_viewport(size.width, size.height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    /// One keyboard-input check per frame. Held state is re-queried every
    /// call, so a held Space re-toggles the window every poll.
    fn process_input(&mut self, event_loop: &ActiveEventLoop) {
        match frame_action(&self.input) {
            FrameAction::Close => event_loop.exit(),
            FrameAction::ToggleMaximize => {
                if let Some(window) = &self.window {
                    let maximized = window.is_maximized();
                    window.set_maximized(!maximized);
                }
            }
            FrameAction::Continue => {}
        }
    }

    /// Clear the back buffer and present it
    fn draw_frame(&mut self) {
        if let Some(renderer) = &self.renderer {
            renderer.clear_frame();
            if let Err(err) = renderer.present() {
                error!("failed to present frame: {err:#}");
            }
        }
    }

    /// Consume the shell after the loop exits; a recorded initialization
    /// failure surfaces here so the process can exit non-zero.
    pub fn into_result(self) -> Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for WindowShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellHooks for WindowShell {
    fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &self.renderer {
            renderer.resize(width, height);
        }
        if let Some(window) = &self.window {
            let logical: LogicalSize<u32> =
                PhysicalSize::new(width, height).to_logical(window.scale_factor());
            println!("Width: {}", logical.width);
            println!("Height: {}", logical.height);
        }
    }

    fn on_key(&mut self, button: Button, pressed: bool) {
        self.input.set_down(button, pressed);
    }

    fn on_close(&mut self) {
        println!("Goodbye!");
    }
}

impl ApplicationHandler for WindowShell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.initialize(event_loop) {
            eprintln!("failed to initialize window shell: {err:#}");
            self.fatal = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.on_close();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.on_resize(size.width, size.height),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = keycode_to_button(keycode) {
                        self.on_key(button, event.state.is_pressed());
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                // The frame that requests the exit is still cleared and
                // presented; the loop condition is checked afterwards
                self.process_input(event_loop);
                self.draw_frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
