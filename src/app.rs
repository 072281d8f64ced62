//! Exposes the API used to open a window and drive the rasterizer inside it.
//!
//! This is the demo's presentation path, not part of the rasterizer core: it
//! owns the window and pixel surface, rasterizes a fixed triangle list every
//! frame, and performs the coverage-to-RGBA blit described in spec §6.

use crate::error::RasterizerError;
use crate::geometry::Vertex;
use crate::graphics::{screen::Screen, window::Window};
use crate::Rasterizer;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop;

/// Owns the window, the pixel-presentation surface and the rasterizer.
pub struct App {
    /// The winit window and its dimensions.
    window: Window,
    /// The pixel surface the coverage buffer is blitted into.
    screen: Screen,
    /// The rasterizer core: owns the framebuffer and the coverage LUT.
    rasterizer: Rasterizer,
    /// The triangle list rasterized every frame, in NDC.
    triangles: Vec<Vertex>,
}

impl App {
    /// Creates an app that rasterizes `triangles` into a `width x height`
    /// window every frame.
    ///
    /// # Errors
    ///
    /// Returns [`RasterizerError`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32, triangles: Vec<Vertex>) -> Result<Self, RasterizerError> {
        Ok(App {
            window: Window::new(width, height),
            screen: Screen::new(width, height),
            rasterizer: Rasterizer::new(width, height)?,
            triangles,
        })
    }

    /// Rasterizes the triangle list and blits coverage to RGBA per spec §6:
    /// `coverage > 0 -> (u*255, v*255, 128, 255)` with `u = x/(W-1)`,
    /// `v = (H-1-y)/(H-1)`; uncovered pixels are opaque black.
    fn render(&mut self) {
        self.rasterizer.clear();
        self.rasterizer.rasterize(&self.triangles);

        let (width, height) = (self.screen.width(), self.screen.height());
        let coverage = self.rasterizer.framebuffer();
        let Some(pixels) = self.screen.pixels_mut() else {
            return;
        };
        let frame = pixels.frame_mut();
        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) as usize;
                let out = idx * 4;
                if coverage[idx] > 0 {
                    let u = x as f32 / (width - 1).max(1) as f32;
                    let v = (height - 1 - y) as f32 / (height - 1).max(1) as f32;
                    frame[out] = (u * 255.0) as u8;
                    frame[out + 1] = (v * 255.0) as u8;
                    frame[out + 2] = 128;
                    frame[out + 3] = 255;
                } else {
                    frame[out..out + 4].copy_from_slice(&[0, 0, 0, 255]);
                }
            }
        }
        if let Err(e) = pixels.render() {
            log::error!("failed to present frame: {e}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &event_loop::ActiveEventLoop) {
        if let Err(e) = self.window.initialize_window(event_loop) {
            eprintln!("failed to initialize window: {e}");
            std::process::exit(1);
        }
        let winit_window_shared = self
            .window
            .winit_window
            .as_ref()
            .expect("the window should be instantiated")
            .clone();
        if let Err(e) = self.screen.initialize_pixels(winit_window_shared) {
            eprintln!("failed to initialize screen: {e}");
            std::process::exit(1);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.render(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key
                    == winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &event_loop::ActiveEventLoop) {
        self.window
            .winit_window
            .as_ref()
            .expect("window should be initialized")
            .request_redraw();
    }
}
