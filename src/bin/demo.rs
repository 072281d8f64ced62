//! Opens a window and rasterizes a chosen sample triangle set with
//! [`tilecov::Rasterizer`], presenting the coverage buffer via `pixels`.
//!
//! This binary is entirely outside the rasterizer core's contract (§1): it
//! only exercises the external collaborators (windowing, presentation) the
//! core hands a coverage buffer to.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tilecov::{app::App, geometry::Vertex};
use winit::event_loop::EventLoop;

/// Coverage rasterizer demo.
#[derive(Parser)]
struct Args {
    /// Window / framebuffer width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,
    /// Window / framebuffer height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,
    /// Which sample triangle set to rasterize.
    #[arg(long, value_enum, default_value_t = Scene::Triangle)]
    scene: Scene,
}

/// A named sample geometry, chosen for coverage of spec scenarios S1/S3/S6.
#[derive(Copy, Clone, ValueEnum)]
enum Scene {
    /// A single centered CCW triangle (S1).
    Triangle,
    /// Two CCW triangles covering the full `[-1, 1]^2` NDC square (S3).
    Square,
    /// A thin sliver triangle across the screen diagonal (S6).
    Sliver,
}

impl Scene {
    fn vertices(self) -> Vec<Vertex> {
        match self {
            Scene::Triangle => vec![
                Vertex::new(-0.5, -0.5, 0.0),
                Vertex::new(0.5, -0.5, 0.0),
                Vertex::new(0.0, 0.5, 0.0),
            ],
            Scene::Square => vec![
                Vertex::new(-1.0, -1.0, 0.0),
                Vertex::new(1.0, -1.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
                Vertex::new(-1.0, -1.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
                Vertex::new(-1.0, 1.0, 0.0),
            ],
            Scene::Sliver => vec![
                Vertex::new(-1.0, -0.995, 0.0),
                Vertex::new(1.0, -1.0, 0.0),
                Vertex::new(1.0, -0.99, 0.0),
            ],
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let event_loop = EventLoop::new().context("failed to create the winit event loop")?;
    let mut app = App::new(args.width, args.height, args.scene.vertices())
        .context("failed to initialize the rasterizer")?;
    event_loop
        .run_app(&mut app)
        .context("event loop exited with an error")?;
    Ok(())
}
