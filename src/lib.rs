//! Multi Pong - a multi-ball Pong arcade simulation
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (bodies, paddles, input state)
//! - `surface`: Drawing surface contract and an in-memory recording surface
//! - `renderer`: WebGPU-backed drawing surface
//! - `settings`: Host presentation settings

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod surface;

pub use settings::Settings;
pub use sim::{Body, InputEvent, InputSender, Paddle, Simulation};
pub use surface::{Bounds, Color, RecordingSurface, RenderSurface};

/// Game configuration constants
pub mod consts {
    /// Number of bodies in play (fixed for the lifetime of a simulation)
    pub const BODY_COUNT: usize = 5;

    /// Paddle movement per frame, for both control modes
    pub const PADDLE_SPEED: f32 = 4.0;

    /// Player paddle geometry (left edge of the surface)
    pub const PLAYER_PADDLE_WIDTH: f32 = 11.0;
    pub const PLAYER_PADDLE_HEIGHT: f32 = 240.0;
    /// Player paddle starts this far above the vertical center
    pub const PLAYER_PADDLE_OFFSET: f32 = 75.0;

    /// Reactive paddle geometry (right edge of the surface)
    pub const REACTIVE_PADDLE_WIDTH: f32 = 11.0;
    pub const REACTIVE_PADDLE_HEIGHT: f32 = 110.0;
    pub const REACTIVE_PADDLE_OFFSET: f32 = 50.0;
    /// Gap between the reactive paddle's left edge and the right border
    pub const REACTIVE_PADDLE_INSET: f32 = 15.0;

    /// Default drawing surface size in pixels
    pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
    pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

    /// Triangle fan resolution for filled circles
    pub const CIRCLE_SEGMENTS: u32 = 32;

    /// Key identifiers consumed by the player paddle
    pub const KEY_UP: &str = "ArrowUp";
    pub const KEY_DOWN: &str = "ArrowDown";
}
