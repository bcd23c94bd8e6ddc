//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-frame steps, no time deltas
//! - Fixed entity set, stable iteration order
//! - Drawing only through the `RenderSurface` trait

pub mod body;
pub mod input;
pub mod paddle;
pub mod simulation;

pub use body::Body;
pub use input::{InputEvent, InputSender, InputState};
pub use paddle::{Control, Direction, Paddle};
pub use simulation::{Simulation, initial_bodies, initial_paddles};
