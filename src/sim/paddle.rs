//! Rectangular paddles

use glam::Vec2;

use super::body::Body;
use crate::consts::PADDLE_SPEED;
use crate::surface::{Bounds, Color, RenderSurface};

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Moved by keyboard input
    Player,
    /// Chases a target body's vertical position
    Reactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A moving rectangular entity
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub control: Control,
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, color: Color, control: Control) -> Self {
        Self {
            pos,
            size,
            color,
            control,
            speed: PADDLE_SPEED,
        }
    }

    pub fn player(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self::new(pos, size, color, Control::Player)
    }

    pub fn reactive(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self::new(pos, size, color, Control::Reactive)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Whether `y` falls inside the paddle's vertical band (inclusive)
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top() && y <= self.bottom()
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y, self.color);
    }

    /// Move one step, guarded by the pre-move position.
    ///
    /// The guard is checked before moving, so the paddle can overshoot an
    /// edge by up to `speed` on its last step.
    pub fn step(&mut self, direction: Direction, bounds: Bounds) {
        match direction {
            Direction::Up if self.top() > 0.0 => self.pos.y -= self.speed,
            Direction::Down if self.bottom() < bounds.height => self.pos.y += self.speed,
            _ => {}
        }
    }

    /// Chase the target's vertical position. No edge guard is applied, so a
    /// reactive paddle can leave the surface following a body near an edge.
    pub fn track(&mut self, target: &Body) {
        let center = self.center_y();
        if target.pos.y < center {
            self.pos.y -= self.speed;
        } else if target.pos.y > center {
            self.pos.y += self.speed;
        }
    }
}
