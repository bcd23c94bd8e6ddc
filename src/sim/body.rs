//! Circular moving bodies ("balls")

use glam::Vec2;

use crate::surface::{Bounds, Color, RenderSurface};

/// A moving circular entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub color: Color,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: Color) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            radius,
            vel,
            color,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos.x, self.pos.y, self.radius, self.color);
    }

    /// Apply velocity, then reflect off the top/bottom edges.
    ///
    /// Position is not clamped: a body may overlap an edge by up to one
    /// frame's travel before the reflected velocity carries it back.
    pub fn advance(&mut self, bounds: Bounds) {
        self.pos += self.vel;

        if self.top() <= 0.0 || self.bottom() >= bounds.height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Recenter and send the body back toward the side it did not exit.
    /// Vertical velocity is kept.
    pub fn reset(&mut self, bounds: Bounds) {
        self.pos = bounds.center();
        self.vel.x = -self.vel.x;
    }
}
