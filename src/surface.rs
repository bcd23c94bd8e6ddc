//! Drawing surface contract
//!
//! The simulation never talks to a canvas or GPU directly. Everything it
//! draws goes through [`RenderSurface`], which lets the browser build use the
//! WebGPU renderer while tests and the native driver use [`RecordingSurface`].

use glam::Vec2;

/// Colors used by simulated entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Grey,
    Orange,
    Cyan,
    Green,
    Red,
}

impl Color {
    /// Linear RGBA, matching the CSS named colors
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::Grey => [0.502, 0.502, 0.502, 1.0],
            Color::Orange => [1.0, 0.647, 0.0, 1.0],
            Color::Cyan => [0.0, 1.0, 1.0, 1.0],
            Color::Green => [0.0, 0.502, 0.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn css_name(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Grey => "grey",
            Color::Orange => "orange",
            Color::Cyan => "cyan",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// Primitive drawing operations plus the surface's pixel extents
pub trait RenderSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reset a rectangular region to the background
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// Snapshot of a surface's extents, used for all boundary math
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn of<S: RenderSurface + ?Sized>(surface: &S) -> Self {
        Self::new(surface.width() as f32, surface.height() as f32)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Circle { x: f32, y: f32, r: f32, color: Color },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
}

/// Surface that records drawing calls instead of rendering them
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log (call once per frame to keep memory flat)
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, r, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_surface() {
        let surface = RecordingSurface::new(800, 600);
        let bounds = Bounds::of(&surface);
        assert_eq!(bounds, Bounds::new(800.0, 600.0));
        assert_eq!(bounds.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_recording_surface_logs_in_order() {
        let mut surface = RecordingSurface::new(100, 50);
        surface.clear_region(0.0, 0.0, 100.0, 50.0);
        surface.fill_circle(10.0, 20.0, 5.0, Color::Blue);
        surface.fill_rect(1.0, 2.0, 3.0, 4.0, Color::Red);

        assert_eq!(surface.commands().len(), 3);
        assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(
            surface.commands()[2],
            DrawCommand::Rect {
                x: 1.0,
                y: 2.0,
                w: 3.0,
                h: 4.0,
                color: Color::Red
            }
        );

        let taken = surface.take_commands();
        assert_eq!(taken.len(), 3);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::Grey.css_name(), "grey");
        assert_eq!(Color::Cyan.rgba(), [0.0, 1.0, 1.0, 1.0]);
    }
}
