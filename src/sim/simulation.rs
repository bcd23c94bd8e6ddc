//! Per-frame update and draw
//!
//! One frame is `update()` followed by `draw()`. There are no phases and no
//! terminal state: the frame driver calls [`Simulation::frame`] for as long
//! as the host is alive.

use glam::Vec2;

use super::body::Body;
use super::input::{self, InputEvent, InputReceiver, InputSender, InputState};
use super::paddle::{Direction, Paddle};
use crate::consts::*;
use crate::surface::{Bounds, Color, RenderSurface};

/// Owns every entity, the input state and the drawing surface
pub struct Simulation<S: RenderSurface> {
    /// Iteration and draw order; the reactive paddle tracks index 0
    bodies: [Body; BODY_COUNT],
    player: Paddle,
    reactive: Paddle,
    input: InputState,
    input_rx: InputReceiver,
    input_tx: InputSender,
    surface: S,
    frames: u64,
}

/// The documented starting bodies for a surface of the given size
pub fn initial_bodies(bounds: Bounds) -> [Body; BODY_COUNT] {
    let x = bounds.width / 2.0;
    let h = bounds.height;
    [
        Body::new(Vec2::new(x, h / 2.0), 10.0, Vec2::new(4.0, 3.0), Color::Blue),
        Body::new(Vec2::new(x, h / 3.0), 3.0, Vec2::new(3.0, 2.0), Color::Grey),
        Body::new(Vec2::new(x, h / 4.0), 25.0, Vec2::new(5.0, 2.0), Color::Grey),
        Body::new(Vec2::new(x, h / 5.0), 5.0, Vec2::new(4.0, 1.0), Color::Orange),
        Body::new(Vec2::new(x, h / 6.0), 18.0, Vec2::new(1.0, -1.0), Color::Cyan),
    ]
}

/// The documented starting paddles: (player, reactive)
pub fn initial_paddles(bounds: Bounds) -> (Paddle, Paddle) {
    let mid = bounds.height / 2.0;
    let player = Paddle::player(
        Vec2::new(0.0, mid - PLAYER_PADDLE_OFFSET),
        Vec2::new(PLAYER_PADDLE_WIDTH, PLAYER_PADDLE_HEIGHT),
        Color::Green,
    );
    let reactive = Paddle::reactive(
        Vec2::new(bounds.width - REACTIVE_PADDLE_INSET, mid - REACTIVE_PADDLE_OFFSET),
        Vec2::new(REACTIVE_PADDLE_WIDTH, REACTIVE_PADDLE_HEIGHT),
        Color::Red,
    );
    (player, reactive)
}

impl<S: RenderSurface> Simulation<S> {
    /// Create a simulation with the standard layout for the surface's size
    pub fn new(surface: S) -> Self {
        let bounds = Bounds::of(&surface);
        let (player, reactive) = initial_paddles(bounds);
        Self::with_entities(surface, initial_bodies(bounds), player, reactive)
    }

    pub fn with_entities(
        surface: S,
        bodies: [Body; BODY_COUNT],
        player: Paddle,
        reactive: Paddle,
    ) -> Self {
        let (input_tx, input_rx) = input::channel();
        Self {
            bodies,
            player,
            reactive,
            input: InputState::new(),
            input_rx,
            input_tx,
            surface,
            frames: 0,
        }
    }

    /// A sender for platform key handlers
    pub fn input_sender(&self) -> InputSender {
        self.input_tx.clone()
    }

    /// Apply an event immediately, bypassing the channel
    pub fn apply_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn bodies(&self) -> &[Body; BODY_COUNT] {
        &self.bodies
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn reactive(&self) -> &Paddle {
        &self.reactive
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One full frame: update then draw
    pub fn frame(&mut self) {
        self.update();
        self.draw();
        self.frames += 1;
    }

    pub fn update(&mut self) {
        let bounds = Bounds::of(&self.surface);
        self.input_rx.drain_into(&mut self.input);

        for body in &mut self.bodies {
            body.advance(bounds);
        }

        // Not exclusive: holding both keys cancels out
        if self.input.is_pressed(KEY_UP) {
            self.player.step(Direction::Up, bounds);
        }
        if self.input.is_pressed(KEY_DOWN) {
            self.player.step(Direction::Down, bounds);
        }

        self.reactive.track(&self.bodies[0]);

        for (i, body) in self.bodies.iter_mut().enumerate() {
            // Only the facing edge is tested; a body already behind a paddle
            // keeps reflecting while it stays in the paddle's band.
            if body.left() <= self.player.right() && self.player.spans_y(body.pos.y) {
                body.vel.x = -body.vel.x;
            }
            if body.right() >= self.reactive.left() && self.reactive.spans_y(body.pos.y) {
                body.vel.x = -body.vel.x;
            }

            // Runs after the paddle checks, so a reset overrides a reflection
            // applied in the same frame.
            if body.left() <= 0.0 || body.right() >= bounds.width {
                log::debug!(
                    "Body {} left the field at ({:.1}, {:.1}), resetting",
                    i,
                    body.pos.x,
                    body.pos.y
                );
                body.reset(bounds);
            }
        }
    }

    pub fn draw(&mut self) {
        let bounds = Bounds::of(&self.surface);
        self.surface.clear_region(0.0, 0.0, bounds.width, bounds.height);
        for body in &self.bodies {
            body.draw(&mut self.surface);
        }
        self.player.draw(&mut self.surface);
        self.reactive.draw(&mut self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;

    fn sim() -> Simulation<RecordingSurface> {
        Simulation::new(RecordingSurface::new(800, 600))
    }

    /// Bodies parked in the middle of the field, away from every edge
    fn idle_bodies() -> [Body; BODY_COUNT] {
        std::array::from_fn(|_| {
            Body::new(Vec2::new(400.0, 300.0), 5.0, Vec2::ZERO, Color::Grey)
        })
    }

    #[test]
    fn test_initial_layout() {
        let s = sim();
        let b = s.bodies();
        assert_eq!(b[0].pos, Vec2::new(400.0, 300.0));
        assert_eq!(b[0].radius, 10.0);
        assert_eq!(b[0].vel, Vec2::new(4.0, 3.0));
        assert_eq!(b[0].color, Color::Blue);
        assert_eq!(b[2].radius, 25.0);
        assert_eq!(b[4].pos, Vec2::new(400.0, 100.0));
        assert_eq!(b[4].vel, Vec2::new(1.0, -1.0));

        assert_eq!(s.player().pos, Vec2::new(0.0, 225.0));
        assert_eq!(s.player().size, Vec2::new(11.0, 240.0));
        assert_eq!(s.reactive().pos, Vec2::new(785.0, 250.0));
        assert_eq!(s.reactive().size, Vec2::new(11.0, 110.0));
        assert_eq!(s.frames(), 0);
    }

    #[test]
    fn test_player_idle_without_input() {
        let mut s = sim();
        let y = s.player().pos.y;
        for _ in 0..50 {
            s.update();
        }
        assert_eq!(s.player().pos.y, y);
    }

    #[test]
    fn test_player_moves_with_channel_input() {
        let mut s = sim();
        let tx = s.input_sender();
        tx.press(KEY_UP);
        s.update();
        assert_eq!(s.player().pos.y, 221.0);

        // Flags persist across frames until released
        s.update();
        assert_eq!(s.player().pos.y, 217.0);

        tx.release(KEY_UP);
        tx.press(KEY_DOWN);
        s.update();
        assert_eq!(s.player().pos.y, 221.0);
        assert!(s.input().is_pressed(KEY_DOWN));
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut s = sim();
        let y = s.player().pos.y;
        s.apply_input(InputEvent::Pressed(KEY_UP.into()));
        s.apply_input(InputEvent::Pressed(KEY_DOWN.into()));
        s.update();
        assert_eq!(s.player().pos.y, y);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut s = sim();
        let y = s.player().pos.y;
        s.apply_input(InputEvent::Pressed("ArrowLeft".into()));
        s.apply_input(InputEvent::Pressed("w".into()));
        s.update();
        assert_eq!(s.player().pos.y, y);
    }

    #[test]
    fn test_reactive_tracks_first_body_only() {
        let surface = RecordingSurface::new(800, 600);
        let mut bodies = idle_bodies();
        bodies[0].pos.y = 100.0;
        bodies[1].pos.y = 500.0;
        let (player, reactive) = initial_paddles(Bounds::new(800.0, 600.0));
        let mut s = Simulation::with_entities(surface, bodies, player, reactive);

        s.update();
        assert_eq!(s.reactive().pos.y, 246.0);
    }

    #[test]
    fn test_player_paddle_reflects_body() {
        let surface = RecordingSurface::new(800, 600);
        let mut bodies = idle_bodies();
        bodies[1] = Body::new(Vec2::new(30.0, 300.0), 10.0, Vec2::new(-10.0, 0.0), Color::Blue);
        let (player, reactive) = initial_paddles(Bounds::new(800.0, 600.0));
        let mut s = Simulation::with_entities(surface, bodies, player, reactive);

        // x = 20, left edge 10 <= 11
        s.update();
        assert_eq!(s.bodies()[1].pos.x, 20.0);
        assert_eq!(s.bodies()[1].vel.x, 10.0);
    }

    #[test]
    fn test_reactive_paddle_reflects_body() {
        let surface = RecordingSurface::new(800, 600);
        let mut bodies = idle_bodies();
        // Keep the reactive paddle still: body 0 sits on its center
        bodies[0].pos = Vec2::new(400.0, 305.0);
        bodies[1] = Body::new(Vec2::new(770.0, 300.0), 10.0, Vec2::new(6.0, 0.0), Color::Blue);
        let (player, reactive) = initial_paddles(Bounds::new(800.0, 600.0));
        let mut s = Simulation::with_entities(surface, bodies, player, reactive);

        // x = 776, right edge 786 >= 785
        s.update();
        assert_eq!(s.bodies()[1].vel.x, -6.0);
        assert_eq!(s.bodies()[1].pos.x, 776.0);
    }

    #[test]
    fn test_body_past_right_edge_resets() {
        let surface = RecordingSurface::new(800, 600);
        let mut bodies = idle_bodies();
        // Outside the reactive paddle's band
        bodies[1] = Body::new(Vec2::new(785.0, 50.0), 10.0, Vec2::new(6.0, 2.0), Color::Blue);
        let (player, reactive) = initial_paddles(Bounds::new(800.0, 600.0));
        let mut s = Simulation::with_entities(surface, bodies, player, reactive);

        s.update();
        assert_eq!(s.bodies()[1].pos, Vec2::new(400.0, 300.0));
        assert_eq!(s.bodies()[1].vel, Vec2::new(-6.0, 2.0));
    }

    #[test]
    fn test_collision_then_reset_same_frame() {
        let surface = RecordingSurface::new(800, 600);
        let mut bodies = idle_bodies();
        bodies[0] = Body::new(Vec2::new(5.0, 100.0), 10.0, Vec2::new(-4.0, 0.0), Color::Blue);
        let player = Paddle::player(Vec2::new(0.0, 50.0), Vec2::new(11.0, 100.0), Color::Green);
        let (_, reactive) = initial_paddles(Bounds::new(800.0, 600.0));
        let mut s = Simulation::with_entities(surface, bodies, player, reactive);

        s.update();
        // Reflected to +4 by the paddle, then flipped back by the reset
        assert_eq!(s.bodies()[0].vel.x, -4.0);
        assert_eq!(s.bodies()[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_draw_order() {
        let mut s = sim();
        s.draw();
        let cmds = s.surface().commands();
        assert_eq!(cmds.len(), 1 + BODY_COUNT + 2);
        assert_eq!(
            cmds[0],
            DrawCommand::Clear {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 600.0
            }
        );
        for (cmd, body) in cmds[1..=BODY_COUNT].iter().zip(s.bodies()) {
            match cmd {
                DrawCommand::Circle { r, color, .. } => {
                    assert_eq!(*r, body.radius);
                    assert_eq!(*color, body.color);
                }
                other => panic!("expected circle, got {:?}", other),
            }
        }
        assert!(matches!(cmds[6], DrawCommand::Rect { color: Color::Green, .. }));
        assert!(matches!(cmds[7], DrawCommand::Rect { color: Color::Red, .. }));
    }

    #[test]
    fn test_frame_updates_then_draws() {
        let mut s = sim();
        s.frame();
        assert_eq!(s.frames(), 1);
        match s.surface().commands()[1] {
            DrawCommand::Circle { x, y, .. } => {
                assert_eq!((x, y), (404.0, 303.0));
            }
            ref other => panic!("expected circle, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_player_never_moves_without_keys(frames in 1usize..200) {
            let mut s = sim();
            let y = s.player().pos.y;
            s.apply_input(InputEvent::Pressed("ArrowLeft".into()));
            for _ in 0..frames {
                s.update();
            }
            prop_assert_eq!(s.player().pos.y, y);
        }
    }
}
