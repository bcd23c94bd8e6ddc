//! Multi Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use multi_pong::Settings;
    use multi_pong::renderer::{GpuSurface, RenderError};
    use multi_pong::sim::{InputSender, Simulation};

    /// Log the frame rate every this many frames
    const FPS_LOG_INTERVAL: u64 = 600;

    /// Game instance holding all state
    struct Game {
        sim: Simulation<GpuSurface>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(surface: GpuSurface) -> Self {
            Self {
                sim: Simulation::new(surface),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn frame(&mut self, time: f64) {
            self.sim.frame();

            match self.sim.surface_mut().present() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => self.sim.surface_mut().reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest sample is the one about to be overwritten next
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            if self.sim.frames() % FPS_LOG_INTERVAL == 0 {
                log::debug!("Frame {} at {} fps", self.sim.frames(), self.fps);
            }
        }
    }

    pub async fn run() -> Result<(), RenderError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Multi Pong starting...");

        let settings = Settings::default();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Display at the logical extent; the backing store follows the
        // device pixel ratio so HiDPI screens stay sharp.
        let extent = settings.extent();
        let size = settings.physical_size(window.device_pixel_ratio());
        canvas.set_width(size.0);
        canvas.set_height(size.1);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", extent.0));
        let _ = style.set_property("height", &format!("{}px", extent.1));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let gpu_surface =
            GpuSurface::new(surface, &adapter, size, extent, settings.background).await?;

        let game = Game::new(gpu_surface);
        setup_input_handlers(game.sim.input_sender());

        log::info!(
            "Simulation initialized at {}x{}",
            settings.surface_width,
            settings.surface_height
        );

        request_animation_frame(Rc::new(RefCell::new(game)));

        log::info!("Multi Pong running!");
        Ok(())
    }

    /// Key handlers only forward events; the simulation applies them at the
    /// start of its next update.
    fn setup_input_handlers(input: InputSender) {
        let window = web_sys::window().unwrap();

        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                input.press(event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                input.release(event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use multi_pong::{RecordingSurface, Settings, Simulation};

    env_logger::init();
    log::info!("Multi Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = Settings::default();
    let surface = RecordingSurface::new(settings.surface_width, settings.surface_height);
    let mut sim = Simulation::new(surface);

    let mut primitives = 0usize;
    for _ in 0..settings.headless_frames {
        sim.frame();
        primitives += sim.surface_mut().take_commands().len();
    }

    log::info!(
        "Ran {} frames, {} primitives drawn",
        sim.frames(),
        primitives
    );
    for (i, body) in sim.bodies().iter().enumerate() {
        log::info!(
            "Body {} ({}) at ({:.1}, {:.1}) moving ({:.1}, {:.1})",
            i,
            body.color.css_name(),
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y
        );
    }
    log::info!(
        "Paddles: player y={:.1}, reactive y={:.1}",
        sim.player().pos.y,
        sim.reactive().pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
