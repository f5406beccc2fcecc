//! WebAssembly client for the tennis game
//!
//! The page owns the canvas and draws from postcard-encoded frames; this crate
//! owns the simulation, input mapping and the animation-frame loop.

#[cfg(target_arch = "wasm32")]
mod frame_loop;
mod game;
mod input;

pub use game::{court_frame, rally_frame, BounceCourt, TennisGame};
pub use input::{is_action_key, paddle_direction, CanvasTransform};

#[cfg(target_arch = "wasm32")]
pub use runner::*;

#[cfg(target_arch = "wasm32")]
mod runner {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::frame_loop::FrameLoop;
    use crate::{BounceCourt, TennisGame};

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
    }

    /// Hand `bytes` to the page's draw callback as a Uint8Array
    fn emit(draw: &js_sys::Function, bytes: Result<Vec<u8>, String>) {
        let result = match bytes {
            Ok(bytes) => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                draw.call1(&JsValue::NULL, &array).map(|_| ())
            }
            Err(e) => Err(JsValue::from_str(&e)),
        };
        if let Err(e) = result {
            web_sys::console::error_2(&"Frame delivery failed".into(), &e);
        }
    }

    /// A rally ticking itself every animation frame
    #[wasm_bindgen]
    pub struct RallyRunner {
        game: Rc<RefCell<TennisGame>>,
        frame_loop: FrameLoop,
    }

    #[wasm_bindgen]
    impl RallyRunner {
        /// `draw` receives each encoded frame
        #[wasm_bindgen(constructor)]
        pub fn new(seed: u32, draw: js_sys::Function) -> Result<RallyRunner, JsValue> {
            let game = Rc::new(RefCell::new(TennisGame::new(seed)));
            let ticking = game.clone();
            let frame_loop = FrameLoop::start(move |dt| {
                // Release the borrow before calling back into the page
                let (bytes, set_over) = {
                    let mut game = ticking.borrow_mut();
                    game.tick(dt);
                    (game.frame_bytes(), game.set_over_frame())
                };
                emit(&draw, bytes);
                if let Some(frame) = set_over {
                    emit(
                        &draw,
                        frame
                            .to_bytes()
                            .map_err(|e| format!("Failed to serialize frame: {e}")),
                    );
                }
            })?;
            Ok(Self {
                game,
                frame_loop,
            })
        }

        pub fn pointer_move(&self, event: &web_sys::MouseEvent, canvas: &web_sys::Element) {
            let rect = canvas.get_bounding_client_rect();
            self.game.borrow_mut().pointer_move(
                event.client_x() as f32,
                event.client_y() as f32,
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
        }

        pub fn key_down(&self, event: &web_sys::KeyboardEvent) {
            self.game.borrow_mut().key_down(&event.key());
        }

        pub fn apply_command(&self, bytes: &[u8]) -> Result<(), JsValue> {
            self.game
                .borrow_mut()
                .apply_command(bytes)
                .map_err(|e| JsValue::from_str(&e))
        }

        pub fn is_running(&self) -> bool {
            self.frame_loop.is_running()
        }

        /// Stop ticking; the game state stays readable
        pub fn stop(&mut self) {
            self.frame_loop.stop();
        }
    }

    /// The court demo ticking itself every animation frame
    #[wasm_bindgen]
    pub struct CourtRunner {
        court: Rc<RefCell<BounceCourt>>,
        frame_loop: FrameLoop,
    }

    #[wasm_bindgen]
    impl CourtRunner {
        #[wasm_bindgen(constructor)]
        pub fn new(
            seed: u32,
            singles: bool,
            draw: js_sys::Function,
        ) -> Result<CourtRunner, JsValue> {
            let court = Rc::new(RefCell::new(BounceCourt::new(seed, singles)));
            let ticking = court.clone();
            let frame_loop = FrameLoop::start(move |dt| {
                let bytes = {
                    let mut court = ticking.borrow_mut();
                    court.tick(dt);
                    court.frame_bytes()
                };
                emit(&draw, bytes);
            })?;
            Ok(Self {
                court,
                frame_loop,
            })
        }

        pub fn serve(&self) {
            self.court.borrow_mut().serve();
        }

        pub fn is_running(&self) -> bool {
            self.frame_loop.is_running()
        }

        pub fn stop(&mut self) {
            self.frame_loop.stop();
        }
    }
}
