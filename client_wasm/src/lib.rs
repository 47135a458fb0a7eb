//! Browser client for Crazy Pong
//!
//! Draws the game on a 2D canvas. The host page owns the DOM: it forwards
//! button clicks, the speed dropdown and key events, and drives the loop:
//!
//! ```js
//! const game = new WasmGame(canvas);
//! startBtn.onclick = () => { if (game.start()) requestAnimationFrame(loop); };
//! function loop(t) { if (game.frame(t)) requestAnimationFrame(loop); }
//! ```
//!
//! Note: only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod surface;

use game_core::{Config, Game};
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Host clock in milliseconds, on the same timeline as `requestAnimationFrame`
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config_json` optionally overrides tuning values
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        seed: u32,
        config_json: Option<String>,
    ) -> Result<WasmGame, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Config::default(),
        };
        let surface = CanvasSurface::new(&canvas, config.field_width, config.field_height)?;
        let game = Game::new(config, u64::from(seed), now_ms());

        let mut client = WasmGame { game, surface };
        client.render();
        log::info!("Crazy Pong ready");
        Ok(client)
    }

    /// Returns true when the host should start its animation loop
    pub fn start(&mut self) -> bool {
        self.game.start(now_ms()).success
    }

    pub fn pause(&mut self) -> bool {
        let ok = self.game.pause().success;
        self.render();
        ok
    }

    /// Returns true when the host should restart its animation loop
    pub fn resume(&mut self) -> bool {
        self.game.resume().success
    }

    /// Dropdown index: 0 Slow, 1 Normal, 2 Fast, 3 Insane
    pub fn set_speed(&mut self, index: usize) -> bool {
        self.game.set_speed_index(index)
    }

    /// Returns true for game keys so the host can `preventDefault()`
    pub fn key_down(&mut self, key: &str) -> bool {
        self.game.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.game.key_up(key)
    }

    /// One animation frame; false means stop re-scheduling
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let running = self.game.tick(now_ms);
        if running {
            self.render();
        }
        running
    }

    pub fn render(&mut self) {
        self.game.render(&mut self.surface);
    }

    /// "Stopped", "Running" or "Paused"
    pub fn state(&self) -> String {
        format!("{:?}", self.game.state())
    }

    pub fn crazy_mode(&self) -> bool {
        self.game.crazy_mode()
    }

    pub fn speed_label(&self) -> String {
        self.game.speed().as_str().to_string()
    }
}
