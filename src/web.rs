//! Browser bindings
//!
//! Exposes the garden session to JS. Drawing and input wiring stay on the JS
//! side: it calls `toggle` on clicks, `toggle_running` on the pause key, and
//! redraws from the getters whenever the `on_change` callback fires.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::platform::{LocalStorage, Ticker, ticker::period_from_ms};
use crate::session::GardenSession;
use crate::settings::Settings;
use crate::sim::GrowthStage;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Tile Garden starting...");
}

#[wasm_bindgen]
pub struct GardenApp {
    session: Rc<RefCell<GardenSession<LocalStorage>>>,
    settings: Settings,
    ticker: Option<Ticker>,
}

#[wasm_bindgen]
impl GardenApp {
    /// Load the saved garden or start one at `size` (0 uses settings)
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> GardenApp {
        let store = LocalStorage::new();
        let mut settings = Settings::load(&store);
        if size > 0 {
            settings.grid_size = size;
        }
        let session = GardenSession::from_settings(store, &settings);
        GardenApp {
            session: Rc::new(RefCell::new(session)),
            settings,
            ticker: None,
        }
    }

    /// Install the periodic tick, replacing any previous one.
    ///
    /// `on_change` is invoked after each effective tick so JS can redraw.
    pub fn start(&mut self, on_change: Option<js_sys::Function>) {
        // Drop the old interval first so only one tick stream exists
        self.ticker = None;
        let session = Rc::clone(&self.session);
        let ticker = Ticker::start(period_from_ms(self.settings.tick_ms), move || {
            let ticked = session.borrow_mut().on_tick();
            if ticked {
                if let Some(cb) = &on_change {
                    if let Err(e) = cb.call0(&JsValue::NULL) {
                        log::warn!("Redraw callback failed: {:?}", e);
                    }
                }
            }
        });
        self.ticker = Some(ticker);
    }

    pub fn stop(&mut self) {
        self.ticker = None;
    }

    /// Returns true if the tile is planted afterwards
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let mut session = self.session.borrow_mut();
        session.on_user_toggle(row, col);
        session.tile(row, col).is_some_and(|t| t.planted)
    }

    pub fn tick(&mut self) -> bool {
        self.session.borrow_mut().on_tick()
    }

    pub fn reset(&mut self) {
        self.session.borrow_mut().reset();
    }

    /// Reseed with `chance`, or the configured default when omitted
    pub fn randomize(&mut self, chance: Option<f64>) -> usize {
        let chance = chance.unwrap_or(self.settings.seed_chance);
        self.session.borrow_mut().randomize_seed(chance)
    }

    pub fn toggle_running(&mut self) -> bool {
        self.session.borrow_mut().toggle_running()
    }

    pub fn is_running(&self) -> bool {
        self.session.borrow().is_running()
    }

    pub fn size(&self) -> usize {
        self.session.borrow().size()
    }

    pub fn growth_at(&self, row: usize, col: usize) -> f64 {
        self.session
            .borrow()
            .tile(row, col)
            .map_or(0.0, |t| t.growth)
    }

    pub fn planted_at(&self, row: usize, col: usize) -> bool {
        self.session
            .borrow()
            .tile(row, col)
            .is_some_and(|t| t.planted)
    }

    /// Stage name: "empty", "sprout", "growing" or "bloom"
    pub fn stage_at(&self, row: usize, col: usize) -> String {
        self.session
            .borrow()
            .tile(row, col)
            .map_or(GrowthStage::Empty, |t| t.stage())
            .as_str()
            .to_string()
    }
}
