//! Browser shell: reads the DOM through `web-sys`, drives the pure cores, and
//! writes classes and inline styles back.
//!
//! SYSTEM CONTEXT
//! ==============
//! The module is compiled only with the `browser` feature. `start` runs
//! automatically when the wasm module is instantiated; `stop` is exported for
//! hosts that swap pages without a full reload.

pub mod dom;
pub mod fade;
pub mod frame;
pub mod gate;
pub mod listen;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod viewport;

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::Result;

pub use page::PageController;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Install logging, load the page config, and start the page controller.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        log::warn!("ignoring page config: {err}");
    }

    let mut controller = match PageController::new(config) {
        Ok(controller) => controller,
        Err(err) => {
            log::warn!("page motion unavailable: {err}");
            return;
        }
    };
    if let Err(err) = controller.start() {
        log::warn!("page motion start incomplete: {err}");
    }
    CONTROLLER.with(|slot| {
        if let Some(mut previous) = slot.borrow_mut().replace(controller) {
            previous.stop();
        }
    });
}

/// Stop the running controller and release all of its registrations.
#[wasm_bindgen]
pub fn stop() {
    let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if let Some(mut controller) = controller {
        controller.stop();
    }
}

/// Read the JSON config element, if the page has one.
fn load_config() -> Result<Config> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(Config::default());
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    Config::from_json(&text)
}

fn init_logging(config: &Config) {
    let level = config.log_filter().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
    log::set_max_level(level.to_level_filter());
}
