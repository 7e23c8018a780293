//! Page controller: owns every browser registration for one page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::{Document, Window};

use crate::browser::listen::{ListenOptions, listen};
use crate::browser::{dom, fade, scroll, theme, viewport};
use crate::config::Config;
use crate::consts::JS_CLASS;
use crate::error::Result;
use crate::scope::Scope;

/// Wires the page behaviours to a window and document.
///
/// Construction only captures handles. [`PageController::start`] registers
/// listeners and observers; [`PageController::stop`] removes all of them,
/// after which the controller can be started again.
pub struct PageController {
    config: Rc<Config>,
    window: Window,
    document: Document,
    scope: Rc<RefCell<Scope>>,
    running: bool,
}

impl PageController {
    /// Bind to the global window and its document.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser main thread (no window or document).
    pub fn new(config: Config) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        Ok(Self::with_handles(config, window, document))
    }

    #[must_use]
    pub fn with_handles(config: Config, window: Window, document: Document) -> Self {
        Self { config: Rc::new(config), window, document, scope: Rc::new(RefCell::new(Scope::new())), running: false }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start all behaviours. Anything needing the parsed DOM waits for
    /// `DOMContentLoaded` when the document is still loading.
    ///
    /// On failure every registration made so far is removed and the
    /// controller stays stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener cannot be registered.
    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Ok(());
        }

        if let Some(root) = self.document.document_element() {
            dom::set_class(&root, JS_CLASS, true)?;
        }
        if let Err(err) = theme::paint_initial(&self.document, &self.config.header) {
            log::warn!("initial header colour not applied: {err}");
        }

        let registered = Scope::try_build(|scope| self.register(scope))?;
        self.scope.borrow_mut().absorb(registered);
        self.running = true;
        log::info!("page motion started");
        Ok(())
    }

    fn register(&self, scope: &mut Scope) -> Result<()> {
        mount(scope, "anchor scrolling", scroll::start(&self.window, &self.document, &self.config));

        if self.document.ready_state() == "loading" {
            let shared: Weak<RefCell<Scope>> = Rc::downgrade(&self.scope);
            let window = self.window.clone();
            let document = self.document.clone();
            let config = Rc::clone(&self.config);
            listen(scope, &self.document, "DOMContentLoaded", ListenOptions::once(), move |_event| {
                if let Some(shared) = shared.upgrade() {
                    boot(&mut shared.borrow_mut(), &window, &document, &config);
                }
            })?;
            log::debug!("document loading; deferring setup to DOMContentLoaded");
        } else {
            boot(scope, &self.window, &self.document, &self.config);
        }
        Ok(())
    }

    /// Remove every listener, observer and pending timer.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.scope.borrow_mut().dispose();
        self.running = false;
        log::info!("page motion stopped");
    }
}

/// Hero sizing first so the fade and theme passes see the final layout.
fn boot(scope: &mut Scope, window: &Window, document: &Document, config: &Config) {
    mount(scope, "hero sizing", viewport::start(window, document, &config.hero));
    mount(scope, "fade animations", fade::start(window, document, config));
    mount(scope, "header theme", theme::start(window, document, &config.header));
}

/// A behaviour that fails to start is logged and skipped; the others still run.
fn mount(scope: &mut Scope, name: &str, started: Result<Scope>) {
    match started {
        Ok(child) => scope.absorb(child),
        Err(err) => log::warn!("{name} disabled: {err}"),
    }
}
