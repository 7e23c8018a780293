//! Mobile hero sizing.
//!
//! Mobile Chrome and Safari resize the visual viewport as the address bar
//! shows and hides, and report stale heights right after load, so sizing is
//! re-run on every event that can change the viewport plus once after a
//! short delay.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Window};

use crate::browser::dom;
use crate::browser::listen::{ListenOptions, listen};
use crate::config::HeroConfig;
use crate::error::Result;
use crate::hero::{ViewportMetrics, hero_sizing};
use crate::scope::Scope;

const HEIGHT_PROPERTIES: [&str; 3] = ["height", "min-height", "max-height"];

struct HeroSizer {
    window: Window,
    document: Document,
    selector: String,
    breakpoint: f64,
}

pub fn start(window: &Window, document: &Document, config: &HeroConfig) -> Result<Scope> {
    let mut scope = Scope::new();
    let sizer = Rc::new(HeroSizer {
        window: window.clone(),
        document: document.clone(),
        selector: config.selector.clone(),
        breakpoint: config.breakpoint_px,
    });
    sizer.apply();

    let delay = config.resize_delay_ms;
    let sizer_for_timeout = Rc::clone(&sizer);
    scope.hold(Timeout::new(delay, move || sizer_for_timeout.apply()));

    let sizer_for_resize = Rc::clone(&sizer);
    listen(&mut scope, window, "resize", ListenOptions::default(), move |_event| sizer_for_resize.apply())?;

    let sizer_for_load = Rc::clone(&sizer);
    listen(&mut scope, window, "load", ListenOptions::once(), move |_event| sizer_for_load.apply())?;

    // Orientation changes report the old size for a moment; size again after the delay.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let pending_for_event = Rc::clone(&pending);
    let sizer_for_orientation = Rc::clone(&sizer);
    listen(&mut scope, window, "orientationchange", ListenOptions::default(), move |_event| {
        let sizer = Rc::clone(&sizer_for_orientation);
        *pending_for_event.borrow_mut() = Some(Timeout::new(delay, move || sizer.apply()));
    })?;
    scope.on_dispose(move || drop(pending.borrow_mut().take()));

    if let Some(visual) = window.visual_viewport() {
        listen(&mut scope, &visual, "resize", ListenOptions::default(), move |_event| sizer.apply())?;
    }
    Ok(scope)
}

impl HeroSizer {
    fn apply(&self) {
        if let Err(err) = self.try_apply() {
            log::warn!("hero sizing failed: {err}");
        }
    }

    fn try_apply(&self) -> Result<()> {
        let Some(hero) = dom::query_html(&self.document, &self.selector)? else {
            return Ok(());
        };
        let sizing = hero_sizing(&self.metrics()?, self.breakpoint);
        let value = sizing.css_value();
        for property in HEIGHT_PROPERTIES {
            dom::set_style(&hero, property, &value)?;
        }
        log::trace!("hero sizing {sizing:?}");
        Ok(())
    }

    fn metrics(&self) -> Result<ViewportMetrics> {
        let client_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.client_height()));
        Ok(ViewportMetrics {
            inner_width: dom::inner_width(&self.window)?,
            inner_height: dom::inner_height(&self.window)?,
            visual_height: self.window.visual_viewport().map(|visual| visual.height()),
            client_height,
        })
    }
}
