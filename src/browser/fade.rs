//! Visibility controller: applies [`FadeCore`] effects to the `.fade` elements
//! and feeds it intersection observer updates.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::browser::dom;
use crate::browser::frame::FrameScheduler;
use crate::browser::gate;
use crate::config::{Config, FadeConfig};
use crate::consts::{FADE_READY_CLASS, VISIBLE_CLASS};
use crate::error::Result;
use crate::fade::{Effect, FadeCore, FadeElement, Intersection};
use crate::scope::Scope;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Faders {
    window: Window,
    document: Document,
    config: Config,
    elements: Vec<Element>,
    core: RefCell<FadeCore>,
    observer: RefCell<Option<(IntersectionObserver, ObserverCallback)>>,
    alive: Cell<bool>,
}

/// Collect the fade elements and arm them on the next animation frame.
pub fn start(window: &Window, document: &Document, config: &Config) -> Result<Scope> {
    let mut scope = Scope::new();
    let elements = dom::query_all(document, &config.fade.selector)?;
    if elements.is_empty() {
        log::debug!("no {} elements", config.fade.selector);
        return Ok(scope);
    }

    let mut descriptors = Vec::with_capacity(elements.len());
    for element in &elements {
        let persistent = dom::matches_any(element, &config.fade.persistent_selectors)?;
        descriptors.push(FadeElement { persistent });
    }

    let faders = Rc::new(Faders {
        window: window.clone(),
        document: document.clone(),
        config: config.clone(),
        core: RefCell::new(FadeCore::new(descriptors, config.fade.policy)),
        elements,
        observer: RefCell::new(None),
        alive: Cell::new(true),
    });

    let faders_for_frame = Rc::clone(&faders);
    let arm_frame = FrameScheduler::new(window.clone(), move || faders_for_frame.arm());
    arm_frame.schedule();
    scope.hold(arm_frame);

    scope.on_dispose(move || faders.shutdown());
    Ok(scope)
}

impl Faders {
    fn arm(self: &Rc<Self>) {
        if !self.alive.get() {
            return;
        }
        let available = dom::has_intersection_observer(&self.window);
        if available {
            if let Err(err) = self.connect_observer(&self.config.fade) {
                log::warn!("intersection observer setup failed: {err}");
                let effects = self.core.borrow_mut().arm(false);
                self.apply(&effects);
                return;
            }
        }

        let effects = self.core.borrow_mut().arm(available);
        self.apply(&effects);

        if available {
            let faders = Rc::clone(self);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome =
                    gate::wait(faders.window.clone(), faders.document.clone(), faders.config.reveal_gate.clone()).await;
                if !faders.alive.get() {
                    return;
                }
                log::debug!("reveal gate resolved: {outcome:?}");
                let effects = faders.core.borrow_mut().reveal_persistent();
                faders.apply(&effects);
            });
        }
    }

    fn connect_observer(self: &Rc<Self>, config: &FadeConfig) -> Result<()> {
        let weak: Weak<Self> = Rc::downgrade(self);
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            if let Some(faders) = weak.upgrade() {
                faders.on_entries(&entries);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        *self.observer.borrow_mut() = Some((observer, callback));
        Ok(())
    }

    fn on_entries(&self, entries: &Array) {
        let mut effects = Vec::new();
        for value in entries.iter() {
            let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = self.elements.iter().position(|el| *el == target) else {
                continue;
            };
            let update = Intersection::new(entry.is_intersecting(), entry.intersection_ratio());
            if let Some(effect) = self.core.borrow_mut().on_intersection(index, update) {
                effects.push(effect);
            }
        }
        self.apply(&effects);
    }

    fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            if let Err(err) = self.apply_one(*effect) {
                log::warn!("fade effect {effect:?} failed: {err}");
            }
        }
    }

    fn apply_one(&self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Arm(index) => {
                if let Some(element) = self.elements.get(index) {
                    dom::set_class(element, FADE_READY_CLASS, true)?;
                    dom::set_class(element, VISIBLE_CLASS, false)?;
                }
            }
            Effect::Observe(index) => {
                if let (Some(element), Some((observer, _))) = (self.elements.get(index), &*self.observer.borrow()) {
                    observer.observe(element);
                }
            }
            Effect::Show(index) => {
                if let Some(element) = self.elements.get(index) {
                    dom::set_class(element, VISIBLE_CLASS, true)?;
                }
            }
            Effect::Hide(index) => {
                if let Some(element) = self.elements.get(index) {
                    dom::set_class(element, VISIBLE_CLASS, false)?;
                }
            }
        }
        Ok(())
    }

    fn shutdown(&self) {
        self.alive.set(false);
        if let Some((observer, callback)) = self.observer.borrow_mut().take() {
            observer.disconnect();
            drop(callback);
        }
    }
}
