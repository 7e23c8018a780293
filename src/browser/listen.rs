//! Event listener registration with scoped teardown.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::Result;
use crate::scope::Scope;

/// Listener flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenOptions {
    /// Promise never to call `preventDefault` (lets the browser scroll without waiting).
    pub passive: bool,
    /// Run during the capture phase.
    pub capture: bool,
    /// Remove after the first call.
    pub once: bool,
}

impl ListenOptions {
    #[must_use]
    pub fn passive() -> Self {
        Self { passive: true, ..Self::default() }
    }

    #[must_use]
    pub fn capture() -> Self {
        Self { capture: true, ..Self::default() }
    }

    #[must_use]
    pub fn once() -> Self {
        Self { once: true, ..Self::default() }
    }
}

/// Add `handler` for `event` on `target`; disposing `scope` removes it.
pub fn listen<F>(scope: &mut Scope, target: &EventTarget, event: &'static str, options: ListenOptions, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let flags = AddEventListenerOptions::new();
    flags.set_passive(options.passive);
    flags.set_capture(options.capture);
    flags.set_once(options.once);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &flags,
    )?;

    let target = target.clone();
    scope.on_dispose(move || {
        if let Err(err) =
            target.remove_event_listener_with_callback_and_bool(event, closure.as_ref().unchecked_ref(), options.capture)
        {
            log::debug!("removing {event} listener failed: {err:?}");
        }
        drop(closure);
    });
    Ok(())
}
