//! Browser side of the readiness gate: fonts, animation frames and a
//! headline render probe, raced against a timeout.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Window};

use crate::browser::dom;
use crate::config::RevealGateConfig;
use crate::error::Result;
use crate::readiness::{Readiness, RenderProbe, parse_opacity, race_timeout};

/// Wait for the configured readiness signals. Never fails and never hangs.
pub async fn wait(window: Window, document: Document, config: RevealGateConfig) -> Readiness {
    let signal = async {
        if config.wait_for_fonts {
            if let Err(err) = fonts_ready(&document).await {
                log::debug!("font readiness unavailable: {err}");
            }
        }
        for _ in 0..config.animation_frames {
            if let Err(err) = next_frame(&window).await {
                log::debug!("animation frame wait failed: {err}");
                break;
            }
        }
        if let Some(selector) = config.headline_selector.as_deref() {
            wait_for_render(&window, &document, selector).await;
        }
    };

    let outcome = race_timeout(signal, TimeoutFuture::new(config.timeout_ms)).await;
    if outcome == Readiness::TimedOut {
        log::info!("reveal gate timed out after {}ms", config.timeout_ms);
    }
    if config.settle_ms > 0 {
        TimeoutFuture::new(config.settle_ms).await;
    }
    outcome
}

async fn fonts_ready(document: &Document) -> Result<()> {
    let promise = document.fonts().ready()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Resolve on the next animation frame.
pub async fn next_frame(window: &Window) -> Result<()> {
    let mut failure = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            failure = Some(err);
        }
    });
    if let Some(err) = failure {
        return Err(err.into());
    }
    JsFuture::from(promise).await?;
    Ok(())
}

/// Poll once per frame until the element renders. Returns at once if it does not exist.
async fn wait_for_render(window: &Window, document: &Document, selector: &str) {
    loop {
        match dom::query(document, selector) {
            Ok(Some(element)) => {
                if probe(window, &element).is_rendered() {
                    log::debug!("{selector} rendered");
                    return;
                }
            }
            Ok(None) => {
                log::debug!("{selector} not found; skipping render wait");
                return;
            }
            Err(err) => {
                log::warn!("render probe for {selector} failed: {err}");
                return;
            }
        }
        if let Err(err) = next_frame(window).await {
            log::debug!("animation frame wait failed: {err}");
            return;
        }
    }
}

fn probe(window: &Window, element: &Element) -> RenderProbe {
    let rect = element.get_bounding_client_rect();
    let opacity = match window.get_computed_style(element) {
        Ok(Some(style)) => style
            .get_property_value("opacity")
            .map_or(1.0, |value| parse_opacity(&value)),
        Ok(None) | Err(_) => 1.0,
    };
    RenderProbe { width: rect.width(), height: rect.height(), opacity }
}
