//! Anchor click interception and smooth scrolling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window};

use crate::browser::dom;
use crate::browser::listen::{ListenOptions, listen};
use crate::config::Config;
use crate::error::Result;
use crate::scope::Scope;
use crate::scroll::{ScrollGeometry, ScrollMode, anchor_target, previous_section, scroll_offset};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

struct AnchorScroller {
    window: Window,
    document: Document,
    header_selector: String,
    section_selector: String,
    mode: ScrollMode,
}

/// Intercept in-page anchor clicks on the whole document (capture phase).
pub fn start(window: &Window, document: &Document, config: &Config) -> Result<Scope> {
    let mut scope = Scope::new();
    let scroller = Rc::new(AnchorScroller {
        window: window.clone(),
        document: document.clone(),
        header_selector: config.header.selector.clone(),
        section_selector: config.scroll.section_selector.clone(),
        mode: config.scroll.mode,
    });
    listen(&mut scope, document, "click", ListenOptions::capture(), move |event| scroller.on_click(&event))?;
    Ok(scope)
}

impl AnchorScroller {
    fn on_click(&self, event: &Event) {
        let Some(origin) = event.target() else {
            return;
        };
        let Some(origin) = origin.dyn_ref::<Element>() else {
            return;
        };
        let link = match origin.closest(ANCHOR_SELECTOR) {
            Ok(Some(link)) => link,
            Ok(None) => return,
            Err(err) => {
                log::debug!("anchor lookup failed: {:?}", err);
                return;
            }
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };

        event.prevent_default();
        if let Err(err) = self.scroll_to(selector) {
            log::warn!("scroll to {selector} failed: {err}");
        }
    }

    fn scroll_to(&self, selector: &str) -> Result<()> {
        let Some(target) = dom::query(&self.document, selector)? else {
            log::debug!("anchor target {selector} not found");
            return Ok(());
        };

        match self.mode {
            ScrollMode::Native => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
            ScrollMode::Manual => {
                let top = scroll_offset(&self.geometry(&target)?);
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
                log::debug!("scrolling to {selector} at {top}px");
            }
        }
        Ok(())
    }

    fn geometry(&self, target: &Element) -> Result<ScrollGeometry> {
        let scroll_y = dom::scroll_y(&self.window)?;
        let header_height = dom::query(&self.document, &self.header_selector)?
            .map_or(0.0, |header| header.get_bounding_client_rect().height());

        let sections = dom::query_all(&self.document, &self.section_selector)?;
        let previous_bottom = previous_section(&sections, target).map(|previous| dom::rect(previous).bottom + scroll_y);

        Ok(ScrollGeometry {
            header_height,
            viewport_height: dom::inner_height(&self.window)?,
            target: dom::rect(target).offset(scroll_y),
            previous_bottom,
        })
    }
}
