//! Header theme swapping.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Window};

use crate::browser::dom;
use crate::browser::frame::FrameScheduler;
use crate::browser::listen::{ListenOptions, listen};
use crate::config::HeaderConfig;
use crate::consts::{HEADER_INVERSE_CLASS, THEME_ATTRIBUTE};
use crate::error::Result;
use crate::scope::Scope;
use crate::theme::{HeaderStyle, HeaderTheme, ThemeTracker, ThemedSection, initial_color, resolve};

/// Events that can move content under the header. Touch and wheel cover
/// overscroll bounces that do not emit `scroll`.
const TRIGGERS: [&str; 5] = ["scroll", "resize", "touchstart", "touchmove", "wheel"];

/// The header and the children whose text colour follows it.
struct HeaderParts {
    header: HtmlElement,
    label: Option<HtmlElement>,
    contact: Option<HtmlElement>,
}

impl HeaderParts {
    fn query(document: &Document, config: &HeaderConfig) -> Result<Option<Self>> {
        let Some(header) = dom::query_html(document, &config.selector)? else {
            return Ok(None);
        };
        let label = dom::query_within(&header, &config.label_selector)?.and_then(dom::as_html);
        let contact = dom::query_within(&header, &config.contact_selector)?.and_then(dom::as_html);
        Ok(Some(Self { header, label, contact }))
    }

    fn paint(&self, color: &str) -> Result<()> {
        dom::set_style(&self.header, "color", color)?;
        for part in [&self.label, &self.contact].into_iter().flatten() {
            dom::set_style(part, "color", color)?;
        }
        Ok(())
    }
}

struct HeaderThemer {
    window: Window,
    parts: HeaderParts,
    sections: Vec<Element>,
    top_threshold: f64,
    tracker: RefCell<ThemeTracker>,
}

/// Paint the header text before anything is resolved.
///
/// Runs as soon as the page starts, possibly before the header is parsed; a
/// missing header is skipped and the first resolution paints it instead.
pub fn paint_initial(document: &Document, config: &HeaderConfig) -> Result<()> {
    match HeaderParts::query(document, config)? {
        Some(parts) => parts.paint(initial_color()),
        None => {
            log::debug!("header not parsed yet; skipping initial colour");
            Ok(())
        }
    }
}

pub fn start(window: &Window, document: &Document, config: &HeaderConfig) -> Result<Scope> {
    let mut scope = Scope::new();
    let Some(parts) = HeaderParts::query(document, config)? else {
        log::debug!("no header; theme swapping disabled");
        return Ok(scope);
    };
    let sections = dom::query_all(document, &config.section_selector)?;

    let themer = Rc::new(HeaderThemer {
        window: window.clone(),
        parts,
        sections,
        top_threshold: config.top_threshold_px,
        tracker: RefCell::new(ThemeTracker::new()),
    });

    themer.update();

    let themer_for_frame = Rc::clone(&themer);
    let scheduler = Rc::new(FrameScheduler::new(window.clone(), move || themer_for_frame.update()));
    for event in TRIGGERS {
        let scheduler = Rc::clone(&scheduler);
        let options = if event == "resize" { ListenOptions::default() } else { ListenOptions::passive() };
        listen(&mut scope, window, event, options, move |_event| scheduler.schedule())?;
    }
    scope.on_dispose(move || scheduler.cancel());
    Ok(scope)
}

impl HeaderThemer {
    fn update(&self) {
        if let Err(err) = self.try_update() {
            log::warn!("header theme update failed: {err}");
        }
    }

    fn try_update(&self) -> Result<()> {
        let header_height = self.parts.header.get_bounding_client_rect().height();
        let sections: Vec<ThemedSection> = self
            .sections
            .iter()
            .map(|section| {
                let theme = section.get_attribute(THEME_ATTRIBUTE).as_deref().and_then(HeaderTheme::parse);
                ThemedSection::new(theme, dom::rect(section))
            })
            .collect();
        let scroll_y = dom::scroll_y(&self.window)?;

        let theme = resolve(header_height, &sections, scroll_y, self.top_threshold);
        if self.tracker.borrow_mut().record(theme) {
            log::debug!("header theme -> {}", theme.as_str());
        }
        self.apply(theme.style())
    }

    fn apply(&self, style: HeaderStyle) -> Result<()> {
        dom::set_class(&self.parts.header, HEADER_INVERSE_CLASS, style.inverse)?;
        self.parts.paint(style.color)
    }
}
