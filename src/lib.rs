//! Front-end behaviour for the marketing site, compiled to WebAssembly.
//!
//! The crate drives four page behaviours through CSS classes and inline styles:
//! scroll-triggered fade-ins, mobile hero sizing, header colour theming, and
//! smooth scrolling for in-page anchors. All decisions are made by pure, host
//! testable cores; the `browser` feature adds the `web-sys` shell that reads the
//! DOM, feeds those cores, and writes the results back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`fade`] | Fade element state machine and persistent-element policy |
//! | [`theme`] | Header theme resolution from themed section boxes |
//! | [`hero`] | Mobile hero height computation |
//! | [`scroll`] | Anchor filtering and smooth-scroll offset math |
//! | [`readiness`] | Timeout-bounded readiness gate |
//! | [`frame`] | Animation-frame coalescing |
//! | [`scope`] | Scoped subscriptions with disposers |
//! | [`config`] | Typed configuration with defaults and validation |
//! | [`error`] | Crate error type |
//! | [`geom`] | Viewport-relative boxes |
//! | [`consts`] | Class names, colours, thresholds, delays |
//! | `browser` | DOM shell and `PageController` (feature `browser`) |

pub mod config;
pub mod consts;
pub mod error;
pub mod fade;
pub mod frame;
pub mod geom;
pub mod hero;
pub mod readiness;
pub mod scope;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(feature = "browser")]
pub use browser::{start, stop};
