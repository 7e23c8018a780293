//! Best-effort readiness gate.
//!
//! Revealing the hero before fonts and layout settle flashes unstyled content.
//! The gate waits for a readiness signal but races it against a timer, so it
//! always resolves: either [`Readiness::Ready`] or [`Readiness::TimedOut`].
//! Neither outcome is an error; the reveal proceeds either way.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{self, Either};

/// How the gate resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The signal completed first.
    Ready,
    /// The timer completed first.
    TimedOut,
}

impl Readiness {
    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// Await `signal`, giving up when `timer` completes first.
///
/// If both are already complete, `signal` wins.
pub async fn race_timeout<S, T>(signal: S, timer: T) -> Readiness
where
    S: Future<Output = ()>,
    T: Future<Output = ()>,
{
    let signal = pin!(signal);
    let timer = pin!(timer);
    match future::select(signal, timer).await {
        Either::Left(((), _)) => Readiness::Ready,
        Either::Right(((), _)) => Readiness::TimedOut,
    }
}

/// Rendered size and opacity of an element, sampled once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderProbe {
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

impl RenderProbe {
    /// Laid out with a non-zero box and not fully transparent.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.opacity > 0.0
    }
}

/// Parse a computed `opacity` value. Unparseable values count as opaque.
#[must_use]
pub fn parse_opacity(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(1.0)
}
