#![allow(clippy::float_cmp)]

use futures::executor::block_on;
use futures::future;

use super::*;

#[test]
fn signal_first_is_ready() {
    let outcome = block_on(race_timeout(future::ready(()), future::pending()));
    assert_eq!(outcome, Readiness::Ready);
    assert!(outcome.is_ready());
}

#[test]
fn timer_first_is_timed_out() {
    let outcome = block_on(race_timeout(future::pending(), future::ready(())));
    assert_eq!(outcome, Readiness::TimedOut);
    assert!(!outcome.is_ready());
}

#[test]
fn both_complete_prefers_signal() {
    let outcome = block_on(race_timeout(future::ready(()), future::ready(())));
    assert_eq!(outcome, Readiness::Ready);
}

#[test]
fn chained_signal_steps_run_to_completion() {
    let steps = std::cell::Cell::new(0);
    let signal = async {
        future::ready(()).await;
        steps.set(steps.get() + 1);
        future::ready(()).await;
        steps.set(steps.get() + 1);
    };
    let outcome = block_on(race_timeout(signal, future::pending()));
    assert_eq!(outcome, Readiness::Ready);
    assert_eq!(steps.get(), 2);
}

#[test]
fn zero_sized_headline_is_not_rendered() {
    assert!(!RenderProbe { width: 0.0, height: 40.0, opacity: 1.0 }.is_rendered());
    assert!(!RenderProbe { width: 300.0, height: 0.0, opacity: 1.0 }.is_rendered());
}

#[test]
fn transparent_headline_is_not_rendered() {
    assert!(!RenderProbe { width: 300.0, height: 40.0, opacity: 0.0 }.is_rendered());
}

#[test]
fn visible_headline_is_rendered() {
    assert!(RenderProbe { width: 300.0, height: 40.0, opacity: 0.2 }.is_rendered());
}

#[test]
fn default_render_state_is_not_rendered() {
    assert!(!RenderProbe::default().is_rendered());
}

#[test]
fn parse_opacity_reads_computed_values() {
    assert_eq!(parse_opacity("0"), 0.0);
    assert_eq!(parse_opacity("0.35"), 0.35);
    assert_eq!(parse_opacity(" 1 "), 1.0);
}

#[test]
fn parse_opacity_defaults_to_opaque() {
    assert_eq!(parse_opacity(""), 1.0);
    assert_eq!(parse_opacity("inherit"), 1.0);
}
