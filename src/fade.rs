//! Fade element lifecycle: arming, intersection-driven visibility, and the
//! persistent-element policy.
//!
//! `FadeCore` owns one [`FadeState`] per element and turns setup calls and
//! intersection updates into [`Effect`]s for the browser shell to apply. It never
//! touches the DOM itself, so every transition is testable on the host.
//!
//! Per element the lifecycle is `Unarmed → Ready → {Visible ⇄ Hidden}`.
//! Persistent elements (hero, header) leave that loop: once `Visible` they stay
//! `Visible` for the life of the page.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use serde::Deserialize;

/// Visibility state of a single fade element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeState {
    /// Not yet set up; no classes applied.
    #[default]
    Unarmed,
    /// `fade-ready` applied, waiting for the first intersection update.
    Ready,
    /// `visible` applied.
    Visible,
    /// Left the viewport after being shown; `visible` removed.
    Hidden,
}

/// Per-element policy descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FadeElement {
    /// Once shown, never hidden again.
    pub persistent: bool,
}

impl FadeElement {
    #[must_use]
    pub fn transient() -> Self {
        Self { persistent: false }
    }

    #[must_use]
    pub fn persistent() -> Self {
        Self { persistent: true }
    }
}

/// How persistent elements take part in observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistentPolicy {
    /// Not observed; shown exactly once after arming.
    #[default]
    RevealOnce,
    /// Observed, but intersection updates can only add `visible`.
    Sticky,
}

/// DOM change requested by [`FadeCore`].
///
/// Indices refer to the element list the core was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Add `fade-ready` and remove `visible`.
    Arm(usize),
    /// Register the element with the intersection observer.
    Observe(usize),
    /// Add `visible`.
    Show(usize),
    /// Remove `visible`.
    Hide(usize),
}

/// One intersection observer entry, reduced to what the state machine needs.
///
/// The observer applies the threshold itself; `is_intersecting` is the verdict.
/// `ratio` is kept for logging only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    #[must_use]
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }
}

pub struct FadeCore {
    elements: Vec<FadeElement>,
    states: Vec<FadeState>,
    policy: PersistentPolicy,
}

impl FadeCore {
    #[must_use]
    pub fn new(elements: Vec<FadeElement>, policy: PersistentPolicy) -> Self {
        let states = vec![FadeState::Unarmed; elements.len()];
        Self { elements, states, policy }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<FadeState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn policy(&self) -> PersistentPolicy {
        self.policy
    }

    /// Arm every element.
    ///
    /// Without an intersection observer there is nothing to drive the
    /// animation, so every element is shown immediately instead and no
    /// `fade-ready` class is applied.
    pub fn arm(&mut self, observer_available: bool) -> Vec<Effect> {
        if !observer_available {
            log::info!("intersection observer unavailable; showing {} elements without animation", self.len());
            self.states.fill(FadeState::Visible);
            return (0..self.len()).map(Effect::Show).collect();
        }

        let mut effects = Vec::with_capacity(self.len() * 2);
        for (index, element) in self.elements.iter().enumerate() {
            self.states[index] = FadeState::Ready;
            effects.push(Effect::Arm(index));
            if !element.persistent || self.policy == PersistentPolicy::Sticky {
                effects.push(Effect::Observe(index));
            }
        }
        log::debug!("armed {} fade elements", self.len());
        effects
    }

    /// Show every persistent element that is armed but not yet visible.
    ///
    /// Called once, after the readiness gate settles.
    pub fn reveal_persistent(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (index, element) in self.elements.iter().enumerate() {
            if element.persistent && self.states[index] == FadeState::Ready {
                self.states[index] = FadeState::Visible;
                effects.push(Effect::Show(index));
            }
        }
        effects
    }

    /// Apply one intersection update. Returns the DOM change, if any.
    pub fn on_intersection(&mut self, index: usize, entry: Intersection) -> Option<Effect> {
        let element = *self.elements.get(index)?;
        let state = self.states[index];
        if state == FadeState::Unarmed {
            return None;
        }

        if entry.is_intersecting {
            if state == FadeState::Visible {
                return None;
            }
            self.states[index] = FadeState::Visible;
            log::debug!("fade element {index} entered view at ratio {:.3}", entry.ratio);
            return Some(Effect::Show(index));
        }

        if element.persistent || state != FadeState::Visible {
            return None;
        }
        self.states[index] = FadeState::Hidden;
        log::debug!("fade element {index} left view");
        Some(Effect::Hide(index))
    }
}
