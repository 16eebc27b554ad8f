//! Scroll trigger and replay button.
//!
//! The drop plays the first time the footer's bottom edge reaches the bottom
//! of the viewport and never again from scrolling. The replay button puts the
//! sprites back at the top whenever it is pressed.

use crate::systems::animation::{AnimationDriver, AnimationState};

/// Edge reported by the scroll observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEdge {
    /// Scrolling down crossed the activation line.
    Enter,
    /// Scrolling back up crossed it the other way.
    LeaveBack,
}

/// Turns raw scroll positions into enter/leave edges.
///
/// Active while the trigger element's bottom edge is at or above the viewport
/// bottom plus `offset` (document pixels grow downward).
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    offset: f32,
    active: bool,
}

impl ScrollTrigger {
    pub fn new(offset: f32) -> Self {
        Self { offset, active: false }
    }

    pub fn observe(&mut self, trigger_bottom: f32, viewport_bottom: f32) -> Option<ScrollEdge> {
        let now_active = trigger_bottom <= viewport_bottom + self.offset;
        let edge = match (self.active, now_active) {
            (false, true) => Some(ScrollEdge::Enter),
            (true, false) => Some(ScrollEdge::LeaveBack),
            _ => None,
        };
        self.active = now_active;
        edge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Idle,
    Playing,
}

/// What a trigger input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// First scroll entry: sprites restored, clock zeroed, loop scheduled.
    Started,
    /// Scroll entry after the drop already played. Ignored.
    AlreadyPlayed,
    /// Replay button: sprites restored and clock zeroed.
    Restored,
    /// A scroll observation that crossed no edge, or crossed it backwards.
    NoChange,
}

pub struct TriggerController {
    scroll: ScrollTrigger,
}

impl TriggerController {
    pub fn new(offset: f32) -> Self {
        Self {
            scroll: ScrollTrigger::new(offset),
        }
    }

    pub fn phase(&self, state: &AnimationState) -> TriggerPhase {
        if state.played() {
            TriggerPhase::Playing
        } else {
            TriggerPhase::Idle
        }
    }

    /// Feed one scroll observation.
    pub fn on_scroll(
        &mut self,
        trigger_bottom: f32,
        viewport_bottom: f32,
        state: &mut AnimationState,
        driver: &mut AnimationDriver,
    ) -> TriggerOutcome {
        match self.scroll.observe(trigger_bottom, viewport_bottom) {
            Some(ScrollEdge::Enter) => self.on_enter(state, driver),
            Some(ScrollEdge::LeaveBack) | None => TriggerOutcome::NoChange,
        }
    }

    /// The footer scrolled into place.
    pub fn on_enter(&mut self, state: &mut AnimationState, driver: &mut AnimationDriver) -> TriggerOutcome {
        if state.played() {
            log::debug!("trigger: enter ignored, already played");
            return TriggerOutcome::AlreadyPlayed;
        }
        state.restore_initial();
        state.mark_played();
        driver.start(state);
        log::debug!("trigger: idle -> playing");
        TriggerOutcome::Started
    }

    /// The replay button was pressed.
    ///
    /// Before the first scroll entry this only rewinds the sprites; the loop
    /// is not running, so nothing is drawn until the footer comes into view.
    pub fn on_reset(&mut self, state: &mut AnimationState) -> TriggerOutcome {
        state.restore_initial();
        if !state.is_running() {
            log::debug!("trigger: reset before first play, loop not running");
        } else {
            log::debug!("trigger: reset");
        }
        TriggerOutcome::Restored
    }
}
