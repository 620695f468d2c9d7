//! Output contracts from the core engine.
//!
//! Setters are the engine's primary side effect; `Outputs` is the mirrored
//! record of one tick, so hosts can react to completions after the tick
//! returns (e.g. chain a follow-up animation) and tests can assert on the
//! exact sequence of applied values.

use serde::{Deserialize, Serialize};

use crate::ids::{AnimId, TargetId};
use crate::record::Leg;

/// One setter invocation this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub anim: AnimId,
    pub target: TargetId,
    pub value: i32,
}

/// Discrete lifecycle signals emitted while ticking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimEvent {
    /// A leg reached its end value.
    LegCompleted {
        anim: AnimId,
        target: TargetId,
        leg: Leg,
    },
    /// Forward leg done; reverse leg scheduled after `delay` ms.
    PlaybackStarted {
        anim: AnimId,
        target: TargetId,
        delay: u16,
    },
    /// Cycle done; next forward leg scheduled after `delay` ms.
    Repeated {
        anim: AnimId,
        target: TargetId,
        delay: u16,
    },
    /// Record finished on its own and left the registry.
    Finished { anim: AnimId, target: TargetId },
    /// The completion callback was invoked.
    CallbackFired { anim: AnimId, target: TargetId },
}

impl AnimEvent {
    #[inline]
    pub fn anim(&self) -> AnimId {
        match self {
            Self::LegCompleted { anim, .. }
            | Self::PlaybackStarted { anim, .. }
            | Self::Repeated { anim, .. }
            | Self::Finished { anim, .. }
            | Self::CallbackFired { anim, .. } => *anim,
        }
    }
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Elapsed ms applied this tick.
    #[serde(default)]
    pub dt_ms: u32,
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<AnimEvent>,
}

impl Outputs {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dt_ms: 0,
            changes: Vec::with_capacity(capacity),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.dt_ms = 0;
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: AnimEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Last value applied to `target` this tick.
    pub fn value_of(&self, target: TargetId) -> Option<i32> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.target == target)
            .map(|c| c.value)
    }

    /// Records that left the registry this tick.
    pub fn finished(&self) -> impl Iterator<Item = (AnimId, TargetId)> + '_ {
        self.events.iter().filter_map(|e| match e {
            AnimEvent::Finished { anim, target } => Some((*anim, *target)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_prefers_latest_change() {
        let mut out = Outputs::default();
        out.push_change(Change {
            anim: AnimId(0),
            target: TargetId(1),
            value: 10,
        });
        out.push_change(Change {
            anim: AnimId(1),
            target: TargetId(1),
            value: 20,
        });
        assert_eq!(out.value_of(TargetId(1)), Some(20));
        assert_eq!(out.value_of(TargetId(2)), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut out = Outputs::with_capacity(4);
        out.dt_ms = 30;
        out.push_event(AnimEvent::Finished {
            anim: AnimId(0),
            target: TargetId(1),
        });
        assert_eq!(out.finished().count(), 1);
        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.dt_ms, 0);
    }

    #[test]
    fn events_serialize() {
        let ev = AnimEvent::PlaybackStarted {
            anim: AnimId(2),
            target: TargetId(9),
            delay: 100,
        };
        let text = serde_json::to_string(&ev).unwrap();
        let back: AnimEvent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, ev);
        assert_eq!(back.anim(), AnimId(2));
    }
}
