//! Per-tick stepping of animation records.
//!
//! Each tick, every record:
//! 1. accrues the tick delta into `elapsed`
//! 2. stays silent while `elapsed` is negative (delay)
//! 3. samples its path and calls its setter
//! 4. on reaching `duration`, reverses (playback), restarts (repeat) or finishes

use log::{debug, trace};

use crate::config::{CompletionPolicy, Config};
use crate::outputs::{AnimEvent, Change, Outputs};
use crate::record::{delay_to_elapsed, AnimationRecord, Leg};
use crate::registry::AnimationRegistry;

/// What follows a completed leg.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    Playback,
    Repeat,
    Finish,
}

impl Transition {
    fn after(record: &AnimationRecord) -> Self {
        match (record.leg, record.playback, record.repeat) {
            (Leg::Forward, true, _) => Self::Playback,
            (_, _, true) => Self::Repeat,
            _ => Self::Finish,
        }
    }

    /// A cycle ends with every leg that is not followed by a playback leg.
    #[inline]
    fn ends_cycle(self) -> bool {
        !matches!(self, Self::Playback)
    }
}

/// Whether a record stays in the registry after stepping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Keep,
    Remove,
}

#[inline]
fn should_fire(policy: CompletionPolicy, transition: Transition) -> bool {
    match policy {
        CompletionPolicy::Finish => transition == Transition::Finish,
        CompletionPolicy::EveryCycle => transition.ends_cycle(),
        CompletionPolicy::EveryLeg => true,
    }
}

/// Add `dt_ms` to a 16-bit elapsed counter, saturating at `i16::MAX`.
#[inline]
pub(crate) fn accrue(elapsed: i16, dt_ms: u32) -> i16 {
    let dt = dt_ms.min(i16::MAX as u32) as i32;
    (elapsed as i32 + dt).min(i16::MAX as i32) as i16
}

/// Advance one record by `dt_ms`, applying its value and any leg transition.
pub(crate) fn step_record(
    record: &mut AnimationRecord,
    dt_ms: u32,
    cfg: &Config,
    outputs: &mut Outputs,
) -> Step {
    record.elapsed = accrue(record.elapsed, dt_ms);

    let Some(value) = record.current_value() else {
        return Step::Keep;
    };

    record.setter.set(record.target, value);
    if cfg.record_changes {
        outputs.push_change(Change {
            anim: record.id,
            target: record.target,
            value,
        });
    }

    if !record.is_leg_complete() {
        return Step::Keep;
    }

    let (anim, target) = (record.id, record.target);
    outputs.push_event(AnimEvent::LegCompleted {
        anim,
        target,
        leg: record.leg,
    });

    let transition = Transition::after(record);
    let step = match transition {
        Transition::Playback => {
            record.leg = Leg::Playback;
            record.elapsed = delay_to_elapsed(record.playback_delay);
            debug!("anim {anim:?} on {target:?}: playback after {}ms", record.playback_delay);
            outputs.push_event(AnimEvent::PlaybackStarted {
                anim,
                target,
                delay: record.playback_delay,
            });
            Step::Keep
        }
        Transition::Repeat => {
            record.leg = Leg::Forward;
            record.elapsed = delay_to_elapsed(record.repeat_delay);
            debug!("anim {anim:?} on {target:?}: repeat after {}ms", record.repeat_delay);
            outputs.push_event(AnimEvent::Repeated {
                anim,
                target,
                delay: record.repeat_delay,
            });
            Step::Keep
        }
        Transition::Finish => {
            debug!("anim {anim:?} on {target:?}: finished at {value}");
            outputs.push_event(AnimEvent::Finished { anim, target });
            Step::Remove
        }
    };

    if should_fire(cfg.completion, transition) {
        if let Some(cb) = &record.end_cb {
            cb(target);
            outputs.push_event(AnimEvent::CallbackFired { anim, target });
        }
    }

    step
}

/// Step every record in the registry, dropping the ones that finished.
pub(crate) fn run_tick(
    registry: &mut AnimationRegistry,
    dt_ms: u32,
    cfg: &Config,
    outputs: &mut Outputs,
) {
    outputs.dt_ms = dt_ms;
    let mut idx = 0;
    while let Some(record) = registry.get_index_mut(idx) {
        match step_record(record, dt_ms, cfg, outputs) {
            Step::Keep => idx += 1,
            // swap_remove moves an unvisited record into `idx`
            Step::Remove => {
                registry.swap_remove(idx);
            }
        }
    }
    trace!(
        "tick {dt_ms}ms: {} live, {} changes, {} events",
        registry.len(),
        outputs.changes.len(),
        outputs.events.len()
    );
}
