//! Engine: the animation context object and its public API.
//!
//! Methods:
//! - new/try_new, init
//! - create/try_create (admission), delete/delete_id (cancellation)
//! - update/update_nominal/update_from (one tick each)
//! - path lookups through the owned PathTable

use log::{debug, warn};

use crate::clock::{tick_elapsed, TickSource};
use crate::config::Config;
use crate::descriptor::{AnimCfg, AnimationDescriptor};
use crate::error::AnimError;
use crate::ids::{AnimId, IdAllocator, TargetId};
use crate::outputs::Outputs;
use crate::path::{PathRef, PathTable};
use crate::record::{AnimationRecord, Leg, SetterRef};
use crate::registry::AnimationRegistry;
use crate::scheduler::run_tick;

/// Owns every live animation. One engine per UI (or per test); engines never
/// share state.
///
/// All calls are expected from the thread that drives `update`. The engine
/// holds `Rc` handles and is therefore neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    registry: AnimationRegistry,
    paths: PathTable,

    // Per-tick outputs
    outputs: Outputs,
    last_tick_ms: Option<u32>,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            registry: AnimationRegistry::new(cfg.initial_capacity, cfg.max_records),
            paths: PathTable::new(),
            outputs: Outputs::with_capacity(cfg.initial_capacity),
            last_tick_ms: None,
            cfg,
        }
    }

    /// Like `new`, rejecting unusable configs.
    pub fn try_new(cfg: Config) -> Result<Self, AnimError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    /// Reset to the empty state. Live records are dropped without callbacks.
    /// Ids keep counting up, so handles from before the reset stay stale.
    pub fn init(&mut self) {
        if !self.registry.is_empty() {
            debug!("init: dropping {} live animations", self.registry.len());
        }
        self.registry.clear();
        self.outputs.clear();
        self.last_tick_ms = None;
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Admit an animation. Invalid descriptors and admissions past
    /// `max_records` are dropped with a warning.
    pub fn create(&mut self, desc: AnimationDescriptor) {
        if let Err(err) = self.try_create(desc) {
            warn!("animation rejected ({}): {err}", err.category());
        }
    }

    /// Admit an animation, reporting why it was rejected.
    pub fn try_create(&mut self, desc: AnimationDescriptor) -> Result<AnimId, AnimError> {
        desc.validate()?;
        let AnimationDescriptor {
            target,
            setter,
            end_cb,
            path,
            start,
            end,
            duration,
            elapsed,
            playback,
            playback_delay,
            repeat,
            repeat_delay,
        } = desc;
        let Some(setter) = setter else {
            return Err(AnimError::invalid_descriptor("missing setter"));
        };

        self.registry.check_capacity()?;
        let id = self.ids.alloc_anim();
        self.registry.insert(AnimationRecord {
            id,
            target,
            setter,
            end_cb,
            path,
            start,
            end,
            duration,
            elapsed,
            playback,
            playback_delay,
            repeat,
            repeat_delay,
            leg: Leg::Forward,
        })?;
        debug!("anim {id:?} on {target:?}: {start} -> {end} over {duration}ms");
        Ok(id)
    }

    /// Admit an animation described by serialized timing.
    pub fn create_from_cfg(
        &mut self,
        target: TargetId,
        setter: SetterRef,
        cfg: &AnimCfg,
    ) -> Result<AnimId, AnimError> {
        let desc = AnimationDescriptor::from_cfg(target, setter, cfg, &self.paths)?;
        self.try_create(desc)
    }

    /// Cancel every animation of `target`, or only those driven by `setter`.
    /// Completion callbacks are not invoked. Returns whether anything was removed.
    pub fn delete(&mut self, target: TargetId, setter: Option<&SetterRef>) -> bool {
        let removed = self.registry.remove_matching(target, setter);
        if removed > 0 {
            debug!("deleted {removed} animation(s) on {target:?}");
        }
        removed > 0
    }

    /// Cancel one animation by id.
    pub fn delete_id(&mut self, id: AnimId) -> bool {
        self.registry.remove_id(id).is_some()
    }

    #[inline]
    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[inline]
    pub fn paths(&self) -> &PathTable {
        &self.paths
    }

    #[inline]
    pub fn paths_mut(&mut self) -> &mut PathTable {
        &mut self.paths
    }

    /// Curve registered under `name`.
    pub fn path(&self, name: &str) -> Result<PathRef, AnimError> {
        self.paths.get(name)
    }

    /// Outputs of the most recent tick.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Advance every animation by `dt_ms`.
    pub fn update(&mut self, dt_ms: u32) -> &Outputs {
        self.outputs.clear();
        run_tick(&mut self.registry, dt_ms, &self.cfg, &mut self.outputs);
        &self.outputs
    }

    /// Advance by the configured nominal tick period.
    pub fn update_nominal(&mut self) -> &Outputs {
        self.update(self.cfg.nominal_tick_ms)
    }

    /// Advance by the time passed on `source` since the previous call.
    /// The first call only latches the counter and advances by zero.
    pub fn update_from(&mut self, source: &dyn TickSource) -> &Outputs {
        let now = source.now_ms();
        let dt = self
            .last_tick_ms
            .map_or(0, |prev| tick_elapsed(prev, now));
        self.last_tick_ms = Some(now);
        self.update(dt)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
