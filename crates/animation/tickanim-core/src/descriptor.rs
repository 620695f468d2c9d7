//! Admission descriptors.
//!
//! An [`AnimationDescriptor`] is what a caller fills in to start an animation;
//! the engine consumes it and builds its own record. [`AnimCfg`] is the
//! serializable timing half of a descriptor, for animations described in
//! config files or fixtures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnimError;
use crate::ids::TargetId;
use crate::path::{get_path, PathName, PathRef, PathTable};
use crate::record::{EndCallback, SetterRef};

/// Everything needed to admit one animation.
///
/// Example: grow a widget's height from its current value to 120 over 200 ms.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickanim_core::{AnimationDescriptor, SetterRef, TargetId};
///
/// let height = Rc::new(Cell::new(40));
/// let h = height.clone();
/// let set_height: SetterRef = Rc::new(move |_t: TargetId, v: i32| h.set(v));
/// let desc = AnimationDescriptor::new(TargetId(7), set_height)
///     .with_range(height.get(), 120)
///     .with_duration(200);
/// assert_eq!(desc.end, 120);
/// ```
#[derive(Clone)]
pub struct AnimationDescriptor {
    pub target: TargetId,
    /// Required; descriptors without a setter are rejected at admission.
    pub setter: Option<SetterRef>,
    pub end_cb: Option<EndCallback>,
    pub path: PathRef,
    pub start: i32,
    pub end: i32,
    /// Leg length in ms; `<= 0` completes on the first tick.
    pub duration: i16,
    /// Initial elapsed time; negative values delay the start.
    pub elapsed: i16,
    pub playback: bool,
    pub playback_delay: u16,
    pub repeat: bool,
    pub repeat_delay: u16,
}

impl AnimationDescriptor {
    /// Linear 0 → 0 over 0 ms: complete the moment it is ticked. Use the
    /// builders to fill in the rest.
    pub fn new(target: TargetId, setter: SetterRef) -> Self {
        Self {
            target,
            setter: Some(setter),
            end_cb: None,
            path: get_path(PathName::Linear),
            start: 0,
            end: 0,
            duration: 0,
            elapsed: 0,
            playback: false,
            playback_delay: 0,
            repeat: false,
            repeat_delay: 0,
        }
    }

    pub fn with_range(mut self, start: i32, end: i32) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_duration(mut self, duration_ms: i16) -> Self {
        self.duration = duration_ms;
        self
    }

    pub fn with_path(mut self, path: PathRef) -> Self {
        self.path = path;
        self
    }

    /// Wait `delay_ms` before the first setter call.
    pub fn with_delay(mut self, delay_ms: u16) -> Self {
        self.elapsed = crate::record::delay_to_elapsed(delay_ms);
        self
    }

    pub fn with_playback(mut self, delay_ms: u16) -> Self {
        self.playback = true;
        self.playback_delay = delay_ms;
        self
    }

    pub fn with_repeat(mut self, delay_ms: u16) -> Self {
        self.repeat = true;
        self.repeat_delay = delay_ms;
        self
    }

    pub fn with_end_cb(mut self, end_cb: EndCallback) -> Self {
        self.end_cb = Some(end_cb);
        self
    }

    /// Structural check performed at admission.
    pub fn validate(&self) -> Result<(), AnimError> {
        if self.setter.is_none() {
            return Err(AnimError::invalid_descriptor(format!(
                "target {:?} has no setter",
                self.target
            )));
        }
        Ok(())
    }

    /// Build a descriptor from serialized timing, resolving the path by name.
    pub fn from_cfg(
        target: TargetId,
        setter: SetterRef,
        cfg: &AnimCfg,
        paths: &PathTable,
    ) -> Result<Self, AnimError> {
        let path = paths.get(&cfg.path)?;
        let mut desc = Self::new(target, setter)
            .with_path(path)
            .with_range(cfg.start, cfg.end)
            .with_duration(cfg.duration)
            .with_delay(cfg.delay);
        desc.playback = cfg.playback;
        desc.playback_delay = cfg.playback_delay;
        desc.repeat = cfg.repeat;
        desc.repeat_delay = cfg.repeat_delay;
        Ok(desc)
    }
}

impl fmt::Debug for AnimationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDescriptor")
            .field("target", &self.target)
            .field("has_setter", &self.setter.is_some())
            .field("has_end_cb", &self.end_cb.is_some())
            .field("path", &self.path.name())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("playback", &self.playback)
            .field("playback_delay", &self.playback_delay)
            .field("repeat", &self.repeat)
            .field("repeat_delay", &self.repeat_delay)
            .finish()
    }
}

fn default_path() -> String {
    PathName::Linear.as_str().to_string()
}

/// Serializable timing of one animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimCfg {
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub start: i32,
    pub end: i32,
    pub duration: i16,
    /// Initial delay in ms.
    #[serde(default)]
    pub delay: u16,
    #[serde(default)]
    pub playback: bool,
    #[serde(default)]
    pub playback_delay: u16,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default)]
    pub repeat_delay: u16,
}

impl AnimCfg {
    pub fn from_json(text: &str) -> Result<Self, AnimError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn noop() -> SetterRef {
        Rc::new(|_t: TargetId, _v: i32| {})
    }

    #[test]
    fn missing_setter_fails_validation() {
        let mut desc = AnimationDescriptor::new(TargetId(1), noop());
        assert!(desc.validate().is_ok());
        desc.setter = None;
        assert!(matches!(
            desc.validate(),
            Err(AnimError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn builders_fill_timing() {
        let desc = AnimationDescriptor::new(TargetId(1), noop())
            .with_range(-10, 10)
            .with_duration(300)
            .with_delay(50)
            .with_playback(20)
            .with_repeat(40);
        assert_eq!((desc.start, desc.end), (-10, 10));
        assert_eq!(desc.duration, 300);
        assert_eq!(desc.elapsed, -50);
        assert!(desc.playback && desc.repeat);
        assert_eq!((desc.playback_delay, desc.repeat_delay), (20, 40));
    }

    #[test]
    fn cfg_defaults_and_path_resolution() {
        let cfg = AnimCfg::from_json(r#"{ "end": 100, "duration": 200 }"#).unwrap();
        assert_eq!(cfg.path, "linear");
        assert_eq!(cfg.start, 0);
        assert!(!cfg.playback);

        let paths = PathTable::new();
        let desc = AnimationDescriptor::from_cfg(TargetId(3), noop(), &cfg, &paths).unwrap();
        assert_eq!(desc.path.name(), "linear");
        assert_eq!(desc.end, 100);
    }

    #[test]
    fn cfg_with_unknown_path_is_rejected() {
        let cfg = AnimCfg::from_json(r#"{ "path": "bounce", "end": 1, "duration": 10 }"#).unwrap();
        let err = AnimationDescriptor::from_cfg(TargetId(3), noop(), &cfg, &PathTable::new())
            .unwrap_err();
        assert!(matches!(err, AnimError::InvalidPathName { .. }));
    }
}
