//! One in-flight animation and the capabilities it calls out to.

use std::any::TypeId;
use std::fmt;
use std::mem;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::ids::{AnimId, TargetId};
use crate::path::functions::{lerp_value, progress_of};
use crate::path::PathRef;

/// Applies an interpolated value to the variable behind `target`.
///
/// Implemented for every `Fn(TargetId, i32)`, so closures over a `Cell` or
/// `RefCell` are the usual setter.
pub trait Setter {
    fn set(&self, target: TargetId, value: i32);

    /// Identity shared by every instance of a stateless setter, such as a
    /// plain `fn` item. `None` for setters that carry state.
    fn stateless_id(&self) -> Option<TypeId> {
        None
    }
}

impl<F> Setter for F
where
    F: Fn(TargetId, i32) + 'static,
{
    #[inline]
    fn set(&self, target: TargetId, value: i32) {
        self(target, value)
    }

    #[inline]
    fn stateless_id(&self) -> Option<TypeId> {
        (mem::size_of::<F>() == 0).then(TypeId::of::<F>)
    }
}

/// Shared setter handle. Clones of one handle are the same setter, and so
/// are separate handles to the same stateless function.
pub type SetterRef = Rc<dyn Setter>;

/// Completion callback, handed the animated target.
pub type EndCallback = Rc<dyn Fn(TargetId)>;

/// Whether two handles name the same setter: one allocation, or two handles
/// to the same stateless function.
#[inline]
pub fn same_setter(a: &SetterRef, b: &SetterRef) -> bool {
    if std::ptr::eq(Rc::as_ptr(a) as *const u8, Rc::as_ptr(b) as *const u8) {
        return true;
    }
    match (a.stateless_id(), b.stateless_id()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Direction of the current pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    /// `start` → `end`
    #[default]
    Forward,
    /// `end` → `start`
    Playback,
}

/// Whether a record is still waiting out a delay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Delay,
    Running,
}

/// Negative `elapsed` encoding a pause; saturates at `i16::MIN`.
#[inline]
pub(crate) fn delay_to_elapsed(delay_ms: u16) -> i16 {
    i16::try_from(-(delay_ms as i32)).unwrap_or(i16::MIN)
}

/// An admitted animation. Owned by the registry; mutated only while ticking.
pub struct AnimationRecord {
    pub(crate) id: AnimId,
    pub(crate) target: TargetId,
    pub(crate) setter: SetterRef,
    pub(crate) end_cb: Option<EndCallback>,
    pub(crate) path: PathRef,
    pub(crate) start: i32,
    pub(crate) end: i32,
    pub(crate) duration: i16,
    pub(crate) elapsed: i16,
    pub(crate) playback: bool,
    pub(crate) playback_delay: u16,
    pub(crate) repeat: bool,
    pub(crate) repeat_delay: u16,
    pub(crate) leg: Leg,
}

impl AnimationRecord {
    #[inline]
    pub fn id(&self) -> AnimId {
        self.id
    }

    #[inline]
    pub fn target(&self) -> TargetId {
        self.target
    }

    #[inline]
    pub fn setter(&self) -> &SetterRef {
        &self.setter
    }

    #[inline]
    pub fn path(&self) -> &PathRef {
        &self.path
    }

    #[inline]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> i16 {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> i16 {
        self.elapsed
    }

    #[inline]
    pub fn leg(&self) -> Leg {
        self.leg
    }

    #[inline]
    pub fn playback(&self) -> bool {
        self.playback
    }

    #[inline]
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.elapsed < 0 {
            Phase::Delay
        } else {
            Phase::Running
        }
    }

    /// Endpoints of the current leg as `(from, to)`.
    #[inline]
    pub fn leg_range(&self) -> (i32, i32) {
        match self.leg {
            Leg::Forward => (self.start, self.end),
            Leg::Playback => (self.end, self.start),
        }
    }

    #[inline]
    pub fn matches(&self, target: TargetId, setter: Option<&SetterRef>) -> bool {
        self.target == target && setter.map_or(true, |s| same_setter(&self.setter, s))
    }

    #[inline]
    pub fn is_leg_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Value the setter receives at the current `elapsed`; `None` while delaying.
    pub fn current_value(&self) -> Option<i32> {
        if self.elapsed < 0 {
            return None;
        }
        let progress = progress_of(self.elapsed, self.duration);
        let out = self.path.sample(progress);
        let (from, to) = self.leg_range();
        Some(lerp_value(from, to, out))
    }
}

impl fmt::Debug for AnimationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRecord")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("path", &self.path.name())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("playback", &self.playback)
            .field("playback_delay", &self.playback_delay)
            .field("repeat", &self.repeat)
            .field("repeat_delay", &self.repeat_delay)
            .field("leg", &self.leg)
            .field("has_end_cb", &self.end_cb.is_some())
            .finish()
    }
}
