//! Identifiers and a simple allocator for animation records.

use serde::{Deserialize, Serialize};

/// Engine-assigned handle of one admitted animation record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnimId(pub u32);

/// Opaque identity of the variable being animated.
///
/// The engine only compares it for equality (deletion) and hands it back to
/// setters and callbacks. It may encode a pointer, a handle or an index; the
/// engine never interprets it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u64);

impl From<u64> for TargetId {
    #[inline]
    fn from(raw: u64) -> Self {
        TargetId(raw)
    }
}

/// Monotonic allocator for AnimId. Never rewinds, so an id is never reused
/// within one engine.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_anim: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_anim(&mut self) -> AnimId {
        let id = AnimId(self.next_anim);
        self.next_anim = self.next_anim.wrapping_add(1);
        id
    }
}
