//! Animation registry: the unordered set of live records.
//!
//! Records sit in a dense `Vec` and are removed with `swap_remove`, so
//! iteration order changes as animations come and go. Nothing may depend on
//! it.

use crate::error::AnimError;
use crate::ids::{AnimId, TargetId};
use crate::record::{AnimationRecord, SetterRef};

#[derive(Debug, Default)]
pub struct AnimationRegistry {
    records: Vec<AnimationRecord>,
    max_records: Option<usize>,
}

impl AnimationRegistry {
    pub fn new(initial_capacity: usize, max_records: Option<usize>) -> Self {
        Self {
            records: Vec::with_capacity(initial_capacity),
            max_records,
        }
    }

    /// `RegistryFull` when another record would exceed `max_records`.
    pub fn check_capacity(&self) -> Result<(), AnimError> {
        match self.max_records {
            Some(capacity) if self.records.len() >= capacity => {
                Err(AnimError::RegistryFull { capacity })
            }
            _ => Ok(()),
        }
    }

    /// Take ownership of a record. Fails only when the registry is full.
    pub fn insert(&mut self, record: AnimationRecord) -> Result<(), AnimError> {
        self.check_capacity()?;
        self.records.push(record);
        Ok(())
    }

    /// Drop every record animating `target`, restricted to `setter` when given.
    /// Returns how many were removed.
    pub fn remove_matching(&mut self, target: TargetId, setter: Option<&SetterRef>) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.matches(target, setter));
        before - self.records.len()
    }

    pub fn remove_id(&mut self, id: AnimId) -> Option<AnimationRecord> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.swap_remove(idx))
    }

    /// Drop every record without notifying anyone.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    pub fn get(&self, id: AnimId) -> Option<&AnimationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, target: TargetId, setter: Option<&SetterRef>) -> bool {
        self.records.iter().any(|r| r.matches(target, setter))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationRecord> {
        self.records.iter()
    }

    /// Records animating `target`.
    pub fn for_target(&self, target: TargetId) -> impl Iterator<Item = &AnimationRecord> {
        self.records.iter().filter(move |r| r.target == target)
    }

    #[inline]
    pub(crate) fn get_index_mut(&mut self, idx: usize) -> Option<&mut AnimationRecord> {
        self.records.get_mut(idx)
    }

    #[inline]
    pub(crate) fn swap_remove(&mut self, idx: usize) -> AnimationRecord {
        self.records.swap_remove(idx)
    }
}
