// Conflict checks between a candidate course and an already accepted set.
use std::collections::HashMap;

use crate::models::{Course, TimeSlot};

/// Index of occupied slots, keyed by resolved (day, hour).
///
/// Two courses share a key exactly when `occurs_same_time` holds for them,
/// so a lookup answers "does this candidate coincide with anything accepted"
/// without rescanning the accepted list.
#[derive(Debug, Default)]
pub struct SlotIndex {
    slots: HashMap<TimeSlot, usize>,
}

impl SlotIndex {
    pub fn new() -> Self {
        SlotIndex::default()
    }

    /// Record `course` as occupying its slot; `position` is its index in the accepted list.
    /// Returns false when the slot was already taken.
    pub fn insert(&mut self, course: &Course, position: usize) -> bool {
        let slot = course.time_slot();
        if self.slots.contains_key(&slot) {
            return false;
        }
        self.slots.insert(slot, position);
        true
    }

    /// Position of the accepted course occupying the same slot as `course`.
    pub fn conflict_for(&self, course: &Course) -> Option<usize> {
        self.slots.get(&course.time_slot()).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
