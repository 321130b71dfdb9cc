use crate::common::types::FrameIndex;

/// Physical memory frames with per-slot ages.
///
/// Slot identity is stable: a page stays in the slot it was loaded into
/// until it is evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet<P> {
    slots: Vec<Option<P>>,
    ages: Vec<usize>,
}

impl<P: Clone + PartialEq> FrameSet<P> {
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
            ages: vec![0; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// One more step survived by every resident page. Empty slots stay at 0.
    pub fn age_occupied(&mut self) {
        for (slot, age) in self.slots.iter().zip(self.ages.iter_mut()) {
            if slot.is_some() {
                *age += 1;
            }
        }
    }

    /// Slot currently holding `page`
    pub fn find(&self, page: &P) -> Option<FrameIndex> {
        self.slots.iter().position(|slot| slot.as_ref() == Some(page))
    }

    /// Lowest-index empty slot
    pub fn first_empty(&self) -> Option<FrameIndex> {
        self.slots.iter().position(Option::is_none)
    }

    /// Load `page` into slot `index`, resetting its age. Returns the previous
    /// occupant.
    pub fn place(&mut self, index: FrameIndex, page: P) -> Option<P> {
        self.ages[index] = 0;
        self.slots[index].replace(page)
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn slots(&self) -> &[Option<P>] {
        &self.slots
    }

    pub fn ages(&self) -> &[usize] {
        &self.ages
    }
}
