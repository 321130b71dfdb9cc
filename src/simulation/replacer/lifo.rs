use serde::Serialize;

/// LIFO (stack) page replacement policy.
///
/// Holds the resident pages in load order: the bottom is the oldest resident,
/// the top the most recently loaded. Hits never reorder the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifoReplacer<P> {
    stack: Vec<P>,
}

impl<P: Clone + PartialEq> LifoReplacer<P> {
    pub fn new(frame_count: usize) -> Self {
        Self {
            stack: Vec::with_capacity(frame_count),
        }
    }

    /// Record that a page has been loaded into a frame
    pub fn record_load(&mut self, page: P) {
        self.stack.push(page);
    }

    /// Victim selection: pop the most recently loaded page
    pub fn victim(&mut self) -> Option<P> {
        self.stack.pop()
    }

    /// Page that would be evicted next
    pub fn peek(&self) -> Option<&P> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom-to-top view of the stack
    pub fn as_slice(&self) -> &[P] {
        &self.stack
    }

    /// Owned bottom-to-top copy
    pub fn snapshot(&self) -> Vec<P> {
        self.stack.clone()
    }
}
