//! Call-scoped visited tracking for graph traversals.
//!
//! Traversals allocate one `VisitedFlags` per call, sized to the node arena,
//! so searches stay `&self` and leave no state behind in the graph.

/// A per-slot visited flag vector.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
    marked: usize,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            marked: 0,
        }
    }

    /// Returns `true` iff this call observed the slot as not-yet-visited and marked it.
    #[inline]
    pub(crate) fn try_visit(&mut self, slot: usize) -> bool {
        let flag = &mut self.flags[slot];
        if *flag {
            false
        } else {
            *flag = true;
            self.marked += 1;
            true
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, slot: usize) -> bool {
        self.flags[slot]
    }

    /// Returns `true` once every slot has been marked.
    #[inline]
    pub(crate) fn is_complete(&self) -> bool {
        self.marked == self.flags.len()
    }
}
