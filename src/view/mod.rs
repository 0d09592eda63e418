pub mod projector;

use tracing::debug;

use ipo_rs::{Ipo, IpoId};

use crate::types::{ViewEvent, ViewState};

/// One mounted list view: the fetched collection, its view state and the
/// cached projection.
///
/// Any input change only marks the view dirty; the projection is rebuilt the
/// next time it is read.
#[derive(Debug, Default)]
pub struct ListView {
    base: Vec<Ipo>,
    state: ViewState,
    rows: Vec<Ipo>,
    dirty: bool,
    recomputes: u64,
}

impl ListView {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            dirty: true,
            ..Self::default()
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Swap in a freshly fetched collection. No merging with the previous one.
    pub fn replace_base(&mut self, base: Vec<Ipo>) {
        self.base = base;
        self.mark_dirty();
    }

    /// Apply a control change. Returns whether the view state actually changed.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let next = self.state.reduce(event);
        if next == self.state {
            return false;
        }
        self.state = next;
        self.mark_dirty();
        true
    }

    pub fn projection(&mut self) -> &[Ipo] {
        if self.take_dirty() {
            self.rows = projector::project(&self.base, &self.state);
            self.recomputes += 1;
            debug!(rows = self.rows.len(), recomputes = self.recomputes, "projection rebuilt");
        }
        &self.rows
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn base(&self) -> &[Ipo] {
        &self.base
    }

    pub fn find(&self, id: &IpoId) -> Option<&Ipo> {
        self.base.iter().find(|ipo| ipo.id == *id)
    }
}
