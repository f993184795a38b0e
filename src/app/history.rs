//! Undo/Redo über Cell-Store-Snapshots.

use crate::core::CellStore;

/// Snapshot eines Karten-Stands.
///
/// `CellStore` teilt seine Zellen per `Arc`: das Erstellen eines Snapshots
/// ist O(1), kopiert wird erst beim nächsten Schreibzugriff.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub cells: CellStore,
}

impl Snapshot {
    /// Erstellt einen Snapshot des aktuellen Stands.
    pub fn new(cells: &CellStore) -> Self {
        Self {
            cells: cells.clone(),
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Speichert einen Snapshot vor einer Mutation. Leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellCoord;

    fn make_snapshot_with_cell_count(count: i32) -> Snapshot {
        let cells = (0..count).fold(CellStore::new(), |store, x| {
            store.set_cell(CellCoord::new(x, 0), "#000", None)
        });
        Snapshot::new(&cells)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_and_redo_swap_snapshots() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_cell_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_cell_count(5))
            .expect("undo vorhanden");
        assert_eq!(restored.cells.len(), 2);
        assert!(history.can_redo());

        let redone = history
            .pop_redo_with_current(restored)
            .expect("redo vorhanden");
        assert_eq!(redone.cells.len(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_cell_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_cell_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_cell_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_cell_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_cell_count(9));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }
}
