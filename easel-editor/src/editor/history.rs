// Undo/redo history module for the editor.
// A linear log of canvas snapshots plus a pointer at the one currently on screen.

use crate::editor::CanvasSnapshot;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    states: Vec<CanvasSnapshot>,
    // None only while nothing has been saved
    current_index: Option<usize>,
    max_states: Option<usize>,
}

impl HistoryLog {
    /// Unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `max_states` snapshots, dropping the oldest first.
    pub fn bounded(max_states: usize) -> Result<Self, HistoryError> {
        Self::with_limit(Some(max_states))
    }

    pub fn with_limit(max_states: Option<usize>) -> Result<Self, HistoryError> {
        if max_states == Some(0) {
            return Err(HistoryError::ZeroCapacity);
        }
        debug!(?max_states, "creating history log");
        Ok(Self {
            states: Vec::new(),
            current_index: None,
            max_states,
        })
    }

    pub fn max_states(&self) -> Option<usize> {
        self.max_states
    }

    /// Record `snapshot` as the new current state.
    ///
    /// Anything after the current pointer (states that were undone) is dropped first.
    pub fn save(&mut self, snapshot: CanvasSnapshot) {
        let keep = self.current_index.map_or(0, |i| i + 1);
        if keep < self.states.len() {
            debug!(
                dropped = self.states.len() - keep,
                "pruning redo branch"
            );
            self.states.truncate(keep);
        }

        self.states.push(snapshot);

        if let Some(max) = self.max_states {
            if self.states.len() > max {
                let excess = self.states.len() - max;
                self.states.drain(..excess);
                trace!(evicted = excess, max, "history at capacity");
            }
        }

        self.current_index = Some(self.states.len() - 1);
        trace!(len = self.states.len(), "snapshot saved");
    }

    /// Step back one state and return it, or None if already at the oldest.
    pub fn undo(&mut self) -> Option<CanvasSnapshot> {
        let index = match self.current_index {
            Some(i) if i > 0 => i - 1,
            _ => {
                trace!("nothing to undo");
                return None;
            }
        };

        let snapshot = self.states.get(index)?.clone();
        self.current_index = Some(index);
        debug!(index, "undo");
        Some(snapshot)
    }

    /// Step forward one state and return it, or None if already at the newest.
    pub fn redo(&mut self) -> Option<CanvasSnapshot> {
        let index = match self.current_index {
            Some(i) if i + 1 < self.states.len() => i + 1,
            _ => {
                trace!("nothing to redo");
                return None;
            }
        };

        let snapshot = self.states.get(index)?.clone();
        self.current_index = Some(index);
        debug!(index, "redo");
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.current_index, Some(i) if i > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.current_index
            .map_or(false, |i| i + 1 < self.states.len())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The snapshot currently on screen.
    pub fn current(&self) -> Option<&CanvasSnapshot> {
        self.states.get(self.current_index?)
    }

    pub fn snapshots(&self) -> &[CanvasSnapshot] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forget everything; the capacity limit is kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.states.len(), "clearing history");
        self.states.clear();
        self.current_index = None;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history capacity must be at least 1 state")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(s: &str) -> CanvasSnapshot {
        CanvasSnapshot::from(s)
    }

    fn strings(history: &HistoryLog) -> Vec<&str> {
        history.snapshots().iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_empty_history() {
        let mut history = HistoryLog::new();
        assert_eq!(history.current_index(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.current_index(), None);
        assert!(history.current().is_none());
    }

    #[test]
    fn test_saves_append_in_order() {
        let mut history = HistoryLog::new();
        for s in ["s1", "s2", "s3", "s4"] {
            history.save(snap(s));
        }
        assert_eq!(strings(&history), vec!["s1", "s2", "s3", "s4"]);
        assert_eq!(history.current_index(), Some(3));
        assert_eq!(history.current(), Some(&snap("s4")));
    }

    #[test]
    fn test_single_state_cannot_undo() {
        let mut history = HistoryLog::new();
        history.save(snap("only"));

        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.current_index(), Some(0));
    }

    #[test]
    fn test_undo_then_redo_restores_pointer() {
        let mut history = HistoryLog::new();
        history.save(snap("a"));
        history.save(snap("b"));

        assert_eq!(history.undo(), Some(snap("a")));
        assert_eq!(history.current_index(), Some(0));
        assert_eq!(history.redo(), Some(snap("b")));
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn test_redo_at_tail_is_noop() {
        let mut history = HistoryLog::new();
        history.save(snap("a"));
        history.save(snap("b"));

        assert_eq!(history.redo(), None);
        assert_eq!(history.current_index(), Some(1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_save_after_undo_prunes_redo_branch() {
        let mut history = HistoryLog::new();
        for s in ["a", "b", "c", "d"] {
            history.save(snap(s));
        }
        history.undo();
        history.undo();

        history.save(snap("x"));
        assert_eq!(strings(&history), vec!["a", "b", "x"]);
        assert_eq!(history.current_index(), Some(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_bounded_history_evicts_oldest() {
        let mut history = HistoryLog::bounded(3).unwrap();
        for s in ["a", "b", "c", "d", "e"] {
            history.save(snap(s));
        }
        assert_eq!(strings(&history), vec!["c", "d", "e"]);
        assert_eq!(history.current_index(), Some(2));

        assert_eq!(history.undo(), Some(snap("d")));
        assert_eq!(history.undo(), Some(snap("c")));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_bounded_history_prunes_before_evicting() {
        let mut history = HistoryLog::bounded(3).unwrap();
        for s in ["a", "b", "c"] {
            history.save(snap(s));
        }
        history.undo();

        // Pruning "c" leaves room, nothing old is evicted
        history.save(snap("x"));
        assert_eq!(strings(&history), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_bounded_to_one() {
        let mut history = HistoryLog::bounded(1).unwrap();
        history.save(snap("a"));
        history.save(snap("b"));
        assert_eq!(strings(&history), vec!["b"]);
        assert_eq!(history.current_index(), Some(0));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(HistoryLog::bounded(0).unwrap_err(), HistoryError::ZeroCapacity);
        assert!(HistoryLog::with_limit(None).is_ok());
    }

    #[test]
    fn test_clear_keeps_limit() {
        let mut history = HistoryLog::bounded(10).unwrap();
        history.save(snap("a"));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.current_index(), None);
        assert_eq!(history.max_states(), Some(10));
    }
}
