//! In-memory undo/redo history with explicit edit groups.
//!
//! Consecutive edits within the grouping timeout collapse into one undo
//! step, the way typing a word undoes as a unit. An explicit edit group
//! (`begin_group` / `end_group`) overrides the timeout: everything recorded
//! between the two calls undoes as exactly one step.

use std::time::{Duration, Instant};

/// Time window for merging consecutive edits into one undo step.
const DEFAULT_GROUP_TIMEOUT_MS: u64 = 500;

/// Maximum number of undo steps kept per document.
const DEFAULT_MAX_DEPTH: usize = 1_000;

/// A single reversible edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// Char index where the edit occurred.
    pub position: usize,
    /// Text that was inserted (empty for pure deletions).
    pub inserted: String,
    /// Text that was deleted (empty for pure insertions).
    pub deleted: String,
    /// Caret before the edit.
    pub cursor_before: usize,
    /// Caret after the edit.
    pub cursor_after: usize,
}

/// Operations that undo and redo as one step, in chronological order.
#[derive(Debug, Clone, Default)]
pub struct EditGroup {
    pub operations: Vec<EditOperation>,
}

#[derive(Debug)]
pub struct UndoManager {
    undo_stack: Vec<EditGroup>,
    redo_stack: Vec<EditGroup>,
    /// False while undo/redo replays operations.
    recording: bool,
    last_edit_time: Option<Instant>,
    group_timeout: Duration,
    max_depth: usize,
    /// Nesting depth of explicit edit groups.
    explicit_depth: usize,
    /// Whether the open explicit group has already pushed its `EditGroup`.
    explicit_started: bool,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoManager {
    pub fn new() -> Self {
        Self::with_limits(
            Duration::from_millis(DEFAULT_GROUP_TIMEOUT_MS),
            DEFAULT_MAX_DEPTH,
        )
    }

    pub fn with_limits(group_timeout: Duration, max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            recording: true,
            last_edit_time: None,
            group_timeout,
            max_depth: max_depth.max(1),
            explicit_depth: 0,
            explicit_started: false,
        }
    }

    /// Records an edit and clears the redo stack.
    pub fn record(&mut self, op: EditOperation) {
        if !self.recording {
            return;
        }
        self.redo_stack.clear();

        if self.explicit_depth > 0 {
            if self.explicit_started {
                if let Some(group) = self.undo_stack.last_mut() {
                    group.operations.push(op);
                    return;
                }
            }
            self.explicit_started = true;
            self.push_group(op);
            return;
        }

        let now = Instant::now();
        let within_timeout = self
            .last_edit_time
            .is_some_and(|last| now.duration_since(last) < self.group_timeout);
        self.last_edit_time = Some(now);

        if within_timeout {
            if let Some(group) = self.undo_stack.last_mut() {
                group.operations.push(op);
                return;
            }
        }
        self.push_group(op);
    }

    fn push_group(&mut self, op: EditOperation) {
        self.undo_stack.push(EditGroup {
            operations: vec![op],
        });
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    /// Opens an explicit edit group. Groups nest; only the outermost counts.
    pub fn begin_group(&mut self) {
        if self.explicit_depth == 0 {
            self.explicit_started = false;
        }
        self.explicit_depth += 1;
    }

    /// Closes an explicit edit group. The next edit starts a fresh step.
    pub fn end_group(&mut self) {
        if self.explicit_depth == 0 {
            tracing::warn!("end_group called without a matching begin_group");
            return;
        }
        self.explicit_depth -= 1;
        if self.explicit_depth == 0 {
            self.explicit_started = false;
            self.last_edit_time = None;
        }
    }

    #[cfg(test)]
    fn in_group(&self) -> bool {
        self.explicit_depth > 0
    }

    /// Stops the next edit from merging into the current timed step.
    /// Has no effect on an open explicit group.
    pub fn force_group_break(&mut self) {
        self.last_edit_time = None;
    }

    /// Pops the latest step. The caller applies the operations in reverse.
    pub fn undo(&mut self) -> Option<Vec<EditOperation>> {
        let group = self.undo_stack.pop()?;
        let ops = group.operations.clone();
        self.redo_stack.push(group);
        self.last_edit_time = None;
        Some(ops)
    }

    /// Pops the latest undone step. The caller applies the operations in order.
    pub fn redo(&mut self) -> Option<Vec<EditOperation>> {
        let group = self.redo_stack.pop()?;
        let ops = group.operations.clone();
        self.undo_stack.push(group);
        self.last_edit_time = None;
        Some(ops)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[cfg(test)]
    fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn pause_recording(&mut self) {
        self.recording = false;
    }

    pub fn resume_recording(&mut self) {
        self.recording = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_op(position: usize, text: &str) -> EditOperation {
        EditOperation {
            position,
            inserted: text.to_string(),
            deleted: String::new(),
            cursor_before: position,
            cursor_after: position + text.chars().count(),
        }
    }

    /// A manager that never merges by timeout.
    fn no_timeout() -> UndoManager {
        UndoManager::with_limits(Duration::ZERO, 100)
    }

    #[test]
    fn test_record_and_undo() {
        let mut mgr = no_timeout();
        mgr.record(insert_op(0, "a"));
        assert!(mgr.can_undo());
        let ops = mgr.undo().unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].inserted, "a");
        assert!(!mgr.can_undo());
        assert!(mgr.can_redo());
    }

    #[test]
    fn test_zero_timeout_keeps_steps_separate() {
        let mut mgr = no_timeout();
        mgr.record(insert_op(0, "a"));
        mgr.record(insert_op(1, "b"));
        assert_eq!(mgr.undo_depth(), 2);
    }

    #[test]
    fn test_timeout_merges_consecutive_edits() {
        let mut mgr = UndoManager::with_limits(Duration::from_secs(60), 100);
        mgr.record(insert_op(0, "a"));
        mgr.record(insert_op(1, "b"));
        assert_eq!(mgr.undo_depth(), 1);
        mgr.force_group_break();
        mgr.record(insert_op(2, "c"));
        assert_eq!(mgr.undo_depth(), 2);
    }

    #[test]
    fn test_explicit_group_is_one_step() {
        let mut mgr = no_timeout();
        mgr.record(insert_op(0, "x"));
        mgr.begin_group();
        mgr.record(insert_op(1, "a"));
        mgr.record(insert_op(2, "b"));
        mgr.record(insert_op(3, "c"));
        mgr.end_group();
        assert_eq!(mgr.undo_depth(), 2);
        assert_eq!(mgr.undo().unwrap().len(), 3);
        assert_eq!(mgr.undo().unwrap().len(), 1);
    }

    #[test]
    fn test_explicit_group_does_not_merge_into_previous_step() {
        let mut mgr = UndoManager::with_limits(Duration::from_secs(60), 100);
        mgr.record(insert_op(0, "x"));
        mgr.begin_group();
        mgr.record(insert_op(1, "a"));
        mgr.end_group();
        mgr.record(insert_op(2, "y"));
        assert_eq!(mgr.undo_depth(), 3);
    }

    #[test]
    fn test_empty_explicit_group_records_nothing() {
        let mut mgr = no_timeout();
        mgr.begin_group();
        mgr.end_group();
        assert!(!mgr.can_undo());
    }

    #[test]
    fn test_nested_groups_collapse_to_outermost() {
        let mut mgr = no_timeout();
        mgr.begin_group();
        mgr.record(insert_op(0, "a"));
        mgr.begin_group();
        mgr.record(insert_op(1, "b"));
        mgr.end_group();
        assert!(mgr.in_group());
        mgr.record(insert_op(2, "c"));
        mgr.end_group();
        assert!(!mgr.in_group());
        assert_eq!(mgr.undo_depth(), 1);
    }

    #[test]
    fn test_unbalanced_end_group_is_ignored() {
        let mut mgr = no_timeout();
        mgr.end_group();
        mgr.record(insert_op(0, "a"));
        assert_eq!(mgr.undo_depth(), 1);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut mgr = no_timeout();
        mgr.record(insert_op(0, "a"));
        mgr.undo();
        assert!(mgr.can_redo());
        mgr.record(insert_op(0, "b"));
        assert!(!mgr.can_redo());
    }

    #[test]
    fn test_paused_recording_is_dropped() {
        let mut mgr = no_timeout();
        mgr.pause_recording();
        mgr.record(insert_op(0, "a"));
        mgr.resume_recording();
        assert!(!mgr.can_undo());
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut mgr = UndoManager::with_limits(Duration::ZERO, 2);
        mgr.record(insert_op(0, "a"));
        mgr.record(insert_op(1, "b"));
        mgr.record(insert_op(2, "c"));
        assert_eq!(mgr.undo_depth(), 2);
        assert_eq!(mgr.undo().unwrap()[0].inserted, "c");
        assert_eq!(mgr.undo().unwrap()[0].inserted, "b");
        assert!(mgr.undo().is_none());
    }

    #[test]
    fn test_redo_restores_step() {
        let mut mgr = no_timeout();
        mgr.record(insert_op(0, "a"));
        mgr.undo();
        let ops = mgr.redo().unwrap();
        assert_eq!(ops[0].inserted, "a");
        assert!(mgr.can_undo());
        assert!(!mgr.can_redo());
    }
}
