//! Per-render bookkeeping: the export expansion stack and emitted entries.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::model::{EntryId, ExportEntry};

use super::error::RenderError;

/// State of one top-level render.
///
/// Lives only for the duration of a single `render_*` call.
pub(crate) struct Session {
    max_depth: usize,
    stack: Vec<Arc<ExportEntry>>,
    active: FxHashSet<EntryId>,
    emitted: FxHashSet<EntryId>,
}

impl Session {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            stack: Vec::new(),
            active: FxHashSet::default(),
            emitted: FxHashSet::default(),
        }
    }

    /// Push `entry` onto the expansion stack.
    pub(crate) fn enter(&mut self, entry: &Arc<ExportEntry>) -> Result<(), RenderError> {
        if self.active.contains(&entry.id) {
            let chain = self
                .stack
                .iter()
                .map(|e| e.full_name.clone())
                .chain(std::iter::once(entry.full_name.clone()))
                .collect();
            return Err(RenderError::CyclicExport {
                entry: entry.full_name.clone(),
                chain,
            });
        }
        if self.stack.len() >= self.max_depth {
            return Err(RenderError::DepthLimit {
                entry: entry.full_name.clone(),
                limit: self.max_depth,
            });
        }
        self.active.insert(entry.id);
        self.stack.push(Arc::clone(entry));
        Ok(())
    }

    /// Pop the innermost entry and mark its block as emitted.
    pub(crate) fn leave(&mut self) {
        if let Some(entry) = self.stack.pop() {
            self.active.remove(&entry.id);
            self.emitted.insert(entry.id);
        }
    }

    /// Whether a block for `id` was already written in this render.
    pub(crate) fn is_emitted(&self, id: EntryId) -> bool {
        self.emitted.contains(&id)
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32) -> Arc<ExportEntry> {
        Arc::new(ExportEntry {
            id: EntryId(id),
            class_name: Some("Actor".into()),
            object_name: format!("A{id}"),
            full_name: format!("Pkg.A{id}"),
            inner_full_name: format!("A{id}"),
        })
    }

    #[test]
    fn test_cycle_detected() {
        let mut session = Session::new(8);
        session.enter(&entry(0)).unwrap();
        session.enter(&entry(1)).unwrap();
        let err = session.enter(&entry(0)).unwrap_err();
        assert_eq!(
            err,
            RenderError::CyclicExport {
                entry: "Pkg.A0".into(),
                chain: vec!["Pkg.A0".into(), "Pkg.A1".into(), "Pkg.A0".into()],
            }
        );
    }

    #[test]
    fn test_leave_marks_emitted() {
        let mut session = Session::new(8);
        session.enter(&entry(0)).unwrap();
        assert!(!session.is_emitted(EntryId(0)));
        session.leave();
        assert!(session.is_emitted(EntryId(0)));
        assert_eq!(session.depth(), 0);
        // Re-entering a finished entry is not a cycle.
        assert!(session.enter(&entry(0)).is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let mut session = Session::new(1);
        session.enter(&entry(0)).unwrap();
        assert!(matches!(
            session.enter(&entry(1)),
            Err(RenderError::DepthLimit { limit: 1, .. })
        ));
    }
}
