// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Watches the last rendered row and reports when it scrolls into view.
///
/// The front-end calls [`LazyLoadSentinel::rebind`] after every slice or
/// loading change and [`LazyLoadSentinel::observe`] after every draw. Each
/// binding fires at most once per hidden-to-visible transition; a fresh
/// binding whose row is already on screen fires on its first observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LazyLoadSentinel {
    target: Option<String>,
    visible: bool,
}

impl LazyLoadSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the sentinel at `last_row`. Nothing is observed while the
    /// dropdown is closed or a load is in flight. Returns true when the
    /// binding changed.
    pub fn rebind(&mut self, last_row: Option<&str>, loading: bool, open: bool) -> bool {
        let target = if open && !loading {
            last_row.map(ToOwned::to_owned)
        } else {
            None
        };
        if target == self.target {
            return false;
        }
        self.target = target;
        self.visible = false;
        true
    }

    /// Records the visibility of `row`. Returns true exactly when the bound
    /// row becomes visible.
    pub fn observe(&mut self, row: &str, visible: bool) -> bool {
        if self.target.as_deref() != Some(row) {
            return false;
        }
        let advanced = visible && !self.visible;
        self.visible = visible;
        advanced
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
