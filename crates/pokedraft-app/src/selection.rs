// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;

use crate::Candidate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Appended,
    Replaced { evicted: Candidate },
    Duplicate,
}

impl AddOutcome {
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::Duplicate)
    }
}

/// Bounded, duplicate-free team. When full, a new member takes the last slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    members: Vec<Candidate>,
    capacity: usize,
}

impl SelectionStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            members: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, candidate: Candidate) -> AddOutcome {
        if self.contains(&candidate.name) {
            return AddOutcome::Duplicate;
        }
        if self.members.len() < self.capacity {
            self.members.push(candidate);
            return AddOutcome::Appended;
        }
        let last = self.members.len() - 1;
        let evicted = std::mem::replace(&mut self.members[last], candidate);
        AddOutcome::Replaced { evicted }
    }

    pub fn remove(&mut self, name: &str) -> Option<Candidate> {
        let index = self.members.iter().position(|member| member.name == name)?;
        Some(self.members.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member.name == name)
    }

    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.members).context("encode team as JSON")
    }
}

/// Handle to the team shared by the picker, the badges and the summary.
///
/// Clones point at the same store. All mutation goes through [`add`] and
/// [`remove`]; readers get owned snapshots.
///
/// [`add`]: SharedSelection::add
/// [`remove`]: SharedSelection::remove
#[derive(Debug, Clone)]
pub struct SharedSelection {
    store: Rc<RefCell<SelectionStore>>,
}

impl SharedSelection {
    pub fn new(capacity: usize) -> Self {
        Self {
            store: Rc::new(RefCell::new(SelectionStore::new(capacity))),
        }
    }

    pub fn add(&self, candidate: Candidate) -> AddOutcome {
        let name = candidate.name.clone();
        let outcome = self.store.borrow_mut().add(candidate);
        match &outcome {
            AddOutcome::Appended => log::debug!("team: added {name}"),
            AddOutcome::Replaced { evicted } => {
                log::debug!("team: {name} replaced {}", evicted.name);
            }
            AddOutcome::Duplicate => log::debug!("team: {name} already selected"),
        }
        outcome
    }

    pub fn remove(&self, name: &str) -> Option<Candidate> {
        let removed = self.store.borrow_mut().remove(name);
        if removed.is_some() {
            log::debug!("team: removed {name}");
        }
        removed
    }

    pub fn members(&self) -> Vec<Candidate> {
        self.store.borrow().members().to_vec()
    }

    pub fn names(&self) -> Vec<String> {
        self.store
            .borrow()
            .members()
            .iter()
            .map(|member| member.name.clone())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.borrow().contains(name)
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.store.borrow().is_full()
    }

    pub fn capacity(&self) -> usize {
        self.store.borrow().capacity()
    }

    pub fn to_json(&self) -> Result<String> {
        self.store.borrow().to_json()
    }
}
