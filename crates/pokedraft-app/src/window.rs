// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Candidate;

/// The fetched candidate list seen through the current filter and page.
///
/// Matches are kept as indices into `candidates`; the visible slice is the
/// first `page * page_size` of them. Advancing a page only grows the slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultWindow {
    candidates: Vec<Candidate>,
    filter: String,
    page: usize,
    page_size: usize,
    matches: Vec<usize>,
}

impl ResultWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            filter: String::new(),
            page: 1,
            page_size: page_size.max(1),
            matches: Vec::new(),
        }
    }

    /// Installs the fetched list. The filter and page survive.
    pub fn load(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_owned();
        self.page = 1;
        self.refilter();
    }

    /// Grows the window by one page. Returns false when every match is
    /// already visible.
    pub fn advance_page(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn has_more(&self) -> bool {
        self.matches.len() > self.window_size()
    }

    pub fn window_size(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn len(&self) -> usize {
        self.matches.len().min(self.window_size())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        if index >= self.len() {
            return None;
        }
        self.matches
            .get(index)
            .and_then(|candidate_index| self.candidates.get(*candidate_index))
    }

    pub fn first(&self) -> Option<&Candidate> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&Candidate> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.iter().position(|candidate| candidate.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.matches[..self.len()]
            .iter()
            .filter_map(|index| self.candidates.get(*index))
    }

    fn refilter(&mut self) {
        self.matches = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.matches(&self.filter))
            .map(|(index, _)| index)
            .collect();
    }
}
