// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::Duration;

use crate::{
    AddOutcome, Candidate, Extent, LazyLoadSentinel, PickerConfig, ResultWindow, RowViewport,
    SharedSelection, scroll_down, scroll_to_top, scroll_up,
};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_MATCHES_MESSAGE: &str = "No matches found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownPhase {
    Closed,
    Loading,
    HasResults,
    NoResults,
}

impl DropdownPhase {
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    Focus,
    Blur,
    BlurElapsed { token: u64 },
    Input(String),
    ArrowDown,
    ArrowUp,
    Enter,
    Hover(usize),
    Click(usize),
    ScrollBy(i32),
    LastRowVisible(bool),
    FetchStarted,
    FetchFinished(Vec<Candidate>),
    FetchFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Opened,
    Closed,
    BlurScheduled { token: u64, delay: Duration },
    FocusChanged(Option<String>),
    Scrolled(i32),
    PageAdvanced(usize),
    Selected { name: String, outcome: AddOutcome },
    CatalogLoaded(usize),
    CatalogFailed(String),
}

/// Keyboard and pointer state machine for the team search dropdown.
///
/// Owns the result window, the lazy-load sentinel and the list geometry;
/// writes to the team only through the shared handle it was given.
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    window: ResultWindow,
    sentinel: LazyLoadSentinel,
    team: SharedSelection,
    rows: RowViewport,
    input: String,
    input_focused: bool,
    open: bool,
    loading: bool,
    fetch_failed: bool,
    focus: Option<String>,
    blur_token: u64,
    pending_blur: Option<u64>,
}

impl Picker {
    pub fn new(config: PickerConfig, team: SharedSelection) -> Self {
        Self {
            config,
            window: ResultWindow::new(config.page_size),
            sentinel: LazyLoadSentinel::new(),
            team,
            rows: RowViewport::default(),
            input: String::new(),
            input_focused: false,
            open: false,
            loading: false,
            fetch_failed: false,
            focus: None,
            blur_token: 0,
            pending_blur: None,
        }
    }

    pub fn dispatch(&mut self, command: PickerCommand) -> Vec<PickerEvent> {
        let mut events = Vec::new();
        match command {
            PickerCommand::Focus => {
                self.input_focused = true;
                self.pending_blur = None;
                self.open_dropdown(&mut events);
            }
            PickerCommand::Blur => {
                self.input_focused = false;
                self.blur_token = self.blur_token.wrapping_add(1);
                self.pending_blur = Some(self.blur_token);
                events.push(PickerEvent::BlurScheduled {
                    token: self.blur_token,
                    delay: self.config.blur_close_delay,
                });
            }
            PickerCommand::BlurElapsed { token } => {
                if self.pending_blur == Some(token) {
                    self.pending_blur = None;
                    self.close_dropdown(&mut events);
                }
            }
            PickerCommand::Input(text) => {
                self.input = text;
                self.window.set_filter(&self.input);
                self.clamp_scroll(&mut events);
                if self.input_focused {
                    self.open_dropdown(&mut events);
                }
                self.reconcile_focus(&mut events);
            }
            PickerCommand::ArrowDown => self.move_down(&mut events),
            PickerCommand::ArrowUp => self.move_up(&mut events),
            PickerCommand::Enter => match self.focused_index() {
                Some(index) => self.select_row(index, &mut events),
                None => log::debug!("enter ignored: no focused row"),
            },
            PickerCommand::Hover(index) => {
                if self.open
                    && let Some(candidate) = self.window.get(index)
                {
                    let name = candidate.name.clone();
                    self.set_focus(Some(name), &mut events);
                }
            }
            PickerCommand::Click(index) => {
                if self.open && index < self.window.len() {
                    self.select_row(index, &mut events);
                    self.close_dropdown(&mut events);
                }
            }
            PickerCommand::ScrollBy(delta) => {
                if self.open {
                    let offset = self.rows.offset.saturating_add(delta).max(0);
                    self.set_scroll(offset, &mut events);
                    self.clamp_scroll(&mut events);
                }
            }
            PickerCommand::LastRowVisible(visible) => {
                let Some(last) = self.window.last().map(|c| c.name.clone()) else {
                    return events;
                };
                if self.sentinel.observe(&last, visible) && self.window.advance_page() {
                    log::debug!("picker: advanced to page {}", self.window.page());
                    events.push(PickerEvent::PageAdvanced(self.window.page()));
                }
            }
            PickerCommand::FetchStarted => {
                self.loading = true;
                self.fetch_failed = false;
            }
            PickerCommand::FetchFinished(candidates) => {
                let count = candidates.len();
                self.window.load(candidates);
                self.loading = false;
                self.fetch_failed = false;
                self.clamp_scroll(&mut events);
                self.reconcile_focus(&mut events);
                events.push(PickerEvent::CatalogLoaded(count));
            }
            PickerCommand::FetchFailed(error) => {
                log::error!("catalog fetch failed: {error}");
                self.loading = false;
                self.fetch_failed = true;
                events.push(PickerEvent::CatalogFailed(error));
            }
        }
        self.rebind_sentinel();
        events
    }

    pub fn phase(&self) -> DropdownPhase {
        if !self.open {
            DropdownPhase::Closed
        } else if self.loading {
            DropdownPhase::Loading
        } else if self.window.is_empty() {
            DropdownPhase::NoResults
        } else {
            DropdownPhase::HasResults
        }
    }

    /// Inline message shown above the rows, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.phase() {
            DropdownPhase::Loading => Some(LOADING_MESSAGE),
            DropdownPhase::NoResults => Some(NO_MATCHES_MESSAGE),
            DropdownPhase::Closed | DropdownPhase::HasResults => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the last catalog fetch failed and no fetch has run since.
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus_key(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus
            .as_deref()
            .and_then(|name| self.window.position(name))
    }

    pub fn window(&self) -> &ResultWindow {
        &self.window
    }

    pub fn team(&self) -> &SharedSelection {
        &self.team
    }

    pub fn config(&self) -> PickerConfig {
        self.config
    }

    pub fn rows(&self) -> &RowViewport {
        &self.rows
    }

    pub fn scroll_offset(&self) -> i32 {
        self.rows.offset
    }

    /// Updates where the dropdown list sits on screen. Called by the
    /// front-end whenever layout changes.
    pub fn set_viewport(&mut self, viewport: Extent, row_height: i32) {
        self.rows.set_viewport(viewport);
        self.rows.row_height = row_height.max(1);
        let mut events = Vec::new();
        self.clamp_scroll(&mut events);
    }

    fn open_dropdown(&mut self, events: &mut Vec<PickerEvent>) {
        if self.open {
            return;
        }
        self.open = true;
        events.push(PickerEvent::Opened);
    }

    fn close_dropdown(&mut self, events: &mut Vec<PickerEvent>) {
        if !self.open {
            return;
        }
        self.open = false;
        events.push(PickerEvent::Closed);
        if !self.loading {
            let first = self.window.first().map(|c| c.name.clone());
            self.set_focus(first, events);
        }
    }

    fn move_down(&mut self, events: &mut Vec<PickerEvent>) {
        if !self.open || self.window.is_empty() {
            return;
        }
        let next = self.focused_index().map_or(0, |index| index + 1);
        let (target, offset) = if next >= self.window.len() {
            (
                0,
                scroll_to_top(self.rows.row(0), self.rows.viewport, self.rows.offset),
            )
        } else {
            (
                next,
                scroll_down(self.rows.row(next), self.rows.viewport, self.rows.offset),
            )
        };
        self.set_scroll(offset, events);
        let name = self.window.get(target).map(|c| c.name.clone());
        self.set_focus(name, events);
    }

    fn move_up(&mut self, events: &mut Vec<PickerEvent>) {
        if !self.open {
            return;
        }
        let Some(previous) = self.focused_index().and_then(|index| index.checked_sub(1)) else {
            return;
        };
        let offset = scroll_up(self.rows.row(previous), self.rows.viewport, self.rows.offset);
        self.set_scroll(offset, events);
        let name = self.window.get(previous).map(|c| c.name.clone());
        self.set_focus(name, events);
    }

    fn select_row(&mut self, index: usize, events: &mut Vec<PickerEvent>) {
        let Some(candidate) = self.window.get(index).cloned() else {
            return;
        };
        let name = candidate.name.clone();
        let outcome = self.team.add(candidate);
        log::info!("picked {name} ({outcome:?})");

        self.input = name.clone();
        self.window.set_filter(&self.input);
        self.clamp_scroll(events);
        events.push(PickerEvent::Selected { name, outcome });
        self.close_dropdown(events);
        self.reconcile_focus(events);
    }

    fn reconcile_focus(&mut self, events: &mut Vec<PickerEvent>) {
        if self.focused_index().is_some() {
            return;
        }
        let first = self.window.first().map(|c| c.name.clone());
        self.set_focus(first, events);
    }

    fn set_focus(&mut self, focus: Option<String>, events: &mut Vec<PickerEvent>) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        events.push(PickerEvent::FocusChanged(self.focus.clone()));
    }

    fn set_scroll(&mut self, offset: i32, events: &mut Vec<PickerEvent>) {
        if self.rows.offset == offset {
            return;
        }
        self.rows.offset = offset;
        events.push(PickerEvent::Scrolled(offset));
    }

    fn clamp_scroll(&mut self, events: &mut Vec<PickerEvent>) {
        let rows = i32::try_from(self.window.len()).unwrap_or(i32::MAX);
        let content = rows.saturating_mul(self.rows.row_height);
        let max_offset = (content - self.rows.viewport.height).max(0);
        if self.rows.offset > max_offset {
            self.set_scroll(max_offset, events);
        }
    }

    fn rebind_sentinel(&mut self) {
        let last = self.window.last().map(|c| c.name.as_str());
        self.sentinel.rebind(last, self.loading, self.open);
    }
}
