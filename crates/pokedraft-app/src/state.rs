// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{FormErrors, SharedSelection, TeamSummary, TrainerForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    FirstName,
    LastName,
    TeamSearch,
    Badges,
}

impl FocusArea {
    pub const ALL: [Self; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::TeamSearch,
        Self::Badges,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::TeamSearch => "team",
            Self::Badges => "badges",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub focus: FocusArea,
    pub form: TrainerForm,
    pub form_errors: FormErrors,
    pub submitted: Option<TrainerForm>,
    pub summary: Option<TeamSummary>,
    pub badge_cursor: usize,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: FocusArea::FirstName,
            form: TrainerForm::default(),
            form_errors: FormErrors::default(),
            submitted: None,
            summary: None,
            badge_cursor: 0,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextField,
    PrevField,
    FocusField(FocusArea),
    CloseSummary,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    FocusMoved { from: FocusArea, to: FocusArea },
    SummaryOpened,
    SummaryClosed,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextField => self.rotate_focus(1),
            AppCommand::PrevField => self.rotate_focus(-1),
            AppCommand::FocusField(area) => self.move_focus(area),
            AppCommand::CloseSummary => {
                if self.summary.take().is_some() {
                    vec![AppEvent::SummaryClosed]
                } else {
                    Vec::new()
                }
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    /// Validates the trainer form and, once valid, remembers the submission so
    /// the summary tracks the team from then on.
    pub fn submit(&mut self, team: &SharedSelection) -> Vec<AppEvent> {
        self.form_errors = self.form.errors();
        if let Err(error) = self.form.validate() {
            return vec![self.set_status(&format!("{error:#}"))];
        }

        self.submitted = Some(self.form.clone());
        let mut events = self.sync_summary(team);
        if self.summary.is_none() {
            let missing = team.capacity().saturating_sub(team.len());
            events.push(self.set_status(&format!("select {missing} more for a full team")));
        }
        events
    }

    /// Shows the summary while a submitted form has a full team; hides it
    /// otherwise.
    pub fn sync_summary(&mut self, team: &SharedSelection) -> Vec<AppEvent> {
        let next = self
            .submitted
            .as_ref()
            .and_then(|form| TeamSummary::for_submission(form, team));
        let was_visible = self.summary.is_some();
        let visible = next.is_some();
        self.summary = next;
        self.badge_cursor = self.badge_cursor.min(team.len().saturating_sub(1));

        match (was_visible, visible) {
            (false, true) => vec![AppEvent::SummaryOpened],
            (true, false) => vec![AppEvent::SummaryClosed],
            _ => Vec::new(),
        }
    }

    fn rotate_focus(&mut self, delta: isize) -> Vec<AppEvent> {
        let areas = FocusArea::ALL;
        let current = areas
            .iter()
            .position(|area| *area == self.focus)
            .unwrap_or(0) as isize;
        let len = areas.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.move_focus(areas[next])
    }

    fn move_focus(&mut self, to: FocusArea) -> Vec<AppEvent> {
        let from = self.focus;
        if from == to {
            return Vec::new();
        }
        self.focus = to;
        vec![AppEvent::FocusMoved { from, to }]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState, FocusArea};
    use crate::{Candidate, FIRST_NAME_REQUIRED, SharedSelection, TrainerForm};

    fn filled_state() -> AppState {
        AppState {
            form: TrainerForm {
                first_name: "Misty".to_owned(),
                last_name: "Waterflower".to_owned(),
            },
            ..AppState::default()
        }
    }

    fn full_team() -> SharedSelection {
        let team = SharedSelection::new(4);
        for name in ["staryu", "starmie", "psyduck", "horsea"] {
            team.add(Candidate::new(name));
        }
        team
    }

    #[test]
    fn focus_rotation_wraps() {
        let mut state = AppState {
            focus: FocusArea::Badges,
            ..AppState::default()
        };

        let events = state.dispatch(AppCommand::NextField);
        assert_eq!(state.focus, FocusArea::FirstName);
        assert_eq!(
            events,
            vec![AppEvent::FocusMoved {
                from: FocusArea::Badges,
                to: FocusArea::FirstName,
            }]
        );

        state.dispatch(AppCommand::PrevField);
        assert_eq!(state.focus, FocusArea::Badges);
    }

    #[test]
    fn submit_with_blank_names_reports_errors() {
        let mut state = AppState::default();
        let events = state.submit(&full_team());
        assert_eq!(state.form_errors.first_name, Some(FIRST_NAME_REQUIRED));
        assert!(state.summary.is_none());
        assert_eq!(
            events,
            vec![AppEvent::StatusUpdated(
                "Please enter a valid first name -- fill in the trainer fields and retry"
                    .to_owned()
            )]
        );
    }

    #[test]
    fn submit_reports_the_first_missing_name() {
        let mut state = AppState {
            form: TrainerForm {
                first_name: "Brock".to_owned(),
                last_name: "   ".to_owned(),
            },
            ..AppState::default()
        };
        state.submit(&full_team());
        assert!(state.submitted.is_none());
        assert_eq!(
            state.status_line.as_deref(),
            Some("Please enter a valid last name -- fill in the trainer fields and retry")
        );
    }

    #[test]
    fn submit_with_incomplete_team_asks_for_more() {
        let mut state = filled_state();
        let team = SharedSelection::new(4);
        team.add(Candidate::new("staryu"));

        state.submit(&team);
        assert!(state.summary.is_none());
        assert_eq!(
            state.status_line.as_deref(),
            Some("select 3 more for a full team")
        );
    }

    #[test]
    fn summary_follows_team_after_submission() {
        let mut state = filled_state();
        let team = full_team();

        assert_eq!(state.submit(&team), vec![AppEvent::SummaryOpened]);
        assert!(state.summary.is_some());

        team.remove("psyduck");
        assert_eq!(state.sync_summary(&team), vec![AppEvent::SummaryClosed]);

        team.add(Candidate::new("goldeen"));
        assert_eq!(state.sync_summary(&team), vec![AppEvent::SummaryOpened]);

        assert_eq!(
            state.dispatch(AppCommand::CloseSummary),
            vec![AppEvent::SummaryClosed]
        );
        assert!(state.dispatch(AppCommand::CloseSummary).is_empty());
    }
}
