// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::{Candidate, SharedSelection};

pub const FIRST_NAME_REQUIRED: &str = "Please enter a valid first name";
pub const LAST_NAME_REQUIRED: &str = "Please enter a valid last name";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainerForm {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
}

impl FormErrors {
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

impl TrainerForm {
    pub fn errors(&self) -> FormErrors {
        FormErrors {
            first_name: self
                .first_name
                .trim()
                .is_empty()
                .then_some(FIRST_NAME_REQUIRED),
            last_name: self
                .last_name
                .trim()
                .is_empty()
                .then_some(LAST_NAME_REQUIRED),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.errors();
        if let Some(message) = errors.first_name.or(errors.last_name) {
            bail!("{message} -- fill in the trainer fields and retry");
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// What the success overlay shows once a complete team is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub trainer: String,
    pub members: Vec<Candidate>,
}

impl TeamSummary {
    /// Builds the summary when the form is valid and the team is full.
    pub fn for_submission(form: &TrainerForm, team: &SharedSelection) -> Option<Self> {
        if !form.errors().is_empty() || !team.is_full() {
            return None;
        }
        Some(Self {
            trainer: form.full_name(),
            members: team.members(),
        })
    }

    pub fn headline(&self) -> String {
        format!(
            "{}, your team has been created successfully!",
            self.trainer
        )
    }
}
