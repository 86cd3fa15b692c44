// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_MAX_TEAM_SIZE: usize = 4;
pub const DEFAULT_BLUR_CLOSE_DELAY: Duration = Duration::from_millis(100);

/// One selectable entry from the catalog. `name` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    pub fn with_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter.is_empty() || self.name.contains(filter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    pub page_size: usize,
    pub max_team_size: usize,
    pub blur_close_delay: Duration,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_team_size: DEFAULT_MAX_TEAM_SIZE,
            blur_close_delay: DEFAULT_BLUR_CLOSE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Candidate, PickerConfig};
    use std::time::Duration;

    #[test]
    fn filter_is_case_sensitive_substring() {
        let candidate = Candidate::new("Pikachu");
        assert!(candidate.matches(""));
        assert!(candidate.matches("kach"));
        assert!(!candidate.matches("pika"));
    }

    #[test]
    fn url_is_optional_on_the_wire() -> anyhow::Result<()> {
        let bare: Candidate = serde_json::from_str(r#"{"name":"eevee"}"#)?;
        assert_eq!(bare, Candidate::new("eevee"));
        assert_eq!(serde_json::to_string(&bare)?, r#"{"name":"eevee"}"#);
        Ok(())
    }

    #[test]
    fn default_config_matches_widget_constants() {
        let config = PickerConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.max_team_size, 4);
        assert_eq!(config.blur_close_delay, Duration::from_millis(100));
    }
}
