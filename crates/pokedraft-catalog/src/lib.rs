// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use pokedraft_app::{CancelToken, Candidate};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// One `?limit=N` response from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPage {
    pub count: usize,
    #[serde(default)]
    pub results: Vec<Candidate>,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            bail!("catalog.base_url must not be empty");
        }
        let base_url = Url::parse(trimmed)
            .with_context(|| format!("parse catalog.base_url {trimmed:?}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!(
                "catalog.base_url {trimmed:?} must use http or https, got {}",
                base_url.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The base URL with `limit` set, keeping any other query parameters.
    pub fn page_url(&self, limit: usize) -> Url {
        let kept = self
            .base_url
            .query_pairs()
            .filter(|(key, _)| key != "limit")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect::<Vec<(String, String)>>();
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("limit", &limit.to_string());
        url
    }

    pub fn fetch_page(&self, limit: usize) -> Result<CatalogPage> {
        let url = self.page_url(limit);
        log::debug!("catalog: GET {url}");
        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|error| connection_error(&url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        response.json().context("decode catalog page")
    }

    /// Total number of catalog entries, from a one-entry page.
    pub fn count(&self) -> Result<usize> {
        Ok(self.fetch_page(1)?.count)
    }

    /// Fetches the whole catalog: one request to learn the size, one for
    /// the entries. Returns `Ok(None)` when `cancel` fires before the
    /// results are handed back.
    pub fn fetch_all(&self, cancel: &CancelToken) -> Result<Option<Vec<Candidate>>> {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        let count = self.count().context("fetch catalog size")?;
        log::debug!("catalog: {count} entries available");
        if cancel.is_cancelled() {
            return Ok(None);
        }
        if count == 0 {
            return Ok(Some(Vec::new()));
        }

        let page = self.fetch_page(count).context("fetch catalog entries")?;
        if cancel.is_cancelled() {
            return Ok(None);
        }
        let candidates = dedupe_by_name(page.results);
        log::info!("catalog: loaded {} of {count} entries", candidates.len());
        Ok(Some(candidates))
    }
}

fn dedupe_by_name(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.name.clone()))
        .collect()
}

fn connection_error(url: &Url, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach catalog at {} -- check [catalog].base_url and the network ({})",
        url,
        error
    )
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    detail: Option<String>,
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<DetailEnvelope>(body)
        && let Some(detail) = parsed.detail
        && !detail.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), detail);
    }

    let body = body.trim();
    if !body.is_empty() && body.len() < 100 && !body.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), body);
    }

    anyhow!("server returned {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::{Client, clean_error_response, dedupe_by_name};
    use anyhow::Result;
    use pokedraft_app::Candidate;
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn page_url_replaces_limit_and_keeps_other_params() -> Result<()> {
        let client = Client::new(
            "https://pokeapi.test/api/v2/pokemon?offset=0&limit=5",
            Duration::from_secs(1),
        )?;
        assert_eq!(
            client.page_url(20).as_str(),
            "https://pokeapi.test/api/v2/pokemon?offset=0&limit=20"
        );
        Ok(())
    }

    #[test]
    fn new_rejects_blank_and_non_http_urls() {
        assert!(Client::new("  ", Duration::from_secs(1)).is_err());
        let error = Client::new("ftp://pokeapi.test/pokemon", Duration::from_secs(1))
            .expect_err("ftp should be rejected");
        assert!(error.to_string().contains("http or https"));
    }

    #[test]
    fn error_response_prefers_detail_field() {
        let error = clean_error_response(StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#);
        assert_eq!(error.to_string(), "server error (404): Not found.");

        let error = clean_error_response(StatusCode::NOT_FOUND, "Not Found");
        assert_eq!(error.to_string(), "server error (404): Not Found");

        let error = clean_error_response(StatusCode::BAD_GATEWAY, r#"{"oops":true}"#);
        assert_eq!(error.to_string(), "server returned 502");
    }

    #[test]
    fn duplicate_names_keep_first_entry() {
        let list = dedupe_by_name(vec![
            Candidate::with_url("mew", "first"),
            Candidate::new("mewtwo"),
            Candidate::with_url("mew", "second"),
        ]);
        assert_eq!(
            list,
            vec![Candidate::with_url("mew", "first"), Candidate::new("mewtwo")]
        );
    }
}
