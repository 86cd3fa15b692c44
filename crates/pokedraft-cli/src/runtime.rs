// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use pokedraft_app::{CancelToken, Candidate};
use pokedraft_catalog::Client;
use pokedraft_tui::{AppRuntime, InternalEvent};
use std::sync::mpsc::Sender;
use std::thread;

/// Runtime backed by the remote catalog; fetches run off the UI thread.
pub struct CatalogRuntime {
    client: Client,
}

impl CatalogRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl AppRuntime for CatalogRuntime {
    fn load_candidates(&mut self, cancel: &CancelToken) -> Result<Option<Vec<Candidate>>> {
        self.client.fetch_all(cancel)
    }

    fn spawn_candidate_fetch(
        &mut self,
        cancel: CancelToken,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::Builder::new()
            .name("catalog-fetch".to_owned())
            .spawn(move || {
                let event = match client.fetch_all(&cancel) {
                    Ok(Some(candidates)) => InternalEvent::CatalogLoaded(candidates),
                    Ok(None) => {
                        log::debug!("catalog fetch cancelled");
                        return;
                    }
                    Err(error) => InternalEvent::CatalogFailed(format!("{error:#}")),
                };
                if cancel.is_cancelled() {
                    return;
                }
                let _ = tx.send(event);
            })
            .context("spawn catalog fetch thread")?;
        Ok(())
    }
}
