// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pokedraft_app::{Candidate, Extent, Picker, PickerCommand, PickerConfig, SharedSelection};
use serde_json::json;

const SPECIES: [&str; 40] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
    "metapod",
    "butterfree",
    "weedle",
    "kakuna",
    "beedrill",
    "pidgey",
    "pidgeotto",
    "pidgeot",
    "rattata",
    "raticate",
    "spearow",
    "fearow",
    "ekans",
    "arbok",
    "pikachu",
    "raichu",
    "sandshrew",
    "sandslash",
    "nidoran-f",
    "nidorina",
    "nidoqueen",
    "nidoran-m",
    "nidorino",
    "nidoking",
    "clefairy",
    "clefable",
    "vulpix",
    "ninetales",
    "jigglypuff",
    "wigglytuff",
];

pub const CATALOG_BASE_URL: &str = "https://pokeapi.test/api/v2/pokemon";

/// The first `count` catalog entries; past the named species the names are
/// synthetic (`mon-040`, `mon-041`, ...).
pub fn catalog(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|index| {
            let name = SPECIES
                .get(index)
                .map_or_else(|| format!("mon-{index:03}"), |name| (*name).to_owned());
            Candidate::with_url(name, format!("{CATALOG_BASE_URL}/{}/", index + 1))
        })
        .collect()
}

pub fn named(names: &[&str]) -> Vec<Candidate> {
    names.iter().map(|name| Candidate::new(*name)).collect()
}

/// A picker with the catalog loaded, the input focused and a viewport of
/// `visible_rows` one-line rows.
pub fn open_picker(candidates: Vec<Candidate>, visible_rows: i32) -> Picker {
    let mut picker = Picker::new(PickerConfig::default(), SharedSelection::new(4));
    picker.set_viewport(Extent::new(0, visible_rows), 1);
    picker.dispatch(PickerCommand::FetchStarted);
    picker.dispatch(PickerCommand::Focus);
    picker.dispatch(PickerCommand::FetchFinished(candidates));
    picker
}

/// Catalog page body as served by the remote API.
pub fn catalog_page_json(count: usize, results: &[Candidate]) -> String {
    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}
