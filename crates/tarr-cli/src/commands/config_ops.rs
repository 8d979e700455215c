use std::path::Path;

use crate::config::{load_script_map, load_settings};

pub fn map_export() {
    print!("{}", tarr_core::script_map::default_toml());
}

pub fn map_validate(file: &str) {
    let (_, tables) = die!(load_script_map(Path::new(file)), "Error: {}");
    println!(
        "OK: {} forward tokens, {} reverse tokens",
        tables.forward.len(),
        tables.reverse.len()
    );
}

pub fn settings_export() {
    print!("{}", tarr_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let (_, s) = die!(load_settings(Path::new(file)), "Error: {}");
    println!(
        "OK: search.max_results={}, search.max_candidates={}, catalog.timeout_secs={}",
        s.search.max_results, s.search.max_candidates, s.catalog.timeout_secs
    );
}
