// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::Engine;
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &Store) -> Result<()> {
    let engine = Engine::new(store.path());
    let output = engine.accounts()?;

    let rows: Vec<Vec<String>> = output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| vec![l.to_string()])
        .collect();

    if rows.is_empty() {
        println!("No accounts found.");
        return Ok(());
    }
    println!("{}", pretty_table(&["Account"], rows));
    Ok(())
}
