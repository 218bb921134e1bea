// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rendering of the ledger engine's balance/register output. The engine gives
//! back plain text; these commands only split its columns back apart.

use crate::engine::Engine;
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;
use serde::Serialize;

pub fn balance(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let engine = Engine::new(store.path());
    let account = sub.get_one::<String>("account").map(|s| s.as_str());
    let output = engine.balance(account)?;
    if output.is_empty() {
        println!("No balance information found.");
        return Ok(());
    }

    let mut rows = Vec::new();
    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 2 {
            rows.push(vec![parts[0].to_string(), parts[1..].join(" ")]);
        }
    }
    println!("{}", pretty_table(&["Balance", "Account"], rows));
    Ok(())
}

pub fn register(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let engine = Engine::new(store.path());
    let account = sub.get_one::<String>("account").map(|s| s.as_str());
    let output = engine.register(account)?;
    if output.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = register_rows(&output)
        .into_iter()
        .map(|r| vec![r.date, r.description, r.account, r.amount, r.balance])
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Account", "Amount", "Balance"], rows)
    );
    Ok(())
}

pub fn transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let engine = Engine::new(store.path());
    let account = sub.get_one::<String>("account").map(|s| s.as_str());
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&20);
    let output = engine.register(account)?;
    if output.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    let lines: Vec<&str> = output.lines().collect();
    let mut count = 0;
    for line in &lines {
        if !line.trim().is_empty() && count < limit {
            println!("{}", line);
            count += 1;
        }
    }
    if lines.len() > limit {
        println!(
            "... and {} more lines (use --limit to see more)",
            lines.len() - limit
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct RegisterRow {
    pub date: String,
    pub description: String,
    pub account: String,
    pub amount: String,
    pub balance: String,
}

/// Split the engine's register lines back into columns. The description runs
/// from the second token up to the first `$`/`-$` token; the last two tokens
/// are amount and running balance.
pub fn register_rows(output: &str) -> Vec<RegisterRow> {
    let mut data = Vec::new();
    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 5 {
            continue;
        }
        let amount_idx = parts.len() - 2;
        let mut desc_end = parts.len() - 3;
        for (i, part) in parts.iter().enumerate().skip(1) {
            if part.starts_with('$') || part.starts_with("-$") {
                desc_end = i;
                break;
            }
        }
        let desc_end = desc_end.min(amount_idx);
        data.push(RegisterRow {
            date: parts[0].to_string(),
            description: parts[1..desc_end].join(" "),
            account: parts[desc_end..amount_idx].join(" "),
            amount: parts[amount_idx].to_string(),
            balance: parts[amount_idx + 1].to_string(),
        });
    }
    data
}
