// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::journal::{self, Posting};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, parse_posting_specs, pretty_table};
use crate::editor;
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub index: usize,
    pub date: String,
    pub description: String,
    pub postings: Vec<Posting>,
}

pub fn list_rows(content: &str) -> Vec<TransactionRow> {
    journal::parse(content)
        .into_iter()
        .enumerate()
        .map(|(i, tx)| TransactionRow {
            index: i + 1,
            date: tx.date,
            description: tx.description,
            postings: tx.postings,
        })
        .collect()
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let content = store.load()?;
    let data = list_rows(&content);
    if data.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                let summary: Vec<String> = r
                    .postings
                    .iter()
                    .map(|p| format!("{} {}", p.account, p.amount).trim_end().to_string())
                    .collect();
                vec![
                    r.index.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    summary.join("; "),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Date", "Description", "Postings"], rows)
        );
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    }
    .format("%Y-%m-%d")
    .to_string();
    let description = sub.get_one::<String>("description").unwrap();
    let postings = postings_from_args(sub)?;

    let content = store.load()?;
    store.save(&editor::append(&content, &date, description, &postings))?;
    println!(
        "Recorded '{}' on {} ({} postings)",
        description,
        date,
        postings.len()
    );
    Ok(())
}

fn edit(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let content = store.load()?;
    let transactions = journal::parse(&content);
    let target = select(&transactions, index)?;

    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?.format("%Y-%m-%d").to_string(),
        None => target.date.clone(),
    };
    let description = sub
        .get_one::<String>("description")
        .cloned()
        .unwrap_or_else(|| target.description.clone());
    let postings = postings_from_args(sub)?;

    store.save(&editor::replace(&content, target, &date, &description, &postings))?;
    println!("Updated transaction #{}: {} {}", index, date, description);
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let content = store.load()?;
    let transactions = journal::parse(&content);
    let target = select(&transactions, index)?;

    store.save(&editor::delete(&content, target))?;
    println!("Deleted transaction: {} {}", target.date, target.description);
    Ok(())
}

fn select(transactions: &[journal::Transaction], index: usize) -> Result<&journal::Transaction> {
    index
        .checked_sub(1)
        .and_then(|i| transactions.get(i))
        .with_context(|| {
            format!(
                "No transaction #{} (journal has {})",
                index,
                transactions.len()
            )
        })
}

fn postings_from_args(sub: &clap::ArgMatches) -> Result<Vec<Posting>> {
    let specs: Vec<&str> = sub
        .get_many::<String>("posting")
        .unwrap_or_default()
        .map(|s| s.as_str())
        .collect();
    let postings = parse_posting_specs(&specs)?;
    if postings.len() < 2 {
        anyhow::bail!("A transaction must have at least 2 postings");
    }
    Ok(postings)
}
