// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::journal::Posting;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Normalize a user-supplied date into a `NaiveDate`. The parser/editor core
/// treats dates as opaque strings; this only canonicalizes CLI input.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(anyhow::anyhow!(
        "Invalid date '{}', expected YYYY-MM-DD",
        s
    ))
}

/// Parse a posting argument of the form `ACCOUNT=AMOUNT` or bare `ACCOUNT`
/// (an elided, balancing posting).
pub fn parse_posting_spec(spec: &str) -> Result<Posting> {
    let (account, amount) = match spec.split_once('=') {
        Some((a, v)) => (a.trim(), v.trim()),
        None => (spec.trim(), ""),
    };
    if account.is_empty() {
        anyhow::bail!("Invalid posting '{}', expected ACCOUNT[=AMOUNT]", spec);
    }
    Ok(Posting::new(account, amount))
}

pub fn parse_posting_specs(specs: &[&str]) -> Result<Vec<Posting>> {
    specs
        .iter()
        .map(|s| parse_posting_spec(s).with_context(|| format!("Bad posting argument '{}'", s)))
        .collect()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
