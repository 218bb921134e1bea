// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One account/amount line within a transaction. An empty `amount` is an
/// elided posting that the ledger engine balances against the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub account: String,
    pub amount: String,
}

impl Posting {
    pub fn new(account: impl Into<String>, amount: impl Into<String>) -> Self {
        Posting {
            account: account.into(),
            amount: amount.into(),
        }
    }
}

/// A dated journal entry: one header line plus its indented postings.
/// `line_start` is the 1-based line number of the header at parse time and is
/// for display only; the editor re-scans the raw text instead of trusting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub postings: Vec<Posting>,
    pub line_start: usize,
}

// Account is the longest leading run that contains no digit, '$' or '-';
// whatever follows is the amount, opaque to us.
static POSTING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^$\d-]+)\s*(.*)$").unwrap());

/// A posting line carries one or more leading spaces, or a tab.
pub fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// Parse raw journal text into transactions.
///
/// This is total: malformed headers, orphan postings and unmatched lines are
/// dropped, never reported. Blank lines and column-0 `;` comments are skipped.
/// Content problems are not errors; only the I/O layer can fail.
pub fn parse(content: &str) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut current: Option<Transaction> = None;

    for (idx, raw) in content.split('\n').enumerate() {
        let line = raw.trim_end();

        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if !is_indented(line) {
            // New header terminates whatever came before, even when the
            // header itself turns out to be malformed.
            if let Some(done) = current.take() {
                transactions.push(done);
            }
            if let Some((date, description)) = line.split_once(' ') {
                current = Some(Transaction {
                    date: date.to_string(),
                    description: description.to_string(),
                    postings: Vec::new(),
                    line_start: idx + 1,
                });
            }
        } else if let Some(tx) = current.as_mut() {
            let body = line.trim();
            if let Some(caps) = POSTING_RE.captures(body) {
                let account = caps[1].trim().to_string();
                let amount = caps
                    .get(2)
                    .map(|m| m.as_str().trim())
                    .unwrap_or_default()
                    .to_string();
                tx.postings.push(Posting { account, amount });
            }
        }
    }

    if let Some(done) = current.take() {
        transactions.push(done);
    }
    transactions
}

/// Render one posting line. Elided postings get no amount column.
pub fn render_posting(posting: &Posting) -> String {
    if posting.amount.is_empty() {
        format!("    {}", posting.account)
    } else {
        format!("    {}  {}", posting.account, posting.amount)
    }
}

/// Render a full transaction block: header, postings, one trailing blank line.
pub fn render_transaction(date: &str, description: &str, postings: &[Posting]) -> String {
    let mut out = format!("{} {}\n", date, description);
    for posting in postings {
        out.push_str(&render_posting(posting));
        out.push('\n');
    }
    out.push('\n');
    out
}
