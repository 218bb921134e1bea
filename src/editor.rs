// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-place rewriting of a transaction's line span.
//!
//! All three operations are pure functions over the raw journal text. Every
//! byte outside the touched span (comments, blank lines, other transactions,
//! irregular whitespace) survives unchanged. The target is matched by its
//! `(date, description)` header pair, first occurrence wins; when nothing
//! matches, the input comes back unchanged rather than as an error.

use crate::journal::{is_indented, render_posting, render_transaction, Posting, Transaction};

/// Replace the target transaction's span with a freshly rendered header and
/// posting lines.
pub fn replace(
    content: &str,
    target: &Transaction,
    new_date: &str,
    new_description: &str,
    new_postings: &[Posting],
) -> String {
    let mut block = vec![format!("{} {}", new_date, new_description)];
    for posting in new_postings {
        block.push(render_posting(posting));
    }
    rewrite(content, target, Some(block))
}

/// Remove the target transaction's span entirely.
pub fn delete(content: &str, target: &Transaction) -> String {
    rewrite(content, target, None)
}

/// Append a rendered transaction block to the end of the text.
pub fn append(content: &str, date: &str, description: &str, postings: &[Posting]) -> String {
    let mut out = content.to_string();
    out.push_str(&render_transaction(date, description, postings));
    out
}

// Single pass over the lines. The span opens at the first header whose
// (date, description) equals the target's and stays open while lines are
// indented or blank; the first line that is neither closes it. A column-0
// comment closes the span like any other non-indented line.
fn rewrite(content: &str, target: &Transaction, replacement: Option<Vec<String>>) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut matched = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let candidate =
            !matched && !line.trim().is_empty() && !line.starts_with(';') && !is_indented(line);

        if candidate {
            if let Some((date, description)) = line.split_once(' ') {
                if date == target.date && description == target.description {
                    matched = true;
                    if let Some(block) = &replacement {
                        out.extend(block.iter().cloned());
                    }
                    i += 1;
                    while i < lines.len() && (is_indented(lines[i]) || lines[i].trim().is_empty()) {
                        i += 1;
                    }
                    continue;
                }
            }
        }

        out.push(line.to_string());
        i += 1;
    }

    out.join("\n")
}
