// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerclip::editor;
use ledgerclip::journal::{self, Posting, Transaction};

const TWO_TXS: &str = "2024-01-01 Coffee\n    Expenses:Food  $5.00\n    Assets:Cash\n\n2024-02-01 Rent\n    Expenses:Rent  $1000.00\n    Assets:Cash\n\n";

fn target(content: &str, index: usize) -> Transaction {
    journal::parse(content)
        .into_iter()
        .nth(index)
        .expect("transaction present")
}

#[test]
fn append_to_empty_text_renders_exact_block() {
    let postings = vec![
        Posting::new("Expenses:Rent", "$1000.00"),
        Posting::new("Assets:Cash", ""),
    ];
    let out = editor::append("", "2024-02-01", "Rent", &postings);
    assert_eq!(
        out,
        "2024-02-01 Rent\n    Expenses:Rent  $1000.00\n    Assets:Cash\n\n"
    );
}

#[test]
fn append_leaves_existing_bytes_untouched() {
    let existing = "; preamble\n2024-01-01 A\n    X:Y  $1\n    Z:W\n\n";
    let out = editor::append(
        existing,
        "2024-03-01",
        "New",
        &[Posting::new("A:B", "$2"), Posting::new("C:D", "")],
    );
    assert!(out.starts_with(existing));
    assert_eq!(
        &out[existing.len()..],
        "2024-03-01 New\n    A:B  $2\n    C:D\n\n"
    );
}

#[test]
fn delete_only_transaction_empties_the_text() {
    let content = "2024-01-01 Coffee\n    Expenses:Food  $5.00\n    Assets:Cash\n\n";
    let out = editor::delete(content, &target(content, 0));
    assert_eq!(out, "");
}

#[test]
fn delete_first_leaves_second_byte_identical_at_line_zero() {
    let out = editor::delete(TWO_TXS, &target(TWO_TXS, 0));
    assert_eq!(
        out,
        "2024-02-01 Rent\n    Expenses:Rent  $1000.00\n    Assets:Cash\n\n"
    );
}

#[test]
fn delete_preserves_surrounding_comments_and_spacing() {
    let content = "; journal header\n\n2024-01-01 A\n    X:Y  $1\n    Z:W\n\n;   oddly  spaced comment\n2024-02-02 B\n    X:Y  $2\n    Z:W\n\n";
    let out = editor::delete(content, &target(content, 0));
    assert_eq!(
        out,
        "; journal header\n\n;   oddly  spaced comment\n2024-02-02 B\n    X:Y  $2\n    Z:W\n\n"
    );
}

#[test]
fn replace_rewrites_span_and_copies_the_rest() {
    let new_postings = vec![
        Posting::new("Expenses:Coffee", "$6.50"),
        Posting::new("Assets:Checking", ""),
    ];
    let out = editor::replace(
        TWO_TXS,
        &target(TWO_TXS, 0),
        "2024-01-02",
        "Better coffee",
        &new_postings,
    );
    // The span scan also consumes the blank separator, so the rewritten
    // block sits directly above the next header.
    assert_eq!(
        out,
        "2024-01-02 Better coffee\n    Expenses:Coffee  $6.50\n    Assets:Checking\n2024-02-01 Rent\n    Expenses:Rent  $1000.00\n    Assets:Cash\n\n"
    );
}

#[test]
fn replace_keeps_untouched_transaction_bytes() {
    let rent_block = "2024-02-01 Rent\n    Expenses:Rent  $1000.00\n    Assets:Cash\n\n";
    let out = editor::replace(
        TWO_TXS,
        &target(TWO_TXS, 0),
        "2024-01-01",
        "Coffee",
        &[Posting::new("Expenses:Food", "$7.00"), Posting::new("Assets:Cash", "")],
    );
    assert!(out.ends_with(rent_block));
}

#[test]
fn no_match_returns_input_unchanged() {
    let missing = Transaction {
        date: "1999-01-01".to_string(),
        description: "Nothing".to_string(),
        postings: Vec::new(),
        line_start: 0,
    };
    assert_eq!(editor::delete(TWO_TXS, &missing), TWO_TXS);
    assert_eq!(
        editor::replace(TWO_TXS, &missing, "1999-01-01", "Nothing", &[]),
        TWO_TXS
    );
}

#[test]
fn duplicate_headers_touch_only_first_occurrence() {
    let content = "2024-01-01 Dup\n    A:B  $1\n    C:D\n\n2024-01-01 Dup\n    A:B  $2\n    C:D\n\n";
    let out = editor::delete(content, &target(content, 0));
    assert_eq!(out, "2024-01-01 Dup\n    A:B  $2\n    C:D\n\n");
}

#[test]
fn indented_comment_is_part_of_the_span() {
    let content = "2024-01-01 A\n    X:Y  $1\n    ; reviewed\n    Z:W\n\n2024-02-02 B\n    X:Y  $2\n    Z:W\n\n";
    let out = editor::delete(content, &target(content, 0));
    assert_eq!(out, "2024-02-02 B\n    X:Y  $2\n    Z:W\n\n");
}

#[test]
fn column_zero_comment_terminates_the_span() {
    let content = "2024-01-01 A\n    X:Y  $1\n    Z:W\n; audit note\n\n2024-02-02 B\n    X:Y  $2\n    Z:W\n\n";
    let out = editor::delete(content, &target(content, 0));
    assert_eq!(
        out,
        "; audit note\n\n2024-02-02 B\n    X:Y  $2\n    Z:W\n\n"
    );
}

#[test]
fn span_ends_exactly_before_next_header() {
    let content = "2024-01-01 A\n    X:Y  $1\n    Z:W\n\n\n2024-02-02 B\n    X:Y  $2\n    Z:W\n";
    let out = editor::delete(content, &target(content, 0));
    assert_eq!(out, "2024-02-02 B\n    X:Y  $2\n    Z:W\n");
}

#[test]
fn edit_roundtrips_through_parse() {
    let new_postings = vec![
        Posting::new("Expenses:Rent", "$1100.00"),
        Posting::new("Assets:Checking", ""),
    ];
    let out = editor::replace(
        TWO_TXS,
        &target(TWO_TXS, 1),
        "2024-02-02",
        "Rent (corrected)",
        &new_postings,
    );
    let txs = journal::parse(&out);
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[1].date, "2024-02-02");
    assert_eq!(txs[1].description, "Rent (corrected)");
    assert_eq!(txs[1].postings, new_postings);
}
