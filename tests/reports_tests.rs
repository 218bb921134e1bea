// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerclip::commands::reports::register_rows;

#[test]
fn register_line_splits_into_columns() {
    let output = "2024-01-01 Coffee shop Expenses:Food 5.00 25.00";
    let rows = register_rows(output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-01-01");
    assert_eq!(rows[0].description, "Coffee shop");
    assert_eq!(rows[0].account, "Expenses:Food");
    assert_eq!(rows[0].amount, "5.00");
    assert_eq!(rows[0].balance, "25.00");
}

#[test]
fn dollar_token_ends_the_description() {
    let output = "2024-01-01 Grocery run at the market Expenses:Food $25.00 $25.00";
    let rows = register_rows(output);
    assert_eq!(rows.len(), 1);
    // The first $-prefixed token is taken as the description boundary.
    assert_eq!(rows[0].amount, "$25.00");
    assert_eq!(rows[0].balance, "$25.00");
}

#[test]
fn short_lines_are_skipped() {
    let output = "total $25.00\n\n2024-01-01 A B:C 1.00 1.00";
    let rows = register_rows(output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-01-01");
}
